pub mod config;
pub mod errors;
pub mod initialization;
pub mod logging;
pub mod models;
pub mod worker;

pub use models::ScheduleEntry;

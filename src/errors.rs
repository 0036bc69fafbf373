use thiserror::Error;

/// Error depicting a time of day outside the 00:00 - 23:59 range
///
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("hours out of range: {0}")]
    Hours(u8),
    #[error("minutes out of range: {0}")]
    Minutes(u8),
}

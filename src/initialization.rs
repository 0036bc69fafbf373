use std::env;
use log::info;
use thiserror::Error;
use crate::config::{load_config, Config};
use crate::logging::{setup_logger, LoggerError};

/// Initializes and returns configuration, the logger is set up as a side effect
///
pub fn init() -> Result<Config, InitializationError> {
    let args: Vec<String> = env::args().collect();
    let config_path = config_path(&args)?;

    // Load configuration
    let config = load_config(config_path)?;

    // Setup logging
    let _ = setup_logger(&config.general.log_path, config.general.log_level, config.general.log_to_stdout)?;


    // Print version
    info!("starting schedule entry version: {}", env!("CARGO_PKG_VERSION"));

    Ok(config)
}

/// Picks out the path given by the '--config=' argument
///
/// # Arguments
///
/// * 'args' - command line arguments
fn config_path(args: &[String]) -> Result<&str, InitializationError> {
    let arg = args.iter()
        .find(|p| p.starts_with("--config="))
        .ok_or_else(|| InitializationError::Argument("config file argument should be present".into()))?;

    match arg.split_once('=') {
        Some((_, path)) if !path.is_empty() => Ok(path),
        _ => Err(InitializationError::Argument(format!("config file argument should be correct: {}", arg))),
    }
}

/// Error depicting errors that occur while initializing
///
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("ArgumentError: {0}")]
    Argument(String),
    #[error("ConfigurationError: {0}")]
    Configuration(#[from] anyhow::Error),
    #[error("SetupLoggerError: {0}")]
    SetupLogger(#[from] LoggerError),
}

use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Handle;
use thiserror::Error;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} - {m}{n}";

/// Sets up the global logger with a file appender and, optionally, a console appender
///
/// # Arguments
///
/// * 'log_path' - path to the log file
/// * 'log_level' - maximum level to log
/// * 'log_to_stdout' - whether to also log to stdout
pub fn setup_logger(log_path: &str, log_level: LevelFilter, log_to_stdout: bool) -> Result<Handle, LoggerError> {
    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(log_path)
        .map_err(|e| LoggerError::FileAppender(format!("{}: {}", log_path, e)))?;

    let mut builder = log4rs::config::Config::builder()
        .appender(Appender::builder().build("file", Box::new(file)));
    let mut root = Root::builder().appender("file");

    if log_to_stdout {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        builder = builder.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }

    let config = builder.build(root.build(log_level))
        .map_err(|e| LoggerError::Config(e.to_string()))?;

    let handle = log4rs::init_config(config)
        .map_err(|e| LoggerError::SetLogger(e.to_string()))?;

    Ok(handle)
}

/// Error depicting errors that occur while setting up the logger
///
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("FileAppenderError: {0}")]
    FileAppender(String),
    #[error("ConfigError: {0}")]
    Config(String),
    #[error("SetLoggerError: {0}")]
    SetLogger(String),
}

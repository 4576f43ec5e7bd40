//! diompcc error Type

use thiserror::Error;

use crate::constants::{LAUNCH_FAILURE_EXIT_CODE, USAGE};

#[derive(Debug, Error)]
pub enum Error {
    /// No arguments were given to the wrapper
    #[error("{}", USAGE)]
    Usage,
    /// The wrapped compiler could not be started
    #[error("failed to launch `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
    /// Invalid arguments
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    /// Configuration file could not be read or written
    #[error("configuration error: {0}")]
    ConfigError(String),
    /// Io error occurred
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Logger error
    #[error("logger error: {0}")]
    LoggerError(String),
}

impl Error {
    /// The process exit code the wrapper reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Launch { .. } => LAUNCH_FAILURE_EXIT_CODE,
            _ => 1,
        }
    }
}

//! Logging setup shared by the binaries

use std::{env, io};

use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::{
    constants::{DIOMPCC_LOG_FILTER_ENV_NAME, DIOMPCC_LOG_LEVEL_ENV_NAME},
    error::Error,
};

/// Map a numeric verbosity (0-4) to a tracing level.
pub fn level_from_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// The verbosity from `$DIOMPCC_LOG_LEVEL`, or `fallback` if unset or unparsable.
pub fn verbosity_from_env(fallback: u8) -> u8 {
    env::var(DIOMPCC_LOG_LEVEL_ENV_NAME)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .unwrap_or(fallback)
}

/// Install a stderr subscriber.
///
/// `$DIOMPCC_LOG` takes a full filter directive and overrides `verbosity`.
pub fn init_tracing(verbosity: u8) -> Result<(), Error> {
    let filter = EnvFilter::try_from_env(DIOMPCC_LOG_FILTER_ENV_NAME).unwrap_or_else(|_| {
        EnvFilter::new(level_from_verbosity(verbosity).to_string().to_lowercase())
    });

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| Error::LoggerError(err.to_string()))
}

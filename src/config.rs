//! diompcc configuration
//!
//! The configuration file is optional. When it is absent every setting falls
//! back to the built-in defaults and nothing is written to disk.

use std::{
    env,
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    arg_parser::Conduit,
    constants::{
        DEFAULT_COMPILER, DEFAULT_CONDUIT, DEFAULT_CONF_FILEPATH_UNDER_HOME,
        DIOMPCC_CONF_FILEPATH_ENV_NAME, HOME_ENV_NAME,
    },
    error::Error,
};

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DiompConfig {
    /// The filepath of the C++ compiler, `clang++` on `PATH` if unset
    compiler_filepath: Option<PathBuf>,

    /// Conduit used when no `-conduit=` flag is given
    default_conduit: Option<String>,

    /// Extra flags placed after the fixed link line, before user arguments
    extra_link_flags: Option<Vec<String>>,

    /// Log level: 0 = error, 1 = warn, 2 = info, 3 = debug, 4 = trace
    log_level: Option<u8>,
}

impl DiompConfig {
    pub fn compiler_filepath(&self) -> PathBuf {
        self.compiler_filepath
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_COMPILER))
    }

    pub fn default_conduit(&self) -> Conduit {
        Conduit::new(
            self.default_conduit
                .as_deref()
                .unwrap_or(DEFAULT_CONDUIT),
        )
    }

    pub fn extra_link_flags(&self) -> &[String] {
        self.extra_link_flags.as_deref().unwrap_or_default()
    }

    pub fn log_level(&self) -> u8 {
        self.log_level.unwrap_or(0)
    }

    pub fn with_compiler_filepath<P>(mut self, compiler_filepath: P) -> Self
    where
        P: AsRef<Path>,
    {
        self.compiler_filepath = Some(compiler_filepath.as_ref().to_path_buf());
        self
    }

    pub fn with_default_conduit(mut self, conduit: &str) -> Self {
        self.default_conduit = Some(conduit.to_string());
        self
    }

    pub fn with_extra_link_flags(mut self, flags: Vec<String>) -> Self {
        self.extra_link_flags = Some(flags);
        self
    }

    pub fn with_log_level(mut self, log_level: u8) -> Self {
        self.log_level = Some(log_level);
        self
    }
}

impl DiompConfig {
    /// Where the configuration file is looked up.
    ///
    /// `$DIOMPCC_CONFIG` wins; otherwise `$HOME/.diomp/config.toml`. `None`
    /// when neither is set, so no path relative to the working directory is
    /// ever consulted.
    pub fn default_filepath() -> Option<PathBuf> {
        filepath_from(
            env::var_os(DIOMPCC_CONF_FILEPATH_ENV_NAME),
            env::var_os(HOME_ENV_NAME),
        )
    }

    /// Load the configuration from the default location, or the defaults if
    /// there is none.
    pub fn load() -> Result<Self, Error> {
        match Self::default_filepath() {
            Some(config_filepath) => Self::load_path(config_filepath),
            None => {
                tracing::trace!(
                    "Neither ${} nor ${} is set",
                    DIOMPCC_CONF_FILEPATH_ENV_NAME,
                    HOME_ENV_NAME
                );
                Ok(Self::default())
            }
        }
    }

    /// Load the configuration from `config_filepath`, if the file exists.
    ///
    /// A missing file yields the defaults. `confy` would otherwise create it.
    pub fn load_path<P>(config_filepath: P) -> Result<Self, Error>
    where
        P: AsRef<Path>,
    {
        let config_filepath = config_filepath.as_ref();
        if !config_filepath.is_file() {
            tracing::trace!("No configuration file at {:?}", config_filepath);
            return Ok(Self::default());
        }

        confy::load_path(config_filepath).map_err(|err| {
            Error::ConfigError(format!(
                "Failed to load configuration: config_filepath={:?}, err={}",
                config_filepath, err
            ))
        })
    }

    /// Render the configuration as the TOML text [`Self::store_path`] writes.
    pub fn to_toml_string(&self) -> Result<String, Error> {
        toml::to_string_pretty(self).map_err(|err| {
            Error::ConfigError(format!("Failed to serialize configuration: err={}", err))
        })
    }

    /// Write the configuration to `config_filepath`, creating parent directories.
    pub fn store_path<P>(&self, config_filepath: P) -> Result<(), Error>
    where
        P: AsRef<Path>,
    {
        let config_filepath = config_filepath.as_ref();
        if let Some(parent) = config_filepath.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|err| {
                    Error::ConfigError(format!(
                        "Failed to create config directory {:?}: {}",
                        parent, err
                    ))
                })?;
            }
        }
        confy::store_path(config_filepath, self).map_err(|err| {
            Error::ConfigError(format!(
                "Failed to write configuration: config_filepath={:?}, err={}",
                config_filepath, err
            ))
        })
    }
}

fn filepath_from(config_env: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    if let Some(path) = config_env.filter(|x| !x.is_empty()) {
        return Some(PathBuf::from(path));
    }
    home.filter(|x| !x.is_empty())
        .map(|home| PathBuf::from(home).join(DEFAULT_CONF_FILEPATH_UNDER_HOME))
}

//! diomp compiler wrapper
//!
//! Links every translation unit against the diomp runtime, the GASNet
//! library of the selected conduit, and the fixed MPI/OpenMP/verbs stack.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use crate::{
    arg_parser::{Conduit, WrapperArgsInfo},
    compiler_wrapper::*,
    config::DiompConfig,
    constants::{DEFAULT_COMPILER, DEFAULT_CONDUIT, LEADING_LINK_FLAGS, TRAILING_LINK_FLAGS},
    error::Error,
};

#[derive(Debug)]
pub struct DiompWrapper {
    name: String,
    wrapped_compiler: PathBuf,
    default_conduit: Conduit,
    extra_link_flags: Vec<String>,
    is_silent: bool,

    is_parse_args_called: bool,

    args: WrapperArgsInfo,
}

impl DiompWrapper {
    pub fn new(name: &str, config: &DiompConfig) -> Self {
        DiompWrapperBuilder::from_config(config).name(name).build()
    }
}

impl CompilerWrapper for DiompWrapper {
    fn name(&self) -> &str {
        &self.name
    }

    fn wrapped_compiler(&self) -> &Path {
        &self.wrapped_compiler
    }

    fn parse_args<S>(&mut self, args: &[S]) -> Result<&'_ mut Self, Error>
    where
        S: AsRef<OsStr>,
    {
        if self.is_parse_args_called {
            return Err(Error::InvalidArguments(
                "parse_args() cannot be called twice on the same instance".to_string(),
            ));
        }

        self.args.parse_args(args)?;
        self.is_parse_args_called = true;

        let conduit = self.conduit();
        if !self.is_silent {
            tracing::debug!(
                "[{}] Conduit: {} ({})",
                self.name,
                conduit,
                if self.args.conduit().is_some() {
                    "command line"
                } else {
                    "default"
                }
            );
            if !conduit.is_known() {
                tracing::debug!(
                    "[{}] `{}` is not a stock GASNet conduit, linking against {} anyway",
                    self.name,
                    conduit,
                    conduit.library_name()
                );
            }
        }

        Ok(self)
    }

    fn is_parsed(&self) -> bool {
        self.is_parse_args_called
    }

    fn args(&self) -> &WrapperArgsInfo {
        &self.args
    }

    fn conduit(&self) -> Conduit {
        self.args.resolve_conduit(&self.default_conduit)
    }

    fn link_flags(&self) -> Vec<String> {
        let mut flags: Vec<String> = LEADING_LINK_FLAGS.iter().map(|x| x.to_string()).collect();
        flags.push(self.conduit().link_flag());
        flags.extend(TRAILING_LINK_FLAGS.iter().map(|x| x.to_string()));
        flags.extend(self.extra_link_flags.iter().cloned());
        flags
    }

    fn silence(&mut self, value: bool) -> &'_ mut Self {
        self.is_silent = value;
        self
    }

    fn is_silent(&self) -> bool {
        self.is_silent
    }
}

/// Builder for the [`DiompWrapper`]
#[derive(Debug)]
pub struct DiompWrapperBuilder {
    /// Name of the wrapper
    name: String,
    /// Path to the wrapped compiler (optional)
    wrapped_compiler: Option<PathBuf>,
    /// Conduit used when the command line names none (optional)
    default_conduit: Option<Conduit>,
    /// Flags appended after the fixed link line
    extra_link_flags: Vec<String>,
    /// Silence the compiler wrapper output (optional)
    is_silent: Option<bool>,
}

impl Default for DiompWrapperBuilder {
    fn default() -> Self {
        Self {
            name: String::from("diompcc"),
            wrapped_compiler: None,
            default_conduit: None,
            extra_link_flags: Vec::new(),
            is_silent: None,
        }
    }
}

impl DiompWrapperBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the settings of a loaded configuration
    pub fn from_config(config: &DiompConfig) -> Self {
        Self::default()
            .wrapped_compiler(config.compiler_filepath())
            .default_conduit(config.default_conduit())
            .extra_link_flags(config.extra_link_flags().to_vec())
    }

    pub fn default_conduit(mut self, conduit: Conduit) -> Self {
        self.default_conduit = Some(conduit);
        self
    }

    pub fn extra_link_flags(mut self, flags: Vec<String>) -> Self {
        self.extra_link_flags = flags;
        self
    }
}

impl CompilerWrapperBuilder for DiompWrapperBuilder {
    type OutputType = DiompWrapper;

    fn build(&self) -> Self::OutputType {
        DiompWrapper {
            name: self.name.clone(),
            wrapped_compiler: self
                .wrapped_compiler
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_COMPILER)),
            default_conduit: self
                .default_conduit
                .clone()
                .unwrap_or_else(|| Conduit::new(DEFAULT_CONDUIT)),
            extra_link_flags: self.extra_link_flags.clone(),
            is_silent: self.is_silent.unwrap_or(false),
            is_parse_args_called: false,
            args: WrapperArgsInfo::default(),
        }
    }

    fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    fn wrapped_compiler<P>(mut self, wrapped_compiler: P) -> Self
    where
        P: AsRef<Path>,
    {
        self.wrapped_compiler = Some(wrapped_compiler.as_ref().to_path_buf());
        self
    }

    fn silence(mut self, value: bool) -> Self {
        self.is_silent = Some(value);
        self
    }
}

/// Parse `args`, build the diomp compile command, run it once, and return the
/// exit code to report.
///
/// `args` excludes the program name. An empty list is [`Error::Usage`] and no
/// process is started.
pub fn run<S>(args: &[S], config: &DiompConfig) -> Result<i32, Error>
where
    S: AsRef<OsStr>,
{
    let mut cc = DiompWrapper::new("diompcc", config);
    cc.parse_args(args)?.run()
}

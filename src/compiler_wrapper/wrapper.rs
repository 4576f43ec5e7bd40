//! General interfaces for the compiler wrapper

use std::{
    ffi::{OsStr, OsString},
    path::Path,
};

use crate::{
    arg_parser::{Conduit, WrapperArgsInfo},
    error::Error,
    utils::{execute_command_for_status, exit_code_from_status},
};

/// A general interface that wraps a compiler with a fixed link line
pub trait CompilerWrapper {
    /// Name of the wrapper, used in log lines
    fn name(&self) -> &str;

    /// Obtain the path to the wrapped compiler
    fn wrapped_compiler(&self) -> &Path;

    /// Set the wrapper arguments parsing a command line set of arguments
    fn parse_args<S>(&mut self, args: &[S]) -> Result<&'_ mut Self, Error>
    where
        S: AsRef<OsStr>;

    /// Returns `true` once `parse_args` has succeeded
    fn is_parsed(&self) -> bool;

    /// Obtain the argument information
    fn args(&self) -> &WrapperArgsInfo;

    /// Conduit the command links against
    fn conduit(&self) -> Conduit;

    /// Flags placed between the compiler and the user arguments
    fn link_flags(&self) -> Vec<String>;

    /// Command to run the compiler, as an argument vector
    fn command(&self) -> Result<Vec<OsString>, Error> {
        if !self.is_parsed() {
            return Err(Error::InvalidArguments(
                "parse_args() must be called before command()".to_string(),
            ));
        }

        let mut args = vec![self.wrapped_compiler().as_os_str().to_os_string()];
        args.extend(self.link_flags().into_iter().map(OsString::from));
        args.extend(self.args().passthrough_args().iter().cloned());

        Ok(args)
    }

    /// The command joined with single spaces, for display
    ///
    /// Bytes that are not valid UTF-8 are shown as U+FFFD; the command that is
    /// executed keeps them.
    fn command_line(&self) -> Result<String, Error> {
        Ok(self
            .command()?
            .iter()
            .map(|arg| arg.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" "))
    }

    /// Silences the compiler wrapper output
    fn silence(&mut self, value: bool) -> &'_ mut Self;

    /// Returns `true` if `silence` was called with `true`
    fn is_silent(&self) -> bool;

    /// Run the compiler once and return the code the wrapper should exit with
    fn run(&mut self) -> Result<i32, Error> {
        let args = self.command()?;
        self.execute_command(&args)
    }

    fn execute_command<S>(&self, args: &[S]) -> Result<i32, Error>
    where
        S: AsRef<OsStr> + std::fmt::Debug,
    {
        if !self.is_silent() {
            tracing::debug!("[{}] Arguments: {:?}", self.name(), args);
        }
        if args.is_empty() {
            return Err(Error::InvalidArguments(
                "The number of arguments cannot be 0".into(),
            ));
        }
        let status = execute_command_for_status(args[0].as_ref(), &args[1..])?;
        if !self.is_silent() {
            tracing::debug!("[{}] Exit status: {}", self.name(), status);
        }
        Ok(exit_code_from_status(status))
    }
}

/// A general interface for building compiler wrappers
pub trait CompilerWrapperBuilder {
    type OutputType: CompilerWrapper;

    fn build(&self) -> Self::OutputType;

    fn name(self, name: &str) -> Self;

    fn wrapped_compiler<P>(self, wrapped_compiler: P) -> Self
    where
        P: AsRef<Path>;

    fn silence(self, value: bool) -> Self;
}

//! Filepath-related utility functions

use std::path::{Path, PathBuf};

use which::which;

use crate::error::Error;

/// Resolve the compiler to an absolute path.
///
/// Paths with a directory component are checked as given; bare names are
/// looked up on `PATH`. Symlinks are not followed: `clang++` picks its
/// driver mode from the name it is invoked by.
pub fn find_compiler<P>(compiler: P) -> Result<PathBuf, Error>
where
    P: AsRef<Path>,
{
    let compiler = compiler.as_ref();
    if compiler.components().count() > 1 {
        if compiler.is_file() {
            return Ok(std::path::absolute(compiler)?);
        }
        return Err(Error::InvalidArguments(format!(
            "Compiler not found: {:?}",
            compiler
        )));
    }

    which(compiler).map_err(|err| {
        Error::InvalidArguments(format!(
            "Failed to find `{}` on PATH: {}",
            compiler.display(),
            err
        ))
    })
}

/// Expand a leading `~/` using `$HOME`.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    PathBuf::from(path)
}

//! Command execution utility functions

use std::{
    ffi::OsStr,
    path::Path,
    process::{Command, ExitStatus},
};

use crate::{constants::SIGNAL_EXIT_CODE_BASE, error::Error};

/// Run `program_filepath` with `args`, inheriting the standard streams, and
/// wait for it to finish.
///
/// A spawn failure is reported as [`Error::Launch`]; a child that runs and
/// fails is not an error here.
pub fn execute_command_for_status<P, S>(
    program_filepath: P,
    args: &[S],
) -> Result<ExitStatus, Error>
where
    P: AsRef<Path>,
    S: AsRef<OsStr>,
{
    let program_filepath = program_filepath.as_ref();
    Command::new(program_filepath)
        .args(args)
        .status()
        .map_err(|source| Error::Launch {
            program: program_filepath.to_string_lossy().into_owned(),
            source,
        })
}

/// Map a child's exit status to the code the wrapper exits with.
///
/// A normal exit keeps its code. Death by signal `N` becomes `128 + N`, the
/// shell convention.
pub fn exit_code_from_status(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return SIGNAL_EXIT_CODE_BASE + signal;
        }
    }

    1
}

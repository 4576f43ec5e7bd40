//! Diagnostic utilities for install hints and colored output.

use std::io;

use owo_colors::OwoColorize;

use crate::error::Error;

/// Returns a platform-specific install suggestion for the given tool.
pub fn install_suggestion(tool_name: &str) -> String {
    if cfg!(target_os = "macos") {
        format!("brew install llvm  # provides {tool_name}")
    } else {
        // Debian/Ubuntu-style as most common on clusters
        format!("sudo apt install clang  # provides {tool_name}")
    }
}

/// Prints a colored error message for a compiler that could not be found.
pub fn print_missing_tool_error(tool_name: &str) {
    eprintln!(
        "{} required tool `{}` not found on this system",
        "error:".red().bold(),
        tool_name.bold(),
    );
    eprintln!(
        "  {} install it with: {}",
        "hint:".cyan().bold(),
        install_suggestion(tool_name),
    );
    eprintln!(
        "  {} or set `compiler_filepath` in the diompcc config (see `diompcc-init`)",
        "hint:".cyan().bold(),
    );
}

/// Prints a colored warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {message}", "warning:".yellow().bold());
}

/// Prints a colored error message.
pub fn print_error(message: &str) {
    eprintln!("{} {message}", "error:".red().bold());
}

/// Report a wrapper error on stderr, with a hint where one helps.
pub fn report_error(err: &Error) {
    match err {
        Error::Launch { program, source } if source.kind() == io::ErrorKind::NotFound => {
            print_missing_tool_error(program);
        }
        other => print_error(&other.to_string()),
    }
}

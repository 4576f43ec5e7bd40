//! Compiler wrapper for diomp applications over GASNet conduits

/// Command-line argument parser for the wrapper
pub mod arg_parser;

/// Compiler wrapper
pub mod compiler_wrapper;

/// Configuration file support
pub mod config;

/// Colored diagnostics
pub mod diagnostics;

/// Error Type
pub mod error;

/// Utility functions
pub mod utils;

/// Internal constants
pub(crate) mod constants;

pub use compiler_wrapper::run;
pub use constants::{KNOWN_CONDUITS, USAGE};

//! Internal constants for the conduit flag, the fixed link line, and
//! configuration lookup.
//!
//! This module is `pub(crate)` and not part of the public API.

/// Prefix of the only flag the wrapper consumes itself.
pub const CONDUIT_FLAG_PREFIX: &str = "-conduit=";

/// Conduit used when no `-conduit=` flag is given and none is configured.
pub const DEFAULT_CONDUIT: &str = "ibv";

/// The compiler invoked when none is configured, resolved through `PATH`.
pub const DEFAULT_COMPILER: &str = "clang++";

/// Usage line printed when the wrapper is invoked without arguments.
pub const USAGE: &str = "Usage: diompcc <source_file> [-conduit=X] [additional_args]...";

/// Flags placed before the conduit library on every invocation.
pub const LEADING_LINK_FLAGS: &[&str] = &["-ldiomp"];

/// Flags placed after the conduit library on every invocation.
pub const TRAILING_LINK_FLAGS: &[&str] = &[
    "-libverbs",
    "-lrt",
    "-pthread",
    "-fopenmp",
    "-lmpi",
    "-lhwloc",
];

/// GASNet conduits shipped by upstream GASNet-EX releases, past and present.
pub const KNOWN_CONDUITS: &[&str] = &[
    "ibv", "smp", "mpi", "udp", "ucx", "ofi", "aries", "pami", "mxm", "portals4",
];

/// Environment variable name for overriding the config file path.
pub const DIOMPCC_CONF_FILEPATH_ENV_NAME: &str = "DIOMPCC_CONFIG";

/// Environment variable name for the numeric log level (0-4).
pub const DIOMPCC_LOG_LEVEL_ENV_NAME: &str = "DIOMPCC_LOG_LEVEL";

/// Environment variable name for a full `tracing` filter directive.
pub const DIOMPCC_LOG_FILTER_ENV_NAME: &str = "DIOMPCC_LOG";

/// Environment variable name for the user's home directory.
pub const HOME_ENV_NAME: &str = "HOME";

/// The default filepath of the configuration file under `$HOME`.
pub const DEFAULT_CONF_FILEPATH_UNDER_HOME: &str = ".diomp/config.toml";

/// Exit code reported when the compiler process cannot be started.
pub const LAUNCH_FAILURE_EXIT_CODE: i32 = 127;

/// Base added to the signal number when the compiler is killed by a signal.
pub const SIGNAL_EXIT_CODE_BASE: i32 = 128;

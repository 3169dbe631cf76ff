//! Constants used throughout the CLI.

/// Directory name under the XDG config/data homes.
pub const APP_DIR: &str = "ribbon-tracker";

/// Default store file name inside the data directory.
pub const STORE_FILE: &str = "progress.db";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "RIBBON_LOG";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "RIBBON_CONFIG";

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (config, store, instance, ribbon).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input, including rejected imports.
    pub const INVALID_INPUT: i32 = 4;
}

use tracing_subscriber::{prelude::*, EnvFilter};

use crate::constants::LOG_ENV;

/// Install a stderr subscriber filtered by RIBBON_LOG (default `warn`).
///
/// Stdout stays reserved for command output so `--json` remains parseable.
pub fn init_logging(quiet: bool) {
    let default = if quiet { "error" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr);

    // A second init (tests, embedding) is harmless.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();
}

//! Application-level utilities for the ribbon CLI.
//!
//! - Path resolution for the config file and the progress store
//! - A lazily-loaded context shared by every command handler

mod context;
mod resolver;

pub use context::AppContext;
pub use resolver::resolve_config_path;

//! CLI error types for structured error handling.
//!
//! Handlers return `anyhow::Result`; errors that need a specific exit code
//! are raised as `CliError` (or surface as `RibbonError` from the core) and
//! mapped in `main`.

use std::fmt;

use ribbon_core::RibbonError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config, store, instance, ribbon)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => write!(f, "{}\n{}", message, hint),
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }
}

/// Exit code for any error bubbled up to `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<RibbonError>() {
        Some(RibbonError::NotFound(_)) => exit_codes::NOT_FOUND,
        Some(RibbonError::Validation(_)) | Some(RibbonError::InvalidInput(_)) => {
            exit_codes::INVALID_INPUT
        }
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let not_found = anyhow::Error::new(CliError::not_found("No instance", "Hint: x"));
        assert_eq!(exit_code_for(&not_found), exit_codes::NOT_FOUND);

        let invalid = anyhow::Error::new(RibbonError::Validation("bad".into()));
        assert_eq!(exit_code_for(&invalid), exit_codes::INVALID_INPUT);

        let other = anyhow::anyhow!("boom");
        assert_eq!(exit_code_for(&other), 1);
    }

    #[test]
    fn test_not_found_display_includes_hint() {
        let err = CliError::not_found("Ribbon not found", "Hint: Run `ribbon ribbons`.");
        assert_eq!(err.to_string(), "Ribbon not found\nHint: Run `ribbon ribbons`.");
    }
}

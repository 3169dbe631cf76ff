//! Input helpers: confirmation prompts and import sources.

use std::io::{self, Read};
use std::path::Path;

use dialoguer::Confirm;

use crate::errors::CliError;
use crate::ui::UiContext;

/// Ask before a destructive action.
///
/// `--yes` skips the prompt; without a terminal the action is refused.
pub fn confirm_destructive(ui: &UiContext, prompt: &str, yes: bool) -> anyhow::Result<bool> {
    if yes {
        return Ok(true);
    }
    if !ui.interactive {
        return Err(CliError::invalid_input(format!(
            "{} requires confirmation; pass --yes when not running interactively",
            prompt.trim_end_matches('?')
        ))
        .into());
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))
}

/// Read an import document from a file, or stdin when `path` is `-`.
pub fn read_import_source(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
        return Ok(buffer);
    }

    let file = Path::new(path);
    if !file.exists() {
        return Err(CliError::not_found(
            format!("Import file not found: {}", file.display()),
            "Hint: Create one with `ribbon export --output <PATH>`.",
        )
        .into());
    }
    std::fs::read_to_string(file)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::UiSettings;

    fn piped() -> UiContext {
        let mut ui = UiContext::from_env(UiSettings::default());
        ui.interactive = false;
        ui
    }

    #[test]
    fn test_yes_skips_prompt() {
        assert!(confirm_destructive(&piped(), "Remove everything?", true).unwrap());
    }

    #[test]
    fn test_non_interactive_requires_yes() {
        let err = confirm_destructive(&piped(), "Remove everything?", false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidInput(_))
        ));
        assert!(err.to_string().contains("--yes"));
        assert!(err.to_string().starts_with("Remove everything requires"));
    }

    #[test]
    fn test_missing_import_file_is_not_found() {
        let err = read_import_source("/nonexistent/ribbons.json").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::NotFound { .. })
        ));
    }
}

//! Output mode routing.

use clap::ValueEnum;

/// Value of `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bordered tables and styled text
    Table,
    /// Tab-separated rows and `key=value` lines
    Plain,
    /// A single JSON document on stdout
    Json,
}

/// How a command renders its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    Json,
    #[default]
    Plain,
    Table,
}

impl OutputMode {
    /// `--json` wins, then an explicit `--format`. Otherwise tables are used
    /// only on a capable terminal.
    pub fn resolve(
        json_flag: bool,
        format: Option<OutputFormat>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        if json_flag {
            return Self::Json;
        }
        match format {
            Some(OutputFormat::Json) => Self::Json,
            Some(OutputFormat::Plain) => Self::Plain,
            Some(OutputFormat::Table) => Self::Table,
            None if is_tty && !term_is_dumb => Self::Table,
            None => Self::Plain,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_table(&self) -> bool {
        matches!(self, Self::Table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_flag_beats_format() {
        let mode = OutputMode::resolve(true, Some(OutputFormat::Plain), true, false);
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn test_explicit_format_is_honoured_when_piped() {
        assert_eq!(
            OutputMode::resolve(false, Some(OutputFormat::Table), false, false),
            OutputMode::Table
        );
        assert_eq!(
            OutputMode::resolve(false, Some(OutputFormat::Json), false, false),
            OutputMode::Json
        );
        assert_eq!(
            OutputMode::resolve(false, Some(OutputFormat::Plain), true, false),
            OutputMode::Plain
        );
    }

    #[test]
    fn test_auto_mode_follows_terminal() {
        assert_eq!(OutputMode::resolve(false, None, true, false), OutputMode::Table);
        assert_eq!(OutputMode::resolve(false, None, true, true), OutputMode::Plain);
        assert_eq!(OutputMode::resolve(false, None, false, false), OutputMode::Plain);
    }

    #[test]
    fn test_format_values() {
        let parsed = OutputFormat::from_str("table", true).unwrap();
        assert_eq!(parsed, OutputFormat::Table);
        assert!(OutputFormat::from_str("yaml", true).is_err());
    }
}

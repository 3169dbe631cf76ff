//! Terminal facts that rendering and prompts depend on.

use std::io::IsTerminal;

use super::mode::{OutputFormat, OutputMode};
use super::theme::SymbolPair;

/// Flags that shape output, gathered from the command line and config.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiSettings {
    pub json: bool,
    pub format: Option<OutputFormat>,
    pub no_color: bool,
    pub ascii: bool,
}

#[derive(Debug, Clone)]
pub struct UiContext {
    pub color: bool,
    pub unicode: bool,
    /// Terminal columns
    pub width: usize,
    pub mode: OutputMode,
    /// A confirmation prompt can be answered (stdin and stderr are terminals)
    pub interactive: bool,
}

impl UiContext {
    pub fn from_env(settings: UiSettings) -> Self {
        let stdout_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var_os("NO_COLOR").is_some();

        Self {
            color: stdout_tty && !settings.no_color && !no_color_env && !term_is_dumb,
            unicode: !settings.ascii,
            width: terminal_width().unwrap_or(80),
            mode: OutputMode::resolve(settings.json, settings.format, stdout_tty, term_is_dumb),
            interactive: std::io::stdin().is_terminal() && std::io::stderr().is_terminal(),
        }
    }

    /// Pick the unicode or ASCII form of a marker.
    pub fn symbol(&self, pair: SymbolPair) -> &'static str {
        pair.get(self.unicode)
    }

    /// Cells in a completion bar: a quarter of the terminal, within 10..=30.
    pub fn bar_width(&self) -> usize {
        (self.width / 4).clamp(10, 30)
    }
}

/// Terminal width from `COLUMNS`, then the tty itself.
fn terminal_width() -> Option<usize> {
    if let Some(width) = std::env::var("COLUMNS")
        .ok()
        .and_then(|cols| cols.parse::<usize>().ok())
        .filter(|width| *width > 0)
    {
        return Some(width);
    }

    #[cfg(unix)]
    {
        use std::mem::MaybeUninit;

        let mut winsize = MaybeUninit::<libc::winsize>::uninit();
        // SAFETY: TIOCGWINSZ only writes into the provided winsize
        let result =
            unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, winsize.as_mut_ptr()) };
        if result == 0 {
            // SAFETY: ioctl succeeded and filled the struct
            let ws = unsafe { winsize.assume_init() };
            if ws.ws_col > 0 {
                return Some(ws.ws_col as usize);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::{MISSING, OBTAINED};

    fn ctx(unicode: bool, width: usize) -> UiContext {
        UiContext {
            color: false,
            unicode,
            width,
            mode: OutputMode::Plain,
            interactive: false,
        }
    }

    #[test]
    fn test_settings_flow_into_context() {
        let ui = UiContext::from_env(UiSettings {
            json: true,
            ascii: true,
            no_color: true,
            ..Default::default()
        });
        assert_eq!(ui.mode, OutputMode::Json);
        assert!(!ui.unicode);
        assert!(!ui.color);
    }

    #[test]
    fn test_symbols_follow_unicode_setting() {
        assert_eq!(ctx(false, 80).symbol(OBTAINED), "[x]");
        assert_eq!(ctx(false, 80).symbol(MISSING), "[ ]");
        assert_eq!(ctx(true, 80).symbol(OBTAINED), "\u{25C9}");
    }

    #[test]
    fn test_bar_width_scales_with_terminal() {
        assert_eq!(ctx(true, 20).bar_width(), 10);
        assert_eq!(ctx(true, 80).bar_width(), 20);
        assert_eq!(ctx(true, 300).bar_width(), 30);
    }
}

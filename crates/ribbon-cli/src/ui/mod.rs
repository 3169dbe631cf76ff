//! UI primitives for the ribbon CLI.
//!
//! - **Context**: environment detection (TTY, width, color, unicode, prompts)
//! - **Mode**: output mode resolution (json, plain, table)
//! - **Theme**: badges, styles, symbols
//! - **Render**: tables, headers, receipts, hints
//! - **Format**: string helpers (truncate, pad, progress bars)

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::{UiContext, UiSettings};
pub use mode::OutputFormat;
pub use theme::Badge;

pub use render::{
    badge, blank_line, divider, header, header_with_context, hint, kv, print, print_error,
    receipt, simple_table, table, Column,
};

//! Shared helpers for command handlers.

mod input;
mod parsing;

pub use input::{confirm_destructive, read_import_source};
pub use parsing::{
    focus_key, parse_hardware, parse_status, require_game, require_ribbon, resolve_instance,
    resolve_target, Target,
};

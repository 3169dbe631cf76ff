//! Output formatting shared by command handlers.

mod json;

pub use json::{
    instance_json, item_json, print_json, progress_json, ribbon_json, summary_json,
};

//! Command handlers, one module per command group.

pub mod catalog;
pub mod data;
pub mod init;
pub mod misc;
pub mod pokemon;
pub mod progress;
pub mod setup;
pub mod transfers;

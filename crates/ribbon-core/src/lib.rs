//! # Ribbon Core
//!
//! Core library for Ribbon Tracker - a local-first progress tracker for
//! collectible ribbons across every generation of the franchise.
//!
//! This crate provides the domain logic, storage abstractions, and bundled
//! catalogs independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **catalog**: Bundled games, ribbons, items and the shadow-capable set
//! - **eligibility**: Pure eligibility verdicts for an item/ribbon pair
//! - **progress**: Owned instances, obtained-ribbon sets, export/import
//! - **setup**: Owned games and hardware declared during onboarding
//! - **transfer**: Cross-generation transfer route table
//! - **filter**: Ribbon list filtering by generation, category, status and text
//! - **storage**: Key/value local storage trait and backends
//! - **context**: The tracker context that wires everything together

pub mod catalog;
pub mod context;
pub mod eligibility;
pub mod error;
pub mod filter;
pub mod fs;
pub mod progress;
pub mod setup;
pub mod storage;
pub mod transfer;

pub use catalog::{load_catalog, Catalog};
pub use context::Tracker;
pub use eligibility::{acquisition_phase, evaluate, Eligibility};
pub use error::{Result, RibbonError};
pub use filter::{RibbonFilter, RibbonStatus};
pub use progress::{
    ExportDocument, GenerationProgress, ImportDocument, ImportSummary, InstancePatch, NewInstance,
    OwnedInstance, ProgressStore,
};
pub use setup::{Hardware, Setup, SetupStore};
pub use storage::{KeyValueStore, MemoryStore, SqliteStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

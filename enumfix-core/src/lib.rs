//! Embeddable core library for enumfix.
//!
//! Provides a clap-free, I/O-abstracted batch driver suitable for linking
//! into other host processes.
//!
//! # Port traits
//!
//! All I/O is abstracted behind port traits in [`ports`]:
//! - [`SourceStore`](ports::SourceStore): read and write the listed source files
//! - [`WritePort`](ports::WritePort): write run artifacts
//!
//! The [`adapters`] module provides filesystem-backed and in-memory implementations.
//!
//! # Entry points
//!
//! - [`run_batch`](pipeline::run_batch): rewrite every listed file and return the run record
//! - [`write_run_artifacts`](pipeline::write_run_artifacts): persist `run.json`, `run.md`, `patch.diff`

pub mod adapters;
pub mod catalog;
pub mod pipeline;
pub mod ports;
pub mod settings;

// Re-export so embedders don't need enumfix-types directly.
pub use enumfix_types::migration::{Migration, PatternEntry};
pub use enumfix_types::run::{EnumfixRun, FileResult, FileStatus, RunSummary, ToolInfo};

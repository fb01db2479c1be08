//! Edit engine for enumfix migrations.
//!
//! Responsibilities:
//! - Compile a migration's pattern entries into a whole-token [`PatternTable`].
//! - Rewrite one file's text ([`transform`], [`ensure_import`], [`rewrite`]).
//! - Generate a unified diff preview.
//!
//! Matching is purely textual. Occurrences inside comments and string
//! literals are rewritten like any other.

pub mod error;
mod patch;
mod pattern;
mod rewrite;

pub use error::{EditError, EditResult};
pub use patch::render_file_patch;
pub use pattern::{CompiledPattern, PatternTable};
pub use rewrite::{ensure_import, rewrite, transform, Rewrite, Transform};

//! Shared DTOs (schemas-as-code) for the enumfix workspace.
//!
//! # Design constraints
//! - Run records are serialized to disk.
//! - Prefer adding optional fields over changing semantics.

pub mod migration;
pub mod run;

/// Schema identifiers.
pub mod schema {
    pub const ENUMFIX_RUN_V1: &str = "enumfix.run.v1";
}

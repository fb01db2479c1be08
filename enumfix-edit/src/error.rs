//! Error types for enumfix-edit.
//!
//! Only building a pattern table can fail. Rewriting text never does: a file
//! without an import anchor is a silent no-op, not an error.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    /// The legacy token is empty, has a non-word edge, or could not be
    /// compiled into a matcher. Also used for an empty replacement.
    #[error("invalid pattern `{legacy}`: {message}")]
    InvalidPattern { legacy: String, message: String },

    /// A replacement contains a whole-token legacy match, or forms one with
    /// the surrounding text, so a second run would rewrite it again.
    #[error("replacement `{replacement}` reintroduces legacy token `{legacy}`")]
    ReplacementReintroducesLegacy { legacy: String, replacement: String },

    #[error("import line `{import_line}` contains legacy token `{legacy}`")]
    ImportLineContainsLegacy { legacy: String, import_line: String },

    #[error("pattern table has no entries")]
    EmptyPatternTable,

    #[error("import line is empty")]
    EmptyImportLine,
}

pub type EditResult<T> = Result<T, EditError>;

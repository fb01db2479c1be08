use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// One legacy token and the literal text that replaces it.
///
/// `legacy` is matched as a whole token only; the edit engine anchors it with
/// word boundaries before matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternEntry {
    pub legacy: String,
    pub replacement: String,
}

impl PatternEntry {
    pub fn new(legacy: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            legacy: legacy.into(),
            replacement: replacement.into(),
        }
    }
}

/// A complete constant migration: what to replace, what to import, and where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Migration {
    pub name: String,

    /// Line injected after the last import declaration of a file that had at least one replacement.
    pub import_line: String,

    /// Applied in order.
    pub patterns: Vec<PatternEntry>,

    /// Relative to the run root.
    #[serde(default)]
    pub files: Vec<Utf8PathBuf>,
}

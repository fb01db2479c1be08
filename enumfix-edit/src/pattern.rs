use crate::error::{EditError, EditResult};
use enumfix_types::migration::{Migration, PatternEntry};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static WORD_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w$").expect("word char regex"));

/// Same notion of word character as `\b` in the compiled matchers.
fn is_word(c: char) -> bool {
    let mut buf = [0u8; 4];
    WORD_CHAR.is_match(c.encode_utf8(&mut buf))
}

/// A pattern entry with its boundary-anchored matcher.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    entry: PatternEntry,
    regex: Regex,
}

impl CompiledPattern {
    pub fn compile(entry: &PatternEntry) -> EditResult<Self> {
        let invalid = |message: &str| EditError::InvalidPattern {
            legacy: entry.legacy.clone(),
            message: message.to_string(),
        };
        if entry.legacy.trim().is_empty() {
            return Err(invalid("legacy token is empty"));
        }
        // A non-word edge only meets `\b` when the neighbouring text is a word char.
        let word_edges = entry.legacy.chars().next().is_some_and(is_word)
            && entry.legacy.chars().next_back().is_some_and(is_word);
        if !word_edges {
            return Err(invalid("legacy token must start and end with a word character"));
        }
        if entry.legacy.contains(['\n', '\r']) {
            return Err(invalid("legacy token spans a line break"));
        }
        if entry.replacement.is_empty() {
            return Err(invalid("replacement is empty"));
        }

        let expr = format!(r"\b{}\b", regex::escape(&entry.legacy));
        let regex = Regex::new(&expr).map_err(|e| invalid(&e.to_string()))?;

        Ok(Self {
            entry: entry.clone(),
            regex,
        })
    }

    pub fn legacy(&self) -> &str {
        &self.entry.legacy
    }

    pub fn replacement(&self) -> &str {
        &self.entry.replacement
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

/// Ordered whole-token patterns plus the import line their replacements need.
#[derive(Debug, Clone)]
pub struct PatternTable {
    patterns: Vec<CompiledPattern>,
    import_line: String,
}

impl PatternTable {
    /// Compile `entries` in order.
    ///
    /// Rejects empty tables and empty import lines. Also rejects any
    /// replacement that, alone or together with the text around it, a legacy
    /// pattern would match on a second run.
    pub fn new(entries: &[PatternEntry], import_line: impl Into<String>) -> EditResult<Self> {
        let import_line = import_line.into();
        if import_line.trim().is_empty() {
            return Err(EditError::EmptyImportLine);
        }
        if entries.is_empty() {
            return Err(EditError::EmptyPatternTable);
        }

        let patterns = entries
            .iter()
            .map(CompiledPattern::compile)
            .collect::<EditResult<Vec<_>>>()?;

        for p in &patterns {
            let legacy: Vec<char> = p.legacy().chars().collect();
            for q in &patterns {
                let replacement: Vec<char> = q.replacement().chars().collect();
                if p.regex.is_match(q.replacement()) || completes_legacy(&legacy, &replacement) {
                    return Err(EditError::ReplacementReintroducesLegacy {
                        legacy: p.legacy().to_string(),
                        replacement: q.replacement().to_string(),
                    });
                }
            }
            if p.regex.is_match(&import_line) {
                return Err(EditError::ImportLineContainsLegacy {
                    legacy: p.legacy().to_string(),
                    import_line,
                });
            }
        }

        debug!(patterns = patterns.len(), import_line = %import_line, "compiled pattern table");

        Ok(Self {
            patterns,
            import_line,
        })
    }

    pub fn from_migration(migration: &Migration) -> EditResult<Self> {
        Self::new(&migration.patterns, migration.import_line.clone())
    }

    pub fn patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    pub fn import_line(&self) -> &str {
        &self.import_line
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Whether `replacement`, once substituted, can form a whole-token `legacy`
/// together with its neighbours.
///
/// Slides `legacy` across `replacement`. The characters just outside an
/// earlier match are non-word characters, because legacy tokens have word
/// edges. An alignment counts when the overlap agrees and each edge of
/// `legacy` lands on a word boundary.
fn completes_legacy(legacy: &[char], replacement: &[char]) -> bool {
    let (n, m) = (legacy.len() as isize, replacement.len() as isize);
    let r = |i: isize| replacement[i as usize];
    let l = |i: isize| legacy[i as usize];

    (1 - n..m).any(|off| {
        let end = off + n;
        let overlap_agrees = (off.max(0)..end.min(m)).all(|i| r(i) == l(i - off));
        let start_ok = match off {
            0 => true,
            o if o > 0 => !is_word(r(o - 1)),
            o => !is_word(l(-o - 1)),
        };
        let end_ok = if end == m {
            true
        } else if end < m {
            !is_word(r(end))
        } else {
            !is_word(l(m - off))
        };
        overlap_agrees && start_ok && end_ok
    })
}

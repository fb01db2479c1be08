use crate::pattern::PatternTable;
use regex::{NoExpand, Regex};
use std::sync::LazyLock;
use tracing::debug;

/// A line that starts an import declaration: `import`, a dotted path, `;`.
///
/// Static imports and wildcard imports do not qualify as anchors.
static IMPORT_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^import\s+[\w.]+;").expect("import anchor regex"));

/// Result of substituting every pattern in a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transform {
    pub text: String,
    /// True iff `text` differs byte-for-byte from the input.
    pub changed: bool,
    pub replacements: usize,
}

/// Replace every whole-token occurrence of each pattern, in table order.
///
/// Applying this to its own output is a no-op.
pub fn transform(text: &str, table: &PatternTable) -> Transform {
    let mut current = text.to_string();
    let mut replacements = 0;

    for pattern in table.patterns() {
        let hits = pattern.regex().find_iter(&current).count();
        if hits == 0 {
            continue;
        }
        replacements += hits;
        current = pattern
            .regex()
            .replace_all(&current, NoExpand(pattern.replacement()))
            .into_owned();
    }

    let changed = current != text;
    Transform {
        text: current,
        changed,
        replacements,
    }
}

/// Insert `import_line` after the last import declaration.
///
/// Returns `text` unchanged when the line is already present verbatim, or
/// when the text has no import declaration to anchor on.
pub fn ensure_import(text: &str, import_line: &str) -> String {
    insert_import(text, import_line).unwrap_or_else(|| text.to_string())
}

fn insert_import(text: &str, import_line: &str) -> Option<String> {
    if text.contains(import_line) {
        return None;
    }

    let mut lines: Vec<&str> = text.split('\n').collect();
    let anchor = lines.iter().rposition(|line| IMPORT_ANCHOR.is_match(line))?;
    lines.insert(anchor + 1, import_line);
    Some(lines.join("\n"))
}

/// Full rewrite of one file: substitutions, then the import if anything fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub text: String,
    pub changed: bool,
    pub replacements: usize,
    pub import_inserted: bool,
}

pub fn rewrite(text: &str, table: &PatternTable) -> Rewrite {
    let t = transform(text, table);

    let mut import_inserted = false;
    let mut out = t.text;
    if t.replacements > 0 {
        match insert_import(&out, table.import_line()) {
            Some(with_import) => {
                out = with_import;
                import_inserted = true;
            }
            None => debug!("import already present or no import anchor"),
        }
    }

    let changed = out != text;
    Rewrite {
        text: out,
        changed,
        replacements: t.replacements,
        import_inserted,
    }
}

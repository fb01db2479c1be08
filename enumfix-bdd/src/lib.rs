//! BDD harness (cucumber-rs).
//!
//! This crate exists to keep scenario tests isolated from the production crates.

use anyhow::Context;
use camino::Utf8Path;
use fs_err as fs;

/// Write `contents` to `root/rel`, creating parent directories.
pub fn seed_file(root: &Utf8Path, rel: &str, contents: &str) -> anyhow::Result<()> {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent))?;
    }
    fs::write(&path, contents).with_context(|| format!("write {}", path))
}

/// Count whole-line occurrences of `line` in `text`.
pub fn count_lines(text: &str, line: &str) -> usize {
    text.split('\n').filter(|l| *l == line).count()
}

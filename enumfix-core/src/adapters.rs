//! Default filesystem-backed port implementations, plus an in-memory store
//! for embedding and testing.

use crate::ports::{SourceStore, WritePort};
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;
use tracing::debug;

/// File-system backed `SourceStore` rooted at a directory.
#[derive(Debug, Clone)]
pub struct FsSourceStore {
    root: Utf8PathBuf,
}

impl FsSourceStore {
    pub fn new(root: Utf8PathBuf) -> Self {
        Self { root }
    }

    fn abs(&self, rel: &Utf8Path) -> Utf8PathBuf {
        if rel.is_absolute() {
            rel.to_path_buf()
        } else {
            self.root.join(rel)
        }
    }
}

impl SourceStore for FsSourceStore {
    fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn exists(&self, rel: &Utf8Path) -> bool {
        self.abs(rel).exists()
    }

    fn read_to_string(&self, rel: &Utf8Path) -> anyhow::Result<String> {
        let abs = self.abs(rel);
        Ok(fs::read_to_string(&abs)?)
    }

    fn write(&self, rel: &Utf8Path, contents: &str) -> anyhow::Result<()> {
        let abs = self.abs(rel);
        debug!(path = %abs, bytes = contents.len(), "writing source file");
        Ok(fs::write(&abs, contents)?)
    }
}

/// In-memory `SourceStore`.
///
/// Records every write so tests can assert that unchanged files are never
/// touched. Paths registered with [`fail_reads`](Self::fail_reads) or
/// [`fail_writes`](Self::fail_writes) return an I/O error.
#[derive(Debug, Default)]
pub struct InMemorySourceStore {
    root: Utf8PathBuf,
    files: Mutex<BTreeMap<Utf8PathBuf, String>>,
    writes: Mutex<Vec<Utf8PathBuf>>,
    failing_reads: BTreeSet<Utf8PathBuf>,
    failing_writes: BTreeSet<Utf8PathBuf>,
}

impl InMemorySourceStore {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_file(self, rel: impl Into<Utf8PathBuf>, contents: impl Into<String>) -> Self {
        if let Ok(mut files) = self.files.lock() {
            files.insert(rel.into(), contents.into());
        }
        self
    }

    pub fn fail_reads(mut self, rel: impl Into<Utf8PathBuf>) -> Self {
        self.failing_reads.insert(rel.into());
        self
    }

    pub fn fail_writes(mut self, rel: impl Into<Utf8PathBuf>) -> Self {
        self.failing_writes.insert(rel.into());
        self
    }

    pub fn contents(&self, rel: &str) -> Option<String> {
        self.files
            .lock()
            .ok()
            .and_then(|files| files.get(Utf8Path::new(rel)).cloned())
    }

    /// Paths written so far, in write order.
    pub fn writes(&self) -> Vec<Utf8PathBuf> {
        self.writes.lock().map(|w| w.clone()).unwrap_or_default()
    }
}

impl SourceStore for InMemorySourceStore {
    fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn exists(&self, rel: &Utf8Path) -> bool {
        self.files
            .lock()
            .map(|files| files.contains_key(rel))
            .unwrap_or(false)
    }

    fn read_to_string(&self, rel: &Utf8Path) -> anyhow::Result<String> {
        if self.failing_reads.contains(rel) {
            anyhow::bail!("read {}: simulated I/O failure", rel);
        }
        let files = self
            .files
            .lock()
            .map_err(|_| anyhow::anyhow!("source store lock poisoned"))?;
        files
            .get(rel)
            .cloned()
            .with_context(|| format!("read {}: no such file", rel))
    }

    fn write(&self, rel: &Utf8Path, contents: &str) -> anyhow::Result<()> {
        if self.failing_writes.contains(rel) {
            anyhow::bail!("write {}: simulated I/O failure", rel);
        }
        self.files
            .lock()
            .map_err(|_| anyhow::anyhow!("source store lock poisoned"))?
            .insert(rel.to_path_buf(), contents.to_string());
        self.writes
            .lock()
            .map_err(|_| anyhow::anyhow!("source store lock poisoned"))?
            .push(rel.to_path_buf());
        Ok(())
    }
}

/// Filesystem write operations.
#[derive(Debug, Clone, Default)]
pub struct FsWritePort;

impl WritePort for FsWritePort {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(fs::write(path, contents)?)
    }

    fn create_dir_all(&self, path: &Utf8Path) -> anyhow::Result<()> {
        Ok(fs::create_dir_all(path)?)
    }
}

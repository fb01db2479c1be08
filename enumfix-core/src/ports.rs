//! Port traits abstracting all I/O away from the pipeline.

use camino::Utf8Path;

/// Access to the source files a migration rewrites.
///
/// Paths are relative to [`SourceStore::root`].
pub trait SourceStore {
    fn root(&self) -> &Utf8Path;

    fn exists(&self, rel: &Utf8Path) -> bool;

    fn read_to_string(&self, rel: &Utf8Path) -> anyhow::Result<String>;

    fn write(&self, rel: &Utf8Path, contents: &str) -> anyhow::Result<()>;
}

/// File-system write operations for run artifacts.
pub trait WritePort {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()>;
    fn create_dir_all(&self, path: &Utf8Path) -> anyhow::Result<()>;
}

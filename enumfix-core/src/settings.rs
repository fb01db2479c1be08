//! Clap-free settings for the batch pipeline.

use camino::Utf8PathBuf;

/// Settings for one batch run. The run root belongs to the `SourceStore`.
#[derive(Debug, Clone, Default)]
pub struct RunSettings {
    /// Compute results and the patch but write no source file.
    pub dry_run: bool,

    /// Where `run.json`, `run.md` and `patch.diff` go. `None` skips artifacts.
    pub out_dir: Option<Utf8PathBuf>,
}

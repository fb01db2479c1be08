//! Batch pipeline: rewrite every file of a migration, one at a time.
//!
//! Failures are contained per file. A missing or unreadable file is recorded
//! and the batch moves on; only an invalid migration aborts the run.

use crate::ports::{SourceStore, WritePort};
use crate::settings::RunSettings;
use anyhow::Context;
use camino::Utf8Path;
use chrono::Utc;
use enumfix_edit::{render_file_patch, rewrite, EditError, PatternTable};
use enumfix_hash::sha256_hex;
use enumfix_render::render_run_md;
use enumfix_types::migration::Migration;
use enumfix_types::run::{EnumfixRun, FileResult, FileStatus, ToolInfo};
use tracing::{debug, info, warn};

/// Error type for pipeline results. Exit code 1; per-file failures are not errors.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("invalid migration `{name}`: {source}")]
    Migration {
        name: String,
        #[source]
        source: EditError,
    },
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Outcome of `run_batch`.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub run: EnumfixRun,
    /// Unified diff of every updated file, in list order.
    pub patch: String,
}

impl RunOutcome {
    /// 0 when every file was updated or unchanged, 2 when any was missing or errored.
    pub fn exit_code(&self) -> u8 {
        if self.run.summary.has_failures() { 2 } else { 0 }
    }
}

/// Run the migration over its file list.
///
/// Each file ends in exactly one of `updated`, `unchanged`, `missing` or
/// `errored`. Unchanged files are never written.
pub fn run_batch(
    settings: &RunSettings,
    migration: &Migration,
    store: &dyn SourceStore,
    tool: ToolInfo,
) -> Result<RunOutcome, ToolError> {
    let table = PatternTable::from_migration(migration).map_err(|source| ToolError::Migration {
        name: migration.name.clone(),
        source,
    })?;

    let mut run = EnumfixRun::new(tool, store.root().as_str(), migration.name.clone());
    run.dry_run = settings.dry_run;
    let mut patch = String::new();

    info!(
        migration = %migration.name,
        files = migration.files.len(),
        dry_run = settings.dry_run,
        "starting batch"
    );

    for rel in &migration.files {
        let (result, file_patch) = process_file(rel, &table, store, settings.dry_run);
        patch.push_str(&file_patch);
        run.record(result);
    }

    run.ended_at = Some(Utc::now());

    info!(
        examined = run.summary.examined,
        updated = run.summary.updated,
        unchanged = run.summary.unchanged,
        missing = run.summary.missing,
        errored = run.summary.errored,
        "batch finished"
    );

    Ok(RunOutcome { run, patch })
}

fn process_file(
    rel: &Utf8Path,
    table: &PatternTable,
    store: &dyn SourceStore,
    dry_run: bool,
) -> (FileResult, String) {
    if !store.exists(rel) {
        warn!(path = %rel, "file not found");
        return (FileResult::missing(rel.as_str()), String::new());
    }

    match rewrite_file(rel, table, store, dry_run) {
        Ok(done) => done,
        Err(e) => {
            let message = format!("{e:#}");
            warn!(path = %rel, error = %message, "error processing file");
            (FileResult::errored(rel.as_str(), message), String::new())
        }
    }
}

fn rewrite_file(
    rel: &Utf8Path,
    table: &PatternTable,
    store: &dyn SourceStore,
    dry_run: bool,
) -> anyhow::Result<(FileResult, String)> {
    let before = store.read_to_string(rel)?;
    let rw = rewrite(&before, table);

    let mut result = FileResult::new(rel.as_str(), FileStatus::Unchanged);
    result.replacements = rw.replacements as u64;
    result.import_inserted = rw.import_inserted;

    if !rw.changed {
        debug!(path = %rel, "no changes");
        return Ok((result, String::new()));
    }

    if !dry_run {
        store.write(rel, &rw.text)?;
    }

    debug!(
        path = %rel,
        replacements = rw.replacements,
        import_inserted = rw.import_inserted,
        "updated"
    );

    result.status = FileStatus::Updated;
    result.sha256_before = Some(sha256_hex(before.as_bytes()));
    result.sha256_after = Some(sha256_hex(rw.text.as_bytes()));

    let patch = render_file_patch(rel, &before, &rw.text);
    Ok((result, patch))
}

/// Write `run.json`, `run.md` and `patch.diff` to the output directory.
pub fn write_run_artifacts(
    outcome: &RunOutcome,
    out_dir: &Utf8Path,
    writer: &dyn WritePort,
) -> anyhow::Result<()> {
    writer.create_dir_all(out_dir)?;

    let run_json = serde_json::to_string_pretty(&outcome.run).context("serialize run")?;
    writer.write_file(&out_dir.join("run.json"), run_json.as_bytes())?;

    let run_md = render_run_md(&outcome.run);
    writer.write_file(&out_dir.join("run.md"), run_md.as_bytes())?;

    writer.write_file(&out_dir.join("patch.diff"), outcome.patch.as_bytes())?;

    info!("wrote run artifacts to {}", out_dir);
    Ok(())
}

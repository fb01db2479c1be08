//! Rendering helpers for human-readable output: console status lines and a
//! markdown run report.

use enumfix_types::run::{EnumfixRun, FileResult, FileStatus, RunSummary};

/// Which console stream a status line belongs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// One console line for a file outcome.
pub fn render_status_line(result: &FileResult, dry_run: bool) -> (Stream, String) {
    match result.status {
        FileStatus::Updated => {
            let prefix = if dry_run { "[dry-run] " } else { "" };
            (Stream::Stdout, format!("{prefix}✓ Updated: {}", result.path))
        }
        FileStatus::Unchanged => (Stream::Stdout, format!("  No changes: {}", result.path)),
        FileStatus::Missing => (Stream::Stderr, format!("✗ File not found: {}", result.path)),
        FileStatus::Errored => (
            Stream::Stderr,
            format!(
                "✗ Error processing {}: {}",
                result.path,
                result.message.as_deref().unwrap_or("unknown error")
            ),
        ),
    }
}

pub fn render_summary_line(summary: &RunSummary) -> String {
    format!(
        "Processed {} files, updated {}",
        summary.examined, summary.updated
    )
}

pub fn render_run_md(run: &EnumfixRun) -> String {
    let mut out = String::new();
    out.push_str("# enumfix run\n\n");
    out.push_str(&format!("- Migration: `{}`\n", run.migration));
    out.push_str(&format!("- Root: `{}`\n", run.root));
    if run.dry_run {
        out.push_str("- Mode: dry-run (nothing written)\n");
    }
    out.push_str(&format!(
        "- Examined: {}\n- Updated: {}\n- Unchanged: {}\n- Missing: {}\n- Errored: {}\n\n",
        run.summary.examined,
        run.summary.updated,
        run.summary.unchanged,
        run.summary.missing,
        run.summary.errored
    ));

    out.push_str("## Files\n\n");
    if run.results.is_empty() {
        out.push_str("_No files listed._\n");
        return out;
    }

    for r in &run.results {
        out.push_str(&format!("- `{}` `{}`", r.path, status_label(r.status)));
        if r.replacements > 0 {
            out.push_str(&format!(", {} replacement(s)", r.replacements));
        }
        if r.import_inserted {
            out.push_str(", import added");
        }
        if let Some(msg) = &r.message {
            out.push_str(&format!(": {}", msg));
        }
        out.push('\n');
    }

    out
}

pub fn status_label(s: FileStatus) -> &'static str {
    match s {
        FileStatus::Updated => "updated",
        FileStatus::Unchanged => "unchanged",
        FileStatus::Missing => "missing",
        FileStatus::Errored => "errored",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumfix_types::run::ToolInfo;
    use pretty_assertions::assert_eq;

    #[test]
    fn status_lines_match_console_format() {
        let updated = FileResult::new("a/A.java", FileStatus::Updated);
        let unchanged = FileResult::new("a/B.java", FileStatus::Unchanged);
        let missing = FileResult::missing("a/C.java");
        let errored = FileResult::errored("a/D.java", "permission denied");

        assert_eq!(
            render_status_line(&updated, false),
            (Stream::Stdout, "✓ Updated: a/A.java".to_string())
        );
        assert_eq!(
            render_status_line(&unchanged, false),
            (Stream::Stdout, "  No changes: a/B.java".to_string())
        );
        assert_eq!(
            render_status_line(&missing, false),
            (Stream::Stderr, "✗ File not found: a/C.java".to_string())
        );
        assert_eq!(
            render_status_line(&errored, false),
            (
                Stream::Stderr,
                "✗ Error processing a/D.java: permission denied".to_string()
            )
        );
    }

    #[test]
    fn dry_run_marks_updated_lines() {
        let updated = FileResult::new("A.java", FileStatus::Updated);
        let (_, line) = render_status_line(&updated, true);
        assert_eq!(line, "[dry-run] ✓ Updated: A.java");
    }

    #[test]
    fn summary_line_counts_examined_and_updated() {
        let summary = RunSummary {
            examined: 38,
            updated: 12,
            unchanged: 20,
            missing: 6,
            errored: 0,
        };
        assert_eq!(render_summary_line(&summary), "Processed 38 files, updated 12");
    }

    #[test]
    fn run_md_lists_files() {
        let mut run = EnumfixRun::new(
            ToolInfo {
                name: "enumfix".to_string(),
                version: None,
            },
            "/repo",
            "betting-round",
        );
        let mut r = FileResult::new("A.java", FileStatus::Updated);
        r.replacements = 2;
        r.import_inserted = true;
        run.record(r);
        run.record(FileResult::missing("B.java"));

        let md = render_run_md(&run);
        assert!(md.starts_with("# enumfix run\n"));
        assert!(md.contains("- Updated: 1\n"));
        assert!(md.contains("- Missing: 1\n"));
        assert!(md.contains("- `A.java` `updated`, 2 replacement(s), import added\n"));
        assert!(md.contains("- `B.java` `missing`\n"));
    }

    #[test]
    fn run_md_without_files() {
        let run = EnumfixRun::new(
            ToolInfo {
                name: "enumfix".to_string(),
                version: None,
            },
            ".",
            "m",
        );
        assert!(render_run_md(&run).ends_with("_No files listed._\n"));
    }
}

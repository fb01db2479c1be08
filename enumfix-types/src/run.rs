use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Record of one batch run over a migration's file list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumfixRun {
    pub schema: String,
    pub run_id: String,
    pub tool: ToolInfo,
    pub root: String,
    pub migration: String,
    pub dry_run: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub results: Vec<FileResult>,
    pub summary: RunSummary,
}

impl EnumfixRun {
    pub fn new(tool: ToolInfo, root: impl Into<String>, migration: impl Into<String>) -> Self {
        Self {
            schema: crate::schema::ENUMFIX_RUN_V1.to_string(),
            run_id: uuid::Uuid::new_v4().to_string(),
            tool,
            root: root.into(),
            migration: migration.into(),
            dry_run: false,
            started_at: Some(Utc::now()),
            ended_at: None,
            results: vec![],
            summary: RunSummary::default(),
        }
    }

    /// Append a result and count it in the summary.
    pub fn record(&mut self, result: FileResult) {
        self.summary.record(&result.status);
        self.results.push(result);
    }
}

/// Terminal state of one listed file. Every file reaches exactly one per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    Updated,
    Unchanged,
    Missing,
    Errored,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileResult {
    pub path: String,
    pub status: FileStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default)]
    pub replacements: u64,

    #[serde(default)]
    pub import_inserted: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256_before: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256_after: Option<String>,
}

impl FileResult {
    pub fn new(path: impl Into<String>, status: FileStatus) -> Self {
        Self {
            path: path.into(),
            status,
            message: None,
            replacements: 0,
            import_inserted: false,
            sha256_before: None,
            sha256_after: None,
        }
    }

    pub fn missing(path: impl Into<String>) -> Self {
        Self::new(path, FileStatus::Missing)
    }

    pub fn errored(path: impl Into<String>, message: impl Into<String>) -> Self {
        let mut r = Self::new(path, FileStatus::Errored);
        r.message = Some(message.into());
        r
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub examined: u64,
    pub updated: u64,
    pub unchanged: u64,
    pub missing: u64,
    pub errored: u64,
}

impl RunSummary {
    pub fn record(&mut self, status: &FileStatus) {
        self.examined += 1;
        match status {
            FileStatus::Updated => self.updated += 1,
            FileStatus::Unchanged => self.unchanged += 1,
            FileStatus::Missing => self.missing += 1,
            FileStatus::Errored => self.errored += 1,
        }
    }

    pub fn has_failures(&self) -> bool {
        self.missing > 0 || self.errored > 0
    }
}

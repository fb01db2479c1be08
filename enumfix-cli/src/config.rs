//! Configuration file loading for enumfix.
//!
//! Discovers and loads `enumfix.toml` from the run root.
//! Merges config file settings with CLI arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use enumfix_core::catalog::{self, BETTING_ROUND};
use enumfix_core::{Migration, PatternEntry};
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "enumfix.toml";

/// Top-level configuration from enumfix.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EnumfixConfig {
    /// Which migration to run and over which files.
    pub migration: MigrationConfig,

    /// Output settings.
    pub output: OutputConfig,
}

/// Migration section of the config.
///
/// With no `patterns`, `name` selects a built-in migration and the other
/// keys override its import line or file list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MigrationConfig {
    pub name: Option<String>,
    pub import_line: Option<String>,
    pub files: Option<Vec<Utf8PathBuf>>,
    pub patterns: Vec<PatternConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatternConfig {
    pub legacy: String,
    pub replacement: String,
}

/// Output section of the config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for `run.json`, `run.md` and `patch.diff`, relative to the run root.
    pub out_dir: Option<Utf8PathBuf>,

    /// Compute and report, but write no source file.
    pub dry_run: bool,
}

/// Discover the enumfix.toml config file.
///
/// Returns `None` if no config file is found in `root`.
pub fn discover_config(root: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse an enumfix.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<EnumfixConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<EnumfixConfig> {
    let config: EnumfixConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from an explicit path, or from the run root, or return default.
pub fn load_or_default(root: &Utf8Path, explicit: Option<&Utf8Path>) -> anyhow::Result<EnumfixConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    match discover_config(root) {
        Some(path) => load_config(&path),
        None => Ok(EnumfixConfig::default()),
    }
}

/// Merged configuration combining config file and CLI arguments.
#[derive(Debug, Clone)]
pub struct MergedConfig {
    pub migration: Migration,
    pub dry_run: bool,
    pub out_dir: Option<Utf8PathBuf>,
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: EnumfixConfig,
}

impl ConfigMerger {
    pub fn new(config: EnumfixConfig) -> Self {
        Self { config }
    }

    /// Resolve the migration described by the config, without CLI overrides.
    pub fn migration(&self) -> anyhow::Result<Migration> {
        let m = &self.config.migration;

        let mut migration = if m.patterns.is_empty() {
            let name = m.name.as_deref().unwrap_or(BETTING_ROUND);
            catalog::builtin(name).with_context(|| {
                format!(
                    "unknown migration '{}' (built-in: {})",
                    name,
                    catalog::builtin_names().join(", ")
                )
            })?
        } else {
            let import_line = m
                .import_line
                .clone()
                .context("migration with custom patterns requires import_line")?;
            Migration {
                name: m.name.clone().unwrap_or_else(|| "custom".to_string()),
                import_line,
                patterns: m
                    .patterns
                    .iter()
                    .map(|p| PatternEntry::new(p.legacy.clone(), p.replacement.clone()))
                    .collect(),
                files: Vec::new(),
            }
        };

        if let Some(import_line) = &m.import_line {
            migration.import_line = import_line.clone();
        }
        if let Some(files) = &m.files {
            migration.files = files.clone();
        }
        Ok(migration)
    }

    /// Merge with run command CLI arguments.
    ///
    /// A non-empty `cli_files` replaces the configured file list. `--dry-run`
    /// turns dry-run on; it cannot turn off a config `dry_run = true`.
    /// A CLI `out_dir` wins; a config `out_dir` is resolved against `root`.
    pub fn merge_run_args(
        self,
        root: &Utf8Path,
        cli_files: &[Utf8PathBuf],
        cli_dry_run: bool,
        cli_out_dir: Option<Utf8PathBuf>,
    ) -> anyhow::Result<MergedConfig> {
        let mut migration = self.migration()?;
        if !cli_files.is_empty() {
            migration.files = cli_files.to_vec();
        }

        let out_dir = cli_out_dir.or_else(|| {
            self.config
                .output
                .out_dir
                .as_ref()
                .map(|d| if d.is_absolute() { d.clone() } else { root.join(d) })
        });

        Ok(MergedConfig {
            migration,
            dry_run: cli_dry_run || self.config.output.dry_run,
            out_dir,
        })
    }
}

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use enumfix_cli::config::{self, ConfigMerger};
use enumfix_core::adapters::{FsSourceStore, FsWritePort};
use enumfix_core::pipeline::{run_batch, write_run_artifacts};
use enumfix_core::settings::RunSettings;
use enumfix_core::ToolInfo;
use enumfix_render::{render_status_line, render_summary_line, Stream};
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "enumfix",
    version,
    about = "Rewrite legacy constant references into enum members, once and idempotently."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rewrite every listed file and report per-file status.
    Run(RunArgs),
    /// Show the pattern table and import line of the selected migration.
    ListPatterns(ListPatternsArgs),
    /// Show the file list of the selected migration.
    ListFiles(ListFilesArgs),
}

#[derive(Debug, Parser)]
struct RunArgs {
    /// Run root; listed files are resolved against it.
    #[arg(long, default_value = ".")]
    root: Utf8PathBuf,

    /// Config file (default: <root>/enumfix.toml if present).
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// File to process; repeatable. Replaces the configured list.
    #[arg(long = "file")]
    files: Vec<Utf8PathBuf>,

    /// Report what would change without writing any source file.
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Write run.json, run.md and patch.diff here.
    #[arg(long)]
    out_dir: Option<Utf8PathBuf>,
}

#[derive(Debug, Parser)]
struct ListPatternsArgs {
    #[arg(long, default_value = ".")]
    root: Utf8PathBuf,

    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Parser)]
struct ListFilesArgs {
    #[arg(long, default_value = ".")]
    root: Utf8PathBuf,

    #[arg(long)]
    config: Option<Utf8PathBuf>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    match real_main() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            error!("{:?}", e);
            eprintln!("error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn real_main() -> anyhow::Result<u8> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Run(args) => cmd_run(args),
        Command::ListPatterns(args) => cmd_list_patterns(args).map(|()| 0),
        Command::ListFiles(args) => cmd_list_files(args).map(|()| 0),
    }
}

fn cmd_run(args: RunArgs) -> anyhow::Result<u8> {
    let root = args.root;
    let file_config = config::load_or_default(&root, args.config.as_deref())
        .context("load enumfix.toml config")?;
    let merged = ConfigMerger::new(file_config).merge_run_args(
        &root,
        &args.files,
        args.dry_run,
        args.out_dir,
    )?;

    debug!(
        "merged config: migration={}, files={}, dry_run={}, out_dir={:?}",
        merged.migration.name,
        merged.migration.files.len(),
        merged.dry_run,
        merged.out_dir
    );

    let settings = RunSettings {
        dry_run: merged.dry_run,
        out_dir: merged.out_dir.clone(),
    };
    let store = FsSourceStore::new(root);
    let outcome = run_batch(&settings, &merged.migration, &store, tool_info())?;

    for result in &outcome.run.results {
        match render_status_line(result, settings.dry_run) {
            (Stream::Stdout, line) => println!("{line}"),
            (Stream::Stderr, line) => eprintln!("{line}"),
        }
    }
    println!();
    println!("{}", render_summary_line(&outcome.run.summary));

    match &settings.out_dir {
        Some(out_dir) => write_run_artifacts(&outcome, out_dir, &FsWritePort)
            .with_context(|| format!("write run artifacts to {}", out_dir))?,
        None if settings.dry_run && !outcome.patch.is_empty() => {
            println!();
            print!("{}", outcome.patch);
        }
        None => {}
    }

    Ok(outcome.exit_code())
}

fn cmd_list_patterns(args: ListPatternsArgs) -> anyhow::Result<()> {
    let file_config = config::load_or_default(&args.root, args.config.as_deref())
        .context("load enumfix.toml config")?;
    let migration = ConfigMerger::new(file_config).migration()?;

    match args.format {
        OutputFormat::Text => {
            println!("Migration: {}\n", migration.name);
            println!("  {:<32} REPLACEMENT", "LEGACY");
            println!("  {:<32} -----------", "------");
            for p in &migration.patterns {
                println!("  {:<32} {}", p.legacy, p.replacement);
            }
            println!();
            println!("Import: {}", migration.import_line);
        }
        OutputFormat::Json => {
            let out = serde_json::json!({
                "name": migration.name,
                "import_line": migration.import_line,
                "patterns": migration.patterns,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}

fn cmd_list_files(args: ListFilesArgs) -> anyhow::Result<()> {
    let file_config = config::load_or_default(&args.root, args.config.as_deref())
        .context("load enumfix.toml config")?;
    let migration = ConfigMerger::new(file_config).migration()?;

    let mut missing = 0usize;
    for rel in &migration.files {
        if args.root.join(rel).exists() {
            println!("  {}", rel);
        } else {
            missing += 1;
            println!("✗ {} (missing)", rel);
        }
    }
    println!();
    println!("{} files listed, {} missing", migration.files.len(), missing);
    Ok(())
}

fn tool_info() -> ToolInfo {
    ToolInfo {
        name: "enumfix".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    }
}

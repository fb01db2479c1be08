use anyhow::Context;
use clap::{Parser, Subcommand};
use fs_err as fs;
use std::path::Path;
use std::process::Command as ProcessCommand;

const CONFIG_TEMPLATE: &str = r#"# enumfix configuration.
#
# Without [[migration.patterns]], `name` selects a built-in migration.

[migration]
name = "betting-round"
# import_line = "import com.donohoedigital.games.poker.core.state.BettingRound;"
# files = ["poker/src/main/java/com/donohoedigital/games/poker/Bet.java"]

# [[migration.patterns]]
# legacy = "HoldemHand.ROUND_FLOP"
# replacement = "BettingRound.FLOP"

[output]
# out_dir = "artifacts/enumfix"
dry_run = false
"#;

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Workspace helper tasks")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print schema identifiers used by enumfix.
    PrintSchemas,
    /// Write a commented enumfix.toml template.
    InitConfig {
        #[arg(long, default_value = ".")]
        dir: String,
        /// Overwrite an existing enumfix.toml.
        #[arg(long, default_value_t = false)]
        force: bool,
    },
    /// Bless golden fixtures (overwrite expected outputs).
    BlessFixtures,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::PrintSchemas => {
            println!("{}", enumfix_types::schema::ENUMFIX_RUN_V1);
        }
        Command::InitConfig { dir, force } => {
            let path = Path::new(&dir).join("enumfix.toml");
            if path.exists() && !force {
                anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
            }
            fs::create_dir_all(&dir).with_context(|| format!("create {dir}"))?;
            fs::write(&path, CONFIG_TEMPLATE)?;
            println!("wrote {}", path.display());
        }
        Command::BlessFixtures => {
            let status = ProcessCommand::new("cargo")
                .args(["test", "-p", "enumfix-core", "--test", "golden_fixtures"])
                .env("ENUMFIX_BLESS", "1")
                .status()
                .context("run golden fixture blessing")?;
            if !status.success() {
                anyhow::bail!("bless-fixtures failed");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_template_is_valid_toml() {
        let v: toml::Value = toml::from_str(CONFIG_TEMPLATE).expect("template parses");
        assert_eq!(v["migration"]["name"].as_str(), Some("betting-round"));
        assert_eq!(v["output"]["dry_run"].as_bool(), Some(false));
    }
}

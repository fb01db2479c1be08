//! CLI behavior tests.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const IMPORT: &str = "import com.donohoedigital.games.poker.core.state.BettingRound;";

fn enumfix() -> Command {
    Command::cargo_bin("enumfix").expect("enumfix binary")
}

fn create_temp_repo() -> TempDir {
    let td = tempfile::tempdir().expect("tempdir");
    let root = td.path();

    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(
        root.join("src").join("Flop.java"),
        "package a;\n\nimport a.b.C;\n\nclass Flop { int r = HoldemHand.ROUND_FLOP; }\n",
    )
    .unwrap();
    fs::write(
        root.join("src").join("Plain.java"),
        "package a;\n\nclass Plain {}\n",
    )
    .unwrap();

    td
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

#[test]
fn test_run_updates_listed_files() {
    let temp = create_temp_repo();

    enumfix()
        .current_dir(temp.path())
        .args(["run", "--file", "src/Flop.java", "--file", "src/Plain.java"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Updated: src/Flop.java"))
        .stdout(predicate::str::contains("  No changes: src/Plain.java"))
        .stdout(predicate::str::contains("Processed 2 files, updated 1"));

    assert_eq!(
        read(temp.path(), "src/Flop.java"),
        format!(
            "package a;\n\nimport a.b.C;\n{IMPORT}\n\nclass Flop {{ int r = BettingRound.FLOP; }}\n"
        )
    );
    assert_eq!(read(temp.path(), "src/Plain.java"), "package a;\n\nclass Plain {}\n");
}

#[test]
fn test_run_twice_is_idempotent() {
    let temp = create_temp_repo();

    enumfix()
        .current_dir(temp.path())
        .args(["run", "--file", "src/Flop.java"])
        .assert()
        .success();
    let first = read(temp.path(), "src/Flop.java");

    enumfix()
        .current_dir(temp.path())
        .args(["run", "--file", "src/Flop.java"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  No changes: src/Flop.java"))
        .stdout(predicate::str::contains("updated 0"));

    assert_eq!(read(temp.path(), "src/Flop.java"), first);
}

#[test]
fn test_missing_file_exits_2_and_continues() {
    let temp = create_temp_repo();

    enumfix()
        .current_dir(temp.path())
        .args(["run", "--file", "src/Gone.java", "--file", "src/Flop.java"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("✗ File not found: src/Gone.java"))
        .stdout(predicate::str::contains("✓ Updated: src/Flop.java"))
        .stdout(predicate::str::contains("Processed 2 files, updated 1"));
}

#[test]
fn test_dry_run_writes_nothing_and_prints_patch() {
    let temp = create_temp_repo();
    let before = read(temp.path(), "src/Flop.java");

    enumfix()
        .current_dir(temp.path())
        .args(["run", "--dry-run", "--file", "src/Flop.java"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[dry-run] ✓ Updated: src/Flop.java"))
        .stdout(predicate::str::contains("diff --git a/src/Flop.java b/src/Flop.java"))
        .stdout(predicate::str::contains(format!("+{IMPORT}")));

    assert_eq!(read(temp.path(), "src/Flop.java"), before);
}

#[test]
fn test_root_flag_resolves_files() {
    let temp = create_temp_repo();

    enumfix()
        .arg("run")
        .arg("--root")
        .arg(temp.path())
        .args(["--file", "src/Flop.java"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Updated: src/Flop.java"));

    assert!(read(temp.path(), "src/Flop.java").contains("BettingRound.FLOP"));
}

#[test]
fn test_out_dir_receives_artifacts() {
    let temp = create_temp_repo();

    enumfix()
        .current_dir(temp.path())
        .args(["run", "--file", "src/Flop.java", "--out-dir", "out"])
        .assert()
        .success();

    let run: serde_json::Value =
        serde_json::from_str(&read(temp.path(), "out/run.json")).expect("run.json");
    assert_eq!(run["schema"], "enumfix.run.v1");
    assert_eq!(run["tool"]["name"], "enumfix");
    assert_eq!(run["summary"]["updated"], 1);
    assert!(read(temp.path(), "out/run.md").starts_with("# enumfix run"));
    assert!(read(temp.path(), "out/patch.diff").contains("+class Flop { int r = BettingRound.FLOP; }"));
}

#[test]
fn test_config_file_drives_custom_migration() {
    let temp = create_temp_repo();
    fs::write(
        temp.path().join("src").join("Suit.java"),
        "import x.Y;\nint s = Card.SUIT_HEARTS;\n",
    )
    .unwrap();
    fs::write(
        temp.path().join("enumfix.toml"),
        r#"
[migration]
name = "suit"
import_line = "import cards.Suit;"
files = ["src/Suit.java"]

[[migration.patterns]]
legacy = "Card.SUIT_HEARTS"
replacement = "Suit.HEARTS"
"#,
    )
    .unwrap();

    enumfix()
        .current_dir(temp.path())
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 1 files, updated 1"));

    assert_eq!(
        read(temp.path(), "src/Suit.java"),
        "import x.Y;\nimport cards.Suit;\nint s = Suit.HEARTS;\n"
    );
}

#[test]
fn test_invalid_config_exits_1() {
    let temp = create_temp_repo();
    fs::write(temp.path().join("enumfix.toml"), "[migration\nname = ").unwrap();

    enumfix()
        .current_dir(temp.path())
        .arg("run")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("enumfix.toml"));
}

#[test]
fn test_invalid_pattern_table_exits_1() {
    let temp = create_temp_repo();
    fs::write(
        temp.path().join("enumfix.toml"),
        r#"
[migration]
name = "broken"
import_line = "import a.B;"

[[migration.patterns]]
legacy = ""
replacement = "B.X"
"#,
    )
    .unwrap();

    enumfix()
        .current_dir(temp.path())
        .args(["run", "--file", "src/Flop.java"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("broken"));
}

#[test]
fn test_explicit_missing_config_exits_1() {
    let temp = create_temp_repo();

    enumfix()
        .current_dir(temp.path())
        .args(["run", "--config", "nope.toml"])
        .assert()
        .code(1);
}

#[test]
fn test_list_patterns_text() {
    enumfix()
        .arg("list-patterns")
        .assert()
        .success()
        .stdout(predicate::str::contains("Migration: betting-round"))
        .stdout(predicate::str::contains("HoldemHand.ROUND_PRE_FLOP"))
        .stdout(predicate::str::contains("BettingRound.SHOWDOWN"))
        .stdout(predicate::str::contains(format!("Import: {IMPORT}")));
}

#[test]
fn test_list_patterns_json() {
    let output = enumfix()
        .args(["list-patterns", "--format", "json"])
        .output()
        .expect("run");
    assert!(output.status.success());

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(v["name"], "betting-round");
    assert_eq!(v["import_line"], IMPORT);
    let patterns = v["patterns"].as_array().expect("array");
    assert_eq!(patterns.len(), 6);
    assert_eq!(patterns[0]["legacy"], "HoldemHand.ROUND_NONE");
    assert_eq!(patterns[0]["replacement"], "BettingRound.NONE");
}

#[test]
fn test_list_patterns_invalid_format() {
    enumfix()
        .args(["list-patterns", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_list_files_marks_missing() {
    let temp = create_temp_repo();
    fs::write(
        temp.path().join("enumfix.toml"),
        "[migration]\nfiles = [\"src/Flop.java\", \"src/Gone.java\"]\n",
    )
    .unwrap();

    enumfix()
        .current_dir(temp.path())
        .arg("list-files")
        .assert()
        .success()
        .stdout(predicate::str::contains("  src/Flop.java"))
        .stdout(predicate::str::contains("✗ src/Gone.java (missing)"))
        .stdout(predicate::str::contains("2 files listed, 1 missing"));
}

#[test]
fn test_builtin_file_list_in_empty_dir_reports_all_missing() {
    let temp = tempfile::tempdir().unwrap();

    enumfix()
        .current_dir(temp.path())
        .arg("run")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Processed 38 files, updated 0"));
}

#[test]
fn test_unknown_subcommand() {
    enumfix().arg("frobnicate").assert().failure();
}

#[test]
fn test_help_lists_subcommands() {
    enumfix()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("list-patterns"))
        .stdout(predicate::str::contains("list-files"));
}

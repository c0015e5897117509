/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary and verify command-line behavior
mod common;

use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

use common::{HistoryFileBuilder, realistic_history};

fn picker_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_history-picker"));
    cmd.arg("--no-log").env_remove("HISTFILE");
    cmd
}

#[test]
fn test_cli_query_prints_ranked_matches() {
    let home = realistic_history();

    picker_cmd()
        .arg("--history-file")
        .arg(home.history_path())
        .args(["query", "git"])
        .assert()
        .success()
        .stdout(
            "git status\n\
             Git Log --oneline\n\
             git push\n\
             git commit -m 'Fix login'\n\
             git add .\n\
             gradle integration test\n\
             go install tools\n",
        );
}

#[test]
fn test_cli_query_no_matches_prints_nothing() {
    let home = realistic_history();

    picker_cmd()
        .arg("--history-file")
        .arg(home.history_path())
        .args(["query", "zzzz"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_cli_query_empty_lists_corpus() {
    let home = HistoryFileBuilder::new().commands(&["a", "b", "a"]).build();

    picker_cmd()
        .arg("--history-file")
        .arg(home.history_path())
        .args(["query", ""])
        .assert()
        .success()
        .stdout("a\nb\n");
}

#[test]
fn test_cli_query_limit() {
    let home = realistic_history();

    picker_cmd()
        .arg("--history-file")
        .arg(home.history_path())
        .args(["query", "git", "-n", "2"])
        .assert()
        .success()
        .stdout("git status\nGit Log --oneline\n");
}

#[test]
fn test_cli_query_highlight_markers() {
    let home = HistoryFileBuilder::new().commands(&["ls -la", "git push"]).build();

    picker_cmd()
        .arg("--history-file")
        .arg(home.history_path())
        .args(["query", "gp", "--highlight"])
        .assert()
        .success()
        .stdout("[#9664c8::b]g[white::-]it [#9664c8::b]p[white::-]ush\n");
}

#[test]
fn test_cli_history_file_from_home() {
    let home = HistoryFileBuilder::new().commands(&["make build"]).build();

    picker_cmd()
        .env("HOME", home.home())
        .args(["query", "make"])
        .assert()
        .success()
        .stdout("make build\n");
}

#[test]
fn test_cli_history_file_from_histfile() {
    let home = HistoryFileBuilder::new().file_name(".zsh_history").commands(&["zsh only"]).build();

    Command::new(env!("CARGO_BIN_EXE_history-picker"))
        .arg("--no-log")
        .env("HISTFILE", home.history_path())
        .args(["query", "zsh"])
        .assert()
        .success()
        .stdout("zsh only\n");
}

#[test]
fn test_cli_stats_command_with_data() {
    let home = HistoryFileBuilder::new().commands(&["ls", "git status", "ls", "ls"]).build();

    picker_cmd()
        .arg("--history-file")
        .arg(home.history_path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Shell History Statistics"))
        .stdout(predicate::str::contains("Total lines: 4"))
        .stdout(predicate::str::contains("Distinct commands: 2"))
        .stdout(predicate::str::contains("Duplicates: 50.0%"))
        .stdout(predicate::str::contains("Most repeated:"));
}

#[test]
fn test_cli_stats_command_empty_history() {
    let home = HistoryFileBuilder::new().build();

    picker_cmd()
        .arg("--history-file")
        .arg(home.history_path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total lines: 0"))
        .stdout(predicate::str::contains("Most repeated:").not());
}

#[test]
fn test_cli_stats_json() {
    let home = HistoryFileBuilder::new().commands(&["ls", "pwd", "ls"]).build();

    let output = picker_cmd()
        .arg("--history-file")
        .arg(home.history_path())
        .args(["stats", "--json"])
        .output()
        .expect("Failed to run binary");
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("Stats should be valid JSON");
    assert_eq!(report["total_lines"], 3);
    assert_eq!(report["distinct_commands"], 2);
    assert_eq!(report["top_commands"][0][0], "ls");
    assert_eq!(report["top_commands"][0][1], 2);
    assert!(report["history_file"].is_string());
}

#[test]
fn test_cli_missing_history_file_fails() {
    let home = HistoryFileBuilder::new().build();

    picker_cmd()
        .arg("--history-file")
        .arg(home.home().join("nope"))
        .args(["query", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open history file"));
}

#[test]
fn test_cli_interactive_empty_history_fails() {
    let home = HistoryFileBuilder::new().raw(b"\n\n").build();

    picker_cmd()
        .arg("--history-file")
        .arg(home.history_path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No history found"))
        .stdout("");
}

#[test]
fn test_cli_help_flag() {
    picker_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interactively search shell history"))
        .stdout(predicate::str::contains("query"))
        .stdout(predicate::str::contains("stats"));
}

#[test]
fn test_cli_version_flag() {
    picker_cmd().arg("--version").assert().success().stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_invalid_command() {
    picker_cmd().arg("invalid-command").assert().failure();
}

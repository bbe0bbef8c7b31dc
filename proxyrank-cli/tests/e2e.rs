//! End-to-end integration tests for proxyrank-cli
//!
//! These tests run the binary through cargo and are gated behind the
//! `integration` feature flag. Run with:
//!
//! ```sh
//! cargo test -p proxyrank-cli --features integration
//! ```

#![cfg(feature = "integration")]

use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::TempDir;

fn proxyrank(args: &[&str], project_dir: &TempDir) -> Command {
    let mut command = Command::new("cargo");
    command
        .args(["run", "-q", "-p", "proxyrank-cli", "--"])
        .args(args)
        .env("PROXYRANK_PROJECT_CONFIG_DIR", project_dir.path())
        .env("XDG_CONFIG_HOME", project_dir.path().join("xdg"));
    command
}

/// Test that proxyrank --help lists the subcommands
#[test]
fn proxyrank_help_works() {
    let dir = TempDir::new().unwrap();
    let output = proxyrank(&["--help"], &dir)
        .output()
        .expect("Failed to run proxyrank --help");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("rank animal welfare proxies"));
    for subcommand in ["run", "parse", "report", "models", "config", "auth"] {
        assert!(stdout.contains(subcommand), "missing {subcommand}");
    }
}

/// Test that config show prints defaults without any config file
#[test]
fn proxyrank_config_show_works_without_config() {
    let dir = TempDir::new().unwrap();
    let output = proxyrank(&["config", "show"], &dir)
        .output()
        .expect("Failed to run proxyrank config show");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[experiment]"));
    assert!(stdout.contains("runs = 100"));
    assert!(stdout.contains("openai/gpt-4o"));
    assert!(stdout.contains("pain sensitivity"));
}

/// Test that a project config overrides the model list
#[test]
fn proxyrank_models_reads_project_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[[models]]\nalias = \"mini\"\nid = \"openai/gpt-4o-mini\"\n",
    )
    .unwrap();

    let output = proxyrank(&["models"], &dir)
        .output()
        .expect("Failed to run proxyrank models");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("openai/gpt-4o-mini"));
    assert!(!stdout.contains("claude-opus"));
}

/// Test that parse reads stdin and reports the resolving strategy
#[test]
fn proxyrank_parse_reads_stdin() {
    let dir = TempDir::new().unwrap();
    let mut child = proxyrank(&["parse", "--json"], &dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to run proxyrank parse");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"FINAL RANKING:\n1. Self-awareness\n2. Pain sensitivity\n3. Emotional complexity\n4. Neuron counts\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["self-awareness"], 1);
    assert_eq!(record["neuron counts"], 4);
}

/// Test that report fails cleanly when no report exists
#[test]
fn proxyrank_report_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");
    let output = proxyrank(&["report", missing.to_str().unwrap()], &dir)
        .output()
        .expect("Failed to run proxyrank report");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load report"));
}

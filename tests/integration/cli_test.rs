//! Integration tests for the heroline binary

use assert_cmd::Command;
use predicates::prelude::*;

use super::helpers::{fixtures_dir, run_heroline, stdout_of, temp_fixture};

#[test]
fn frames_prints_text_sequence() {
    let (_temp_dir, config) = temp_fixture("two_phrases.toml");
    let output = run_heroline(&config, &["frames", "--count", "8"]);

    assert!(output.status.success());
    insta::assert_snapshot!(stdout_of(&output).trim_end(), @r#"
    10ms    typing #0  "A"
    20ms    erasing #0 "AB"
    30ms    erasing #0 "A"
    40ms    typing #1  ""
    50ms    erasing #1 "C"
    60ms    typing #0  ""
    70ms    typing #0  "A"
    80ms    erasing #0 "AB"
    "#);
}

#[test]
fn frames_json_is_machine_readable() {
    let (_temp_dir, config) = temp_fixture("highlight.toml");
    let output = run_heroline(&config, &["frames", "-n", "13", "--json"]);
    assert!(output.status.success());

    let frames: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let frames = frames.as_array().unwrap();
    assert_eq!(frames.len(), 13);
    assert_eq!(frames[0]["at_ms"], 100);
    assert_eq!(frames[0]["text"], "H");
    assert_eq!(frames[0]["highlight"], serde_json::Value::Null);
    assert_eq!(frames[0]["phase"]["phase"], "typing");
    assert_eq!(frames[0]["phase"]["phrase"], 0);
    assert_eq!(frames[12]["highlight"]["start"], 12);
    assert_eq!(frames[12]["highlight"]["end"], 13);
}

#[test]
fn play_without_terminal_prints_one_cycle() {
    let (_temp_dir, config) = temp_fixture("two_phrases.toml");
    let output = run_heroline(&config, &["play", "--plain", "--cycles", "1"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "\nA\nAB\nA\n\nC\n\n");
}

#[test]
fn play_rejects_unknown_theme() {
    let (_temp_dir, config) = temp_fixture("two_phrases.toml");
    Command::new(env!("CARGO_BIN_EXE_heroline"))
        .env("HEROLINE_CONFIG", &config)
        .args(["play", "--plain", "--theme", "neon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown theme 'neon'"));
}

#[test]
fn bad_highlight_fails_with_message() {
    Command::new(env!("CARGO_BIN_EXE_heroline"))
        .env("HEROLINE_CONFIG", fixtures_dir().join("bad_highlight.toml"))
        .args(["frames"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid banner phrases"))
        .stderr(predicate::str::contains("\"Maxine\""));
}

#[test]
fn invalid_toml_fails_with_path() {
    Command::new(env!("CARGO_BIN_EXE_heroline"))
        .env("HEROLINE_CONFIG", fixtures_dir().join("invalid.toml"))
        .args(["frames"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid.toml"));
}

#[test]
fn config_flag_overrides_environment() {
    let (_temp_dir, config) = temp_fixture("highlight.toml");
    let output = run_heroline(
        &fixtures_dir().join("invalid.toml"),
        &["--config", config.to_str().unwrap(), "config", "path"],
    );

    assert!(output.status.success());
    assert_eq!(stdout_of(&output).trim_end(), config.display().to_string());
}

#[test]
fn completions_mention_subcommands() {
    Command::new(env!("CARGO_BIN_EXE_heroline"))
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("heroline"))
        .stdout(predicate::str::contains("frames"));
}

#[test]
fn version_includes_package_version() {
    Command::new(env!("CARGO_BIN_EXE_heroline"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "heroline {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn verbose_logs_go_to_stderr() {
    let (_temp_dir, config) = temp_fixture("two_phrases.toml");
    let output = run_heroline(&config, &["-vv", "frames", "--count", "1"]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("animator started"), "stderr: {}", stderr);
    assert_eq!(stdout_of(&output).lines().count(), 1);
}

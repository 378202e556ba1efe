//! Integration tests for config loading and the config subcommands

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::{run_heroline, stdout_of, temp_fixture};
use heroline::Config;

#[test]
fn fixture_overrides_only_what_it_sets() {
    let (_temp_dir, path) = temp_fixture("two_phrases.toml");
    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.banner.title, "Test Banner");
    assert_eq!(config.banner.phrases.len(), 2);
    assert_eq!(config.timing.hold_ms, 0);
    assert_eq!(config.theme.name, "crimson");
    assert_eq!(config.faq.owner, "Aditya");
}

#[test]
fn init_writes_defaults_and_refuses_to_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sub").join("config.toml");

    let output = run_heroline(&path, &["config", "init"]);
    assert!(output.status.success());
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());

    Command::new(env!("CARGO_BIN_EXE_heroline"))
        .env("HEROLINE_CONFIG", &path)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    let output = run_heroline(&path, &["config", "init", "--force"]);
    assert!(output.status.success());
}

#[test]
fn show_prints_effective_toml() {
    let (_temp_dir, path) = temp_fixture("highlight.toml");
    let output = run_heroline(&path, &["config", "show"]);
    assert!(output.status.success());

    let shown: Config = toml::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(shown, Config::load_from(&path).unwrap());
    assert_eq!(shown.faq.owner, "Max");
}

#[test]
fn show_without_file_prints_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.toml");
    let output = run_heroline(&path, &["config", "show"]);

    assert!(output.status.success());
    let shown: Config = toml::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(shown, Config::default());
    assert!(!path.exists());
}

#[test]
fn path_honours_environment() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.toml");
    let output = run_heroline(&path, &["config", "path"]);

    assert_eq!(stdout_of(&output).trim_end(), path.display().to_string());
}

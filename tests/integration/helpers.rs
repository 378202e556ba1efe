//! Shared helpers for integration tests

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use heroline::animator::{Phrase, Scheduler, SimulatedController, Timings};
use tempfile::TempDir;

/// Directory holding the test fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Copy a fixture into a fresh temp dir and return both.
///
/// Keep the `TempDir` alive for as long as the path is used.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dest = temp_dir.path().join(name);
    std::fs::copy(fixtures_dir().join(name), &dest).expect("Failed to copy fixture");
    (temp_dir, dest)
}

/// Run the heroline binary with colors off and the given config file.
pub fn run_heroline(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_heroline"))
        .args(args)
        .env("NO_COLOR", "1")
        .env("HEROLINE_CONFIG", config)
        .env_remove("HEROLINE_LOG")
        .output()
        .expect("Failed to run heroline")
}

/// Stdout of a run as a string.
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Simulated controller over plain phrases, already started.
pub fn started(texts: &[&str], timings: Timings) -> SimulatedController {
    let phrases = texts.iter().map(|t| Phrase::new(*t)).collect();
    let mut controller = SimulatedController::simulated(phrases, timings).expect("valid phrases");
    controller.start().expect("start");
    controller
}

/// Step `controller` `n` times, asserting at most one live timer after each
/// step, and return the displayed text after every step.
pub fn step_texts(controller: &mut SimulatedController, n: usize) -> Vec<String> {
    (0..n)
        .map(|_| {
            controller.step().expect("timer scheduled");
            assert!(controller.scheduler().live_timers() <= 1);
            controller.displayed_text().to_string()
        })
        .collect()
}

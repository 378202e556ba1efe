//! Configuration file handling.
//!
//! The config lives at `<config_dir>/heroline/config.toml`. Every field has
//! a default, so a missing file, or a file that only sets a few keys, is
//! valid. `HEROLINE_CONFIG` (or `--config`) points at a different file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animator::{AnimatorError, Phrase, Timings};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "HEROLINE_CONFIG";

/// Errors from loading or saving the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub banner: BannerConfig,
    pub timing: TimingConfig,
    pub theme: ThemeConfig,
    pub faq: FaqConfig,
}

/// Banner content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    /// Line shown above the animated phrase
    pub title: String,
    /// Line shown below the animated phrase
    pub tagline: String,
    pub phrases: Vec<PhraseConfig>,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            title: "Senior Software Engineer".to_string(),
            tagline: "Proficient in machine learning, predictive maintenance, and embedded systems"
                .to_string(),
            phrases: vec![
                PhraseConfig {
                    text: "Hallo, Ich bin Aditya".to_string(),
                    highlight: Some(HighlightSpec::Text("Aditya".to_string())),
                    type_interval_ms: Some(80),
                },
                PhraseConfig::plain("I like playing 🏸"),
                PhraseConfig::plain("I_like_to_code.py"),
                PhraseConfig::plain("And I am addicted to ☕"),
            ],
        }
    }
}

/// One phrase of the cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseConfig {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<HighlightSpec>,
    /// Typing cadence for this phrase only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_interval_ms: Option<u64>,
}

impl PhraseConfig {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlight: None,
            type_interval_ms: None,
        }
    }

    /// Resolve into an animator phrase, validating the highlight.
    pub fn to_phrase(&self) -> Result<Phrase, AnimatorError> {
        let mut phrase = Phrase::new(self.text.clone());
        if let Some(ms) = self.type_interval_ms {
            phrase = phrase.with_type_interval(Duration::from_millis(ms));
        }
        match &self.highlight {
            None => Ok(phrase),
            Some(HighlightSpec::Text(needle)) => phrase.with_highlight_text(needle),
            Some(HighlightSpec::Range { start, end }) => phrase.with_highlight(*start..*end),
        }
    }
}

/// Highlight as a substring (`highlight = "Max"`) or an explicit grapheme
/// range (`highlight = { start = 12, end = 15 }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HighlightSpec {
    Text(String),
    Range { start: usize, end: usize },
}

/// Animation cadence in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub type_interval_ms: u64,
    pub erase_interval_ms: u64,
    pub hold_ms: u64,
    pub caret_blink_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            type_interval_ms: 100,
            erase_interval_ms: 50,
            hold_ms: 1500,
            caret_blink_ms: 530,
        }
    }
}

impl TimingConfig {
    pub fn timings(&self) -> Timings {
        Timings::from_millis(self.type_interval_ms, self.erase_interval_ms, self.hold_ms)
    }

    pub fn caret_blink(&self) -> Duration {
        Duration::from_millis(self.caret_blink_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// One of `crimson`, `classic`, `ocean`
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "crimson".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqConfig {
    /// Name the FAQ answers talk about
    pub owner: String,
}

impl Default for FaqConfig {
    fn default() -> Self {
        Self {
            owner: "Aditya".to_string(),
        }
    }
}

impl Config {
    /// Default config file path, honouring `HEROLINE_CONFIG`.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|dir| dir.join("heroline").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// `explicit` if given, otherwise [`config_path`](Self::config_path).
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::config_path(),
        }
    }

    /// Load from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, self.to_toml()?).map_err(write_err)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The configured phrases as animator phrases.
    pub fn phrases(&self) -> Result<Vec<Phrase>, AnimatorError> {
        self.banner.phrases.iter().map(PhraseConfig::to_phrase).collect()
    }

    pub fn timings(&self) -> Timings {
        self.timing.timings()
    }
}

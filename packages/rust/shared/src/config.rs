//! Application configuration for similarscan.
//!
//! User config lives at `~/.similarscan/similarscan.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanError};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "similarscan.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".similarscan";

// ---------------------------------------------------------------------------
// Config structs (matching similarscan.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Global defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default maximum number of page fetches per scan.
    #[serde(default = "default_max_calls")]
    pub max_calls: u32,

    /// Default maximum number of accepted games per scan.
    #[serde(default = "default_max_games")]
    pub max_games: u32,

    /// Default category allow-list for the report.
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Default result file for `--output` without a filename.
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            max_calls: default_max_calls(),
            max_games: default_max_games(),
            categories: default_categories(),
            output_file: default_output_file(),
        }
    }
}

fn default_max_calls() -> u32 {
    50
}
fn default_max_games() -> u32 {
    200
}
fn default_categories() -> Vec<String> {
    ["released", "topselling", "newreleases", "freegames"]
        .map(String::from)
        .to_vec()
}
fn default_output_file() -> String {
    "out.txt".into()
}

// ---------------------------------------------------------------------------
// Scan config (runtime, merged from config + CLI flags)
// ---------------------------------------------------------------------------

/// Frontier pop order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalMode {
    /// Pop the oldest-enqueued entry (breadth-first).
    #[default]
    Fifo,
    /// Pop a uniformly-chosen entry; relative order of the rest is kept.
    Random,
}

/// Runtime scan configuration — merged from config file + CLI flags.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Maximum number of page fetches (consumed on failures too).
    pub max_calls: u32,
    /// Maximum number of games accepted into the report.
    pub max_games: u32,
    /// Categories whose items are accepted. Filters reporting, not traversal.
    pub categories: Vec<String>,
    /// Frontier pop order.
    pub mode: TraversalMode,
    /// Keep enqueuing the in-flight page's candidates after the game
    /// budget fills. Off by default: a full report halts frontier growth
    /// while already-queued nodes are still drained.
    pub enqueue_after_full: bool,
}

impl From<&AppConfig> for ScanConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            max_calls: config.defaults.max_calls,
            max_games: config.defaults.max_games,
            categories: config.defaults.categories.clone(),
            mode: TraversalMode::Fifo,
            enqueue_after_full: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.similarscan/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| ScanError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.similarscan/similarscan.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| ScanError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| ScanError::config(format!("failed to parse {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("max_calls"));
        assert!(toml_str.contains("topselling"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.defaults.max_calls, 50);
        assert_eq!(parsed.defaults.max_games, 200);
        assert_eq!(parsed.defaults.output_file, "out.txt");
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
[defaults]
max_calls = 5
categories = ["released"]
output_file = "scan-results.txt"
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.defaults.max_calls, 5);
        assert_eq!(config.defaults.max_games, 200);
        assert_eq!(config.defaults.categories, vec!["released"]);
        assert_eq!(config.defaults.output_file, "scan-results.txt");
    }

    #[test]
    fn scan_config_from_app_config() {
        let app = AppConfig::default();
        let scan = ScanConfig::from(&app);
        assert_eq!(scan.max_calls, 50);
        assert_eq!(scan.max_games, 200);
        assert_eq!(scan.mode, TraversalMode::Fifo);
        assert!(!scan.enqueue_after_full);
        assert_eq!(scan.categories.len(), 4);
    }
}

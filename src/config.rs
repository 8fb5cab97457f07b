//! Settings file load/save (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Output format of the demo binary
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Thamizh settings
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ThamizhConfig {
    /// Separator placed between syllables
    #[serde(default = "default_syllable_separator")]
    pub syllable_separator: String,
    #[serde(default)]
    pub output: OutputFormat,
    /// Print the per-code-point annotations before the letters
    #[serde(default)]
    pub show_annotations: bool,
}

fn default_syllable_separator() -> String {
    "-".to_string()
}

impl Default for ThamizhConfig {
    fn default() -> Self {
        Self {
            syllable_separator: default_syllable_separator(),
            output: OutputFormat::default(),
            show_annotations: false,
        }
    }
}

/// Settings file path: $XDG_CONFIG_HOME/thamizh/config.json or ~/.config/thamizh/config.json
pub fn config_path() -> PathBuf {
    let absolute_dir = |var: &str| {
        std::env::var(var)
            .ok()
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
    };
    let base = absolute_dir("XDG_CONFIG_HOME")
        .or_else(|| absolute_dir("HOME").map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    base.join("thamizh").join("config.json")
}

/// Load settings from `path` (defaults if the file is missing or unparsable)
pub fn load_config_from(path: &Path) -> ThamizhConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("ignoring invalid settings file {}: {}", path.display(), e);
            ThamizhConfig::default()
        }),
        Err(_) => ThamizhConfig::default(),
    }
}

/// Load settings from the default path
pub fn load_config() -> ThamizhConfig {
    load_config_from(&config_path())
}

/// Save settings to `path`
pub fn save_config_to(config: &ThamizhConfig, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("failed to create settings directory: {}", e))?;
    }
    let json =
        serde_json::to_string_pretty(config).map_err(|e| format!("serialization failed: {}", e))?;
    fs::write(path, json).map_err(|e| format!("failed to write settings file: {}", e))?;
    Ok(())
}

/// Save settings to the default path
pub fn save_config(config: &ThamizhConfig) -> Result<(), String> {
    save_config_to(config, &config_path())
}

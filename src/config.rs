use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::attribution::{SourceFormat, UnattributedPolicy};
use crate::core::IllegalChars;
use crate::render::Colour;

/// Built-in heart mask
pub const HEART_MASK: &str = "heart.png";
/// Built-in giraffe mask
pub const GIRAFFE_MASK: &str = "giraffe.png";

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Input
    pub file_type: SourceFormat,
    pub unattributed_policy: UnattributedPolicy,

    // Words
    pub illegal_chars: IllegalChars,

    // Cloud
    pub mask: PathBuf,
    pub colour: Colour,
    pub max_words: usize,

    // Output
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_type: SourceFormat::WhatsApp,
            unattributed_policy: UnattributedPolicy::Reject,
            illegal_chars: IllegalChars::default(),
            mask: PathBuf::from(HEART_MASK),
            colour: Colour::default(),
            max_words: 2000,
            output_dir: PathBuf::from("wcg_output"),
        }
    }
}

impl Config {
    /// Load config from the user config directory, or fall back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from a specific file, or fall back to defaults
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)?;
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                // Graceful degradation: log warning and use defaults
                tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                // Backup corrupt file for debugging
                let backup_path = config_path.with_extension("json.corrupt");
                let _ = std::fs::rename(config_path, &backup_path);
                Ok(Self::default())
            }
        }
    }

    /// Save config to the user config directory
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_path())
    }

    /// Save config to a specific file
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wordcloud-generator")
        .join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.file_type, SourceFormat::WhatsApp);
        assert_eq!(config.mask, PathBuf::from("heart.png"));
        assert_eq!(config.colour.to_string(), "GnBu");
        assert_eq!(config.illegal_chars.to_string(), ".,!?;:");
        assert_eq!(config.max_words, 2000);
        assert_eq!(config.unattributed_policy, UnattributedPolicy::Reject);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string(&config).expect("Failed to serialize");
        let restored: Config = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(config, restored);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"file_type":"csv","colour":"magma"}"#).expect("parse");
        assert_eq!(config.file_type, SourceFormat::Csv);
        assert_eq!(config.colour, Colour::Colourmap("magma".to_string()));
        assert_eq!(config.max_words, 2000);
    }

    #[test]
    fn test_config_corrupt_json_handling() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not valid json").expect("write");

        let config = Config::load_from(&path).expect("load");
        assert_eq!(config, Config::default());
        assert!(dir.path().join("config.json.corrupt").exists());
    }

    #[test]
    fn test_unknown_colour_rejected_in_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"colour":"rainbow-ish"}"#).expect("write");

        let config = Config::load_from(&path).expect("load");
        assert_eq!(config.colour, Colour::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested/config.json");
        let config = Config {
            file_type: SourceFormat::Csv,
            illegal_chars: IllegalChars::from(".-"),
            ..Config::default()
        };

        config.save_to(&path).expect("save");
        assert_eq!(Config::load_from(&path).expect("load"), config);
    }
}

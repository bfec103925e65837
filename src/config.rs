use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::preferences::{Audience, Tone};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // AI service
    pub backend_url: String,
    pub request_timeout: u64,

    // Writing defaults
    pub default_audience: Audience,
    pub default_tone: Tone,
    pub use_selection_only: bool,

    // Meta
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8000".to_string(),
            request_timeout: 60,
            default_audience: Audience::General,
            default_tone: Tone::Professional,
            use_selection_only: true,
            log_level: "INFO".to_string(),
        }
    }
}

impl Config {
    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let config_path = config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            match serde_json::from_str(&content) {
                Ok(config) => Ok(config),
                Err(e) => {
                    // Graceful degradation: log warning and use defaults
                    tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                    // Backup corrupt file for debugging
                    let backup_path = config_path.with_extension("json.corrupt");
                    let _ = std::fs::rename(&config_path, &backup_path);
                    Ok(Self::default())
                }
            }
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let config_path = config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("draftsmith")
        .join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.backend_url, "http://localhost:8000");
        assert_eq!(config.request_timeout, 60);
        assert_eq!(config.default_audience, Audience::General);
        assert_eq!(config.default_tone, Tone::Professional);
        assert!(config.use_selection_only);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string(&config).expect("Failed to serialize");
        let restored: Config = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(config.backend_url, restored.backend_url);
        assert_eq!(config.default_tone, restored.default_tone);
    }

    #[test]
    fn test_config_corrupt_json_handling() {
        // Config::load uses graceful degradation - this tests the parsing path
        let corrupt_json = "{ not valid json";
        let result: Result<Config, _> = serde_json::from_str(corrupt_json);
        assert!(result.is_err());
    }
}

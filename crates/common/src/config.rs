//! Application configuration and classifier profiles.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Global application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Name of the profile used when none is requested explicitly.
    pub default_profile: String,

    /// Named classifier profiles.
    pub profiles: HashMap<String, ProfileDefaults>,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// The five integer knobs of a scroll classifier profile.
///
/// Bias values are fixed-point scaled by 10: `10` means 1.0x, `15` means
/// 1.5x. `smoothing` must stay in `[1, 5]`; validation happens when the
/// profile is turned into a live classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDefaults {
    /// Minimum smoothed magnitude (|x|+|y|) required to emit a scroll.
    pub threshold: i32,

    /// Vertical axis weight, fixed-point x10.
    pub vertical_bias: i32,

    /// Horizontal axis weight, fixed-point x10.
    pub horizontal_bias: i32,

    /// Number of recent samples averaged before gating.
    pub smoothing: usize,

    /// Reserved for diagonal detection; carried through unused.
    pub diagonal_threshold: i32,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "omniscroll=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let mut profiles = HashMap::new();
        profiles.insert("default".to_string(), ProfileDefaults::default());
        profiles.insert(
            "smooth".to_string(),
            ProfileDefaults {
                smoothing: 5,
                ..ProfileDefaults::default()
            },
        );

        Self {
            default_profile: "default".to_string(),
            profiles,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        Self {
            threshold: 4,
            vertical_bias: 10,
            horizontal_bias: 10,
            smoothing: 1,
            diagonal_threshold: 0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }

    /// Look up a profile by name.
    pub fn profile(&self, name: &str) -> Option<&ProfileDefaults> {
        self.profiles.get(name)
    }
}

/// Standard config file location.
fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("omniscroll").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_default_profile() {
        let config = AppConfig::default();
        assert!(config.profile(&config.default_profile).is_some());
    }

    #[test]
    fn test_profile_roundtrip() {
        let profile = ProfileDefaults {
            threshold: 6,
            vertical_bias: 15,
            horizontal_bias: 10,
            smoothing: 3,
            diagonal_threshold: 0,
        };
        let json = serde_json::to_string(&profile).unwrap();
        let parsed: ProfileDefaults = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, parsed);
    }
}

//! User configuration loaded from `config.toml`.

use crate::error::ConfigError;
use crate::history::DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "zcalc";
const CONFIG_FILE: &str = "config.toml";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub history: HistoryConfig,
    pub display: DisplayConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 360.0,
            height: 640.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of calculations kept.
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show thousands separators in the display (rendering only).
    pub group_digits: bool,
    /// Open with the scientific function rows visible.
    pub scientific: bool,
}

impl Config {
    /// Default location: `$XDG_CONFIG_HOME/zcalc/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load the config.
    ///
    /// An explicit `path` must exist. Without one the default location is
    /// tried and a missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_file(&path),
                _ => {
                    tracing::debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history.capacity == 0 {
            return Err(ConfigError::Invalid {
                key: "history.capacity",
                reason: "must be at least 1".to_string(),
            });
        }

        for (key, value) in [
            ("window.width", self.window.width),
            ("window.height", self.window.height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid {
                    key,
                    reason: format!("must be a positive size, got {}", value),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(data: &str) -> Config {
        toml::from_str(data).unwrap()
    }

    #[test]
    fn test_empty_file_is_default() {
        let config = parse("");
        assert_eq!(config, Config::default());
        assert_eq!(config.history.capacity, 50);
        assert!(!config.display.group_digits);
    }

    #[test]
    fn test_partial_sections() {
        let config = parse(
            r#"
            [history]
            capacity = 10

            [display]
            scientific = true
            "#,
        );
        assert_eq!(config.history.capacity, 10);
        assert!(config.display.scientific);
        assert!(!config.display.group_digits);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_validate_rejects_zero_capacity() {
        let config = parse("[history]\ncapacity = 0\n");
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "history.capacity",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_rejects_bad_window() {
        let config = parse("[window]\nwidth = -1.0\n");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                key: "window.width",
                ..
            })
        ));
    }

    #[test]
    fn test_unknown_type_is_parse_error() {
        assert!(toml::from_str::<Config>("[history]\ncapacity = \"lots\"\n").is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let result = Config::load(Some(Path::new("/nonexistent/zcalc/config.toml")));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::artifacts::{DEFAULT_COLUMNS_FILE, DEFAULT_MODEL_FILE, DEFAULT_SCALER_FILE};

pub const CONFIG_FILE: &str = "churn.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub artifacts: ArtifactConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the training pipeline left its artifacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactConfig {
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_scaler")]
    pub scaler: String,
    #[serde(default = "default_columns")]
    pub columns: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset, e.g. `info` or
    /// `churn_predict=debug`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_model() -> String {
    DEFAULT_MODEL_FILE.to_string()
}

fn default_scaler() -> String {
    DEFAULT_SCALER_FILE.to_string()
}

fn default_columns() -> String {
    DEFAULT_COLUMNS_FILE.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            model: default_model(),
            scaler: default_scaler(),
            columns: default_columns(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Reads `churn.toml` from the working directory, or falls back to
    /// defaults when there is none.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.artifacts.model, "model.json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            r#"
[artifacts]
dir = "models/v3"
model = "churn_model.json"
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.artifacts.dir, PathBuf::from("models/v3"));
        assert_eq!(config.artifacts.model, "churn_model.json");
        assert_eq!(config.artifacts.scaler, "scaler.json");
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[artifacts\ndir = ").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse"), "{err:#}");
    }
}

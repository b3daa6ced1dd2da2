//! Configuration loading utilities

use crate::Config;
use rentdash_common::{RentDashError, Result as RentDashResult};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    Validation(String),
}

impl From<ConfigError> for RentDashError {
    fn from(err: ConfigError) -> Self {
        RentDashError::config(err.to_string())
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: Config = serde_yaml::from_str(&content)?;

        Self::apply_env_overrides(&mut config);
        config.validate().map_err(ConfigError::Validation)?;

        debug!(path = %path.as_ref().display(), "configuration loaded");
        Ok(config)
    }

    /// Load configuration, resolving the file in this order: explicit path
    /// argument, `RENTDASH_CONFIG_PATH`, `rentdash.yaml` in the working
    /// directory, then built-in defaults.
    pub fn load(explicit_path: Option<&Path>) -> RentDashResult<Config> {
        let config = if let Some(path) = explicit_path {
            Self::load_config(path)?
        } else if let Ok(config_path) = env::var("RENTDASH_CONFIG_PATH") {
            Self::load_config(&config_path)?
        } else if Path::new("rentdash.yaml").exists() {
            Self::load_config("rentdash.yaml")?
        } else {
            let mut config = Config::default();
            Self::apply_env_overrides(&mut config);
            config.validate().map_err(ConfigError::Validation)?;
            config
        };

        Ok(config)
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(config: &mut Config) {
        if let Ok(path) = env::var("RENTDASH_DATA_PATH") {
            config.data.dataset_path = PathBuf::from(path);
        }
        if let Ok(path) = env::var("RENTDASH_SIDEBAR_IMAGE") {
            config.data.sidebar_image = Some(PathBuf::from(path));
        }
        if let Ok(dir) = env::var("RENTDASH_OUTPUT_DIR") {
            config.output.directory = PathBuf::from(dir);
        }
        if let Ok(level) = env::var("RENTDASH_LOG_LEVEL") {
            config.logging.level = level;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "data:\n  dataset_path: /srv/rentals.csv\nchart:\n  width: 800\n  height: 400"
        )
        .unwrap();

        let config = ConfigLoader::load_config(file.path()).unwrap();
        assert_eq!(config.data.dataset_path, PathBuf::from("/srv/rentals.csv"));
        assert_eq!(config.chart.width, 800);
        assert_eq!(config.chart.height, 400);
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "chart:\n  width: 7").unwrap();

        let err = ConfigLoader::load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_config_rejects_malformed_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "chart: [not-a-mapping").unwrap();

        let err = ConfigLoader::load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ConfigLoader::load_config("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}

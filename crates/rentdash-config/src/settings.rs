//! Application configuration structures

use rentdash_common::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Dataset and asset locations
    pub data: DataConfig,

    /// Output settings for rendered charts
    pub output: OutputConfig,

    /// Chart rendering settings
    pub chart: ChartSettings,

    /// Logging configuration
    pub logging: LoggingSettings,
}

/// Dataset and asset configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the rental records CSV file
    pub dataset_path: PathBuf,

    /// Optional decorative sidebar image, copied next to the rendered charts
    pub sidebar_image: Option<PathBuf>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("data/main_data.csv"),
            sidebar_image: None,
        }
    }
}

/// Output configuration for rendered charts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the chart panels are written into
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("dashboard_out"),
        }
    }
}

/// Chart rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Chart width in pixels
    pub width: u32,

    /// Chart height in pixels
    pub height: u32,

    /// Background color (hex format)
    pub background_color: String,

    /// Font family for text rendering
    pub font_family: String,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 600,
            background_color: "#FFFFFF".to_string(),
            font_family: "sans-serif".to_string(),
        }
    }
}

/// Logging configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level filter (e.g., "info", "debug")
    pub level: String,

    /// Optional file path for log output
    pub file: Option<String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LoggingSettings {
    /// Convert into the logging bootstrap configuration
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            file_path: self.file.clone(),
            ..LoggingConfig::default()
        }
    }
}

impl Config {
    /// Validate the configuration values that serde cannot check
    pub fn validate(&self) -> Result<(), String> {
        if self.data.dataset_path.as_os_str().is_empty() {
            return Err("dataset_path cannot be empty".to_string());
        }
        if !(100..=4000).contains(&self.chart.width) {
            return Err(format!(
                "chart width must be between 100 and 4000 pixels, got {}",
                self.chart.width
            ));
        }
        if !(100..=4000).contains(&self.chart.height) {
            return Err(format!(
                "chart height must be between 100 and 4000 pixels, got {}",
                self.chart.height
            ));
        }
        if !is_hex_color(&self.chart.background_color) {
            return Err(format!(
                "background_color must be a hex color like #FFFFFF, got {:?}",
                self.chart.background_color
            ));
        }
        Ok(())
    }
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

//! # rentdash-config
//!
//! Configuration schema and loading for the rentdash dashboard: dataset
//! location, output directory, chart styling, and logging settings, read
//! from a YAML file with environment variable overrides.

pub mod loader;
pub mod settings;

pub use loader::{ConfigError, ConfigLoader};
pub use settings::{ChartSettings, Config, DataConfig, OutputConfig};

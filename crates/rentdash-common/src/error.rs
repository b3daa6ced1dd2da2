//! Error types and utilities for rentdash

use thiserror::Error;

/// Result type alias for rentdash operations
pub type Result<T> = std::result::Result<T, RentDashError>;

/// Main error type for rentdash operations
#[derive(Error, Debug)]
pub enum RentDashError {
    /// Dataset loading errors (missing file, missing column, unparseable value).
    /// Fatal at startup: no dashboard can render without data.
    #[error("Data load error: {message}")]
    DataLoad {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid or out-of-bounds date range selection. Never fatal; the caller
    /// keeps its previous valid selection.
    #[error("Range error: {message}")]
    Range { message: String },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Chart rendering errors
    #[error("Render error: {message}")]
    Render {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RentDashError {
    /// Create a new data load error
    pub fn data_load(msg: impl Into<String>) -> Self {
        Self::DataLoad {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new data load error with source
    pub fn data_load_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::DataLoad {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new range error
    pub fn range(msg: impl Into<String>) -> Self {
        Self::Range {
            message: msg.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new render error
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new render error with source
    pub fn render_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Render {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Error conversion implementations for external types

/// Convert from csv::Error to RentDashError
impl From<csv::Error> for RentDashError {
    fn from(err: csv::Error) -> Self {
        Self::data_load_with_source("CSV parsing failed", err)
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to RentDashError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for RentDashError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::render_with_source("Chart rendering failed", err)
    }
}

//! Common utilities and types for the rentdash dashboard

pub mod error;
pub mod logging;
pub mod utils;

// Re-export commonly used types
pub use error::{RentDashError, Result};
pub use logging::{init_default_logging, init_logging, LoggingConfig};
pub use utils::format_count;

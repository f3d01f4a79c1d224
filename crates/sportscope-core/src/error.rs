//! Error types for sportscope-core.

use thiserror::Error;

/// Errors raised while loading a [`DashboardConfig`](crate::DashboardConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration is not valid JSON for the expected shape.
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A required text field is empty.
    #[error("config field '{0}' must not be empty")]
    Empty(&'static str),

    /// The suggested chart range is inverted or not finite.
    #[error("invalid chart range: min {min} must be below max {max}")]
    InvalidRange { min: f64, max: f64 },
}

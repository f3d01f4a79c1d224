//! Errors raised by the browser runtime.

use sportscope_core::ConfigError;
use thiserror::Error;

/// Failure to retrieve the score sheet.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The request could not be issued or the connection failed.
    #[error("request for '{url}' failed: {reason}")]
    Request { url: String, reason: String },

    /// The server answered with a non-success status.
    #[error("'{url}' returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The response body could not be read as text.
    #[error("could not read body of '{url}': {reason}")]
    Body { url: String, reason: String },
}

/// Errors surfaced to JavaScript by [`App`](crate::App).
#[derive(Debug, Error)]
pub enum AppError {
    /// A required DOM element is missing or has the wrong type.
    #[error("DOM error: {0}")]
    Dom(String),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AppError {
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub(crate) fn missing(id: &str) -> Self {
        Self::Dom(format!("element '{id}' not found"))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<AppError> for wasm_bindgen::JsValue {
    fn from(err: AppError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_status() {
        let err = LoadError::Status {
            url: "./sports.csv".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "'./sports.csv' returned HTTP 404");
    }

    #[test]
    fn test_app_error_wraps_load() {
        let err: AppError = LoadError::Request {
            url: "x.csv".to_string(),
            reason: "offline".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::Load(_)));
        assert_eq!(err.to_string(), "request for 'x.csv' failed: offline");
    }

    #[test]
    fn test_app_error_wraps_config() {
        let config_err = sportscope_core::DashboardConfig::from_json("[").unwrap_err();
        let err = AppError::from(config_err);
        assert!(err.to_string().starts_with("invalid config JSON"));
    }

    #[test]
    fn test_missing_element() {
        assert_eq!(
            AppError::missing("radar-canvas").to_string(),
            "DOM error: element 'radar-canvas' not found"
        );
    }
}

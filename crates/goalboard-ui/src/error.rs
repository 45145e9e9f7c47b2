//! Error types for the browser front end
//!
//! Browser-environment failures. Anything that reaches the goal store is
//! converted into `goalboard_core::Error::Storage`.

use thiserror::Error;

/// Errors raised by browser APIs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UiError {
    /// No `window` global (not running in a browser page)
    #[error("browser window is not available")]
    NoWindow,
    /// `window.localStorage` is missing or disabled
    #[error("local storage is unavailable: {0}")]
    StorageUnavailable(String),
    /// A browser API threw
    #[error("browser rejected the request: {0}")]
    Js(String),
    /// Embedded configuration did not validate
    #[error("configuration error: {0}")]
    Config(#[from] goalboard_core::Error),
}

impl UiError {
    /// Convert into the store's error for the given key.
    #[must_use]
    pub fn into_storage_error(self, key: &str) -> goalboard_core::Error {
        goalboard_core::Error::storage(key, self.to_string())
    }
}

/// Result type alias for browser operations
pub type Result<T> = std::result::Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(UiError::NoWindow.to_string(), "browser window is not available");

        let error = UiError::StorageUnavailable("disabled".to_string());
        assert_eq!(error.to_string(), "local storage is unavailable: disabled");

        let error = UiError::Js("QuotaExceededError".to_string());
        assert_eq!(
            error.to_string(),
            "browser rejected the request: QuotaExceededError"
        );
    }

    #[test]
    fn test_into_storage_error_keeps_key_and_reason() {
        let error = UiError::Js("QuotaExceededError".to_string()).into_storage_error("metas");
        assert_eq!(
            error,
            goalboard_core::Error::storage(
                "metas",
                "browser rejected the request: QuotaExceededError"
            )
        );
    }

    #[test]
    fn test_config_error_from_core() {
        let error = UiError::from(goalboard_core::Error::config("bad"));
        assert!(error.to_string().contains("invalid configuration: bad"));
    }
}

//! Board configuration.
//!
//! Every field has a default, so an empty TOML document is a valid config.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::error::Error;
use crate::notice::NoticeTiming;
use crate::result::Result;

/// Storage key earlier versions of the widget wrote to.
pub const DEFAULT_STORAGE_KEY: &str = "metas";

/// Runtime configuration for the goal board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Key holding the persisted goal array.
    pub storage_key: String,
    /// How long a banner stays fully visible.
    pub notice_visible_ms: u64,
    /// Length of the banner fade-out before removal.
    pub notice_fade_ms: u64,
    /// Maximum tracing level (`trace`, `debug`, `info`, `warn`, `error`).
    pub log_level: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            notice_visible_ms: 3_000,
            notice_fade_ms: 500,
            log_level: "info".to_string(),
        }
    }
}

impl BoardConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    /// Returns `Error::Config` on malformed TOML or a value `validate` rejects.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| Error::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns `Error::Config` if the storage key is blank or the log level
    /// is not a tracing level name.
    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(Error::config("storage_key must not be empty"));
        }
        self.log_level().map(|_| ())
    }

    /// Set the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    #[must_use]
    pub const fn notice_timing(&self) -> NoticeTiming {
        NoticeTiming {
            visible: Duration::from_millis(self.notice_visible_ms),
            fade: Duration::from_millis(self.notice_fade_ms),
        }
    }

    /// # Errors
    /// Returns `Error::Config` for an unknown level name.
    pub fn log_level(&self) -> Result<Level> {
        Level::from_str(self.log_level.trim())
            .map_err(|_| Error::config(format!("unknown log level '{}'", self.log_level)))
    }
}

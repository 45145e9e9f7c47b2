//! Configuration embedded at compile time from `goalboard.toml`

use goalboard_core::BoardConfig;

use crate::error::Result;

/// Raw embedded configuration
pub const EMBEDDED: &str = include_str!("../goalboard.toml");

/// Parse the embedded configuration
///
/// # Errors
/// Returns `UiError::Config` if the embedded file does not validate.
pub fn load() -> Result<BoardConfig> {
    Ok(BoardConfig::from_toml_str(EMBEDDED)?)
}

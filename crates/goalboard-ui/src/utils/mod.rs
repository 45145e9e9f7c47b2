//! Browser helpers: time zone, timers, and the confirmation prompt

use std::time::Duration;

use chrono::{FixedOffset, Offset, Utc};

/// Convert `Date.getTimezoneOffset()` (minutes, positive west of UTC) into
/// a chrono offset. Out-of-range input falls back to UTC.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn offset_from_js_minutes(minutes: f64) -> FixedOffset {
    if !minutes.is_finite() {
        return Utc.fix();
    }
    let seconds = (minutes * 60.0).round() as i32;
    FixedOffset::west_opt(seconds).unwrap_or_else(|| Utc.fix())
}

/// The browser's current UTC offset
#[must_use]
pub fn local_offset() -> FixedOffset {
    offset_from_js_minutes(js_sys::Date::new_0().get_timezone_offset())
}

/// Milliseconds for `gloo_timers`, saturating at `u32::MAX`
#[must_use]
pub fn timeout_millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

/// Blocking yes/no prompt. Anything but an explicit yes counts as no.
#[must_use]
pub fn confirm(prompt: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(prompt).ok())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_west_of_utc() {
        // Brasília: getTimezoneOffset() == 180
        let offset = offset_from_js_minutes(180.0);
        assert_eq!(offset.local_minus_utc(), -3 * 3600);
    }

    #[test]
    fn test_offset_east_of_utc() {
        // India: getTimezoneOffset() == -330
        let offset = offset_from_js_minutes(-330.0);
        assert_eq!(offset.local_minus_utc(), 5 * 3600 + 30 * 60);
    }

    #[test]
    fn test_offset_garbage_falls_back_to_utc() {
        assert_eq!(offset_from_js_minutes(f64::NAN).local_minus_utc(), 0);
        assert_eq!(offset_from_js_minutes(1.0e9).local_minus_utc(), 0);
    }

    #[test]
    fn test_timeout_millis() {
        assert_eq!(timeout_millis(Duration::from_millis(3_000)), 3_000);
        assert_eq!(timeout_millis(Duration::from_secs(u64::MAX)), u32::MAX);
    }
}

//! Transient banner messages.

use std::fmt;
use std::time::Duration;

use crate::error::Error;

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields!";
pub const GOAL_REMOVED: &str = "Goal removed successfully!";
pub const NOTHING_TO_CLEAR: &str = "There are no goals to clear!";
pub const ALL_CLEARED: &str = "All goals were removed!";
pub const GOAL_MISSING: &str = "That goal no longer exists.";
pub const CONFIRM_CLEAR: &str = "Are you sure you want to clear ALL goals?";

/// Banner severity. Doubles as the CSS modifier class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    Error,
    Success,
    Info,
}

impl NoticeKind {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Success => "success",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn new(message: impl Into<String>, kind: NoticeKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Error)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Info)
    }

    /// The banner a failed action shows.
    #[must_use]
    pub fn from_error(error: &Error) -> Self {
        match error {
            Error::Validation { .. } => Self::error(FILL_ALL_FIELDS),
            Error::NotFound { .. } => Self::error(GOAL_MISSING),
            Error::Empty => Self::info(NOTHING_TO_CLEAR),
            other => Self::error(format!("Could not save your goals: {other}")),
        }
    }
}

/// How long a banner lives: fully visible, then fading, then removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeTiming {
    pub visible: Duration,
    pub fade: Duration,
}

impl NoticeTiming {
    /// Total time from display to removal.
    #[must_use]
    pub fn lifetime(&self) -> Duration {
        self.visible.saturating_add(self.fade)
    }
}

impl Default for NoticeTiming {
    fn default() -> Self {
        Self {
            visible: Duration::from_millis(3_000),
            fade: Duration::from_millis(500),
        }
    }
}

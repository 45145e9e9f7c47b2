//! Goal record and input validation.

use std::fmt;

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::result::Result;

/// Display layout for the creation date shown under each goal.
const ADDED_ON_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Unique goal identifier: milliseconds since the Unix epoch at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalId(i64);

impl GoalId {
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Next id for a goal created at `now`.
    ///
    /// Uses the timestamp in milliseconds unless that would not be strictly
    /// greater than `highest`, in which case it bumps past `highest`. Two adds
    /// in the same millisecond, or a clock stepping backwards, still yield
    /// distinct increasing ids.
    #[must_use]
    pub fn next_after(highest: Option<Self>, now: DateTime<Utc>) -> Self {
        let candidate = now.timestamp_millis();
        match highest {
            Some(Self(max)) if max >= candidate => Self(max.saturating_add(1)),
            _ => Self(candidate),
        }
    }
}

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A required goal field, named in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoalField {
    Title,
    Description,
}

impl fmt::Display for GoalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => write!(f, "title"),
            Self::Description => write!(f, "description"),
        }
    }
}

/// Validated, trimmed form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalDraft {
    title: String,
    description: String,
}

impl GoalDraft {
    /// Trim both fields and reject empties. The title is checked first.
    ///
    /// # Errors
    /// Returns `Error::Validation` naming the first empty field.
    pub fn parse(title: &str, description: &str) -> Result<Self> {
        let title = title.trim();
        let description = description.trim();

        if title.is_empty() {
            return Err(Error::validation(GoalField::Title));
        }
        if description.is_empty() {
            return Err(Error::validation(GoalField::Description));
        }

        Ok(Self {
            title: title.to_string(),
            description: description.to_string(),
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A user goal.
///
/// Field names on the wire match what earlier versions of the widget wrote to
/// browser storage, so existing lists keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "data", with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Build a goal from validated input.
    #[must_use]
    pub fn new(id: GoalId, draft: GoalDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            created_at,
        }
    }

    /// Creation time rendered as `dd/mm/yyyy HH:MM` in the given offset.
    #[must_use]
    pub fn added_on(&self, offset: FixedOffset) -> String {
        self.created_at
            .with_timezone(&offset)
            .format(ADDED_ON_FORMAT)
            .to_string()
    }
}

/// RFC 3339 with millisecond precision and a `Z` suffix, the shape
/// `Date.prototype.toISOString()` produces. Any RFC 3339 input is accepted.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;
    use chrono::TimeZone;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).single().expect("valid timestamp")
    }

    #[test]
    fn test_draft_trims_whitespace() {
        let draft = GoalDraft::parse("  Learn Rust ", "\tfinish the book\n").unwrap();
        assert_eq!(draft.title(), "Learn Rust");
        assert_eq!(draft.description(), "finish the book");
    }

    #[test]
    fn test_draft_rejects_blank_title() {
        let err = GoalDraft::parse("   ", "something").unwrap_err();
        assert_eq!(err, Error::validation(GoalField::Title));
    }

    #[test]
    fn test_draft_rejects_blank_description() {
        let err = GoalDraft::parse("something", "").unwrap_err();
        assert_eq!(err, Error::validation(GoalField::Description));
    }

    #[test]
    fn test_draft_reports_title_first_when_both_blank() {
        let err = GoalDraft::parse("", " ").unwrap_err();
        assert_eq!(err, Error::validation(GoalField::Title));
    }

    #[test]
    fn test_next_id_uses_timestamp_when_fresh() {
        let id = GoalId::next_after(None, at(1_700_000_000_000));
        assert_eq!(id.get(), 1_700_000_000_000);

        let id = GoalId::next_after(Some(GoalId::new(5)), at(1_700_000_000_000));
        assert_eq!(id.get(), 1_700_000_000_000);
    }

    #[test]
    fn test_next_id_bumps_on_same_tick() {
        let now = at(1_700_000_000_000);
        let first = GoalId::next_after(None, now);
        let second = GoalId::next_after(Some(first), now);
        assert!(second > first);
        assert_eq!(second.get(), 1_700_000_000_001);
    }

    #[test]
    fn test_next_id_survives_clock_going_backwards() {
        let id = GoalId::next_after(Some(GoalId::new(2_000)), at(1_000));
        assert_eq!(id.get(), 2_001);
    }

    #[test]
    fn test_goal_wire_format_matches_legacy_layout() {
        let draft = GoalDraft::parse("Learn Go", "finish tutorial").unwrap();
        let goal = Goal::new(GoalId::new(1_714_566_600_123), draft, at(1_714_566_600_123));

        let json = serde_json::to_value(&goal).unwrap();
        assert_eq!(json["id"], 1_714_566_600_123_i64);
        assert_eq!(json["titulo"], "Learn Go");
        assert_eq!(json["descricao"], "finish tutorial");
        assert_eq!(json["data"], "2024-05-01T12:30:00.123Z");
    }

    #[test]
    fn test_goal_reads_record_written_by_browser() {
        let raw = r#"{"id":1714566600123,"titulo":"Correr","descricao":"5km","data":"2024-05-01T12:30:00.123Z"}"#;
        let goal: Goal = serde_json::from_str(raw).unwrap();
        assert_eq!(goal.id, GoalId::new(1_714_566_600_123));
        assert_eq!(goal.title, "Correr");
        assert_eq!(goal.description, "5km");
        assert_eq!(goal.created_at, at(1_714_566_600_123));
    }

    #[test]
    fn test_goal_rejects_garbage_date() {
        let raw = r#"{"id":1,"titulo":"a","descricao":"b","data":"yesterday"}"#;
        assert!(serde_json::from_str::<Goal>(raw).is_err());
    }

    #[test]
    fn test_added_on_uses_offset() {
        let draft = GoalDraft::parse("t", "d").unwrap();
        let goal = Goal::new(GoalId::new(1), draft, at(1_714_566_600_123));

        assert_eq!(goal.added_on(FixedOffset::east_opt(0).unwrap()), "01/05/2024 12:30");
        assert_eq!(
            goal.added_on(FixedOffset::west_opt(3 * 3600).unwrap()),
            "01/05/2024 09:30"
        );
    }
}

//! GoalStore: persistence for the newest-first goal list.
//!
//! The whole list lives under one key as a JSON array. Every mutation reads
//! the array, edits it, and writes it back in full.

use crate::clock::{Clock, SystemClock};
use crate::config::DEFAULT_STORAGE_KEY;
use crate::error::Error;
use crate::goal::{Goal, GoalDraft, GoalId};
use crate::result::{Result, ResultExt};
use crate::storage::KeyValueStore;

/// Persistent store for goal records.
#[derive(Debug)]
pub struct GoalStore<S, C = SystemClock> {
    storage: S,
    clock: C,
    key: String,
}

impl<S: KeyValueStore> GoalStore<S> {
    /// Create a store over `storage` using the default key and the wall clock.
    pub fn new(storage: S) -> Self {
        Self::with_clock(storage, SystemClock, DEFAULT_STORAGE_KEY)
    }
}

impl<S: KeyValueStore, C: Clock> GoalStore<S, C> {
    /// Create a store with an explicit clock and storage key.
    pub fn with_clock(storage: S, clock: C, key: impl Into<String>) -> Self {
        Self {
            storage,
            clock,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// All goals, newest first.
    ///
    /// Never fails: an absent, `null`, or unreadable blob and a failing
    /// backend all read as an empty list. Failures are logged.
    pub fn load_all(&self) -> Vec<Goal> {
        self.try_load_all().or_default_logged(Vec::new())
    }

    /// All goals, newest first, surfacing read and parse failures.
    ///
    /// # Errors
    /// Returns `Error::Storage` if the backend read fails and
    /// `Error::CorruptData` if the blob is not a goal array.
    pub fn try_load_all(&self) -> Result<Vec<Goal>> {
        let Some(raw) = self.storage.get(&self.key)? else {
            return Ok(Vec::new());
        };
        let goals = decode(&raw)?;
        tracing::debug!(key = %self.key, count = goals.len(), "Loaded goals");
        Ok(goals)
    }

    /// Look up one goal.
    #[must_use]
    pub fn get(&self, id: GoalId) -> Option<Goal> {
        self.load_all().into_iter().find(|goal| goal.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.load_all().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.load_all().is_empty()
    }

    /// Validate, create, and prepend a goal.
    ///
    /// # Errors
    /// Returns `Error::Validation` for a blank field (nothing is written),
    /// `Error::Storage` if the current list cannot be read or the write fails,
    /// and `Error::Serialization` if the list cannot be encoded.
    pub fn add(&self, title: &str, description: &str) -> Result<Goal> {
        let draft = GoalDraft::parse(title, description)?;
        let mut goals = self.load_for_write()?;

        let now = self.clock.now();
        let highest = goals.iter().map(|goal| goal.id).max();
        let goal = Goal::new(GoalId::next_after(highest, now), draft, now);

        goals.insert(0, goal.clone());
        self.persist(&goals)?;

        tracing::debug!(key = %self.key, id = %goal.id, count = goals.len(), "Added goal");
        Ok(goal)
    }

    /// Remove a goal by id and return it.
    ///
    /// # Errors
    /// Returns `Error::NotFound` if no goal has `id` (nothing is written),
    /// otherwise the read/write errors of `add`.
    pub fn remove(&self, id: GoalId) -> Result<Goal> {
        let mut goals = self.load_for_write()?;
        let position = goals
            .iter()
            .position(|goal| goal.id == id)
            .ok_or(Error::not_found(id))?;
        let removed = goals.remove(position);
        self.persist(&goals)?;

        tracing::debug!(key = %self.key, id = %id, count = goals.len(), "Removed goal");
        Ok(removed)
    }

    /// Delete the persisted list entirely.
    ///
    /// # Errors
    /// Returns `Error::Empty` if there is nothing to clear, or
    /// `Error::Storage` if the backend read or delete fails. An unreadable
    /// blob is deleted.
    pub fn clear(&self) -> Result<()> {
        match self.try_load_all() {
            Ok(goals) if goals.is_empty() => return Err(Error::Empty),
            Ok(_) => {}
            Err(Error::CorruptData { reason }) => {
                tracing::warn!(key = %self.key, %reason, "Deleting unreadable goal list");
            }
            Err(err) => return Err(err),
        }
        self.storage.remove(&self.key)?;
        tracing::debug!(key = %self.key, "Cleared goals");
        Ok(())
    }

    /// Current list for a read-modify-write cycle. A corrupt blob is
    /// replaced; a backend read failure aborts so it cannot wipe data.
    fn load_for_write(&self) -> Result<Vec<Goal>> {
        match self.try_load_all() {
            Err(Error::CorruptData { reason }) => {
                tracing::warn!(key = %self.key, %reason, "Overwriting unreadable goal list");
                Ok(Vec::new())
            }
            other => other,
        }
    }

    fn persist(&self, goals: &[Goal]) -> Result<()> {
        let raw = serde_json::to_string(goals).map_err(|e| Error::serialization(e.to_string()))?;
        self.storage.set(&self.key, &raw)
    }
}

/// Parse a persisted blob. `null` reads as empty, like `JSON.parse(..) || []`.
fn decode(raw: &str) -> Result<Vec<Goal>> {
    serde_json::from_str::<Option<Vec<Goal>>>(raw)
        .map(Option::unwrap_or_default)
        .map_err(|e| Error::corrupt_data(e.to_string()))
}

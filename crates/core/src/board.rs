//! GoalBoard: the visible goal list and the gestures that change it.
//!
//! Holds no DOM. Each gesture mutates the store first, then updates the
//! visible list from what the store returned, then says what to show.

use crate::clock::{Clock, SystemClock};
use crate::error::Error;
use crate::goal::{Goal, GoalId};
use crate::notice::{self, Notice};
use crate::result::{Result, ResultExt};
use crate::storage::KeyValueStore;
use crate::store::GoalStore;

/// Whether a key press in the description field submits the form.
#[must_use]
pub fn is_submit_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}

/// Presenter for the goal list.
#[derive(Debug)]
pub struct GoalBoard<S, C = SystemClock> {
    store: GoalStore<S, C>,
    visible: Vec<Goal>,
}

impl<S: KeyValueStore, C: Clock> GoalBoard<S, C> {
    /// Wrap a store. The visible list starts empty until `load`.
    pub const fn new(store: GoalStore<S, C>) -> Self {
        Self {
            store,
            visible: Vec::new(),
        }
    }

    /// Wrap a store and render what it holds.
    pub fn loaded(store: GoalStore<S, C>) -> Self {
        let mut board = Self::new(store);
        board.load();
        board
    }

    #[must_use]
    pub const fn store(&self) -> &GoalStore<S, C> {
        &self.store
    }

    /// Goals as displayed, top first.
    #[must_use]
    pub fn goals(&self) -> &[Goal] {
        &self.visible
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Rebuild the visible list from storage.
    pub fn load(&mut self) {
        let goals = self.store.load_all();
        self.render_all(goals);
    }

    /// Replace the visible list, keeping the given (newest-first) order.
    pub fn render_all(&mut self, goals: Vec<Goal>) {
        tracing::debug!(count = goals.len(), "Rendering goal list");
        self.visible = goals;
    }

    /// Show one goal at the top.
    pub fn render_one(&mut self, goal: Goal) {
        self.visible.insert(0, goal);
    }

    /// Drop one goal from the visible list.
    ///
    /// # Errors
    /// Returns `Error::NotFound` if no visible goal has `id`.
    pub fn remove_node(&mut self, id: GoalId) -> Result<Goal> {
        let position = self
            .visible
            .iter()
            .position(|goal| goal.id == id)
            .ok_or(Error::not_found(id))?;
        Ok(self.visible.remove(position))
    }

    /// Handle the add gesture.
    ///
    /// On success the new goal is already shown; the caller resets the form.
    ///
    /// # Errors
    /// Returns the notice to show when validation or persistence fails.
    pub fn submit(&mut self, title: &str, description: &str) -> std::result::Result<Goal, Notice> {
        let goal = self
            .store
            .add(title, description)
            .inspect_error(|e| tracing::debug!(error = %e, "Goal rejected"))
            .map_err(|e| Notice::from_error(&e))?;
        self.render_one(goal.clone());
        Ok(goal)
    }

    /// Handle the remove control on a goal.
    pub fn remove(&mut self, id: GoalId) -> Notice {
        match self.store.remove(id) {
            Ok(removed) => {
                if self.remove_node(removed.id).is_err() {
                    tracing::warn!(id = %id, "Removed goal was not on screen");
                }
                Notice::success(notice::GOAL_REMOVED)
            }
            Err(err @ Error::NotFound { .. }) => {
                tracing::warn!(id = %id, "Goal on screen was missing from storage");
                let _ = self.remove_node(id);
                Notice::from_error(&err)
            }
            Err(err) => {
                tracing::error!(id = %id, error = %err, "Failed to remove goal");
                Notice::from_error(&err)
            }
        }
    }

    /// Handle the clear-all control.
    ///
    /// `confirm` is asked only when there is something to clear; declining
    /// returns `None` and changes nothing.
    pub fn clear_all(&mut self, confirm: impl FnOnce(&str) -> bool) -> Option<Notice> {
        if self.visible.is_empty() {
            return Some(Notice::info(notice::NOTHING_TO_CLEAR));
        }
        if !confirm(notice::CONFIRM_CLEAR) {
            return None;
        }

        match self.store.clear() {
            Ok(()) => {}
            Err(Error::Empty) => {
                tracing::warn!(count = self.visible.len(), "Cleared a list storage no longer had");
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to clear goals");
                return Some(Notice::from_error(&err));
            }
        }

        self.visible.clear();
        Some(Notice::success(notice::ALL_CLEARED))
    }
}

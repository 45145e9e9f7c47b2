//! Application state
//!
//! `BoardState` is the single handle components share. It owns the goal
//! board (store plus visible list) and the banner queue as reactive signals,
//! and turns every gesture outcome into a banner.

pub mod notices;

use gloo_timers::callback::Timeout;
use goalboard_core::{BoardConfig, GoalBoard, GoalId, GoalStore, Notice, NoticeTiming, SystemClock};
use leptos::prelude::*;

use crate::storage::BrowserStorage;
use crate::utils::{confirm, timeout_millis};

pub use notices::{ActiveNotice, NoticeQueue};

/// Goal board over the page's local storage
pub type BrowserBoard = GoalBoard<BrowserStorage, SystemClock>;

/// Shared reactive state for the goal board
#[derive(Debug, Clone, Copy)]
pub struct BoardState {
    pub board: RwSignal<BrowserBoard>,
    pub notices: RwSignal<NoticeQueue>,
    timing: NoticeTiming,
}

impl BoardState {
    /// Open the persisted list and render it.
    pub fn open(config: &BoardConfig) -> Self {
        let store = GoalStore::with_clock(BrowserStorage, SystemClock, config.storage_key.clone());
        let board = GoalBoard::loaded(store);
        tracing::info!(
            key = %config.storage_key,
            count = board.goals().len(),
            "Goal board loaded"
        );
        Self {
            board: RwSignal::new(board),
            notices: RwSignal::new(NoticeQueue::new()),
            timing: config.notice_timing(),
        }
    }

    /// Add a goal. Returns `true` when accepted so the form can reset.
    pub fn submit(&self, title: &str, description: &str) -> bool {
        match self.board.try_update(|board| board.submit(title, description)) {
            Some(Ok(goal)) => {
                tracing::info!(id = %goal.id, "Goal added");
                true
            }
            Some(Err(notice)) => {
                self.notify(notice);
                false
            }
            None => false,
        }
    }

    /// Remove one goal.
    pub fn remove(&self, id: GoalId) {
        if let Some(notice) = self.board.try_update(|board| board.remove(id)) {
            self.notify(notice);
        }
    }

    /// Clear every goal after a confirmation prompt.
    pub fn clear_all(&self) {
        if let Some(Some(notice)) = self.board.try_update(|board| board.clear_all(confirm)) {
            self.notify(notice);
        }
    }

    /// Show a banner, fade it after the visible period, then remove it.
    pub fn notify(&self, notice: Notice) {
        let Some(id) = self.notices.try_update(|queue| queue.push(notice)) else {
            return;
        };

        let notices = self.notices;
        let fade_ms = timeout_millis(self.timing.fade);
        Timeout::new(timeout_millis(self.timing.visible), move || {
            let _ = notices.try_update(|queue| queue.fade(id));
            Timeout::new(fade_ms, move || {
                let _ = notices.try_update(|queue| queue.dismiss(id));
            })
            .forget();
        })
        .forget();
    }
}

//! Banners currently on screen

use goalboard_core::Notice;

/// A banner with its lifecycle flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveNotice {
    pub id: u64,
    pub notice: Notice,
    pub fading: bool,
}

/// Visible banners, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeQueue {
    next_id: u64,
    items: Vec<ActiveNotice>,
}

impl NoticeQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a banner on top; returns its handle for the dismissal timers.
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.items.insert(
            0,
            ActiveNotice {
                id,
                notice,
                fading: false,
            },
        );
        id
    }

    /// Start the fade-out transition.
    pub fn fade(&mut self, id: u64) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.fading = true;
        }
    }

    /// Remove the banner. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }

    #[must_use]
    pub fn is_fading(&self, id: u64) -> bool {
        self.items.iter().any(|item| item.id == id && item.fading)
    }

    #[must_use]
    pub fn items(&self) -> &[ActiveNotice] {
        &self.items
    }
}

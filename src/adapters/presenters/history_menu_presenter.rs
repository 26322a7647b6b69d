//! HistoryMenuPresenter - Formats back/forward history for drop-down menus

use crate::domain::entities::HistoryEntry;

/// Icon used for entries whose own icon hasn't arrived yet
pub const DEFAULT_FOLDER_ICON: i32 = 0;

/// Which side of the cursor a menu shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryMenuKind {
    Back,
    Forward,
}

/// View model for a menu item
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryMenuItemViewModel {
    /// Menu command id, starting at 1 for the nearest entry
    pub id: u32,
    pub text: String,
    pub icon_index: i32,
}

/// Presenter for back/forward history menus
pub struct HistoryMenuPresenter {
    kind: HistoryMenuKind,
    items: Vec<HistoryMenuItemViewModel>,
}

impl HistoryMenuPresenter {
    pub fn new(kind: HistoryMenuKind) -> Self {
        Self {
            kind,
            items: Vec::new(),
        }
    }

    /// Present history entries, nearest to the cursor first.
    ///
    /// Pass the controller's `back_history()` or `forward_history()`.
    pub fn present<L>(&mut self, history: &[&HistoryEntry<L>]) {
        self.items = history
            .iter()
            .zip(1u32..)
            .map(|(entry, id)| HistoryMenuItemViewModel {
                id,
                text: entry.display_name().to_string(),
                icon_index: entry.icon_index().unwrap_or(DEFAULT_FOLDER_ICON),
            })
            .collect();
    }

    /// History offset to pass to `go_to_offset` for a chosen item
    pub fn offset_for(&self, id: u32) -> Option<isize> {
        if id == 0 || id as usize > self.items.len() {
            return None;
        }

        let distance = isize::try_from(id).ok()?;
        Some(match self.kind {
            HistoryMenuKind::Back => -distance,
            HistoryMenuKind::Forward => distance,
        })
    }

    pub fn kind(&self) -> HistoryMenuKind {
        self.kind
    }

    /// Get current view models
    pub fn items(&self) -> &[HistoryMenuItemViewModel] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

//! TabHistoryRepository - interface for persisted per-tab history
//!
//! Each tab is saved as its list of entries plus the cursor position, so a
//! restored tab can go back and forward exactly as before.

use serde::{Deserialize, Serialize};

use crate::domain::entities::PreservedHistoryEntry;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::ShellLocation;

/// Saved history of one tab
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreservedTabHistory {
    pub entries: Vec<PreservedHistoryEntry<ShellLocation>>,
    /// `None` when the tab never navigated anywhere
    pub current_index: Option<usize>,
}

impl PreservedTabHistory {
    pub fn new(
        entries: Vec<PreservedHistoryEntry<ShellLocation>>,
        current_index: Option<usize>,
    ) -> Self {
        Self {
            entries,
            current_index,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Repository interface for tab histories
pub trait TabHistoryRepository {
    /// Load every saved tab, in tab order
    fn load(&self) -> Result<Vec<PreservedTabHistory>, DomainError>;

    /// Replace saved tabs with `tabs`
    fn save(&self, tabs: &[PreservedTabHistory]) -> Result<(), DomainError>;
}

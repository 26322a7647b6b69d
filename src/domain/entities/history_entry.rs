//! HistoryEntry entity - one recorded navigation
//!
//! Entries are created when a navigation completes and is recorded, and are
//! owned by the navigation controller that recorded them. The id is assigned
//! once and never changes; it is what asynchronous icon results are matched
//! against.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{BookmarkFolderId, EntryId, Identified, ShellLocation};

/// A navigable point in history
#[derive(Debug, PartialEq, Eq)]
pub struct HistoryEntry<L> {
    id: EntryId,
    location: L,
    display_name: String,
    icon_index: Option<i32>,
}

/// History entry of a filesystem browser tab
pub type ShellHistoryEntry = HistoryEntry<ShellLocation>;

/// History entry of the bookmark manager's folder list
pub type BookmarkHistoryEntry = HistoryEntry<BookmarkFolderId>;

impl<L> HistoryEntry<L> {
    /// Create an entry with a fresh id and no icon
    pub fn new(location: L, display_name: impl Into<String>) -> Self {
        Self {
            id: EntryId::next(),
            location,
            display_name: display_name.into(),
            icon_index: None,
        }
    }

    /// Rebuild an entry from saved state. The restored entry gets a new id.
    pub fn from_preserved(preserved: PreservedHistoryEntry<L>) -> Self {
        Self {
            id: EntryId::next(),
            location: preserved.location,
            display_name: preserved.display_name,
            icon_index: preserved.icon_index,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// System icon index, once it has been fetched
    pub fn icon_index(&self) -> Option<i32> {
        self.icon_index
    }

    pub fn set_icon_index(&mut self, icon_index: i32) {
        self.icon_index = Some(icon_index);
    }
}

impl<L> Identified for HistoryEntry<L> {
    fn id(&self) -> EntryId {
        self.id
    }
}

/// Saved form of a history entry (no identity)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreservedHistoryEntry<L> {
    pub location: L,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_index: Option<i32>,
}

impl<L> PreservedHistoryEntry<L> {
    pub fn new(location: L, display_name: impl Into<String>) -> Self {
        Self {
            location,
            display_name: display_name.into(),
            icon_index: None,
        }
    }
}

impl<L: Clone> From<&HistoryEntry<L>> for PreservedHistoryEntry<L> {
    fn from(entry: &HistoryEntry<L>) -> Self {
        Self {
            location: entry.location.clone(),
            display_name: entry.display_name.clone(),
            icon_index: entry.icon_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry() {
        let entry = ShellHistoryEntry::new(ShellLocation::new("/tmp"), "tmp");
        assert_eq!(entry.location(), &ShellLocation::new("/tmp"));
        assert_eq!(entry.display_name(), "tmp");
        assert_eq!(entry.icon_index(), None);
    }

    #[test]
    fn test_entries_get_distinct_ids() {
        let a = ShellHistoryEntry::new(ShellLocation::new("/a"), "a");
        let b = ShellHistoryEntry::new(ShellLocation::new("/a"), "a");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_set_icon_index_keeps_id() {
        let mut entry = BookmarkHistoryEntry::new(BookmarkFolderId::new("toolbar"), "Toolbar");
        let id = entry.id();
        entry.set_icon_index(4);
        assert_eq!(entry.icon_index(), Some(4));
        assert_eq!(entry.id(), id);
    }

    #[test]
    fn test_preserve_and_restore() {
        let mut entry = ShellHistoryEntry::new(ShellLocation::new("/srv"), "srv");
        entry.set_icon_index(2);

        let preserved = PreservedHistoryEntry::from(&entry);
        let restored = ShellHistoryEntry::from_preserved(preserved.clone());

        assert_eq!(restored.location(), entry.location());
        assert_eq!(restored.display_name(), "srv");
        assert_eq!(restored.icon_index(), Some(2));
        assert_ne!(restored.id(), entry.id());
    }
}

//! BookmarkPort - interface to the bookmark tree and the folder list view
//!
//! The bookmark manager navigates between bookmark folders the same way a tab
//! navigates between filesystem folders, but a folder can disappear (deleted
//! by the user) while it is still referenced from history.

use crate::domain::value_objects::{BookmarkFolderId, EntryId};

/// A bookmark folder was shown
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookmarkNavigationCompleted {
    pub folder: BookmarkFolderId,
    /// Set when the navigation was a move through existing history
    pub entry_id: Option<EntryId>,
}

pub trait BookmarkNavigator {
    /// Name of the folder, or `None` if it no longer exists
    fn folder_name(&self, folder: &BookmarkFolderId) -> Option<String>;

    /// Show the contents of `folder`
    fn navigate_to_folder(&mut self, folder: &BookmarkFolderId, entry_id: Option<EntryId>);
}

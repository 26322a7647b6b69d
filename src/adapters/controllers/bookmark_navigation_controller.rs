//! BookmarkNavigationController - folder history for the bookmark manager

use log::debug;

use crate::application::ports::{BookmarkNavigationCompleted, BookmarkNavigator};
use crate::domain::entities::{BookmarkHistoryEntry, HistoryEntry};
use crate::domain::services::{BrowseStrategy, Connection, NavigationController, Signal};
use crate::domain::value_objects::BookmarkFolderId;

/// Browse strategy that shows bookmark folders through a [`BookmarkNavigator`]
pub struct BookmarkBrowseStrategy<B> {
    navigator: B,
}

impl<B: BookmarkNavigator> BrowseStrategy<BookmarkHistoryEntry> for BookmarkBrowseStrategy<B> {
    type Output = bool;

    fn browse_folder(&mut self, entry: &BookmarkHistoryEntry, _add_history_entry: bool) -> bool {
        // The folder may have been deleted since the entry was recorded.
        if self.navigator.folder_name(entry.location()).is_none() {
            debug!("Bookmark folder {} no longer exists", entry.location());
            return false;
        }

        self.navigator
            .navigate_to_folder(entry.location(), Some(entry.id()));
        true
    }

    fn failure_value(&self) -> bool {
        false
    }
}

/// Navigation controller for the bookmark manager's folder list
pub struct BookmarkNavigationController<B> {
    controller: NavigationController<BookmarkHistoryEntry, BookmarkBrowseStrategy<B>>,
    navigation_completed: Signal<BookmarkNavigationCompleted>,
}

impl<B: BookmarkNavigator> BookmarkNavigationController<B> {
    pub fn new(navigator: B) -> Self {
        Self {
            controller: NavigationController::new(BookmarkBrowseStrategy { navigator }),
            navigation_completed: Signal::new(),
        }
    }

    /// Show `folder` and record it in history.
    ///
    /// Returns false if the folder doesn't exist.
    pub fn navigate(&mut self, folder: &BookmarkFolderId) -> bool {
        let Some(name) = self.controller.strategy().navigator.folder_name(folder) else {
            debug!("Can't navigate to missing bookmark folder {}", folder);
            return false;
        };

        self.controller
            .strategy_mut()
            .navigator
            .navigate_to_folder(folder, None);
        let event = BookmarkNavigationCompleted {
            folder: folder.clone(),
            entry_id: None,
        };
        self.on_navigation_completed(event, name);
        true
    }

    pub fn go_back(&mut self) -> bool {
        self.go_to_offset(-1)
    }

    pub fn go_forward(&mut self) -> bool {
        self.go_to_offset(1)
    }

    pub fn go_to_offset(&mut self, offset: isize) -> bool {
        if !self.controller.go_to_offset(offset) {
            return false;
        }

        if let Some(entry) = self.controller.current_entry() {
            let event = BookmarkNavigationCompleted {
                folder: entry.location().clone(),
                entry_id: Some(entry.id()),
            };
            self.navigation_completed.emit(&event);
        }
        true
    }

    pub fn num_history_entries(&self) -> usize {
        self.controller.num_history_entries()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.controller.current_index()
    }

    pub fn current_entry(&self) -> Option<&BookmarkHistoryEntry> {
        self.controller.current_entry()
    }

    pub fn entry(&self, offset: isize) -> Option<&BookmarkHistoryEntry> {
        self.controller.entry(offset)
    }

    pub fn can_go_back(&self) -> bool {
        self.controller.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.controller.can_go_forward()
    }

    pub fn back_history(&self) -> Vec<&BookmarkHistoryEntry> {
        self.controller.back_history()
    }

    pub fn forward_history(&self) -> Vec<&BookmarkHistoryEntry> {
        self.controller.forward_history()
    }

    pub fn add_navigation_completed_observer(
        &mut self,
        observer: impl FnMut(&BookmarkNavigationCompleted) + 'static,
    ) -> Connection {
        self.navigation_completed.connect(observer)
    }

    pub fn remove_navigation_completed_observer(&mut self, connection: Connection) -> bool {
        self.navigation_completed.disconnect(connection)
    }

    pub fn navigator(&self) -> &B {
        &self.controller.strategy().navigator
    }

    pub fn navigator_mut(&mut self) -> &mut B {
        &mut self.controller.strategy_mut().navigator
    }

    fn on_navigation_completed(&mut self, event: BookmarkNavigationCompleted, name: String) {
        self.controller
            .add_entry(HistoryEntry::new(event.folder.clone(), name));
        self.navigation_completed.emit(&event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::EntryId;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Default)]
    struct BookmarkTreeFake {
        folders: HashMap<BookmarkFolderId, String>,
        shown: Vec<(BookmarkFolderId, Option<EntryId>)>,
    }

    impl BookmarkTreeFake {
        fn with_folders(names: &[&str]) -> Self {
            Self {
                folders: names
                    .iter()
                    .map(|name| (BookmarkFolderId::new(*name), name.to_uppercase()))
                    .collect(),
                shown: Vec::new(),
            }
        }
    }

    impl BookmarkNavigator for BookmarkTreeFake {
        fn folder_name(&self, folder: &BookmarkFolderId) -> Option<String> {
            self.folders.get(folder).cloned()
        }

        fn navigate_to_folder(&mut self, folder: &BookmarkFolderId, entry_id: Option<EntryId>) {
            self.shown.push((folder.clone(), entry_id));
        }
    }

    fn folder(id: &str) -> BookmarkFolderId {
        BookmarkFolderId::new(id)
    }

    fn controller() -> BookmarkNavigationController<BookmarkTreeFake> {
        BookmarkNavigationController::new(BookmarkTreeFake::with_folders(&["toolbar", "menu", "other"]))
    }

    #[test]
    fn test_navigate_records_entries() {
        let mut controller = controller();
        assert!(controller.navigate(&folder("toolbar")));
        assert!(controller.navigate(&folder("menu")));

        assert_eq!(controller.num_history_entries(), 2);
        assert_eq!(controller.current_index(), Some(1));
        assert_eq!(controller.current_entry().unwrap().display_name(), "MENU");
        assert_eq!(controller.navigator().shown, vec![(folder("toolbar"), None), (folder("menu"), None)]);
    }

    #[test]
    fn test_navigate_to_missing_folder_fails() {
        let mut controller = controller();
        assert!(!controller.navigate(&folder("gone")));
        assert_eq!(controller.num_history_entries(), 0);
        assert!(controller.navigator().shown.is_empty());
    }

    #[test]
    fn test_back_forward_passes_entry_id() {
        let mut controller = controller();
        controller.navigate(&folder("toolbar"));
        controller.navigate(&folder("menu"));
        let first_id = controller.entry(-1).unwrap().id();

        assert!(controller.go_back());
        assert_eq!(controller.navigator().shown.last(), Some(&(folder("toolbar"), Some(first_id))));
        assert_eq!(controller.num_history_entries(), 2);

        assert!(controller.go_forward());
        assert!(!controller.go_forward());
        assert_eq!(controller.current_index(), Some(1));
    }

    #[test]
    fn test_history_to_deleted_folder_fails() {
        let mut controller = controller();
        controller.navigate(&folder("toolbar"));
        controller.navigate(&folder("other"));
        controller.navigator_mut().folders.remove(&folder("toolbar"));

        assert!(!controller.go_back());
        // The cursor still moved.
        assert_eq!(controller.current_index(), Some(0));
        assert!(controller.can_go_forward());
    }

    #[test]
    fn test_navigate_truncates_forward_history() {
        let mut controller = controller();
        controller.navigate(&folder("toolbar"));
        controller.navigate(&folder("menu"));
        controller.go_back();
        controller.navigate(&folder("other"));

        let back: Vec<_> = controller
            .back_history()
            .iter()
            .map(|e| e.location().clone())
            .collect();
        assert_eq!(back, vec![folder("toolbar")]);
        assert!(controller.forward_history().is_empty());
        assert_eq!(controller.num_history_entries(), 2);
    }

    #[test]
    fn test_navigation_completed_observer() {
        let mut controller = controller();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        controller.add_navigation_completed_observer(move |event| sink.borrow_mut().push(event.clone()));

        controller.navigate(&folder("toolbar"));
        controller.navigate(&folder("menu"));
        controller.go_back();

        let events = events.borrow();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].entry_id, None);
        assert_eq!(events[2].folder, folder("toolbar"));
        assert!(events[2].entry_id.is_some());
    }
}

//! ShellNavigationController - history and navigation for one browser tab
//!
//! Wraps the generic [`NavigationController`] with a filesystem browse
//! strategy, and handles what happens once a navigation completes: a new
//! [`ShellHistoryEntry`] is recorded and its icon is requested in the
//! background. Icon results are applied through [`EntryTicket`]s, so a result
//! for an entry that was dropped by later navigation is ignored.

use log::debug;

use crate::application::ports::{
    BrowseOutcome, BrowseResult, DisplayNameResolver, IconFetcher, IconResult,
    NavigationCompleted, Navigator, TabNavigation,
};
use crate::domain::entities::{HistoryEntry, PreservedHistoryEntry, ShellHistoryEntry};
use crate::domain::errors::NavigationError;
use crate::domain::repositories::PreservedTabHistory;
use crate::domain::services::{BrowseStrategy, Connection, NavigationController, Signal};
use crate::domain::value_objects::{EntryTicket, ShellLocation};

/// Where navigations take place
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavigationMode {
    /// Navigate within the tab
    #[default]
    Normal,
    /// Open every navigation after the first in a new tab
    ForceNewTab,
}

/// Browse strategy that hands locations to a navigator or a new tab
pub struct ShellBrowseStrategy<N, T> {
    navigator: N,
    tab_navigation: T,
    mode: NavigationMode,
}

impl<N, T> ShellBrowseStrategy<N, T>
where
    N: Navigator,
    T: TabNavigation,
{
    fn browse_location(
        &mut self,
        location: &ShellLocation,
        add_history_entry: bool,
        has_current_entry: bool,
    ) -> BrowseResult {
        // The first navigation always happens in place, whatever the mode.
        if self.mode == NavigationMode::ForceNewTab && has_current_entry {
            self.tab_navigation.create_new_tab(location, true)?;
            return Ok(BrowseOutcome::OpenedInNewTab);
        }

        self.navigator.browse_folder(location, add_history_entry)
    }
}

impl<N, T> BrowseStrategy<ShellHistoryEntry> for ShellBrowseStrategy<N, T>
where
    N: Navigator,
    T: TabNavigation,
{
    type Output = BrowseResult;

    fn browse_folder(&mut self, entry: &ShellHistoryEntry, add_history_entry: bool) -> BrowseResult {
        self.browse_location(entry.location(), add_history_entry, true)
    }

    fn failure_value(&self) -> BrowseResult {
        Err(NavigationError::NoHistoryEntry)
    }
}

/// Navigation controller for a filesystem browser tab
pub struct ShellNavigationController<N, T, I, R> {
    controller: NavigationController<ShellHistoryEntry, ShellBrowseStrategy<N, T>>,
    icon_fetcher: I,
    names: R,
    navigation_completed: Signal<NavigationCompleted>,
    fetch_icons: bool,
}

impl<N, T, I, R> ShellNavigationController<N, T, I, R>
where
    N: Navigator,
    T: TabNavigation,
    I: IconFetcher,
    R: DisplayNameResolver,
{
    pub fn new(navigator: N, tab_navigation: T, icon_fetcher: I, names: R) -> Self {
        Self::from_controller(
            NavigationController::new(Self::strategy(navigator, tab_navigation)),
            icon_fetcher,
            names,
        )
    }

    /// Controller for a tab restored from saved history
    pub fn with_preserved(
        navigator: N,
        tab_navigation: T,
        icon_fetcher: I,
        names: R,
        preserved: PreservedTabHistory,
    ) -> Self {
        let entries: Vec<ShellHistoryEntry> = preserved
            .entries
            .into_iter()
            .map(HistoryEntry::from_preserved)
            .collect();
        let current_index = preserved.current_index.unwrap_or(0);

        Self::from_controller(
            NavigationController::with_entries(
                Self::strategy(navigator, tab_navigation),
                entries,
                current_index,
            ),
            icon_fetcher,
            names,
        )
    }

    fn strategy(navigator: N, tab_navigation: T) -> ShellBrowseStrategy<N, T> {
        ShellBrowseStrategy {
            navigator,
            tab_navigation,
            mode: NavigationMode::Normal,
        }
    }

    fn from_controller(
        controller: NavigationController<ShellHistoryEntry, ShellBrowseStrategy<N, T>>,
        icon_fetcher: I,
        names: R,
    ) -> Self {
        Self {
            controller,
            icon_fetcher,
            names,
            navigation_completed: Signal::new(),
            fetch_icons: true,
        }
    }

    pub fn num_history_entries(&self) -> usize {
        self.controller.num_history_entries()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.controller.current_index()
    }

    pub fn current_entry(&self) -> Option<&ShellHistoryEntry> {
        self.controller.current_entry()
    }

    pub fn entry(&self, offset: isize) -> Option<&ShellHistoryEntry> {
        self.controller.entry(offset)
    }

    pub fn entry_at_index(&self, index: usize) -> Option<&ShellHistoryEntry> {
        self.controller.entry_at_index(index)
    }

    pub fn can_go_back(&self) -> bool {
        self.controller.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.controller.can_go_forward()
    }

    pub fn back_history(&self) -> Vec<&ShellHistoryEntry> {
        self.controller.back_history()
    }

    pub fn forward_history(&self) -> Vec<&ShellHistoryEntry> {
        self.controller.forward_history()
    }

    /// False with no current entry or at a namespace root
    pub fn can_go_up(&self) -> bool {
        self.current_entry()
            .is_some_and(|entry| !entry.location().is_namespace_root())
    }

    pub fn go_back(&mut self) -> BrowseResult {
        self.go_to_offset(-1)
    }

    pub fn go_forward(&mut self) -> BrowseResult {
        self.go_to_offset(1)
    }

    pub fn go_to_offset(&mut self, offset: isize) -> BrowseResult {
        let result = self.controller.go_to_offset(offset);
        self.handle_result(result)
    }

    /// Browse to the parent of the current location
    pub fn go_up(&mut self) -> BrowseResult {
        let current = self
            .current_entry()
            .ok_or(NavigationError::NoCurrentEntry)?
            .location()
            .clone();
        let parent = current.parent().ok_or(NavigationError::NamespaceRoot)?;

        self.browse_folder(&parent, true)
    }

    /// Reload the current location without recording history
    pub fn refresh(&mut self) -> BrowseResult {
        let current = self
            .current_entry()
            .ok_or(NavigationError::NoCurrentEntry)?
            .location()
            .clone();

        let result = self
            .controller
            .strategy_mut()
            .navigator
            .browse_folder(&current, false);
        self.handle_result(result)
    }

    pub fn browse_folder(&mut self, location: &ShellLocation, add_history_entry: bool) -> BrowseResult {
        let has_current_entry = self.current_entry().is_some();
        let result = self.controller.strategy_mut().browse_location(
            location,
            add_history_entry,
            has_current_entry,
        );
        self.handle_result(result)
    }

    /// Browse to a path typed by the user
    pub fn browse_path(&mut self, path: &str, add_history_entry: bool) -> BrowseResult {
        let location =
            ShellLocation::parse(path).ok_or_else(|| NavigationError::InvalidPath(path.to_string()))?;
        self.browse_folder(&location, add_history_entry)
    }

    /// Record a finished navigation.
    ///
    /// Called internally for navigators that complete synchronously; hosts
    /// with asynchronous navigators call it when completion is reported.
    pub fn on_navigation_completed(&mut self, event: NavigationCompleted) {
        debug!(
            "Navigation to {} completed (add history entry: {})",
            event.location, event.add_history_entry
        );

        if event.add_history_entry {
            let display_name = self.names.display_name(&event.location);
            let entry = HistoryEntry::new(event.location.clone(), display_name);
            let id = entry.id();
            let ticket = EntryTicket::new(self.controller.add_entry(entry), id);

            if self.fetch_icons {
                self.icon_fetcher.queue_icon_task(&event.location, ticket);
            }
        }

        self.navigation_completed.emit(&event);
    }

    /// Apply a finished icon lookup. Returns false if the entry has gone.
    pub fn apply_icon_result(&mut self, result: IconResult) -> bool {
        let applied = self
            .controller
            .update_entry(&result.ticket, |entry| entry.set_icon_index(result.icon_index));

        if !applied {
            debug!("Dropping stale icon result for entry {}", result.ticket.id());
        }
        applied
    }

    pub fn navigation_mode(&self) -> NavigationMode {
        self.controller.strategy().mode
    }

    pub fn set_navigation_mode(&mut self, mode: NavigationMode) {
        self.controller.strategy_mut().mode = mode;
    }

    /// Turn background icon lookups for new entries on or off
    pub fn set_icon_fetching(&mut self, enabled: bool) {
        self.fetch_icons = enabled;
    }

    /// Stop queuing icon lookups and drop any that haven't started.
    ///
    /// Lookups already running still finish; their results are stale-checked
    /// like any other.
    pub fn shutdown(&mut self) {
        self.fetch_icons = false;
        self.icon_fetcher.clear_queue();
    }

    pub fn add_navigation_completed_observer(
        &mut self,
        observer: impl FnMut(&NavigationCompleted) + 'static,
    ) -> Connection {
        self.navigation_completed.connect(observer)
    }

    pub fn remove_navigation_completed_observer(&mut self, connection: Connection) -> bool {
        self.navigation_completed.disconnect(connection)
    }

    /// Snapshot of the history for saving
    pub fn preserve(&self) -> PreservedTabHistory {
        PreservedTabHistory::new(
            self.controller
                .entries()
                .iter()
                .map(PreservedHistoryEntry::from)
                .collect(),
            self.controller.current_index(),
        )
    }

    pub fn navigator(&self) -> &N {
        &self.controller.strategy().navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.controller.strategy_mut().navigator
    }

    pub fn tab_navigation(&self) -> &T {
        &self.controller.strategy().tab_navigation
    }

    fn handle_result(&mut self, result: BrowseResult) -> BrowseResult {
        if let Ok(BrowseOutcome::Completed(event)) = &result {
            self.on_navigation_completed(event.clone());
        }
        result
    }
}

//! NavigationController - ordered history with a cursor
//!
//! The controller owns the list of entries and the current position. It knows
//! how to move back and forward and how to record a new navigation, but not how
//! to actually display a location; that is delegated to a [`BrowseStrategy`]
//! supplied by the concrete controller (filesystem tab, bookmark list, ...).
//!
//! Two behaviors worth knowing:
//! - Recording an entry discards everything after the cursor first.
//! - `go_to_offset` moves the cursor *before* asking the strategy to browse, so
//!   a failed browse still leaves the cursor on the new entry.

use log::debug;

use crate::domain::value_objects::{EntryTicket, Identified};

/// The part of navigation that differs per backend
pub trait BrowseStrategy<E> {
    /// What a navigation attempt reports (`bool`, a `Result`, ...)
    type Output;

    /// Display the location stored in `entry`
    fn browse_folder(&mut self, entry: &E, add_history_entry: bool) -> Self::Output;

    /// Returned when navigation can't even be attempted
    fn failure_value(&self) -> Self::Output;
}

/// History list plus cursor, parameterized over entry type and browse strategy
#[derive(Debug)]
pub struct NavigationController<E, S> {
    entries: Vec<E>,
    current_index: Option<usize>,
    strategy: S,
}

impl<E, S> NavigationController<E, S> {
    /// Empty history; no navigation has happened yet
    pub fn new(strategy: S) -> Self {
        Self {
            entries: Vec::new(),
            current_index: None,
            strategy,
        }
    }

    /// History restored from saved entries.
    ///
    /// An index past the end is clamped to the last entry. With no entries the
    /// index is ignored and the controller starts empty.
    pub fn with_entries(strategy: S, entries: Vec<E>, current_index: usize) -> Self {
        let current_index = match entries.len() {
            0 => None,
            len => Some(current_index.min(len - 1)),
        };

        Self {
            entries,
            current_index,
            strategy,
        }
    }

    pub fn num_history_entries(&self) -> usize {
        self.entries.len()
    }

    /// `None` until the first entry is recorded
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn current_entry(&self) -> Option<&E> {
        self.current_index.and_then(|index| self.entries.get(index))
    }

    /// Entry `offset` steps away from the cursor. Does not move the cursor.
    pub fn entry(&self, offset: isize) -> Option<&E> {
        self.offset_index(offset).map(|index| &self.entries[index])
    }

    pub fn entry_at_index(&self, index: usize) -> Option<&E> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    /// True if there is something behind the cursor
    pub fn can_go_back(&self) -> bool {
        matches!(self.current_index, Some(index) if index > 0)
    }

    /// True if there is something after the cursor
    pub fn can_go_forward(&self) -> bool {
        matches!(self.current_index, Some(index) if index + 1 < self.entries.len())
    }

    /// Entries behind the cursor, nearest first
    pub fn back_history(&self) -> Vec<&E> {
        match self.current_index {
            Some(index) => self.entries[..index].iter().rev().collect(),
            None => Vec::new(),
        }
    }

    /// Entries after the cursor, nearest first
    pub fn forward_history(&self) -> Vec<&E> {
        match self.current_index {
            Some(index) => self.entries[index + 1..].iter().collect(),
            None => Vec::new(),
        }
    }

    /// Record a new navigation.
    ///
    /// Forward history is dropped, the entry is appended and becomes current.
    /// Returns the new current index.
    pub fn add_entry(&mut self, entry: E) -> usize {
        let keep = self.current_index.map_or(0, |index| index + 1);
        let discarded = self.entries.len().saturating_sub(keep);
        if discarded > 0 {
            debug!("Discarding {} forward history entries", discarded);
        }

        self.entries.truncate(keep);
        self.entries.push(entry);

        let index = self.entries.len() - 1;
        self.current_index = Some(index);
        index
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn strategy_mut(&mut self) -> &mut S {
        &mut self.strategy
    }

    /// Ticket for the entry at `index`, for results that will arrive later
    pub fn ticket_at(&self, index: usize) -> Option<EntryTicket>
    where
        E: Identified,
    {
        self.entries
            .get(index)
            .map(|entry| EntryTicket::new(index, entry.id()))
    }

    /// Update the ticketed entry if it is still where it was.
    ///
    /// Returns false (and leaves everything untouched) for a stale ticket.
    pub fn update_entry(&mut self, ticket: &EntryTicket, update: impl FnOnce(&mut E)) -> bool
    where
        E: Identified,
    {
        ticket.apply(&mut self.entries, update)
    }

    fn offset_index(&self, offset: isize) -> Option<usize> {
        let current = self.current_index?;
        current
            .checked_add_signed(offset)
            .filter(|index| *index < self.entries.len())
    }
}

impl<E, S: BrowseStrategy<E>> NavigationController<E, S> {
    pub fn go_back(&mut self) -> S::Output {
        self.go_to_offset(-1)
    }

    pub fn go_forward(&mut self) -> S::Output {
        self.go_to_offset(1)
    }

    /// Move the cursor by `offset` and browse to the entry there.
    ///
    /// Out of range offsets return the strategy's failure value and change
    /// nothing. Otherwise the cursor moves first, then the strategy browses.
    pub fn go_to_offset(&mut self, offset: isize) -> S::Output {
        let Some(index) = self.offset_index(offset) else {
            debug!("Ignoring history offset {} (out of range)", offset);
            return self.strategy.failure_value();
        };

        self.current_index = Some(index);
        let entry = &self.entries[index];
        self.strategy.browse_folder(entry, false)
    }
}

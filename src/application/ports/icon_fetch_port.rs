//! IconFetchPort - interface for asynchronous icon lookups
//!
//! A request carries the [`EntryTicket`] of the entry that wants the icon. The
//! result comes back on the UI thread with the same ticket, and whoever applies
//! it must check the ticket against the current history first.

use crate::domain::value_objects::{EntryTicket, ShellLocation};

/// A finished icon lookup
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconResult {
    pub ticket: EntryTicket,
    pub icon_index: i32,
}

/// Port interface for icon retrieval
pub trait IconFetcher {
    /// Queue a lookup for `location`
    fn queue_icon_task(&self, location: &ShellLocation, ticket: EntryTicket);

    /// Drop lookups that haven't started yet
    fn clear_queue(&self);
}

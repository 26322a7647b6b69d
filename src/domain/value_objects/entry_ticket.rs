//! Entry identity and tickets for results that arrive later
//!
//! An [`EntryTicket`] remembers where an entry was and which entry it was at
//! the moment some asynchronous work was queued for it. When the result comes
//! back the ticket is checked against the current list; if the slot is gone
//! or now holds a different entry, the result is discarded.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_ENTRY_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a history entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(u64);

impl EntryId {
    /// Allocate a fresh id. Ids increase monotonically and are never reused.
    pub fn next() -> Self {
        Self(NEXT_ENTRY_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Anything carrying an [`EntryId`]
pub trait Identified {
    fn id(&self) -> EntryId;
}

/// Position plus identity captured when work was queued for an entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EntryTicket {
    index: usize,
    id: EntryId,
}

impl EntryTicket {
    pub fn new(index: usize, id: EntryId) -> Self {
        Self { index, id }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    /// The entry this ticket was issued for, if it still occupies its slot
    pub fn resolve<'a, E: Identified>(&self, entries: &'a [E]) -> Option<&'a E> {
        entries.get(self.index).filter(|entry| entry.id() == self.id)
    }

    pub fn resolve_mut<'a, E: Identified>(&self, entries: &'a mut [E]) -> Option<&'a mut E> {
        entries.get_mut(self.index).filter(|entry| entry.id() == self.id)
    }

    /// Run `update` on the ticketed entry. Returns false when the ticket is stale.
    pub fn apply<E: Identified>(&self, entries: &mut [E], update: impl FnOnce(&mut E)) -> bool {
        match self.resolve_mut(entries) {
            Some(entry) => {
                update(entry);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        id: EntryId,
        value: i32,
    }

    impl Identified for Item {
        fn id(&self) -> EntryId {
            self.id
        }
    }

    fn item() -> Item {
        Item {
            id: EntryId::next(),
            value: 0,
        }
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let a = EntryId::next();
        let b = EntryId::next();
        assert!(b > a);
    }

    #[test]
    fn test_ticket_applies_to_matching_entry() {
        let mut items = vec![item(), item()];
        let ticket = EntryTicket::new(1, items[1].id);

        assert!(ticket.apply(&mut items, |i| i.value = 7));
        assert_eq!(items[1].value, 7);
    }

    #[test]
    fn test_ticket_rejects_replaced_entry() {
        let mut items = vec![item(), item()];
        let ticket = EntryTicket::new(1, items[1].id);

        items[1] = item();
        assert!(!ticket.apply(&mut items, |i| i.value = 7));
        assert_eq!(items[1].value, 0);
    }

    #[test]
    fn test_ticket_rejects_out_of_bounds() {
        let mut items = vec![item(), item()];
        let ticket = EntryTicket::new(1, items[1].id);

        items.truncate(1);
        assert!(ticket.resolve(&items).is_none());
        assert!(!ticket.apply(&mut items, |i| i.value = 7));
    }
}

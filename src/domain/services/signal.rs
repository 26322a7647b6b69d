//! Signal - observer list for change notifications
//!
//! Models and controllers expose events ("locations changed", "navigation
//! completed") through a `Signal`. Observers are plain closures; connecting
//! returns a [`Connection`] that can later be passed back to disconnect.
//! The payload may be unsized, so a model can hand observers a slice of its
//! current state.
//! Everything here runs on the UI thread, so slots don't need to be `Send`.

use std::fmt;

/// Handle identifying a connected observer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Connection(u64);

struct Slot<T: ?Sized> {
    id: u64,
    callback: Box<dyn FnMut(&T)>,
}

/// A list of observers notified in connection order
pub struct Signal<T: ?Sized> {
    slots: Vec<Slot<T>>,
    next_id: u64,
}

impl<T: ?Sized> Signal<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            next_id: 0,
        }
    }

    /// Add an observer after all existing ones
    pub fn connect(&mut self, callback: impl FnMut(&T) + 'static) -> Connection {
        let slot = self.make_slot(callback);
        let connection = Connection(slot.id);
        self.slots.push(slot);
        connection
    }

    /// Remove an observer. Returns false if it was already gone.
    pub fn disconnect(&mut self, connection: Connection) -> bool {
        let before = self.slots.len();
        self.slots.retain(|slot| slot.id != connection.0);
        self.slots.len() != before
    }

    pub fn emit(&mut self, args: &T) {
        for slot in &mut self.slots {
            (slot.callback)(args);
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn make_slot(&mut self, callback: impl FnMut(&T) + 'static) -> Slot<T> {
        let id = self.next_id;
        self.next_id += 1;
        Slot {
            id,
            callback: Box::new(callback),
        }
    }
}

impl<T: ?Sized> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal").field("slots", &self.slots.len()).finish()
    }
}

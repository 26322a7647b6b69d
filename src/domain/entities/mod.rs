//! Domain Entities - Core navigation objects
//!
//! Entities are objects with a distinct identity that persists over time.

pub mod history_entry;
pub mod location_visit_info;

pub use history_entry::{BookmarkHistoryEntry, HistoryEntry, PreservedHistoryEntry, ShellHistoryEntry};
pub use location_visit_info::LocationVisitInfo;

//! Domain Value Objects - Immutable values that describe locations and identity
//!
//! Value objects have no identity of their own and are compared by value.

pub mod bookmark_folder_id;
pub mod entry_ticket;
pub mod shell_location;

pub use bookmark_folder_id::BookmarkFolderId;
pub use entry_ticket::{EntryId, EntryTicket, Identified};
pub use shell_location::ShellLocation;

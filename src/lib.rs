//! explorer-nav - navigation history for a tabbed file manager
//!
//! Back/forward history with a cursor, per-tab history that survives
//! restarts, background icon lookups that can't write into the wrong entry,
//! and a frequency-then-recency ranking of visited folders.
//!
//! The crate follows a layered layout:
//! - [`domain`]: entities, value objects, repository traits and the core
//!   navigation/history services
//! - [`application`]: ports to browsing backends and the history service
//! - [`adapters`]: concrete controllers, JSON gateways and menu presenters
//! - [`infrastructure`]: filesystem backend, icon worker and wiring
//! - [`shared`]: configuration

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod log;
pub mod shared;

//! Application Services - Coordination between navigation and history
//!
//! These services sit between the controllers and the persisted history.

pub mod history_service;

pub use history_service::{HistoryService, DEFAULT_MAX_STORED_LOCATIONS};

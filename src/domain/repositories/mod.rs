//! Domain Repository Interfaces
//!
//! These are trait definitions only - no implementations.
//! Implementations belong in the adapters/gateways layer.

pub mod frequent_locations_repository;
pub mod tab_history_repository;

pub use frequent_locations_repository::FrequentLocationsRepository;
pub use tab_history_repository::{PreservedTabHistory, TabHistoryRepository};

//! Adapters Layer
//!
//! Controllers, gateways and presenters that connect the application layer
//! to concrete backends and storage.

pub mod controllers;
pub mod gateways;
pub mod presenters;

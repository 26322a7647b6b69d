//! Application Layer - Ports and services around the navigation core
//!
//! It contains:
//! - **Ports**: Interfaces for browsing backends, icon lookups, display names
//!   and tab creation
//! - **Services**: The history service that records completed navigations
//!
//! # Clean Architecture Rules
//! - Depends only on the domain layer
//! - Defines ports that infrastructure implements
//! - Contains no platform-specific code

pub mod ports;
pub mod services;

// Re-export commonly used types
pub use ports::*;
pub use services::*;

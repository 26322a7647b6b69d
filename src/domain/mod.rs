//! Domain Layer - Navigation state with no knowledge of any particular backend
//!
//! This layer contains:
//! - **Entities**: History entries and location visit statistics
//! - **Value Objects**: Locations, entry ids and tickets
//! - **Repository Interfaces**: Load/save abstractions for persisted history
//! - **Domain Services**: The navigation controller and frequent-locations model
//! - **Domain Errors**: Error types for domain operations

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use errors::{DomainError, NavigationError};
pub use value_objects::*;

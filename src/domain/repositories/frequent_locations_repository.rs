//! FrequentLocationsRepository - interface for persisted visit statistics
//!
//! The storage format is the implementation's business. Loading must skip
//! records it can't make sense of rather than fail the whole load.

use crate::domain::entities::LocationVisitInfo;
use crate::domain::errors::DomainError;

/// Repository interface for frequent-location visits
pub trait FrequentLocationsRepository {
    /// Load all stored visits (any order)
    fn load(&self) -> Result<Vec<LocationVisitInfo>, DomainError>;

    /// Replace stored visits with `visits`, which arrive ranked best first
    fn save(&self, visits: &[LocationVisitInfo]) -> Result<(), DomainError>;
}

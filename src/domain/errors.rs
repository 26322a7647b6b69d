//! Domain layer error types
//!
//! Errors for persistence and navigation. Expected outcomes such as
//! "nothing to go back to" or "stale icon result" are not represented here;
//! those are plain `Option`/status returns.

use thiserror::Error;

use crate::domain::value_objects::ShellLocation;

/// Errors raised by repositories and other persistence collaborators
#[derive(Error, Debug)]
pub enum DomainError {
    /// Entity not found
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// Invalid entity state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// IO error (wrapped)
    #[error("IO error: {0}")]
    Io(String),

    /// Stored data could not be parsed at all
    #[error("Parse error: {0}")]
    Parse(String),

    /// Data could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            DomainError::Io(err.to_string())
        } else if err.is_syntax() || err.is_eof() {
            DomainError::Parse(err.to_string())
        } else {
            DomainError::Serialization(err.to_string())
        }
    }
}

/// Failure half of a filesystem navigation result
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// There is no entry to navigate relative to
    #[error("No current history entry")]
    NoCurrentEntry,

    /// No entry exists at the requested history position
    #[error("No history entry at that position")]
    NoHistoryEntry,

    /// The location has no parent
    #[error("Already at a namespace root")]
    NamespaceRoot,

    /// The location does not exist
    #[error("Location not found: {0}")]
    NotFound(ShellLocation),

    /// The location exists but can't be browsed into
    #[error("Not a folder: {0}")]
    NotAFolder(ShellLocation),

    /// A path string could not be turned into a location
    #[error("Invalid path: {0:?}")]
    InvalidPath(String),

    /// Backend-specific failure (permission denied and so on)
    #[error("Browse failed: {0}")]
    BrowseFailed(String),
}

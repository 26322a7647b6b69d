//! NavigatorPort - interface to the component that actually shows a folder
//!
//! The navigation core never enumerates folders itself. It asks a navigator to
//! browse and is told when the navigation has completed.

use crate::domain::errors::NavigationError;
use crate::domain::value_objects::ShellLocation;

/// A navigation that has finished and may need recording in history
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationCompleted {
    pub location: ShellLocation,
    /// Whether the navigation asked for a new history entry
    pub add_history_entry: bool,
}

impl NavigationCompleted {
    pub fn new(location: ShellLocation, add_history_entry: bool) -> Self {
        Self {
            location,
            add_history_entry,
        }
    }
}

/// What happened to a browse request
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BrowseOutcome {
    /// The navigation finished before `browse_folder` returned
    Completed(NavigationCompleted),
    /// The navigator will report completion later
    Pending,
    /// The location was opened in a different tab instead
    OpenedInNewTab,
}

/// Result type of filesystem navigation requests
pub type BrowseResult = Result<BrowseOutcome, NavigationError>;

/// Port interface for a browsing backend
pub trait Navigator {
    /// Navigate to `location`
    fn browse_folder(&mut self, location: &ShellLocation, add_history_entry: bool) -> BrowseResult;
}

//! FileSystemNavigator - Browsing backend over the local filesystem
//!
//! Checks that a location is a readable directory and reports the navigation
//! as completed straight away. Listing the directory is left to whoever
//! displays it.

use std::fs;
use std::io::ErrorKind;

use log::{debug, warn};

use crate::application::ports::{
    BrowseOutcome, BrowseResult, DisplayNameResolver, NavigationCompleted, Navigator,
};
use crate::domain::errors::NavigationError;
use crate::domain::value_objects::ShellLocation;
use crate::infrastructure::icon_fetcher::IconSource;

/// Icon for folders (also the menu fallback)
pub const FOLDER_ICON: i32 = 0;
/// Icon for namespace roots such as `/` or `C:\`
pub const DRIVE_ICON: i32 = 1;

/// Synchronous filesystem browsing backend
#[derive(Debug, Default)]
pub struct FileSystemNavigator {
    current: Option<ShellLocation>,
}

impl FileSystemNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Location most recently browsed to
    pub fn current(&self) -> Option<&ShellLocation> {
        self.current.as_ref()
    }

    fn check_folder(location: &ShellLocation) -> Result<(), NavigationError> {
        let metadata = fs::metadata(location.path()).map_err(|e| match e.kind() {
            ErrorKind::NotFound => NavigationError::NotFound(location.clone()),
            _ => NavigationError::BrowseFailed(format!("{}: {}", location, e)),
        })?;

        if !metadata.is_dir() {
            return Err(NavigationError::NotAFolder(location.clone()));
        }

        // Opening the directory catches permission problems metadata misses.
        fs::read_dir(location.path())
            .map(|_| ())
            .map_err(|e| NavigationError::BrowseFailed(format!("{}: {}", location, e)))
    }
}

impl Navigator for FileSystemNavigator {
    fn browse_folder(&mut self, location: &ShellLocation, add_history_entry: bool) -> BrowseResult {
        if let Err(e) = Self::check_folder(location) {
            warn!("Can't browse {}: {}", location, e);
            return Err(e);
        }

        debug!("Browsing {}", location);
        self.current = Some(location.clone());
        Ok(BrowseOutcome::Completed(NavigationCompleted::new(
            location.clone(),
            add_history_entry,
        )))
    }
}

/// Display names taken from the last path component
#[derive(Clone, Copy, Debug, Default)]
pub struct InFolderNameResolver;

impl DisplayNameResolver for InFolderNameResolver {
    fn display_name(&self, location: &ShellLocation) -> String {
        location.in_folder_name()
    }
}

/// Icon lookups based on what kind of location it is
#[derive(Clone, Copy, Debug, Default)]
pub struct FileSystemIconSource;

impl IconSource for FileSystemIconSource {
    fn icon_index(&mut self, location: &ShellLocation) -> Option<i32> {
        if location.is_namespace_root() {
            return Some(DRIVE_ICON);
        }

        fs::metadata(location.path())
            .ok()
            .filter(|metadata| metadata.is_dir())
            .map(|_| FOLDER_ICON)
    }
}

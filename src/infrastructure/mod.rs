//! Infrastructure Layer - Concrete backends and wiring
//!
//! - **filesystem_navigator**: Browsing backend, display names and icons for
//!   local folders
//! - **icon_fetcher**: Single worker thread serving icon lookups
//! - **composition_root**: Builds the shared services and wired controllers

pub mod composition_root;
pub mod filesystem_navigator;
pub mod icon_fetcher;

pub use composition_root::{CompositionRoot, SharedHistoryService, TabController};
pub use filesystem_navigator::{FileSystemIconSource, FileSystemNavigator, InFolderNameResolver};
pub use icon_fetcher::{IconFetcherHandle, IconSource, ThreadedIconFetcher};

//! Application Ports - Interfaces for external dependencies
//!
//! Ports define the interfaces that infrastructure must implement.
//! They keep the navigation core independent of how folders are shown,
//! how icons are found and how tabs are opened.

pub mod bookmark_port;
pub mod display_name_port;
pub mod icon_fetch_port;
pub mod navigator_port;
pub mod tab_navigation_port;

pub use bookmark_port::{BookmarkNavigationCompleted, BookmarkNavigator};
pub use display_name_port::DisplayNameResolver;
pub use icon_fetch_port::{IconFetcher, IconResult};
pub use navigator_port::{BrowseOutcome, BrowseResult, NavigationCompleted, Navigator};
pub use tab_navigation_port::TabNavigation;

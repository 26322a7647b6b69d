//! Controllers - Tie the generic navigation controller to concrete backends

pub mod bookmark_navigation_controller;
pub mod shell_navigation_controller;

pub use bookmark_navigation_controller::{BookmarkBrowseStrategy, BookmarkNavigationController};
pub use shell_navigation_controller::{NavigationMode, ShellBrowseStrategy, ShellNavigationController};

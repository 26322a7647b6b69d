//! Domain Services - Operations over collections of entities
//!
//! The navigation controller and the frequent-locations model hold the real
//! state of this crate; the clock and signal are the small pieces they need.

pub mod clock;
pub mod frequent_locations_model;
pub mod navigation_controller;
pub mod signal;

pub use clock::{Clock, SteppingClock, SystemClock};
pub use frequent_locations_model::FrequentLocationsModel;
pub use navigation_controller::{BrowseStrategy, NavigationController};
pub use signal::{Connection, Signal};

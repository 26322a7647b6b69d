//! TabNavigationPort - opening locations in new tabs

use crate::domain::errors::NavigationError;
use crate::domain::value_objects::ShellLocation;

pub trait TabNavigation {
    /// Open `location` in a new tab, switching to it when `selected` is set
    fn create_new_tab(&mut self, location: &ShellLocation, selected: bool) -> Result<(), NavigationError>;
}

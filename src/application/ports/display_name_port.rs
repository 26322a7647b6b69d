//! DisplayNamePort - turns a location into the text shown for it

use crate::domain::value_objects::ShellLocation;

pub trait DisplayNameResolver {
    fn display_name(&self, location: &ShellLocation) -> String;
}

impl<F> DisplayNameResolver for F
where
    F: Fn(&ShellLocation) -> String,
{
    fn display_name(&self, location: &ShellLocation) -> String {
        self(location)
    }
}

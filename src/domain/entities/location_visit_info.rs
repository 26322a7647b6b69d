//! LocationVisitInfo entity - how often and how recently a location was visited

use chrono::{DateTime, Utc};

use crate::domain::value_objects::ShellLocation;

/// Visit statistics for a single location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationVisitInfo {
    location: ShellLocation,
    num_visits: u32,
    last_visit_time: DateTime<Utc>,
}

impl LocationVisitInfo {
    pub fn new(location: ShellLocation, num_visits: u32, last_visit_time: DateTime<Utc>) -> Self {
        Self {
            location,
            num_visits,
            last_visit_time,
        }
    }

    /// Statistics for a location seen for the first time
    pub fn first_visit(location: ShellLocation, time: DateTime<Utc>) -> Self {
        Self::new(location, 1, time)
    }

    pub fn location(&self) -> &ShellLocation {
        &self.location
    }

    pub fn num_visits(&self) -> u32 {
        self.num_visits
    }

    pub fn last_visit_time(&self) -> DateTime<Utc> {
        self.last_visit_time
    }

    /// Count one more visit at `time`
    pub(crate) fn record_visit(&mut self, time: DateTime<Utc>) {
        self.num_visits = self.num_visits.saturating_add(1);
        self.last_visit_time = time;
    }
}

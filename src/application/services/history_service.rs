//! HistoryService - feeds completed navigations into the frequent-locations model
//!
//! One service is shared by every tab. It is created explicitly and handed to
//! whoever needs it (see `CompositionRoot`), rather than living in a global.

use std::cell::RefCell;
use std::rc::Rc;

use log::{error, info};

use crate::application::ports::NavigationCompleted;
use crate::domain::errors::DomainError;
use crate::domain::repositories::FrequentLocationsRepository;
use crate::domain::services::{Clock, FrequentLocationsModel};

/// How many ranked locations are written out by default
pub const DEFAULT_MAX_STORED_LOCATIONS: usize = 20;

/// Frequent-locations model plus its storage
pub struct HistoryService<R>
where
    R: FrequentLocationsRepository,
{
    model: FrequentLocationsModel,
    repository: R,
    max_stored_locations: usize,
}

impl<R> HistoryService<R>
where
    R: FrequentLocationsRepository,
{
    pub fn new(repository: R, clock: Box<dyn Clock>) -> Self {
        Self {
            model: FrequentLocationsModel::new(clock),
            repository,
            max_stored_locations: DEFAULT_MAX_STORED_LOCATIONS,
        }
    }

    /// Limit how many of the top-ranked locations `save` writes
    pub fn with_max_stored_locations(mut self, max: usize) -> Self {
        self.max_stored_locations = max;
        self
    }

    /// Replace the model contents with what the repository has.
    ///
    /// Returns the number of locations loaded.
    pub fn load(&mut self) -> Result<usize, DomainError> {
        let visits = self.repository.load()?;
        let count = visits.len();
        self.model.set_location_visits(visits);
        info!("Loaded {} frequent locations", self.model.len());
        Ok(count)
    }

    /// Write the top-ranked locations to the repository
    pub fn save(&self) -> Result<(), DomainError> {
        let top: Vec<_> = self
            .model
            .visits()
            .take(self.max_stored_locations)
            .cloned()
            .collect();

        self.repository.save(&top).map_err(|e| {
            error!("Failed to save frequent locations: {}", e);
            e
        })?;

        info!("Saved {} frequent locations", top.len());
        Ok(())
    }

    /// Count a visit for a completed navigation
    pub fn on_navigation_completed(&mut self, event: &NavigationCompleted) {
        self.model.register_location_visit(&event.location);
    }

    pub fn frequent_locations(&self) -> &FrequentLocationsModel {
        &self.model
    }

    pub fn frequent_locations_mut(&mut self) -> &mut FrequentLocationsModel {
        &mut self.model
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

impl<R> HistoryService<R>
where
    R: FrequentLocationsRepository + 'static,
{
    /// Observer to connect to a controller's navigation-completed signal.
    ///
    /// Holds only a weak reference, so a controller outliving the service just
    /// stops recording.
    pub fn navigation_observer(service: &Rc<RefCell<Self>>) -> impl FnMut(&NavigationCompleted) + 'static {
        let service = Rc::downgrade(service);
        move |event| {
            if let Some(service) = service.upgrade() {
                service.borrow_mut().on_navigation_completed(event);
            }
        }
    }
}

//! CompositionRoot - Dependency Injection Container
//!
//! Builds the services shared by every tab (configuration, frequent-locations
//! history, icon fetcher, tab history storage) and hands out shell
//! controllers already wired to them. Nothing here is global; the host owns
//! the root and passes it where it's needed.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use log::{info, warn};

use crate::adapters::controllers::{NavigationMode, ShellNavigationController};
use crate::adapters::gateways::{JsonFrequentLocationsGateway, JsonTabHistoryGateway};
use crate::application::ports::TabNavigation;
use crate::application::services::HistoryService;
use crate::domain::entities::LocationVisitInfo;
use crate::domain::errors::DomainError;
use crate::domain::repositories::{PreservedTabHistory, TabHistoryRepository};
use crate::domain::services::{Connection, SystemClock};
use crate::infrastructure::filesystem_navigator::{
    FileSystemIconSource, FileSystemNavigator, InFolderNameResolver,
};
use crate::infrastructure::icon_fetcher::{IconFetcherHandle, ThreadedIconFetcher};
use crate::shared::config::Config;

/// Shell controller as wired by the composition root
pub type TabController<T> =
    ShellNavigationController<FileSystemNavigator, T, IconFetcherHandle, InFolderNameResolver>;

pub type SharedHistoryService = Rc<RefCell<HistoryService<JsonFrequentLocationsGateway>>>;

/// Application composition root - owns the shared services
pub struct CompositionRoot {
    pub config: Config,
    pub history_service: SharedHistoryService,
    pub tab_history: JsonTabHistoryGateway,
    pub icon_fetcher: ThreadedIconFetcher,
}

impl CompositionRoot {
    /// Load the user's configuration, install the logger it describes and
    /// build the root from it
    pub fn start() -> io::Result<Self> {
        let config = Config::load();
        if let Err(e) = crate::log::init_from_config(&config.logging) {
            eprintln!("Logging disabled: {}", e);
        }
        info!("Starting with config {:?}", Config::find_config_path());
        Self::new(config)
    }

    /// Create the shared services and load saved frequent locations
    pub fn new(config: Config) -> io::Result<Self> {
        let icon_fetcher = ThreadedIconFetcher::new(FileSystemIconSource)?;
        Ok(Self::with_icon_fetcher(config, icon_fetcher))
    }

    /// Like `new`, with a hook the icon worker calls after posting a result
    pub fn with_wake(config: Config, wake: impl Fn() + Send + 'static) -> io::Result<Self> {
        let icon_fetcher = ThreadedIconFetcher::with_wake(FileSystemIconSource, wake)?;
        Ok(Self::with_icon_fetcher(config, icon_fetcher))
    }

    fn with_icon_fetcher(config: Config, icon_fetcher: ThreadedIconFetcher) -> Self {
        let gateway = JsonFrequentLocationsGateway::new(config.frequent_locations_path());
        let mut history_service = HistoryService::new(gateway, Box::new(SystemClock))
            .with_max_stored_locations(config.history.max_stored_frequent_locations);

        // A bad history file shouldn't stop the browser from starting.
        if let Err(e) = history_service.load() {
            warn!("Starting with no frequent locations: {}", e);
        }

        let tab_history = JsonTabHistoryGateway::new(config.tab_history_path());

        Self {
            config,
            history_service: Rc::new(RefCell::new(history_service)),
            tab_history,
            icon_fetcher,
        }
    }

    /// A controller for a new, empty tab
    pub fn new_tab_controller<T: TabNavigation>(&self, tab_navigation: T) -> TabController<T> {
        let controller = ShellNavigationController::new(
            FileSystemNavigator::new(),
            tab_navigation,
            self.icon_fetcher.handle(),
            InFolderNameResolver,
        );
        self.wire(controller)
    }

    /// A controller for a tab restored from saved history
    pub fn restore_tab_controller<T: TabNavigation>(
        &self,
        preserved: PreservedTabHistory,
        tab_navigation: T,
    ) -> TabController<T> {
        let controller = ShellNavigationController::with_preserved(
            FileSystemNavigator::new(),
            tab_navigation,
            self.icon_fetcher.handle(),
            InFolderNameResolver,
            preserved,
        );
        self.wire(controller)
    }

    /// Saved tab histories, or none if they can't be read
    pub fn load_tab_histories(&self) -> Vec<PreservedTabHistory> {
        match self.tab_history.load() {
            Ok(tabs) => {
                info!("Loaded history for {} tabs", tabs.len());
                tabs
            }
            Err(e) => {
                warn!("Ignoring saved tab history: {}", e);
                Vec::new()
            }
        }
    }

    /// Apply finished icon lookups to whichever controller owns each one.
    ///
    /// Returns the number applied; stale results are dropped.
    pub fn pump_icon_results<T: TabNavigation>(&self, controllers: &mut [TabController<T>]) -> usize {
        self.icon_fetcher
            .process_results()
            .into_iter()
            .filter(|result| {
                controllers
                    .iter_mut()
                    .any(|controller| controller.apply_icon_result(*result))
            })
            .count()
    }

    /// Observer called with the ranked frequent locations whenever they change
    pub fn add_locations_changed_observer(
        &self,
        observer: impl FnMut(&[LocationVisitInfo]) + 'static,
    ) -> Connection {
        self.history_service
            .borrow_mut()
            .frequent_locations_mut()
            .add_locations_changed_observer(observer)
    }

    /// Save frequent locations and the given tab histories
    pub fn save_all(&self, tabs: &[PreservedTabHistory]) -> Result<(), DomainError> {
        self.history_service.borrow().save()?;
        self.tab_history.save(tabs)?;
        info!("Saved history for {} tabs", tabs.len());
        Ok(())
    }

    fn wire<T: TabNavigation>(&self, mut controller: TabController<T>) -> TabController<T> {
        if self.config.navigation.force_new_tab {
            controller.set_navigation_mode(NavigationMode::ForceNewTab);
        }
        controller.set_icon_fetching(self.config.icons.enabled);
        controller.add_navigation_completed_observer(HistoryService::navigation_observer(
            &self.history_service,
        ));
        controller
    }
}

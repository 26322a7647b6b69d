//! FrequentLocationsModel - ranked set of visited locations
//!
//! Each location has exactly one [`LocationVisitInfo`]. Two indexes are kept in
//! step on every mutation:
//! - a ranked index ordered by visit count (descending), then last visit time
//!   (most recent first), then insertion order
//! - an identity index from location to its current rank key
//!
//! The ranked index is what menus read; the identity index makes repeat
//! visits cheap to find and re-key.
//!
//! Observers of "locations changed" receive the ranked visits directly. The
//! model is usually shared behind a `RefCell` that is mutably borrowed while
//! it notifies, so observers must not reach back into it.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use log::{debug, warn};

use crate::domain::entities::LocationVisitInfo;
use crate::domain::services::clock::Clock;
use crate::domain::services::signal::{Connection, Signal};
use crate::domain::value_objects::ShellLocation;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct RankKey {
    num_visits: u32,
    last_visit_time: DateTime<Utc>,
    sequence: u64,
}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .num_visits
            .cmp(&self.num_visits)
            .then_with(|| other.last_visit_time.cmp(&self.last_visit_time))
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Frequency-then-recency ranking of visited locations
pub struct FrequentLocationsModel {
    clock: Box<dyn Clock>,
    ranked: BTreeMap<RankKey, LocationVisitInfo>,
    by_location: HashMap<ShellLocation, RankKey>,
    next_sequence: u64,
    locations_changed: Signal<[LocationVisitInfo]>,
}

impl FrequentLocationsModel {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self {
            clock,
            ranked: BTreeMap::new(),
            by_location: HashMap::new(),
            next_sequence: 0,
            locations_changed: Signal::new(),
        }
    }

    /// Count a visit to `location` at the current time
    pub fn register_location_visit(&mut self, location: &ShellLocation) {
        let now = self.clock.now();

        let existing = self
            .by_location
            .get(location)
            .copied()
            .and_then(|key| self.ranked.remove(&key).map(|info| (key, info)));

        match existing {
            Some((old_key, mut info)) => {
                info.record_visit(now);
                debug!("Visit {} to {}", info.num_visits(), location);
                let key = RankKey {
                    num_visits: info.num_visits(),
                    last_visit_time: now,
                    sequence: old_key.sequence,
                };
                self.by_location.insert(location.clone(), key);
                self.ranked.insert(key, info);
            }
            None => {
                debug!("First visit to {}", location);
                self.insert(LocationVisitInfo::first_visit(location.clone(), now));
            }
        }

        self.notify_locations_changed();
    }

    /// Ranked visits, most visited first, ties broken by most recent visit
    pub fn visits(
        &self,
    ) -> impl ExactSizeIterator<Item = &LocationVisitInfo> + DoubleEndedIterator + '_ {
        self.ranked.values()
    }

    /// Replace everything, e.g. with visits loaded from storage.
    ///
    /// Later duplicates of a location are ignored. Observers are notified once.
    pub fn set_location_visits(&mut self, visits: Vec<LocationVisitInfo>) {
        self.ranked.clear();
        self.by_location.clear();
        self.next_sequence = 0;

        for info in visits {
            if self.by_location.contains_key(info.location()) {
                warn!("Ignoring duplicate frequent location {}", info.location());
                continue;
            }
            self.insert(info);
        }

        self.notify_locations_changed();
    }

    pub fn get(&self, location: &ShellLocation) -> Option<&LocationVisitInfo> {
        self.by_location
            .get(location)
            .and_then(|key| self.ranked.get(key))
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Observer called with the ranked visits after every change
    pub fn add_locations_changed_observer(
        &mut self,
        observer: impl FnMut(&[LocationVisitInfo]) + 'static,
    ) -> Connection {
        self.locations_changed.connect(observer)
    }

    pub fn remove_locations_changed_observer(&mut self, connection: Connection) -> bool {
        self.locations_changed.disconnect(connection)
    }

    fn notify_locations_changed(&mut self) {
        if self.locations_changed.is_empty() {
            return;
        }
        let ranked: Vec<LocationVisitInfo> = self.ranked.values().cloned().collect();
        self.locations_changed.emit(ranked.as_slice());
    }

    fn insert(&mut self, info: LocationVisitInfo) {
        let key = RankKey {
            num_visits: info.num_visits(),
            last_visit_time: info.last_visit_time(),
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.by_location.insert(info.location().clone(), key);
        self.ranked.insert(key, info);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::clock::SteppingClock;
    use chrono::TimeZone;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn model() -> FrequentLocationsModel {
        FrequentLocationsModel::new(Box::new(SteppingClock::from_epoch()))
    }

    fn location(path: &str) -> ShellLocation {
        ShellLocation::new(path)
    }

    fn at(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(seconds, 0).unwrap()
    }

    fn visit(path: &str, num_visits: u32, seconds: i64) -> LocationVisitInfo {
        LocationVisitInfo::new(location(path), num_visits, at(seconds))
    }

    fn snapshot(model: &FrequentLocationsModel) -> Vec<LocationVisitInfo> {
        model.visits().cloned().collect()
    }

    #[test]
    fn test_different_locations() {
        let mut model = model();
        model.register_location_visit(&location("/fake1"));
        model.register_location_visit(&location("/fake2"));
        model.register_location_visit(&location("/fake3"));

        // Same visit count, so the most recent visit comes first.
        assert_eq!(
            snapshot(&model),
            vec![visit("/fake3", 1, 2), visit("/fake2", 1, 1), visit("/fake1", 1, 0)]
        );
    }

    #[test]
    fn test_repeated_visits() {
        let mut model = model();
        let fake1 = location("/fake1");
        model.register_location_visit(&fake1);
        model.register_location_visit(&fake1);
        model.register_location_visit(&fake1);
        model.register_location_visit(&location("/fake2"));

        assert_eq!(
            snapshot(&model),
            vec![visit("/fake1", 3, 2), visit("/fake2", 1, 3)]
        );
        assert_eq!(model.len(), 2);
    }

    #[test]
    fn test_equivalent_paths_share_visits() {
        let mut model = model();
        model.register_location_visit(&location("/fake1/."));
        model.register_location_visit(&location("/fake1/sub/.."));
        model.register_location_visit(&location("/fake1"));

        assert_eq!(model.len(), 1);
        assert_eq!(model.get(&location("/fake1")).map(|v| v.num_visits()), Some(3));
    }

    #[test]
    fn test_visit_count_order_changes() {
        let mut model = model();
        let fake1 = location("/fake1");
        let fake2 = location("/fake2");

        model.register_location_visit(&fake1);
        model.register_location_visit(&fake2);
        model.register_location_visit(&fake2);
        assert_eq!(
            snapshot(&model),
            vec![visit("/fake2", 2, 2), visit("/fake1", 1, 0)]
        );

        model.register_location_visit(&fake1);
        model.register_location_visit(&fake1);
        assert_eq!(
            snapshot(&model),
            vec![visit("/fake1", 3, 4), visit("/fake2", 2, 2)]
        );

        model.register_location_visit(&fake2);
        model.register_location_visit(&fake2);
        assert_eq!(
            snapshot(&model),
            vec![visit("/fake2", 4, 6), visit("/fake1", 3, 4)]
        );
    }

    #[test]
    fn test_visit_time_order_changes() {
        let mut model = model();
        let fake1 = location("/fake1");
        let fake2 = location("/fake2");

        model.register_location_visit(&fake1);
        model.register_location_visit(&fake2);
        model.register_location_visit(&fake1);
        model.register_location_visit(&fake2);
        assert_eq!(
            snapshot(&model),
            vec![visit("/fake2", 2, 3), visit("/fake1", 2, 2)]
        );

        model.register_location_visit(&fake2);
        model.register_location_visit(&fake1);
        assert_eq!(
            snapshot(&model),
            vec![visit("/fake1", 3, 5), visit("/fake2", 3, 4)]
        );
    }

    #[test]
    fn test_re_ranking_after_repeat_visits() {
        let mut model = model();
        let fake1 = location("/fake1");
        model.register_location_visit(&fake1);
        model.register_location_visit(&location("/fake2"));
        model.register_location_visit(&location("/fake3"));

        model.register_location_visit(&fake1);
        model.register_location_visit(&fake1);

        let ranked: Vec<_> = model
            .visits()
            .map(|v| (v.location().in_folder_name(), v.num_visits()))
            .collect();
        assert_eq!(
            ranked,
            vec![
                ("fake1".to_string(), 3),
                ("fake3".to_string(), 1),
                ("fake2".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_locations_changed_event() {
        let mut model = model();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        model.add_locations_changed_observer(move |_| counter.set(counter.get() + 1));

        let fake1 = location("/fake1");
        model.register_location_visit(&fake1);
        model.register_location_visit(&fake1);
        model.register_location_visit(&fake1);
        model.register_location_visit(&location("/fake2"));

        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_locations_changed_receives_ranking() {
        let mut model = model();
        let seen = Rc::new(RefCell::new(Vec::<ShellLocation>::new()));
        let sink = Rc::clone(&seen);
        model.add_locations_changed_observer(move |visits| {
            *sink.borrow_mut() = visits.iter().map(|v| v.location().clone()).collect();
        });

        model.register_location_visit(&location("/fake1"));
        model.register_location_visit(&location("/fake2"));
        model.register_location_visit(&location("/fake2"));

        assert_eq!(*seen.borrow(), vec![location("/fake2"), location("/fake1")]);
    }

    #[test]
    fn test_removed_observer_is_not_called() {
        let mut model = model();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let connection = model.add_locations_changed_observer(move |_| counter.set(counter.get() + 1));

        assert!(model.remove_locations_changed_observer(connection));
        model.register_location_visit(&location("/fake1"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_set_location_visits() {
        let mut model = model();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        model.add_locations_changed_observer(move |_| counter.set(counter.get() + 1));

        let location1 = LocationVisitInfo::new(
            location("/fake1"),
            4,
            Utc.with_ymd_and_hms(2024, 12, 7, 13, 4, 0).unwrap(),
        );
        let location2 = LocationVisitInfo::new(
            location("/fake2"),
            28,
            Utc.with_ymd_and_hms(2023, 6, 14, 11, 27, 0).unwrap(),
        );
        let location3 = LocationVisitInfo::new(
            location("/fake3"),
            19,
            Utc.with_ymd_and_hms(2023, 8, 10, 3, 9, 0).unwrap(),
        );

        model.set_location_visits(vec![location1.clone(), location2.clone(), location3.clone()]);

        assert_eq!(calls.get(), 1);
        assert_eq!(snapshot(&model), vec![location2, location3, location1]);
    }

    #[test]
    fn test_set_location_visits_replaces_and_dedupes() {
        let mut model = model();
        model.register_location_visit(&location("/old"));

        model.set_location_visits(vec![
            visit("/a", 2, 10),
            visit("/a", 9, 20),
            visit("/b", 1, 5),
        ]);

        assert!(model.get(&location("/old")).is_none());
        assert_eq!(model.get(&location("/a")).map(|v| v.num_visits()), Some(2));
        assert_eq!(model.len(), 2);
    }

    #[test]
    fn test_visit_after_load_updates_in_place() {
        let mut model = model();
        model.set_location_visits(vec![visit("/a", 5, 100), visit("/b", 5, 50)]);

        model.register_location_visit(&location("/b"));

        assert_eq!(model.len(), 2);
        let first = model.visits().next().unwrap();
        assert_eq!(first.location(), &location("/b"));
        assert_eq!(first.num_visits(), 6);
        assert_eq!(first.last_visit_time(), at(0));
    }

    #[test]
    fn test_identical_rank_keeps_insertion_order() {
        let mut model = model();
        model.set_location_visits(vec![visit("/x", 3, 7), visit("/y", 3, 7)]);

        let order: Vec<_> = model.visits().map(|v| v.location().clone()).collect();
        assert_eq!(order, vec![location("/x"), location("/y")]);
    }
}

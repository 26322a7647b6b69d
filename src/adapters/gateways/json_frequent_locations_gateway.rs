//! JsonFrequentLocationsGateway - File-based frequent locations repository
//!
//! Visits are stored as a JSON document:
//!
//! ```json
//! { "locations": [ { "location": "/home", "num_visits": 3, "last_visit": 1700000000000 } ] }
//! ```
//!
//! `last_visit` is milliseconds since the Unix epoch. Records are parsed one
//! at a time so a single bad record doesn't lose the rest of the file.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{TimeZone, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::LocationVisitInfo;
use crate::domain::errors::DomainError;
use crate::domain::repositories::FrequentLocationsRepository;
use crate::domain::value_objects::ShellLocation;

/// Record in the locations file
#[derive(Debug, Serialize, Deserialize)]
struct StoredVisit {
    location: ShellLocation,
    num_visits: u32,
    last_visit: i64,
}

impl StoredVisit {
    fn into_visit(self) -> Option<LocationVisitInfo> {
        if self.num_visits == 0 || self.location.path().as_os_str().is_empty() {
            return None;
        }
        let time = Utc.timestamp_millis_opt(self.last_visit).single()?;
        Some(LocationVisitInfo::new(self.location, self.num_visits, time))
    }
}

impl From<&LocationVisitInfo> for StoredVisit {
    fn from(info: &LocationVisitInfo) -> Self {
        Self {
            location: info.location().clone(),
            num_visits: info.num_visits(),
            last_visit: info.last_visit_time().timestamp_millis(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct Document {
    #[serde(default)]
    locations: Vec<Value>,
}

#[derive(Serialize)]
struct DocumentRef {
    locations: Vec<StoredVisit>,
}

/// File-based frequent locations repository
pub struct JsonFrequentLocationsGateway {
    path: PathBuf,
}

impl JsonFrequentLocationsGateway {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the locations file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse visits from file content, skipping malformed records
    fn parse_content(content: &str) -> Result<Vec<LocationVisitInfo>, DomainError> {
        let document: Document = serde_json::from_str(content)?;
        let mut visits = Vec::with_capacity(document.locations.len());

        for (i, value) in document.locations.into_iter().enumerate() {
            let visit = serde_json::from_value::<StoredVisit>(value)
                .ok()
                .and_then(StoredVisit::into_visit);
            match visit {
                Some(visit) => visits.push(visit),
                None => warn!("Skipping malformed frequent location record {}", i),
            }
        }

        Ok(visits)
    }
}

impl FrequentLocationsRepository for JsonFrequentLocationsGateway {
    fn load(&self) -> Result<Vec<LocationVisitInfo>, DomainError> {
        if !self.path.exists() {
            debug!("No frequent locations file at {}", self.path.display());
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        Self::parse_content(&content)
    }

    fn save(&self, visits: &[LocationVisitInfo]) -> Result<(), DomainError> {
        let document = DocumentRef {
            locations: visits.iter().map(StoredVisit::from).collect(),
        };
        let content = serde_json::to_string_pretty(&document)?;

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn visit(path: &str, num_visits: u32, millis: i64) -> LocationVisitInfo {
        LocationVisitInfo::new(
            ShellLocation::new(path),
            num_visits,
            Utc.timestamp_millis_opt(millis).unwrap(),
        )
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let gateway = JsonFrequentLocationsGateway::new(dir.path().join("missing.json"));
        assert!(gateway.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("frequent.json");
        let visits = vec![visit("/home/user", 7, 1_700_000_000_123), visit("/tmp", 1, 5)];

        JsonFrequentLocationsGateway::new(&path).save(&visits).unwrap();

        let loaded = JsonFrequentLocationsGateway::new(&path).load().unwrap();
        assert_eq!(loaded, visits);
    }

    #[test]
    fn test_malformed_records_are_skipped() {
        let content = r#"{
            "locations": [
                { "location": "/good", "num_visits": 2, "last_visit": 1000 },
                { "location": "/no-count", "last_visit": 1000 },
                { "location": "/zero", "num_visits": 0, "last_visit": 1000 },
                { "location": "", "num_visits": 4, "last_visit": 1000 },
                "not a record",
                { "location": "/also-good", "num_visits": 1, "last_visit": 2000 }
            ]
        }"#;

        let visits = JsonFrequentLocationsGateway::parse_content(content).unwrap();
        let paths: Vec<_> = visits.iter().map(|v| v.location().clone()).collect();
        assert_eq!(paths, vec![ShellLocation::new("/good"), ShellLocation::new("/also-good")]);
    }

    #[test]
    fn test_unreadable_document_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("frequent.json");
        fs::write(&path, "{ locations: ").unwrap();

        let result = JsonFrequentLocationsGateway::new(&path).load();
        assert!(matches!(result, Err(DomainError::Parse(_))));
    }
}

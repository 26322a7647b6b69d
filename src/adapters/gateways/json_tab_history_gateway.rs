//! JsonTabHistoryGateway - File-based tab history repository
//!
//! One record per tab, each holding its entries and cursor. Bad entries are
//! dropped individually and the cursor is moved onto what survives.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::PreservedHistoryEntry;
use crate::domain::errors::DomainError;
use crate::domain::repositories::{PreservedTabHistory, TabHistoryRepository};
use crate::domain::value_objects::ShellLocation;

#[derive(Debug, Default, Deserialize)]
struct Document {
    #[serde(default)]
    tabs: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct StoredTab {
    #[serde(default)]
    entries: Vec<Value>,
    #[serde(default)]
    current_index: Option<usize>,
}

#[derive(Serialize)]
struct DocumentRef<'a> {
    tabs: &'a [PreservedTabHistory],
}

/// File-based tab history repository
pub struct JsonTabHistoryGateway {
    path: PathBuf,
}

impl JsonTabHistoryGateway {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse_content(content: &str) -> Result<Vec<PreservedTabHistory>, DomainError> {
        let document: Document = serde_json::from_str(content)?;
        let mut tabs = Vec::with_capacity(document.tabs.len());

        for (i, value) in document.tabs.into_iter().enumerate() {
            match serde_json::from_value::<StoredTab>(value) {
                Ok(tab) => {
                    let tab = Self::parse_tab(tab);
                    if tab.is_empty() {
                        warn!("Skipping tab {} with no usable history entries", i);
                    } else {
                        tabs.push(tab);
                    }
                }
                Err(e) => warn!("Skipping malformed tab record {}: {}", i, e),
            }
        }

        Ok(tabs)
    }

    fn parse_tab(tab: StoredTab) -> PreservedTabHistory {
        let mut entries = Vec::with_capacity(tab.entries.len());
        let mut kept_before_current: usize = 0;
        let mut current_kept = false;

        for (i, value) in tab.entries.into_iter().enumerate() {
            let entry = serde_json::from_value::<PreservedHistoryEntry<ShellLocation>>(value)
                .ok()
                .filter(|entry| !entry.location.path().as_os_str().is_empty());

            let Some(entry) = entry else {
                warn!("Skipping malformed history entry {}", i);
                continue;
            };

            match tab.current_index {
                Some(current) if i < current => kept_before_current += 1,
                Some(current) if i == current => current_kept = true,
                _ => {}
            }
            entries.push(entry);
        }

        let current_index = if entries.is_empty() || tab.current_index.is_none() {
            None
        } else if current_kept {
            Some(kept_before_current)
        } else {
            // Fall back to the nearest surviving entry behind the old cursor.
            Some(kept_before_current.saturating_sub(1))
        };

        PreservedTabHistory::new(entries, current_index)
    }
}

impl TabHistoryRepository for JsonTabHistoryGateway {
    fn load(&self) -> Result<Vec<PreservedTabHistory>, DomainError> {
        if !self.path.exists() {
            debug!("No tab history file at {}", self.path.display());
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        Self::parse_content(&content)
    }

    fn save(&self, tabs: &[PreservedTabHistory]) -> Result<(), DomainError> {
        let content = serde_json::to_string_pretty(&DocumentRef { tabs })?;

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

    fn entry(path: &str) -> PreservedHistoryEntry<ShellLocation> {
        PreservedHistoryEntry::new(ShellLocation::new(path), path.trim_start_matches('/'))
    }

    #[test]
    fn test_save_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tabs.json");

        let mut with_icon = entry("/b");
        with_icon.icon_index = Some(4);
        let tabs = vec![
            PreservedTabHistory::new(vec![entry("/a"), with_icon], Some(1)),
            PreservedTabHistory::new(vec![entry("/c")], Some(0)),
        ];

        JsonTabHistoryGateway::new(&path).save(&tabs).unwrap();
        let loaded = JsonTabHistoryGateway::new(&path).load().unwrap();

        assert_eq!(loaded, tabs);
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let gateway = JsonTabHistoryGateway::new(dir.path().join("tabs.json"));
        assert!(gateway.load().unwrap().is_empty());
    }

    #[test]
    fn test_current_index_follows_surviving_entries() {
        let content = r#"{ "tabs": [ {
            "entries": [
                { "location": "/a", "display_name": "a" },
                { "display_name": "no location" },
                { "location": "/c", "display_name": "c" },
                { "location": "/d", "display_name": "d" }
            ],
            "current_index": 2
        } ] }"#;

        let tabs = JsonTabHistoryGateway::parse_content(content).unwrap();
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs[0].entries.len(), 3);
        assert_eq!(tabs[0].current_index, Some(1));
        assert_eq!(tabs[0].entries[1].location, ShellLocation::new("/c"));
    }

    #[test]
    fn test_dropped_current_entry_moves_cursor_back() {
        let content = r#"{ "tabs": [ {
            "entries": [
                { "location": "/a", "display_name": "a" },
                { "location": "/b", "display_name": "b" },
                { "location": "", "display_name": "empty" }
            ],
            "current_index": 2
        } ] }"#;

        let tabs = JsonTabHistoryGateway::parse_content(content).unwrap();
        assert_eq!(tabs[0].current_index, Some(1));
    }

    #[test]
    fn test_empty_and_malformed_tabs_are_skipped() {
        let content = r#"{ "tabs": [
            { "entries": [], "current_index": 0 },
            { "entries": "nope" },
            { "entries": [ { "location": "/x", "display_name": "x" } ], "current_index": 0 }
        ] }"#;

        let tabs = JsonTabHistoryGateway::parse_content(content).unwrap();
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs[0].entries[0].location, ShellLocation::new("/x"));
    }
}

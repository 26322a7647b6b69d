//! BookmarkFolderId value object - identifies a folder in the bookmark tree

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a bookmark folder (a GUID string in practice)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmarkFolderId(String);

impl BookmarkFolderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookmarkFolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookmarkFolderId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

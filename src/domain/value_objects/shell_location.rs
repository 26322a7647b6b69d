//! ShellLocation value object - a browsable filesystem location
//!
//! Locations are compared by path. Paths are normalized lexically when a
//! location is created (`.` dropped, `..` folded into its parent), so `/a/.`
//! and `/a` are the same location. A location with no parent is treated as a
//! namespace root, so "go up" is not possible from it.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A folder the shell browser can display
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "PathBuf", into = "PathBuf")]
pub struct ShellLocation(PathBuf);

impl ShellLocation {
    /// Create a location from a path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(normalize(&path.into()))
    }

    /// Parse a user-supplied path string.
    ///
    /// Surrounding whitespace is ignored. Returns `None` for an empty string.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self::new(trimmed))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// The containing location, or `None` at a namespace root
    pub fn parent(&self) -> Option<ShellLocation> {
        self.0
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| ShellLocation(p.to_path_buf()))
    }

    /// Whether there is nothing above this location
    pub fn is_namespace_root(&self) -> bool {
        self.parent().is_none()
    }

    /// Short name shown in menus and tab headers.
    ///
    /// Roots have no final component, so the full path is used instead.
    pub fn in_folder_name(&self) -> String {
        match self.0.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => self.0.to_string_lossy().into_owned(),
        }
    }
}

impl fmt::Display for ShellLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl From<PathBuf> for ShellLocation {
    fn from(path: PathBuf) -> Self {
        Self(normalize(&path))
    }
}

impl From<&Path> for ShellLocation {
    fn from(path: &Path) -> Self {
        Self(normalize(path))
    }
}

impl From<ShellLocation> for PathBuf {
    fn from(location: ShellLocation) -> Self {
        location.0
    }
}

/// Lexical cleanup only; symlinks are not resolved.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                // Nothing above a root.
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }

    if normalized.as_os_str().is_empty() && !path.as_os_str().is_empty() {
        normalized.push(".");
    }
    normalized
}

impl AsRef<Path> for ShellLocation {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

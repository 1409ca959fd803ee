//! Locally recorded module versions

use serde::{Serialize, Serializer};
use std::fmt;

/// Version recorded in a module's metadata.json
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalVersion {
    /// Last entry of the `versions` list
    Recorded(String),
    /// The module exists but no version could be determined
    Unknown,
}

impl LocalVersion {
    /// Returns the recorded version, if any
    pub fn as_str(&self) -> Option<&str> {
        match self {
            LocalVersion::Recorded(v) => Some(v),
            LocalVersion::Unknown => None,
        }
    }

    /// Returns true if no version could be determined
    pub fn is_unknown(&self) -> bool {
        matches!(self, LocalVersion::Unknown)
    }

    /// Picks the newest entry of an oldest-first version list
    pub fn from_versions(versions: Option<Vec<String>>) -> Self {
        versions
            .and_then(|mut v| v.pop())
            .map(LocalVersion::Recorded)
            .unwrap_or(LocalVersion::Unknown)
    }
}

impl fmt::Display for LocalVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalVersion::Recorded(v) => write!(f, "{}", v),
            LocalVersion::Unknown => write!(f, "None"),
        }
    }
}

// Serialized as the bare version string or null.
impl Serialize for LocalVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_str().serialize(serializer)
    }
}

//! Local module version scanning
//!
//! A modules root holds one directory per module. A directory counts as a
//! module when it contains a `metadata.json` whose `versions` list is ordered
//! oldest first:
//!
//! ```text
//! modules/
//!   score_cr_checker/metadata.json   {"versions": ["0.1.0", "0.2.0"]}
//!   score_python_basics/metadata.json
//! ```

use crate::domain::LocalVersion;
use crate::error::{IoError, ScanError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default modules root, relative to the working directory
pub const DEFAULT_MODULES_DIR: &str = "modules";

/// Name of the per-module metadata file
pub const METADATA_FILENAME: &str = "metadata.json";

/// Subset of metadata.json this tool reads
#[derive(Debug, Deserialize)]
struct ModuleMetadata {
    #[serde(default)]
    versions: Option<Vec<String>>,
}

/// Result of scanning a modules root
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Root directory that was scanned
    pub root: PathBuf,
    /// Module directory name -> recorded version
    ///
    /// Directories without a metadata.json have no entry.
    pub versions: BTreeMap<String, LocalVersion>,
    /// Per-file failures; the affected modules are recorded as Unknown
    pub errors: Vec<String>,
}

impl ScanReport {
    /// Creates an empty report for a root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            versions: BTreeMap::new(),
            errors: Vec::new(),
        }
    }

    /// Look up a module's recorded version
    pub fn get(&self, module: &str) -> Option<&LocalVersion> {
        self.versions.get(module)
    }

    /// Number of modules found
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Returns true if no module was found
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Number of modules whose version could not be determined
    pub fn unknown_count(&self) -> usize {
        self.versions.values().filter(|v| v.is_unknown()).count()
    }
}

/// Scan every immediate subdirectory of `root` for a recorded version
///
/// Only a missing or unreadable root is an error. A metadata.json that
/// cannot be read or parsed is logged and recorded as `LocalVersion::Unknown`,
/// and scanning continues with the next entry.
pub fn scan_modules(root: &Path) -> Result<ScanReport, IoError> {
    if !root.is_dir() {
        return Err(IoError::directory_not_found(root));
    }

    let entries = std::fs::read_dir(root).map_err(|e| IoError::generic(root, e))?;
    let mut report = ScanReport::new(root);

    for entry in skip_unreadable(root, entries) {
        let module_dir = entry.path();
        let metadata_path = module_dir.join(METADATA_FILENAME);

        if !module_dir.is_dir() || !metadata_path.exists() {
            debug!("Skipping {}", module_dir.display());
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let version = match read_local_version(&metadata_path) {
            Ok(version) => version,
            Err(e) => {
                warn!("{}: recording {} as unknown", e, name);
                report.errors.push(e.to_string());
                LocalVersion::Unknown
            }
        };

        report.versions.insert(name, version);
    }

    Ok(report)
}

/// Drop directory entries that could not be read, logging each one
fn skip_unreadable<'a, T: 'a>(
    root: &'a Path,
    entries: impl Iterator<Item = std::io::Result<T>> + 'a,
) -> impl Iterator<Item = T> + 'a {
    entries.filter_map(move |entry| match entry {
        Ok(entry) => Some(entry),
        Err(e) => {
            warn!("Skipping unreadable entry in {}: {}", root.display(), e);
            None
        }
    })
}

/// Read the newest recorded version from a metadata.json file
pub fn read_local_version(metadata_path: &Path) -> Result<LocalVersion, ScanError> {
    let content =
        std::fs::read_to_string(metadata_path).map_err(|e| ScanError::read(metadata_path, e))?;
    parse_local_version(&content).map_err(|e| ScanError::parse(metadata_path, e.to_string()))
}

/// Parse metadata.json content and pick the last entry of `versions`
pub fn parse_local_version(content: &str) -> Result<LocalVersion, serde_json::Error> {
    let metadata: ModuleMetadata = serde_json::from_str(content)?;
    Ok(LocalVersion::from_versions(metadata.versions))
}

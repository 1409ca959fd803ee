//! Comparison of local and upstream versions
//!
//! Versions are compared as strings (ignoring a leading `v`). No ordering is
//! implied: a differing local version may be older or newer than upstream.

use super::{LocalVersion, ModuleDescriptor, ReleaseInfo};
use serde::Serialize;
use std::fmt;

/// Outcome of comparing one tracked module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleStatus {
    /// Local version matches the latest release tag
    UpToDate,
    /// Local version differs from the latest release tag
    Differs,
    /// Module is vendored but its version could not be read
    LocalUnknown,
    /// Latest release could not be determined
    RemoteUnknown,
    /// Module has no metadata.json under the modules root
    NotVendored,
}

impl ModuleStatus {
    /// Derive the status from both sides of the comparison
    pub fn evaluate(local: Option<&LocalVersion>, release: &ReleaseInfo) -> Self {
        let local = match local {
            None => return ModuleStatus::NotVendored,
            Some(LocalVersion::Unknown) => return ModuleStatus::LocalUnknown,
            Some(LocalVersion::Recorded(v)) => v,
        };

        match release.version() {
            None => ModuleStatus::RemoteUnknown,
            Some(latest) if same_version(local, latest) => ModuleStatus::UpToDate,
            Some(_) => ModuleStatus::Differs,
        }
    }

    /// Returns true if either side could not be resolved
    pub fn is_unresolved(&self) -> bool {
        matches!(
            self,
            ModuleStatus::LocalUnknown | ModuleStatus::RemoteUnknown | ModuleStatus::NotVendored
        )
    }

    /// Short label used in text and JSON output
    pub fn label(&self) -> &'static str {
        match self {
            ModuleStatus::UpToDate => "up to date",
            ModuleStatus::Differs => "differs",
            ModuleStatus::LocalUnknown => "local unknown",
            ModuleStatus::RemoteUnknown => "remote unknown",
            ModuleStatus::NotVendored => "not vendored",
        }
    }
}

impl fmt::Display for ModuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn same_version(a: &str, b: &str) -> bool {
    let strip = |s: &str| {
        let s = s.trim();
        s.strip_prefix('v').unwrap_or(s).to_string()
    };
    strip(a) == strip(b)
}

/// Comparison result for a single tracked module
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleCheck {
    /// The tracked module
    pub module: ModuleDescriptor,
    /// Locally recorded version; None when the module is not vendored
    pub local: Option<LocalVersion>,
    /// Latest upstream release
    pub release: ReleaseInfo,
    /// Derived status
    pub status: ModuleStatus,
}

impl ModuleCheck {
    /// Creates a new ModuleCheck, deriving the status
    pub fn new(module: ModuleDescriptor, local: Option<LocalVersion>, release: ReleaseInfo) -> Self {
        let status = ModuleStatus::evaluate(local.as_ref(), &release);
        Self {
            module,
            local,
            release,
            status,
        }
    }
}

/// All comparison results of one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckSummary {
    /// Per-module results, in tracked-module order
    pub checks: Vec<ModuleCheck>,
}

impl CheckSummary {
    /// Creates a summary from per-module results
    pub fn new(checks: Vec<ModuleCheck>) -> Self {
        Self { checks }
    }

    /// Number of modules with the given status
    pub fn count(&self, status: ModuleStatus) -> usize {
        self.checks.iter().filter(|c| c.status == status).count()
    }

    /// Number of modules where either side could not be resolved
    pub fn unresolved_count(&self) -> usize {
        self.checks.iter().filter(|c| c.status.is_unresolved()).count()
    }
}

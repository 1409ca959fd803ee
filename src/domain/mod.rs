//! Core domain models for modcheck
//!
//! This module contains the fundamental types used throughout the application:
//! - Tracked module descriptors and the static module list
//! - Repository identifiers derived from URLs
//! - Latest release lookup results
//! - Locally recorded versions
//! - Comparison results

mod local_version;
mod module;
mod release;
mod repo;
mod status;

pub use local_version::LocalVersion;
pub use module::{ModuleDescriptor, TOOLING_MODULES};
pub use release::{LatestRelease, ReleaseInfo};
pub use repo::RepoId;
pub use status::{CheckSummary, ModuleCheck, ModuleStatus};

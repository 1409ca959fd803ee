//! Release source adapters for fetching the latest upstream release
//!
//! This module provides:
//! - HTTP client shared foundation (single request, configurable timeout)
//! - GitHub Releases API adapter
//! - The lookup policy that degrades every failure to `ReleaseInfo::NotFound`

mod client;
mod github;

pub use client::{HttpClient, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use github::{GitHubReleases, GITHUB_API_URL};

use crate::domain::{LatestRelease, ReleaseInfo, RepoId};
use crate::error::RegistryError;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Trait for latest-release sources
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Get the source name used in diagnostics
    fn source_name(&self) -> &'static str;

    /// Fetch the latest release of a repository
    async fn fetch_latest_release(&self, repo: &RepoId) -> Result<LatestRelease, RegistryError>;
}

/// Resolve the latest release of the repository at `repo_url`
///
/// Never fails: a malformed URL, a non-success status, a transport error or
/// an undecodable body is reported as a warning and yields
/// `ReleaseInfo::NotFound`. Fields missing from a successful response yield
/// `ReleaseInfo::Partial`.
pub async fn resolve_latest_release(source: &dyn ReleaseSource, repo_url: &str) -> ReleaseInfo {
    let repo = match RepoId::from_url(repo_url) {
        Ok(repo) => repo,
        Err(e) => {
            warn!("Invalid repository URL: {}", e);
            return ReleaseInfo::NotFound;
        }
    };

    match source.fetch_latest_release(&repo).await {
        Ok(release) => {
            debug!(
                "{} latest release for {}: {:?}",
                source.source_name(),
                repo,
                release.tag_name
            );
            release.into()
        }
        Err(e) => {
            warn!("Error fetching release info: {}", e);
            ReleaseInfo::NotFound
        }
    }
}

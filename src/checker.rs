//! Remote comparison for tracked modules
//!
//! This module provides:
//! - Latest-release lookups for every tracked module with bounded concurrency
//! - Per-lookup error isolation (a failed lookup only affects its own module)
//! - Joining the lookups with a local scan into a CheckSummary

use crate::cli::{CliArgs, DEFAULT_CONCURRENCY};
use crate::domain::{CheckSummary, ModuleCheck, ModuleDescriptor, ReleaseInfo};
use crate::error::RegistryError;
use crate::progress::Progress;
use crate::registry::{resolve_latest_release, GitHubReleases, HttpClient, ReleaseSource};
use crate::scanner::ScanReport;
use futures::stream::{self, StreamExt};

/// Configuration for the checker
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Maximum concurrent release lookups
    pub concurrency: usize,
    /// Whether to show a progress spinner
    pub show_progress: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            show_progress: false,
        }
    }
}

/// Compares tracked modules against their latest upstream release
pub struct Checker {
    source: Box<dyn ReleaseSource>,
    config: CheckerConfig,
}

impl Checker {
    /// Create a checker talking to the GitHub API configured by the CLI arguments
    pub fn new(args: &CliArgs) -> Result<Self, RegistryError> {
        let client = HttpClient::with_timeout(args.timeout)?;
        let source = GitHubReleases::with_base_url(client, &args.api_url);
        let config = CheckerConfig {
            concurrency: args.concurrency,
            show_progress: !args.quiet && !args.json,
        };
        Ok(Self::with_source(Box::new(source), config))
    }

    /// Create a checker with a custom release source (for testing)
    pub fn with_source(source: Box<dyn ReleaseSource>, config: CheckerConfig) -> Self {
        Self { source, config }
    }

    /// Resolve the latest release of every module, preserving order
    pub async fn resolve_all(&self, modules: &[ModuleDescriptor]) -> Vec<ReleaseInfo> {
        let mut progress = Progress::new(self.config.show_progress);
        progress.start(modules.len() as u64, "Fetching latest releases");

        let source = self.source.as_ref();
        let progress_ref = &progress;
        let releases = stream::iter(modules.iter())
            .map(move |module| async move {
                let release = resolve_latest_release(source, module.repository_url()).await;
                progress_ref.inc();
                release
            })
            .buffered(self.config.concurrency.max(1))
            .collect::<Vec<_>>()
            .await;

        progress.finish_and_clear();
        releases
    }

    /// Compare every module's recorded version with its latest release
    pub async fn check(&self, modules: &[ModuleDescriptor], scan: &ScanReport) -> CheckSummary {
        let releases = self.resolve_all(modules).await;

        let checks = modules
            .iter()
            .zip(releases)
            .map(|(module, release)| ModuleCheck::new(*module, scan.get(module.name).cloned(), release))
            .collect();

        CheckSummary::new(checks)
    }
}

//! GitHub Releases API adapter
//!
//! Fetches the latest published release of a repository.
//! API endpoint: https://api.github.com/repos/{owner}/{repo}/releases/latest

use crate::domain::{LatestRelease, RepoId};
use crate::error::RegistryError;
use crate::registry::{HttpClient, ReleaseSource};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// GitHub API base URL
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// GitHub Releases adapter
pub struct GitHubReleases {
    client: HttpClient,
    base_url: String,
}

/// Latest release response; every field is optional
#[derive(Debug, Deserialize)]
struct ReleaseResponse {
    tag_name: Option<String>,
    tarball_url: Option<String>,
    published_at: Option<DateTime<Utc>>,
}

impl GitHubReleases {
    /// Create a new adapter against the public GitHub API
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, GITHUB_API_URL)
    }

    /// Create a new adapter against a custom API base URL
    pub fn with_base_url(client: HttpClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the latest-release URL for a repository
    fn build_url(&self, repo: &RepoId) -> String {
        format!(
            "{}/repos/{}/{}/releases/latest",
            self.base_url, repo.owner, repo.repo
        )
    }
}

#[async_trait]
impl ReleaseSource for GitHubReleases {
    fn source_name(&self) -> &'static str {
        "GitHub"
    }

    async fn fetch_latest_release(&self, repo: &RepoId) -> Result<LatestRelease, RegistryError> {
        let url = self.build_url(repo);
        let response: ReleaseResponse = self.client.get_json(&url, &repo.to_string()).await?;

        Ok(LatestRelease {
            tag_name: response.tag_name,
            tarball_url: response.tarball_url,
            published_at: response.published_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn adapter(base_url: &str) -> GitHubReleases {
        GitHubReleases::with_base_url(HttpClient::new().unwrap(), base_url)
    }

    #[test]
    fn test_source_name() {
        let adapter = GitHubReleases::new(HttpClient::new().unwrap());
        assert_eq!(adapter.source_name(), "GitHub");
    }

    #[test]
    fn test_build_url() {
        let adapter = GitHubReleases::new(HttpClient::new().unwrap());
        assert_eq!(
            adapter.build_url(&RepoId::new("eclipse-score", "tooling")),
            "https://api.github.com/repos/eclipse-score/tooling/releases/latest"
        );
    }

    #[test]
    fn test_build_url_trims_base_slash() {
        let adapter = adapter("http://localhost:1234/");
        assert_eq!(
            adapter.build_url(&RepoId::new("o", "r")),
            "http://localhost:1234/repos/o/r/releases/latest"
        );
    }

    #[tokio::test]
    async fn test_fetch_latest_release() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/eclipse-score/tooling/releases/latest")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "tag_name": "v1.2.3",
                    "tarball_url": "https://x/y",
                    "published_at": "2024-01-15T00:00:00Z",
                    "name": "Release 1.2.3"
                }"#,
            )
            .create_async()
            .await;

        let release = adapter(&server.url())
            .fetch_latest_release(&RepoId::new("eclipse-score", "tooling"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(release.tag_name.as_deref(), Some("v1.2.3"));
        assert_eq!(release.tarball_url.as_deref(), Some("https://x/y"));
        assert_eq!(
            release.published_at,
            Some("2024-01-15T00:00:00Z".parse().unwrap())
        );
    }

    #[tokio::test]
    async fn test_fetch_latest_release_missing_fields() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/repos/o/r/releases/latest")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"tag_name": "v2.0.0"}"#)
            .create_async()
            .await;

        let release = adapter(&server.url())
            .fetch_latest_release(&RepoId::new("o", "r"))
            .await
            .unwrap();

        assert_eq!(release.tag_name.as_deref(), Some("v2.0.0"));
        assert_eq!(release.tarball_url, None);
        assert_eq!(release.published_at, None);
    }

    #[tokio::test]
    async fn test_fetch_latest_release_not_found() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/nonexistent/repo/releases/latest")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "Not Found"}"#)
            .create_async()
            .await;

        let result = adapter(&server.url())
            .fetch_latest_release(&RepoId::new("nonexistent", "repo"))
            .await;

        mock.assert_async().await;
        match result {
            Err(RegistryError::HttpStatus { status, body, repo }) => {
                assert_eq!(status, 404);
                assert!(body.contains("Not Found"));
                assert_eq!(repo, "nonexistent/repo");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}

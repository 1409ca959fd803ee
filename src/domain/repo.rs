//! Repository identifiers derived from URLs

use crate::error::RegistryError;
use std::fmt;

/// Owner/repository pair identifying a hosted repository
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
}

impl RepoId {
    /// Creates a new RepoId
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Extract owner and repository from a URL
    ///
    /// The last two slash-separated segments of the path are used; trailing
    /// slashes are ignored. The scheme and host never count as segments, so
    /// `https://github.com/org` is rejected.
    pub fn from_url(url: &str) -> Result<Self, RegistryError> {
        let trimmed = url.trim().trim_end_matches('/');
        let path = match trimmed.split_once("://") {
            Some((_, rest)) => rest.split_once('/').map(|(_, path)| path).unwrap_or(""),
            None => trimmed,
        };

        let mut segments = path.rsplit('/');
        match (segments.next(), segments.next()) {
            (Some(repo), Some(owner)) if !repo.is_empty() && !owner.is_empty() => {
                Ok(Self::new(owner, repo))
            }
            _ => Err(RegistryError::invalid_repository_url(url)),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

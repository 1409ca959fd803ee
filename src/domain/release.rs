//! Latest release lookup results

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Fields extracted from a successful "latest release" response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LatestRelease {
    /// Release tag (the version)
    pub tag_name: Option<String>,
    /// Source archive URL
    pub tarball_url: Option<String>,
    /// Publication time, when reported
    pub published_at: Option<DateTime<Utc>>,
}

/// Outcome of resolving a repository's latest release
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReleaseInfo {
    /// Both the tag and the archive URL were reported
    Found {
        version: String,
        tarball_url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        published_at: Option<DateTime<Utc>>,
    },
    /// The lookup succeeded but the response omitted one or both fields
    Partial {
        version: Option<String>,
        tarball_url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        published_at: Option<DateTime<Utc>>,
    },
    /// The lookup failed
    NotFound,
}

impl ReleaseInfo {
    /// Returns the release tag, if any
    pub fn version(&self) -> Option<&str> {
        match self {
            ReleaseInfo::Found { version, .. } => Some(version),
            ReleaseInfo::Partial { version, .. } => version.as_deref(),
            ReleaseInfo::NotFound => None,
        }
    }

    /// Returns the archive URL, if any
    pub fn tarball_url(&self) -> Option<&str> {
        match self {
            ReleaseInfo::Found { tarball_url, .. } => Some(tarball_url),
            ReleaseInfo::Partial { tarball_url, .. } => tarball_url.as_deref(),
            ReleaseInfo::NotFound => None,
        }
    }

    /// Returns the publication time, if any
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        match self {
            ReleaseInfo::Found { published_at, .. } | ReleaseInfo::Partial { published_at, .. } => {
                *published_at
            }
            ReleaseInfo::NotFound => None,
        }
    }

    /// Returns true if the lookup failed
    pub fn is_not_found(&self) -> bool {
        matches!(self, ReleaseInfo::NotFound)
    }

    /// Returns the (version, tarball URL) pair
    pub fn as_pair(&self) -> (Option<&str>, Option<&str>) {
        (self.version(), self.tarball_url())
    }
}

impl From<LatestRelease> for ReleaseInfo {
    fn from(release: LatestRelease) -> Self {
        match (release.tag_name, release.tarball_url) {
            (Some(version), Some(tarball_url)) => ReleaseInfo::Found {
                version,
                tarball_url,
                published_at: release.published_at,
            },
            (version, tarball_url) => ReleaseInfo::Partial {
                version,
                tarball_url,
                published_at: release.published_at,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_complete_release() {
        let info: ReleaseInfo = LatestRelease {
            tag_name: Some("v1.2.3".to_string()),
            tarball_url: Some("https://x/y".to_string()),
            published_at: None,
        }
        .into();
        assert!(matches!(info, ReleaseInfo::Found { .. }));
        assert_eq!(info.as_pair(), (Some("v1.2.3"), Some("https://x/y")));
    }

    #[test]
    fn test_from_release_without_tarball() {
        let info: ReleaseInfo = LatestRelease {
            tag_name: Some("v1.0.0".to_string()),
            ..Default::default()
        }
        .into();
        assert!(matches!(info, ReleaseInfo::Partial { .. }));
        assert_eq!(info.version(), Some("v1.0.0"));
        assert_eq!(info.tarball_url(), None);
        assert!(!info.is_not_found());
    }

    #[test]
    fn test_from_empty_release() {
        let info: ReleaseInfo = LatestRelease::default().into();
        assert_eq!(
            info,
            ReleaseInfo::Partial {
                version: None,
                tarball_url: None,
                published_at: None,
            }
        );
    }

    #[test]
    fn test_not_found() {
        let info = ReleaseInfo::NotFound;
        assert!(info.is_not_found());
        assert_eq!(info.as_pair(), (None, None));
        assert_eq!(info.published_at(), None);
    }

    #[test]
    fn test_serialize_found() {
        let info = ReleaseInfo::Found {
            version: "v1".to_string(),
            tarball_url: "https://x".to_string(),
            published_at: None,
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["status"], "found");
        assert_eq!(json["version"], "v1");
        assert!(json.get("published_at").is_none());
    }
}

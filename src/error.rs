//! Application error types using thiserror
//!
//! Error hierarchy:
//! - RegistryError: Issues with the release API (URL, HTTP, response body)
//! - ScanError: Issues with a single module's metadata.json
//! - IoError: The modules root itself cannot be read
//! - ConfigError: Issues with CLI configuration

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Release API related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Metadata file related errors
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO related errors
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Errors related to the remote release lookup
#[derive(Error, Debug)]
pub enum RegistryError {
    /// URL does not contain an owner and a repository segment
    #[error("invalid repository URL '{url}': expected .../<owner>/<repo>")]
    InvalidRepositoryUrl { url: String },

    /// API answered with a non-success status
    #[error("error fetching release info for {repo}: {status} {body}")]
    HttpStatus {
        repo: String,
        status: u16,
        body: String,
    },

    /// Transport-level failure
    #[error("failed to fetch release info for {repo}: {message}")]
    NetworkError { repo: String, message: String },

    /// Request timed out
    #[error("timeout while fetching release info for {repo}")]
    Timeout { repo: String },

    /// Response body could not be decoded
    #[error("invalid response for {repo}: {message}")]
    InvalidResponse { repo: String, message: String },

    /// HTTP client could not be constructed
    #[error("failed to create HTTP client: {message}")]
    ClientBuild { message: String },
}

/// Errors related to a module's metadata.json
#[derive(Error, Debug)]
pub enum ScanError {
    /// Failed to read the metadata file
    #[error("error reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Metadata file is not valid JSON or has an unexpected structure
    #[error("error reading {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid duration format
    #[error("invalid duration format '{value}': expected format like '30s', '2m', '500ms'")]
    InvalidDuration { value: String },

    /// Concurrency must be at least one
    #[error("invalid concurrency '{value}': expected a positive integer")]
    InvalidConcurrency { value: String },
}

/// Errors related to IO operations
#[derive(Error, Debug)]
pub enum IoError {
    /// Directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Generic IO error
    #[error("IO error at {path}: {source}")]
    Generic {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RegistryError {
    /// Creates a new InvalidRepositoryUrl error
    pub fn invalid_repository_url(url: impl Into<String>) -> Self {
        RegistryError::InvalidRepositoryUrl { url: url.into() }
    }

    /// Creates a new HttpStatus error
    pub fn http_status(repo: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        RegistryError::HttpStatus {
            repo: repo.into(),
            status,
            body: body.into(),
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(repo: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::NetworkError {
            repo: repo.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(repo: impl Into<String>) -> Self {
        RegistryError::Timeout { repo: repo.into() }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(repo: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::InvalidResponse {
            repo: repo.into(),
            message: message.into(),
        }
    }
}

impl ScanError {
    /// Creates a new Read error
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScanError::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a new Parse error
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ScanError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl IoError {
    /// Creates a new DirectoryNotFound error
    pub fn directory_not_found(path: impl Into<PathBuf>) -> Self {
        IoError::DirectoryNotFound { path: path.into() }
    }

    /// Creates a new Generic IO error
    pub fn generic(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::Generic {
            path: path.into(),
            source,
        }
    }
}

//! modcheck - Vendored module version checker library
//!
//! This library provides the core functionality for checking whether locally
//! vendored module definitions match the latest upstream releases:
//! - Local scan of `<root>/<module>/metadata.json` version records
//! - Latest release lookup through the GitHub Releases API
//! - Comparison of both for a fixed list of tracked modules

pub mod checker;
pub mod cli;
pub mod domain;
pub mod error;
pub mod output;
pub mod progress;
pub mod registry;
pub mod scanner;

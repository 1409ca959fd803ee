//! CLI argument parsing module for modcheck

use crate::error::ConfigError;
use crate::registry::GITHUB_API_URL;
use crate::scanner::DEFAULT_MODULES_DIR;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::time::Duration;

/// Default number of concurrent release lookups
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Parse duration string in format: Nms (milliseconds), Ns (seconds), Nm (minutes)
///
/// A bare number is read as seconds.
fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty duration string".to_string());
    }

    let (num_str, unit) = if let Some(n) = s.strip_suffix("ms") {
        (n, "ms")
    } else if let Some(n) = s.strip_suffix('s') {
        (n, "s")
    } else if let Some(n) = s.strip_suffix('m') {
        (n, "m")
    } else {
        (s, "s")
    };

    let num: u64 = num_str.parse().map_err(|_| {
        ConfigError::InvalidDuration {
            value: s.to_string(),
        }
        .to_string()
    })?;

    let invalid = || {
        ConfigError::InvalidDuration {
            value: s.to_string(),
        }
        .to_string()
    };

    let duration = match unit {
        "ms" => Duration::from_millis(num),
        "m" => Duration::from_secs(num.checked_mul(60).ok_or_else(invalid)?),
        _ => Duration::from_secs(num),
    };

    if duration.is_zero() {
        return Err(invalid());
    }

    Ok(duration)
}

/// Parse a positive concurrency limit
fn parse_concurrency(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ConfigError::InvalidConcurrency {
            value: s.to_string(),
        }
        .to_string()),
    }
}

/// Vendored module version checker
#[derive(Parser, Debug, Clone)]
#[command(
    name = "modcheck",
    version,
    about = "Check vendored module versions against the latest upstream releases"
)]
pub struct CliArgs {
    /// Modules root directory
    #[arg(default_value = DEFAULT_MODULES_DIR)]
    pub path: PathBuf,

    /// Also fetch the latest release of every tracked module and compare
    #[arg(long)]
    pub remote: bool,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - only errors are logged
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    // Module filters
    /// Exclude tracked modules from the remote check (can be specified multiple times)
    #[arg(long, action = ArgAction::Append)]
    pub exclude: Vec<String>,

    /// Check only these tracked modules (can be specified multiple times)
    #[arg(long, action = ArgAction::Append)]
    pub only: Vec<String>,

    // Remote options
    /// GitHub API base URL
    #[arg(long, default_value = GITHUB_API_URL)]
    pub api_url: String,

    /// Request timeout (e.g., 30s, 2m, 500ms)
    #[arg(long, default_value = "30s", value_parser = parse_duration)]
    pub timeout: Duration,

    /// Maximum number of concurrent release lookups
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY, value_parser = parse_concurrency)]
    pub concurrency: usize,

    // Exit code
    /// Exit with code 2 when any module version cannot be resolved
    #[arg(long)]
    pub strict: bool,
}

impl CliArgs {
    /// Check if a tracked module should be processed based on filters
    pub fn should_process_module(&self, name: &str) -> bool {
        // If --only is specified, only process those modules
        if !self.only.is_empty() {
            return self.only.iter().any(|m| m == name);
        }
        !self.exclude.iter().any(|m| m == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(["modcheck"]);
        assert_eq!(args.path, PathBuf::from("modules"));
        assert!(!args.remote);
        assert!(!args.json);
        assert!(!args.verbose);
        assert!(!args.quiet);
        assert!(!args.no_color);
        assert!(args.exclude.is_empty());
        assert!(args.only.is_empty());
        assert_eq!(args.api_url, "https://api.github.com");
        assert_eq!(args.timeout, Duration::from_secs(30));
        assert_eq!(args.concurrency, DEFAULT_CONCURRENCY);
        assert!(!args.strict);
    }

    #[test]
    fn test_path_argument() {
        let args = CliArgs::parse_from(["modcheck", "/registry/modules"]);
        assert_eq!(args.path, PathBuf::from("/registry/modules"));
    }

    #[test]
    fn test_remote_and_strict() {
        let args = CliArgs::parse_from(["modcheck", "--remote", "--strict"]);
        assert!(args.remote);
        assert!(args.strict);
    }

    #[test]
    fn test_quiet_flags() {
        let args = CliArgs::parse_from(["modcheck", "-q"]);
        assert!(args.quiet);

        let args = CliArgs::parse_from(["modcheck", "--quiet"]);
        assert!(args.quiet);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = CliArgs::try_parse_from(["modcheck", "--quiet", "--verbose"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_exclude_and_only_multiple() {
        let args = CliArgs::parse_from([
            "modcheck",
            "--exclude",
            "score_cr_checker",
            "--exclude",
            "score_starpls_lsp",
        ]);
        assert_eq!(args.exclude, vec!["score_cr_checker", "score_starpls_lsp"]);

        let args = CliArgs::parse_from(["modcheck", "--only", "a", "--only", "b"]);
        assert_eq!(args.only, vec!["a", "b"]);
    }

    #[test]
    fn test_should_process_module() {
        let args = CliArgs::parse_from(["modcheck"]);
        assert!(args.should_process_module("anything"));

        let args = CliArgs::parse_from(["modcheck", "--exclude", "foo"]);
        assert!(!args.should_process_module("foo"));
        assert!(args.should_process_module("bar"));

        let args = CliArgs::parse_from(["modcheck", "--only", "foo"]);
        assert!(args.should_process_module("foo"));
        assert!(!args.should_process_module("bar"));
    }

    #[test]
    fn test_api_url_override() {
        let args = CliArgs::parse_from(["modcheck", "--api-url", "http://localhost:8080"]);
        assert_eq!(args.api_url, "http://localhost:8080");
    }

    #[test]
    fn test_timeout_argument() {
        let args = CliArgs::parse_from(["modcheck", "--timeout", "2m"]);
        assert_eq!(args.timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_concurrency_argument() {
        let args = CliArgs::parse_from(["modcheck", "--concurrency", "8"]);
        assert_eq!(args.concurrency, 8);

        assert!(CliArgs::try_parse_from(["modcheck", "--concurrency", "0"]).is_err());
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("30s").unwrap(), Duration::from_secs(30));
        assert_eq!(parse_duration("2m").unwrap(), Duration::from_secs(120));
        assert_eq!(parse_duration("500ms").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_duration("10").unwrap(), Duration::from_secs(10));
    }

    #[test]
    fn test_parse_duration_invalid() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("abc").is_err());
        assert!(parse_duration("10x").is_err());
        assert!(parse_duration("0s").is_err());
    }

    #[test]
    fn test_parse_duration_minutes_overflow() {
        let err = parse_duration("307445734561825862m").unwrap_err();
        assert!(err.contains("invalid duration format"));
        assert!(CliArgs::try_parse_from(["modcheck", "--timeout", "307445734561825862m"]).is_err());
    }

    #[test]
    fn test_combined_flags() {
        let args = CliArgs::parse_from([
            "modcheck",
            "/path/to/modules",
            "--remote",
            "--verbose",
            "--only",
            "score_cr_checker",
            "--timeout",
            "5s",
            "--json",
        ]);
        assert_eq!(args.path, PathBuf::from("/path/to/modules"));
        assert!(args.remote);
        assert!(args.verbose);
        assert_eq!(args.only, vec!["score_cr_checker"]);
        assert_eq!(args.timeout, Duration::from_secs(5));
        assert!(args.json);
    }
}

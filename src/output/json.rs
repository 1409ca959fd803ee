//! JSON output formatter for machine processing
//!
//! This module provides:
//! - JSON serialization of the local scan (`name -> version | null`)
//! - Structured per-module comparison results

use crate::domain::{CheckSummary, LocalVersion, ModuleStatus};
use crate::output::{OutputFormatter, Verbosity};
use crate::scanner::ScanReport;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of a local scan
#[derive(Serialize)]
struct JsonScan<'a> {
    /// Modules root that was scanned
    root: String,
    /// Module name -> recorded version (null when unknown)
    modules: &'a BTreeMap<String, LocalVersion>,
    /// Per-file errors
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

/// JSON representation of a comparison run
#[derive(Serialize)]
struct JsonCheck<'a> {
    /// Modules root that was scanned
    root: String,
    /// Summary statistics
    summary: JsonSummary,
    /// Per-module results
    modules: Vec<JsonModule<'a>>,
    /// Per-file errors from the scan
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

/// JSON representation of summary statistics
#[derive(Serialize)]
struct JsonSummary {
    up_to_date: usize,
    differs: usize,
    unresolved: usize,
}

/// JSON representation of one compared module
#[derive(Serialize)]
struct JsonModule<'a> {
    /// Module name
    name: &'a str,
    /// Upstream module definition URL (verbose only)
    #[serde(skip_serializing_if = "Option::is_none")]
    module_url: Option<&'a str>,
    /// Locally recorded version
    local: Option<&'a str>,
    /// Latest release tag
    latest: Option<&'a str>,
    /// Latest release archive
    tarball_url: Option<&'a str>,
    /// Latest release publication time
    #[serde(skip_serializing_if = "Option::is_none")]
    published_at: Option<DateTime<Utc>>,
    /// Comparison status
    status: ModuleStatus,
}

impl JsonFormatter {
    /// Serialize a value as pretty JSON followed by a newline
    fn write_json<T: Serialize>(value: &T, writer: &mut dyn Write) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, value)?;
        writeln!(writer)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_scan(&self, report: &ScanReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonScan {
            root: report.root.display().to_string(),
            modules: &report.versions,
            errors: report.errors.clone(),
        };
        Self::write_json(&output, writer)
    }

    fn format_check(
        &self,
        report: &ScanReport,
        summary: &CheckSummary,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let verbose = self.verbosity == Verbosity::Verbose;
        let modules = summary
            .checks
            .iter()
            .map(|check| JsonModule {
                name: check.module.name,
                module_url: verbose.then_some(check.module.module_url),
                local: check.local.as_ref().and_then(|v| v.as_str()),
                latest: check.release.version(),
                tarball_url: check.release.tarball_url(),
                published_at: check.release.published_at(),
                status: check.status,
            })
            .collect();

        let output = JsonCheck {
            root: report.root.display().to_string(),
            summary: JsonSummary {
                up_to_date: summary.count(ModuleStatus::UpToDate),
                differs: summary.count(ModuleStatus::Differs),
                unresolved: summary.unresolved_count(),
            },
            modules,
            errors: report.errors.clone(),
        };
        Self::write_json(&output, writer)
    }
}

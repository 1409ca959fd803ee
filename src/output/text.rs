//! Text output formatter for human-readable display
//!
//! This module provides:
//! - One `name: version` line per scanned module (`None` when unknown)
//! - An aligned comparison table with colored status labels
//! - A short summary line in verbose mode

use crate::domain::{CheckSummary, ModuleCheck, ModuleStatus};
use crate::output::{OutputFormatter, Verbosity};
use crate::scanner::ScanReport;
use colored::Colorize;
use std::io::Write;

/// Placeholder for a version that could not be determined
const NONE_LABEL: &str = "None";

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    /// Format a status label, colored when enabled
    fn status_label(&self, status: ModuleStatus) -> String {
        let label = status.label();
        if !self.color {
            return label.to_string();
        }
        match status {
            ModuleStatus::UpToDate => label.green().to_string(),
            ModuleStatus::Differs => label.yellow().bold().to_string(),
            ModuleStatus::LocalUnknown | ModuleStatus::RemoteUnknown => label.red().to_string(),
            ModuleStatus::NotVendored => label.dimmed().to_string(),
        }
    }

    /// Format a single comparison line
    fn format_check_line(
        &self,
        check: &ModuleCheck,
        max_name_len: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let local = match &check.local {
            Some(version) => version.as_str().unwrap_or(NONE_LABEL),
            None => "-",
        };
        let latest = check.release.version().unwrap_or(NONE_LABEL);
        let date = check
            .release
            .published_at()
            .map(|d| format!(" ({})", d.format("%Y/%m/%d %H:%M")))
            .unwrap_or_default();

        let name = format!("{:width$}", check.module.name, width = max_name_len);
        let status = self.status_label(check.status);

        if self.color {
            writeln!(
                writer,
                "  {} {} {} {} [{}]{}",
                name,
                local.dimmed(),
                "→".dimmed(),
                latest.bright_white().bold(),
                status,
                date.dimmed()
            )
        } else {
            writeln!(
                writer,
                "  {} {} → {} [{}]{}",
                name, local, latest, status, date
            )
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format_scan(&self, report: &ScanReport, writer: &mut dyn Write) -> std::io::Result<()> {
        for (name, version) in &report.versions {
            if self.color {
                let version = match version.as_str() {
                    Some(v) => v.normal(),
                    None => NONE_LABEL.dimmed(),
                };
                writeln!(writer, "{}: {}", name.bold(), version)?;
            } else {
                writeln!(writer, "{}: {}", name, version)?;
            }
        }

        if self.verbosity == Verbosity::Verbose {
            writeln!(writer)?;
            writeln!(
                writer,
                "{} modules in {} ({} unknown)",
                report.len(),
                report.root.display(),
                report.unknown_count()
            )?;
        }

        Ok(())
    }

    fn format_check(
        &self,
        report: &ScanReport,
        summary: &CheckSummary,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if summary.checks.is_empty() {
            if self.verbosity != Verbosity::Quiet {
                writeln!(writer, "No tracked modules selected.")?;
            }
            return Ok(());
        }

        let max_name_len = summary
            .checks
            .iter()
            .map(|c| c.module.name.len())
            .max()
            .unwrap_or(0);

        if self.verbosity != Verbosity::Quiet {
            let header = format!("Modules in {}", report.root.display());
            if self.color {
                writeln!(writer, "{}", header.bold())?;
            } else {
                writeln!(writer, "{}", header)?;
            }
        }

        for check in &summary.checks {
            if self.verbosity == Verbosity::Quiet && check.status == ModuleStatus::UpToDate {
                continue;
            }
            self.format_check_line(check, max_name_len, writer)?;
            if self.verbosity == Verbosity::Verbose {
                if let Some(url) = check.release.tarball_url() {
                    writeln!(writer, "  {:width$} {}", "", url, width = max_name_len)?;
                }
            }
        }

        if self.verbosity != Verbosity::Quiet {
            writeln!(writer)?;
            writeln!(
                writer,
                "{} up to date, {} differ, {} unresolved",
                summary.count(ModuleStatus::UpToDate),
                summary.count(ModuleStatus::Differs),
                summary.unresolved_count()
            )?;
        }

        Ok(())
    }
}

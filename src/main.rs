//! modcheck - Vendored module version checker CLI tool
//!
//! Scans a modules root for `metadata.json` version records and, with
//! `--remote`, compares them against the latest GitHub release of every
//! tracked module.

use clap::Parser;
use modcheck::checker::Checker;
use modcheck::cli::CliArgs;
use modcheck::domain::{ModuleDescriptor, TOOLING_MODULES};
use modcheck::output::{create_formatter, OutputConfig};
use modcheck::scanner::scan_modules;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(&args);

    // Run the main logic and handle errors
    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize the stderr logger
///
/// `RUST_LOG` takes precedence over the verbosity flags.
fn init_logging(args: &CliArgs) {
    let default_level = if args.verbose {
        "debug"
    } else if args.quiet {
        "error"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(!args.no_color)
        .init();
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.no_color {
        colored::control::set_override(false);
    }

    debug!("modcheck v{}", env!("CARGO_PKG_VERSION"));
    debug!("Modules root: {}", args.path.display());

    let report = scan_modules(&args.path)?;

    let output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet, args.no_color);
    let formatter = create_formatter(output_config);
    let mut stdout = io::stdout().lock();

    let unresolved = if args.remote {
        let modules: Vec<ModuleDescriptor> = TOOLING_MODULES
            .iter()
            .filter(|m| args.should_process_module(m.name))
            .copied()
            .collect();

        let checker = Checker::new(&args)?;
        let summary = checker.check(&modules, &report).await;
        formatter.format_check(&report, &summary, &mut stdout)?;
        summary.unresolved_count()
    } else {
        formatter.format_scan(&report, &mut stdout)?;
        report.unknown_count()
    };
    stdout.flush()?;

    if args.strict && unresolved > 0 {
        // Partial success - some versions could not be resolved
        return Ok(ExitCode::from(2));
    }

    Ok(ExitCode::SUCCESS)
}

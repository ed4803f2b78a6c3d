use crate::cli::BatchArgs;
use crate::config::builder::build_config;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use poscar2data::engine::progress::ProgressReporter;
use poscar2data::workflows::batch::{self, BatchReport};
use tracing::{info, warn};

pub fn run(args: BatchArgs, quiet: bool) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let config = build_config(&args.conversion, args.parallel)?;

    let progress_handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!(
        "Scanning {:?} for '*{}' files (parallel: {})",
        &args.dir, config.discovery.suffix, config.parallel
    );
    let report = batch::run(&args.dir, &config, &reporter)?;

    if report.total() == 0 {
        warn!("No files ending in '{}' found.", config.discovery.suffix);
        println!(
            "No files ending in '{}' found in {}.",
            config.discovery.suffix,
            args.dir.display()
        );
        return Ok(());
    }

    for line in summary_lines(&report) {
        println!("{}", line);
    }

    if report.failed() > 0 {
        return Err(CliError::BatchFailed {
            failed: report.failed(),
            total: report.total(),
        });
    }
    Ok(())
}

/// Lines printed after the batch. Failures are already shown by the progress
/// handler as they happen, so only successes and the final tally appear here.
fn summary_lines(report: &BatchReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .outcomes
        .iter()
        .filter_map(|outcome| {
            outcome.result.as_ref().ok().map(|summary| {
                format!(
                    "  {} -> {} ({} atoms)",
                    outcome.input.display(),
                    outcome.output.display(),
                    summary.atoms
                )
            })
        })
        .collect();
    lines.push(format!(
        "Converted {} of {} file(s).",
        report.converted(),
        report.total()
    ));
    lines
}

use super::convert::{ConversionSummary, convert_file};
use crate::engine::config::ConversionConfig;
use crate::engine::error::ConvertError;
use crate::engine::progress::{Progress, ProgressReporter};
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Lists the regular files in `dir` whose name ends with `suffix`, sorted by path.
///
/// A file named exactly `suffix` is skipped, since it would produce an output
/// name with an empty stem.
pub fn discover(dir: &Path, suffix: &str) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.len() > suffix.len() && name.ends_with(suffix));
        if matches {
            found.push(path);
        }
    }
    found.sort();
    Ok(found)
}

/// Derives the output path by replacing the trailing `suffix` of the file name
/// with `extension`. Names without the suffix get the extension appended.
///
/// `Ti3Al-POSCAR` becomes `Ti3Al.lmp` with the default settings.
pub fn output_path_for(input: &Path, suffix: &str, extension: &str) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name.strip_suffix(suffix).unwrap_or(&name);
    input.with_file_name(format!("{}{}", stem, extension))
}

#[derive(Debug)]
pub struct BatchOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub result: Result<ConversionSummary, ConvertError>,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<BatchOutcome>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn converted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.converted()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&Path, &ConvertError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.input.as_path(), e)))
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Converts every structure file in `dir` that matches the configured suffix.
///
/// Each file is an independent unit of work: a failure is recorded in the
/// report and the remaining files are still converted. With
/// `config.parallel` set the files are converted on the rayon thread pool;
/// outcomes keep the sorted discovery order either way.
///
/// # Errors
///
/// Returns an I/O error only if `dir` itself cannot be listed.
pub fn run(
    dir: &Path,
    config: &ConversionConfig,
    reporter: &ProgressReporter,
) -> io::Result<BatchReport> {
    let inputs = discover(dir, &config.discovery.suffix)?;
    info!(
        "Found {} file(s) ending in '{}' in {:?}",
        inputs.len(),
        config.discovery.suffix,
        dir
    );
    reporter.report(Progress::BatchStart {
        total: inputs.len() as u64,
    });

    let convert_one = |input: &PathBuf| -> BatchOutcome {
        let name = display_name(input);
        let output = output_path_for(input, &config.discovery.suffix, &config.discovery.extension);
        reporter.report(Progress::FileStart { name: name.clone() });

        let result = convert_file(input, &output, config);
        match &result {
            Ok(summary) => reporter.report(Progress::FileConverted {
                name,
                atoms: summary.atoms,
            }),
            Err(e) => {
                debug!("Skipping {:?}: {}", input, e);
                reporter.report(Progress::FileFailed {
                    name,
                    reason: e.to_string(),
                });
            }
        }

        BatchOutcome {
            input: input.clone(),
            output,
            result,
        }
    };

    let outcomes: Vec<BatchOutcome> = if config.parallel {
        inputs.par_iter().map(convert_one).collect()
    } else {
        inputs.iter().map(convert_one).collect()
    };

    let report = BatchReport { outcomes };
    reporter.report(Progress::BatchFinish {
        converted: report.converted(),
        failed: report.failed(),
    });
    Ok(report)
}

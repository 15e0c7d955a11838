//! Lines-of-code measurement over code maps.

pub mod counter;
pub mod report;

use std::error::Error;
use std::path::PathBuf;

pub use counter::{LineWindow, measure};
pub use report::{FileReport, LocResult, SourceLine};

use crate::config::Config;
use crate::source::SourceFile;
use crate::walk;

/// Options of a `loc` run after CLI flags and config are merged.
#[derive(Debug, Clone, Default)]
pub struct LocOptions {
    pub window: LineWindow,
    pub json: bool,
    pub listing: bool,
    pub include_tests: bool,
    pub pattern: Option<String>,
}

/// Measure every supported file under `paths`. Files that cannot be read
/// are logged and skipped.
pub fn collect(
    paths: &[PathBuf],
    options: &LocOptions,
    config: &Config,
) -> crate::Result<Vec<FileReport>> {
    let mut reports = Vec::new();
    for root in paths {
        for path in walk::find_files(root, options.pattern.as_deref(), options.include_tests)? {
            if config.dialect_for(&path).is_none() {
                continue;
            }
            let measured = SourceFile::open_with(&path, config)
                .and_then(|source| Ok((source.dialect(), source.measure(options.window)?)));
            match measured {
                Ok((dialect, result)) => reports.push(FileReport {
                    path,
                    dialect: dialect.name(),
                    result,
                }),
                Err(err) if err.is_skippable() => {
                    tracing::warn!("{err}");
                }
                Err(err) => return Err(err),
            }
        }
    }
    Ok(reports)
}

pub fn run(paths: &[PathBuf], options: &LocOptions, config: &Config) -> Result<(), Box<dyn Error>> {
    let reports = collect(paths, options, config)?;

    if options.json {
        report::print_json(&reports, options.listing)?;
    } else if options.listing {
        report::print_listing(&reports);
    } else {
        report::print_report(&reports);
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

//! Character-level code maps.
//!
//! A code map assigns a `CharKind` to every character of a source file:
//! code, blank, line comment, block comment, doc comment, or comment that is
//! really disabled code.

pub mod dialect;
pub mod document;
mod fsm;
pub mod heuristic;
pub mod kind;
pub mod line;
pub mod report;
pub mod scanner;

use std::error::Error;
use std::path::Path;

pub use dialect::{Dialect, DialectSpec};
pub use document::{CodeMap, MapSummary};
pub use fsm::State;
pub use kind::CharKind;
pub use line::{KindCounts, LineMap};
pub use scanner::{Scanner, decode_lines, scan, scan_reader, select, split_lines};

use crate::config::Config;
use crate::source::SourceFile;

/// Print the code map of one file. `dialect` overrides extension detection.
pub fn run(
    path: &Path,
    dialect: Option<Dialect>,
    json: bool,
    config: &Config,
) -> Result<(), Box<dyn Error>> {
    let source = match dialect {
        Some(d) => SourceFile::with_dialect(path, d)?,
        None => SourceFile::open_with(path, config)?,
    };
    let lines = source.read_lines()?;
    let map = scan(source.dialect(), &lines);

    if json {
        report::print_json(source.path(), &map)?;
    } else {
        report::print_report(source.path(), &lines, &map);
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use std::path::Path;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::error::Result;

/// Terminal width of the widest path, never less than `min`.
pub fn max_path_width<'a>(paths: impl Iterator<Item = &'a Path>, min: usize) -> usize {
    paths
        .map(|p| p.display().to_string().width())
        .max()
        .unwrap_or(min)
        .max(min)
}

/// Horizontal rule of box-drawing chars.
pub fn separator(width: usize) -> String {
    "\u{2500}".repeat(width)
}

/// Serialize to pretty JSON and print to stdout.
pub fn print_json_stdout(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
#[path = "report_helpers_test.rs"]
mod tests;

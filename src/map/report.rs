use std::path::Path;

use serde::Serialize;
use unicode_width::UnicodeWidthChar;

use super::document::{CodeMap, MapSummary};
use super::line::LineMap;
use crate::report_helpers;

/// Tab stops used when rendering a map under its source.
pub const TAB_WIDTH: usize = 8;

/// Display width of each character of `source`, with tabs running to the
/// next tab stop.
fn column_widths(source: &str) -> impl Iterator<Item = (char, usize)> + '_ {
    let mut column = 0;
    source.chars().map(move |ch| {
        let width = if ch == '\t' {
            TAB_WIDTH - column % TAB_WIDTH
        } else {
            ch.width().unwrap_or(0).max(1)
        };
        column += width;
        (ch, width)
    })
}

/// Symbol string of `map` stretched to the display width of `source`, so a
/// double-width character gets two copies of its symbol and a tab one per
/// column it spans.
pub fn aligned_symbols(source: &str, map: &LineMap) -> String {
    column_widths(source)
        .zip(map.kinds())
        .flat_map(|((_, width), kind)| std::iter::repeat_n(kind.symbol(), width))
        .collect()
}

/// `source` with tabs replaced by spaces up to the next tab stop.
pub fn expand_tabs(source: &str) -> String {
    column_widths(source)
        .flat_map(|(ch, width)| {
            let (ch, count) = if ch == '\t' { (' ', width) } else { (ch, 1) };
            std::iter::repeat_n(ch, count)
        })
        .collect()
}

pub fn print_report(path: &Path, lines: &[String], map: &CodeMap) {
    let width = map.len().to_string().len();
    println!("[{}] ({})", path.display(), map.dialect());
    println!("{}", report_helpers::separator(68));
    for (i, (text, line)) in lines.iter().zip(map.iter()).enumerate() {
        println!("{:>width$}  {}", i + 1, expand_tabs(text));
        println!("{:>width$}  {}", "", aligned_symbols(text, line));
    }
    println!("{}", report_helpers::separator(68));
    print_summary(&map.summary());
}

fn print_summary(s: &MapSummary) {
    println!(
        " lines {}  code {}  blank {}  comment {}  commented-out {}",
        s.lines, s.code_lines, s.blank_lines, s.comment_lines, s.commented_out_lines
    );
    println!(
        " chars b{} c{} t{} e{} ec{} tc{} d{}",
        s.chars.blank,
        s.chars.code,
        s.chars.block_comment,
        s.chars.line_comment,
        s.chars.line_comment_out,
        s.chars.block_comment_out,
        s.chars.doc_comment
    );
}

#[derive(Serialize)]
struct JsonLine {
    line: usize,
    map: String,
    code: usize,
    blank: usize,
    comment: usize,
    commented_out: usize,
}

#[derive(Serialize)]
struct JsonOutput {
    path: String,
    dialect: &'static str,
    summary: MapSummary,
    lines: Vec<JsonLine>,
}

pub fn print_json(path: &Path, map: &CodeMap) -> crate::Result<()> {
    let lines = map
        .iter()
        .enumerate()
        .map(|(i, l)| JsonLine {
            line: i + 1,
            map: l.symbols(),
            code: l.code_count(),
            blank: l.blank_count(),
            comment: l.comment_count(),
            commented_out: l.counts().commented_out(),
        })
        .collect();
    let output = JsonOutput {
        path: path.display().to_string(),
        dialect: map.dialect().name(),
        summary: map.summary(),
        lines,
    };
    report_helpers::print_json_stdout(&output)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::report_helpers;

/// One line of a measured window with its LOC number, if it holds code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLine {
    pub content: String,
    pub number: Option<usize>,
}

impl fmt::Display for SourceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.number {
            Some(n) => write!(f, "{n}: {}", self.content),
            None => write!(f, "   {}", self.content),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocResult {
    pub loc: usize,
    pub blank: usize,
    /// Lines with comments and no code.
    pub comment_lines: usize,
    /// Lines holding any commented-out code, with or without live code.
    pub commented_out_lines: usize,
    pub lines: Vec<SourceLine>,
}

impl LocResult {
    /// Physical lines inside the window, code or not.
    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SourceLine> {
        self.lines.iter()
    }
}

/// A measured file, as collected by a batch run.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub dialect: &'static str,
    pub result: LocResult,
}

/// Annotated listing of one file: header, then every line between rulers.
pub fn render_listing(path: &Path, result: &LocResult) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy());
    let mut out = format!(
        "[{name}]\nLOC = {}\n# of lines = {}\n\n",
        result.loc,
        result.total_lines()
    );
    out.push_str("--(source code)--------------------------------------\n");
    for line in result.iter() {
        out.push_str(&line.to_string());
        out.push('\n');
    }
    out.push_str("--(end of source code)------------------------------\n");
    out
}

pub fn print_listing(reports: &[FileReport]) {
    for (i, r) in reports.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print!("{}", render_listing(&r.path, &r.result));
    }
}

pub fn print_report(reports: &[FileReport]) {
    if reports.is_empty() {
        println!("No supported source files found.");
        return;
    }

    let path_width =
        report_helpers::max_path_width(reports.iter().map(|r| r.path.as_path()), 20);
    let width = path_width + 48;
    let separator = report_helpers::separator(width);

    println!("{separator}");
    println!(
        " {:<path_width$} {:>6} {:>7} {:>7} {:>7} {:>7} {:>7}",
        "File", "Lang", "Lines", "Blank", "Comment", "Out", "LOC"
    );
    println!("{separator}");

    let mut total = Totals::default();
    for r in reports {
        let res = &r.result;
        println!(
            " {:<path_width$} {:>6} {:>7} {:>7} {:>7} {:>7} {:>7}",
            r.path.display(),
            r.dialect,
            res.total_lines(),
            res.blank,
            res.comment_lines,
            res.commented_out_lines,
            res.loc
        );
        total.add(res);
    }

    println!("{separator}");
    println!(
        " {:<path_width$} {:>6} {:>7} {:>7} {:>7} {:>7} {:>7}",
        format!("SUM: {} files", total.files),
        "",
        total.lines,
        total.blank,
        total.comment_lines,
        total.commented_out_lines,
        total.loc
    );
    println!("{separator}");
}

#[derive(Debug, Default, Serialize)]
struct Totals {
    files: usize,
    lines: usize,
    blank: usize,
    comment_lines: usize,
    commented_out_lines: usize,
    loc: usize,
}

impl Totals {
    fn add(&mut self, r: &LocResult) {
        self.files += 1;
        self.lines += r.total_lines();
        self.blank += r.blank;
        self.comment_lines += r.comment_lines;
        self.commented_out_lines += r.commented_out_lines;
        self.loc += r.loc;
    }
}

#[derive(Serialize)]
struct JsonFile<'a> {
    path: String,
    dialect: &'static str,
    loc: usize,
    lines: usize,
    blank: usize,
    comment_lines: usize,
    commented_out_lines: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    listing: Option<&'a [SourceLine]>,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    files: Vec<JsonFile<'a>>,
    totals: Totals,
}

fn json_output(reports: &[FileReport], listing: bool) -> JsonOutput<'_> {
    let mut totals = Totals::default();
    let files = reports
        .iter()
        .map(|r| {
            totals.add(&r.result);
            JsonFile {
                path: r.path.display().to_string(),
                dialect: r.dialect,
                loc: r.result.loc,
                lines: r.result.total_lines(),
                blank: r.result.blank,
                comment_lines: r.result.comment_lines,
                commented_out_lines: r.result.commented_out_lines,
                listing: listing.then_some(r.result.lines.as_slice()),
            }
        })
        .collect();
    JsonOutput { files, totals }
}

pub fn print_json(reports: &[FileReport], listing: bool) -> crate::Result<()> {
    report_helpers::print_json_stdout(&json_output(reports, listing))
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;

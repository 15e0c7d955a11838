use super::*;
use crate::map::{Dialect, scan};

const SUM: [&str; 5] = [
    "int n = 123;",
    "int sum;",
    "",
    "// compute the sum of natural numbers less than 123",
    "sum = 0;",
];

fn measure_c(lines: &[&str], window: LineWindow) -> LocResult {
    let map = scan(Dialect::C, lines);
    measure(&map, lines, window)
}

fn numbers(result: &LocResult) -> Vec<Option<usize>> {
    result.iter().map(|l| l.number).collect()
}

#[test]
fn window_normalises_bounds() {
    assert_eq!(LineWindow::new(0, None), LineWindow::all());
    assert_eq!(LineWindow::new(1, Some(0)), LineWindow::all());
    assert_eq!(LineWindow::default().begin(), 1);
    assert_eq!(LineWindow::new(3, Some(7)).end(), Some(7));
}

#[test]
fn window_contains_is_end_exclusive() {
    let w = LineWindow::new(2, Some(4));
    assert!(!w.contains(1));
    assert!(w.contains(2));
    assert!(w.contains(3));
    assert!(!w.contains(4));
    assert!(LineWindow::all().contains(usize::MAX));
}

#[test]
fn measure_whole_file() {
    let r = measure_c(&SUM, LineWindow::all());
    assert_eq!(r.loc, 3);
    assert_eq!(r.blank, 1);
    assert_eq!(r.comment_lines, 1);
    assert_eq!(r.commented_out_lines, 0);
    assert_eq!(r.total_lines(), 5);
    assert_eq!(numbers(&r), vec![Some(1), Some(2), None, None, Some(3)]);
    assert_eq!(r.lines[3].content, SUM[3]);
}

#[test]
fn measure_window_skips_and_stops() {
    let r = measure_c(&SUM, LineWindow::new(2, Some(4)));
    assert_eq!(r.total_lines(), 2);
    assert_eq!(r.lines[0].content, "int sum;");
    assert_eq!(r.lines[1].content, "");
    assert_eq!(numbers(&r), vec![Some(1), None]);
    assert_eq!(r.loc, 1);
    assert_eq!(r.blank, 1);
}

#[test]
fn measure_from_begin_to_end_of_file() {
    let r = measure_c(&SUM, LineWindow::new(4, None));
    assert_eq!(numbers(&r), vec![None, Some(1)]);
}

#[test]
fn measure_end_before_begin_is_empty() {
    let r = measure_c(&SUM, LineWindow::new(4, Some(2)));
    assert_eq!(r, LocResult::default());
}

#[test]
fn measure_end_equal_begin_is_empty() {
    let r = measure_c(&SUM, LineWindow::new(3, Some(3)));
    assert_eq!(r.total_lines(), 0);
}

#[test]
fn measure_counts_commented_out_lines() {
    let lines = ["int a;", "// a = 1;", "/*", "b = 2;", "*/", "int c; // x++;"];
    let r = measure_c(&lines, LineWindow::all());
    assert_eq!(r.loc, 2);
    assert_eq!(r.blank, 0);
    assert_eq!(r.comment_lines, 4);
    assert_eq!(r.commented_out_lines, 5);
    assert_eq!(numbers(&r), vec![Some(1), None, None, None, None, Some(2)]);
}

#[test]
fn measure_whitespace_only_line_is_blank() {
    let lines = ["  \t", "x;"];
    let r = measure_c(&lines, LineWindow::all());
    assert_eq!(r.blank, 1);
    assert_eq!(r.loc, 1);
}

#[test]
fn measure_missing_raw_line_is_empty_content() {
    let map = scan(Dialect::C, ["int a;", "int b;"]);
    let r = measure(&map, &["int a;"], LineWindow::all());
    assert_eq!(r.loc, 2);
    assert_eq!(r.lines[1].content, "");
}

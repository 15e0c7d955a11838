use super::*;
use std::path::PathBuf;

use crate::map::{Dialect, scan};

#[test]
fn aligned_symbols_ascii_is_plain_symbols() {
    let map = scan(Dialect::C, ["x = 1; // y"]);
    let line = map.line(1).unwrap();
    assert_eq!(aligned_symbols("x = 1; // y", line), line.symbols());
}

#[test]
fn aligned_symbols_widens_double_width_chars() {
    let text = "s = \"漢\";";
    let map = scan(Dialect::C, [text]);
    let line = map.line(1).unwrap();
    assert_eq!(line.symbols(), "10101111");
    assert_eq!(aligned_symbols(text, line), "101011111");
}

#[test]
fn print_report_runs() {
    let lines = vec!["int x; /* a; */".to_string(), String::new()];
    let map = scan(Dialect::C, &lines);
    print_report(&PathBuf::from("a.c"), &lines, &map);
}

#[test]
fn print_json_runs() {
    let map = scan(Dialect::Java, ["/** doc */", "int x;"]);
    print_json(&PathBuf::from("A.java"), &map).unwrap();
}

#[test]
fn print_json_empty_map() {
    let map = scan(Dialect::C, Vec::<String>::new());
    print_json(&PathBuf::from("empty.c"), &map).unwrap();
}

#[test]
fn aligned_symbols_expand_tabs_to_tab_stops() {
    let text = "\tx;";
    let map = scan(Dialect::C, [text]);
    let line = map.line(1).unwrap();
    assert_eq!(line.symbols(), "011");
    assert_eq!(aligned_symbols(text, line), "0000000011");
    assert_eq!(expand_tabs(text), "        x;");
}

#[test]
fn tabs_after_text_run_to_next_stop() {
    let text = "ab\t// c";
    let map = scan(Dialect::C, [text]);
    let line = map.line(1).unwrap();
    assert_eq!(expand_tabs(text), "ab      // c");
    assert_eq!(aligned_symbols(text, line), "110000002222");
    assert_eq!(
        aligned_symbols(text, line).chars().count(),
        expand_tabs(text).chars().count()
    );
}

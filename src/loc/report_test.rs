use super::*;
use crate::loc::{LineWindow, measure};
use crate::map::{Dialect, scan};

fn sample() -> LocResult {
    let lines = ["int n = 123;", "", "// note", "n++;"];
    let map = scan(Dialect::C, lines);
    measure(&map, &lines, LineWindow::all())
}

#[test]
fn source_line_display() {
    let numbered = SourceLine {
        content: "int x;".to_string(),
        number: Some(12),
    };
    let plain = SourceLine {
        content: "// hi".to_string(),
        number: None,
    };
    assert_eq!(numbered.to_string(), "12: int x;");
    assert_eq!(plain.to_string(), "   // hi");
}

#[test]
fn listing_layout() {
    let text = render_listing(Path::new("src/calc.c"), &sample());
    let expected = concat!(
        "[calc.c]\n",
        "LOC = 2\n",
        "# of lines = 4\n",
        "\n",
        "--(source code)--------------------------------------\n",
        "1: int n = 123;\n",
        "   \n",
        "   // note\n",
        "2: n++;\n",
        "--(end of source code)------------------------------\n",
    );
    assert_eq!(text, expected);
}

#[test]
fn json_output_totals_and_optional_listing() {
    let reports = vec![
        FileReport {
            path: PathBuf::from("a.c"),
            dialect: "C",
            result: sample(),
        },
        FileReport {
            path: PathBuf::from("B.java"),
            dialect: "Java",
            result: sample(),
        },
    ];

    let value = serde_json::to_value(json_output(&reports, false)).unwrap();
    assert_eq!(value["totals"]["files"], 2);
    assert_eq!(value["totals"]["loc"], 4);
    assert_eq!(value["totals"]["blank"], 2);
    assert_eq!(value["files"][1]["dialect"], "Java");
    assert!(value["files"][0].get("listing").is_none());

    let value = serde_json::to_value(json_output(&reports, true)).unwrap();
    assert_eq!(value["files"][0]["listing"][0]["number"], 1);
    assert!(value["files"][0]["listing"][1]["number"].is_null());
}

#[test]
fn print_functions_run() {
    let reports = vec![FileReport {
        path: PathBuf::from("a.c"),
        dialect: "C",
        result: sample(),
    }];
    print_report(&reports);
    print_report(&[]);
    print_listing(&reports);
    print_json(&reports, true).unwrap();
}

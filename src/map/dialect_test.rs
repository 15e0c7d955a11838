use super::*;
use std::path::Path;

#[test]
fn detect_java() {
    assert_eq!(Dialect::detect(Path::new("src/Main.java")), Some(Dialect::Java));
}

#[test]
fn detect_c_family_extensions() {
    for name in [
        "a.c", "a.cpp", "a.cc", "a.cxx", "a.h", "a.hpp", "a.hxx", "a.m", "a.i", "a.ii",
    ] {
        assert_eq!(Dialect::detect(Path::new(name)), Some(Dialect::C), "{name}");
    }
}

#[test]
fn detect_is_case_insensitive() {
    assert_eq!(Dialect::detect(Path::new("MAIN.JAVA")), Some(Dialect::Java));
    assert_eq!(Dialect::detect(Path::new("util.CPP")), Some(Dialect::C));
    assert_eq!(Dialect::detect(Path::new("x.Hxx")), Some(Dialect::C));
}

#[test]
fn detect_unsupported() {
    assert_eq!(Dialect::detect(Path::new("main.rs")), None);
    assert_eq!(Dialect::detect(Path::new("Makefile")), None);
    assert_eq!(Dialect::detect(Path::new("archive.tar.gz")), None);
}

#[test]
fn only_java_has_doc_comments() {
    assert_eq!(Dialect::Java.spec().doc_comment, Some("/**"));
    assert_eq!(Dialect::C.spec().doc_comment, None);
}

#[test]
fn shared_delimiters() {
    for d in Dialect::ALL {
        assert_eq!(d.spec().line_comment, "//");
        assert_eq!(d.spec().block_comment, ("/*", "*/"));
    }
}

#[test]
fn parse_known_names() {
    assert_eq!("c".parse::<Dialect>().unwrap(), Dialect::C);
    assert_eq!("C++".parse::<Dialect>().unwrap(), Dialect::C);
    assert_eq!("Java".parse::<Dialect>().unwrap(), Dialect::Java);
}

#[test]
fn parse_unknown_name_is_an_error() {
    let err = "cobol".parse::<Dialect>().unwrap_err();
    assert!(matches!(err, Error::UnknownDialect(ref s) if s == "cobol"));
}

#[test]
fn display_uses_spec_name() {
    assert_eq!(Dialect::C.to_string(), "C");
    assert_eq!(Dialect::Java.to_string(), "Java");
}

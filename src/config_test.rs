use std::fs;
use std::path::Path;

use tempfile::tempdir;

use super::*;

#[test]
fn empty_config_is_default() {
    let c = Config::parse(Path::new("x.toml"), "").unwrap();
    assert!(!c.include_tests);
    assert!(c.pattern.is_none());
    assert!(c.extensions.is_empty());
}

#[test]
fn parses_all_keys() {
    let c = Config::parse(
        Path::new("x.toml"),
        r#"
include_tests = true
pattern = "**/*.java"

[extensions]
c = ["pc", ".inl"]
java = ["jav"]
"#,
    )
    .unwrap();
    assert!(c.include_tests);
    assert_eq!(c.pattern.as_deref(), Some("**/*.java"));
    assert_eq!(c.extensions[&Dialect::C], vec!["pc", ".inl"]);
    assert_eq!(c.extensions[&Dialect::Java], vec!["jav"]);
}

#[test]
fn unknown_dialect_key_is_an_error() {
    let err = Config::parse(Path::new("x.toml"), "[extensions]\ncobol = [\"cbl\"]\n").unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn unknown_field_is_an_error() {
    let err = Config::parse(Path::new("x.toml"), "colour = true\n").unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn invalid_toml_is_an_error() {
    let err = Config::parse(Path::new("bad.toml"), "include_tests = [").unwrap_err();
    assert!(err.to_string().contains("bad.toml"));
}

#[test]
fn dialect_for_builtin_and_extra_extensions() {
    let c = Config::parse(Path::new("x.toml"), "[extensions]\nc = [\"pc\", \".inl\"]\n").unwrap();
    assert_eq!(c.dialect_for(Path::new("a.java")), Some(Dialect::Java));
    assert_eq!(c.dialect_for(Path::new("a.pc")), Some(Dialect::C));
    assert_eq!(c.dialect_for(Path::new("a.INL")), Some(Dialect::C));
    assert_eq!(c.dialect_for(Path::new("a.rs")), None);
    assert_eq!(c.dialect_for(Path::new("README")), None);
}

#[test]
fn load_prefers_explicit_path() {
    let dir = tempdir().unwrap();
    let explicit = dir.path().join("custom.toml");
    fs::write(&explicit, "include_tests = true\n").unwrap();
    fs::write(dir.path().join(CONFIG_FILE), "include_tests = false\n").unwrap();

    let c = Config::load(Some(&explicit), dir.path()).unwrap();
    assert!(c.include_tests);
}

#[test]
fn load_reads_default_file_in_dir() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(CONFIG_FILE), "pattern = \"*.c\"\n").unwrap();
    let c = Config::load(None, dir.path()).unwrap();
    assert_eq!(c.pattern.as_deref(), Some("*.c"));
}

#[test]
fn load_without_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let c = Config::load(None, dir.path()).unwrap();
    assert!(!c.include_tests);
}

#[test]
fn load_missing_explicit_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = Config::load(Some(&dir.path().join("nope.toml")), dir.path()).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

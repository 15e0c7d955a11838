use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use ignore::WalkBuilder;

use crate::error::{Error, Result};

/// Test directory names skipped unless tests are included.
pub const TEST_DIRS: &[&str] = &["tests", "test", "__tests__", "spec"];

/// Check whether a C-family or Java file follows a test naming convention.
pub fn is_test_file(path: &Path) -> bool {
    let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let Some((base, ext)) = file_name.rsplit_once('.') else {
        return false;
    };

    match ext.to_ascii_lowercase().as_str() {
        "java" => base.ends_with("Test") || base.ends_with("Tests") || base.ends_with("IT"),
        "c" => base.ends_with("_test") || base.starts_with("test_") || base.ends_with("_unittest"),
        "cc" | "cpp" | "cxx" | "m" => {
            base.ends_with("_test")
                || base.starts_with("test_")
                || base.ends_with("_unittest")
                || base.ends_with("Test")
                || base.ends_with("Tests")
        }
        _ => false,
    }
}

/// Build a directory walker that respects `.gitignore`, skips `.git`,
/// and optionally excludes test directories.
pub fn walk(path: &Path, exclude_tests: bool) -> ignore::Walk {
    WalkBuilder::new(path)
        .hidden(false)
        .follow_links(false)
        .filter_entry(move |entry| {
            if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                if entry.file_name() == ".git" {
                    return false;
                }
                if exclude_tests
                    && entry.depth() > 0
                    && let Some(name) = entry.file_name().to_str()
                    && TEST_DIRS.contains(&name)
                {
                    return false;
                }
            }
            true
        })
        .build()
}

fn compile_pattern(pattern: Option<&str>) -> Result<Option<GlobMatcher>> {
    match pattern {
        Some(p) => Ok(Some(Glob::new(p)?.compile_matcher())),
        None => Ok(None),
    }
}

/// Regular files at or below `root` whose path relative to `root` matches
/// `pattern`, sorted. A `root` that is itself a file is matched by name.
/// An unreadable `root` is an error; failures below it are logged and
/// skipped.
pub fn find_files(root: &Path, pattern: Option<&str>, include_tests: bool) -> Result<Vec<PathBuf>> {
    let matcher = compile_pattern(pattern)?;
    let matches = |relative: &Path| matcher.as_ref().is_none_or(|m| m.is_match(relative));

    if root.is_file() {
        let name = root.file_name().map(Path::new).unwrap_or(root);
        return Ok(if matches(name) {
            vec![root.to_path_buf()]
        } else {
            Vec::new()
        });
    }

    let mut files = Vec::new();
    let mut root_read = false;
    for entry in walk(root, !include_tests) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) if !root_read => return Err(Error::Walk(err)),
            Err(err) => {
                tracing::warn!("{err}");
                continue;
            }
        };
        root_read = true;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let path = entry.path();
        if !include_tests && is_test_file(path) {
            continue;
        }
        let relative = path.strip_prefix(root).unwrap_or(path);
        if matches(relative) {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
#[path = "walk_test.rs"]
mod tests;

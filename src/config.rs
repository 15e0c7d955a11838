//! Project configuration read from `.locmap.toml`.
//!
//! Every key is optional; CLI flags override what the file says.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::map::Dialect;

pub const CONFIG_FILE: &str = ".locmap.toml";

#[derive(Debug, Default, Clone)]
pub struct Config {
    /// Walk test directories and test files too.
    pub include_tests: bool,
    /// Default glob for file discovery.
    pub pattern: Option<String>,
    /// Extra extensions per dialect, e.g. `c = ["pc"]`.
    pub extensions: HashMap<Dialect, Vec<String>>,
}

/// On-disk shape; dialect keys are validated after parsing.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    include_tests: bool,
    pattern: Option<String>,
    extensions: HashMap<String, Vec<String>>,
}

impl Config {
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let config_error = |message: String| Error::Config {
            path: path.to_path_buf(),
            message,
        };
        let raw: RawConfig =
            toml::from_str(content).map_err(|e| config_error(e.message().to_string()))?;

        let mut extensions = HashMap::new();
        for (key, exts) in raw.extensions {
            let dialect: Dialect = key.parse().map_err(|e: Error| config_error(e.to_string()))?;
            extensions.insert(dialect, exts);
        }

        Ok(Self {
            include_tests: raw.include_tests,
            pattern: raw.pattern,
            extensions,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::parse(path, &content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// `explicit` if given, else `.locmap.toml` in `dir` when it exists,
    /// else defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let default_path: PathBuf = dir.join(CONFIG_FILE);
        if default_path.is_file() {
            return Self::from_file(&default_path);
        }
        Ok(Self::default())
    }

    /// Dialect for `path`: built-in extensions first, then configured ones.
    pub fn dialect_for(&self, path: &Path) -> Option<Dialect> {
        if let Some(d) = Dialect::detect(path) {
            return Some(d);
        }
        let ext = path.extension()?.to_str()?;
        self.extensions.iter().find_map(|(dialect, exts)| {
            exts.iter()
                .any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(ext))
                .then_some(*dialect)
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

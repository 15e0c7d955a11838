use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Lexical rules of one dialect: comment delimiters and which extensions
/// belong to it. Everything the scanner needs to know about a language.
#[derive(Debug)]
pub struct DialectSpec {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
    pub line_comment: &'static str,
    pub block_comment: (&'static str, &'static str),
    /// Opener of a documentation comment; it shares the block closer.
    pub doc_comment: Option<&'static str>,
}

static C_FAMILY: DialectSpec = DialectSpec {
    name: "C",
    extensions: &["c", "cpp", "cc", "cxx", "h", "hpp", "hxx", "m", "i", "ii"],
    line_comment: "//",
    block_comment: ("/*", "*/"),
    doc_comment: None,
};

static JAVA_FAMILY: DialectSpec = DialectSpec {
    name: "Java",
    extensions: &["java"],
    line_comment: "//",
    block_comment: ("/*", "*/"),
    doc_comment: Some("/**"),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    C,
    Java,
}

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::C, Dialect::Java];

    pub fn spec(self) -> &'static DialectSpec {
        match self {
            Self::C => &C_FAMILY,
            Self::Java => &JAVA_FAMILY,
        }
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Case-insensitive extension lookup (without the leading dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.spec().extensions.contains(&ext.as_str()))
    }

    pub fn detect(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::from_extension(ext)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c" | "cpp" | "c++" => Ok(Self::C),
            "java" => Ok(Self::Java),
            _ => Err(Error::UnknownDialect(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "dialect_test.rs"]
mod tests;

//! A source file on disk paired with the dialect used to scan it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::loc::{LineWindow, LocResult, measure};
use crate::map::{CodeMap, Dialect, decode_lines, scan};

/// Bytes inspected when sniffing for binary content.
const SNIFF_LEN: usize = 512;

#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    dialect: Dialect,
}

impl SourceFile {
    /// Open `path` with the built-in extension table.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, &Config::default())
    }

    /// Open `path`, also honouring the extra extensions from `config`.
    pub fn open_with(path: impl AsRef<Path>, config: &Config) -> Result<Self> {
        let path = path.as_ref();
        check_regular_file(path)?;
        let dialect = config.dialect_for(path).ok_or_else(|| Error::Unsupported {
            path: path.to_path_buf(),
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            dialect,
        })
    }

    /// Open `path` as `dialect` regardless of its extension.
    pub fn with_dialect(path: impl AsRef<Path>, dialect: Dialect) -> Result<Self> {
        let path = path.as_ref();
        check_regular_file(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            dialect,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// All lines of the file without their terminators (`\n`, `\r\n` or a
    /// lone `\r`). Invalid UTF-8 is replaced rather than rejected.
    pub fn read_lines(&self) -> Result<Vec<String>> {
        let bytes = fs::read(&self.path).map_err(|e| Error::io(&self.path, e))?;
        if looks_binary(&bytes) {
            return Err(Error::Binary {
                path: self.path.clone(),
            });
        }
        Ok(decode_lines(&bytes))
    }

    pub fn code_map(&self) -> Result<CodeMap> {
        let lines = self.read_lines()?;
        tracing::debug!(path = %self.path.display(), lines = lines.len(), "scanning");
        Ok(scan(self.dialect, &lines))
    }

    /// Scan the file and count LOC inside `window`.
    pub fn measure(&self, window: LineWindow) -> Result<LocResult> {
        let lines = self.read_lines()?;
        let map = scan(self.dialect, &lines);
        Ok(measure(&map, &lines, window))
    }
}

fn check_regular_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::NotAFile {
            path: path.to_path_buf(),
        })
    }
}

/// A NUL byte near the start means the file is not text.
fn looks_binary(bytes: &[u8]) -> bool {
    bytes[..bytes.len().min(SNIFF_LEN)].contains(&0)
}

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;

use std::fmt;
use std::slice;

use serde::Serialize;

use super::dialect::Dialect;
use super::line::{KindCounts, LineMap};

/// Classified document: one `LineMap` per physical input line, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeMap {
    dialect: Dialect,
    lines: Vec<LineMap>,
}

/// Line and character totals over a whole code map.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MapSummary {
    pub lines: usize,
    pub code_lines: usize,
    pub blank_lines: usize,
    pub comment_lines: usize,
    pub commented_out_lines: usize,
    pub chars: KindCounts,
}

impl CodeMap {
    pub fn new(dialect: Dialect, lines: Vec<LineMap>) -> Self {
        Self { dialect, lines }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn lines(&self) -> &[LineMap] {
        &self.lines
    }

    pub fn iter(&self) -> slice::Iter<'_, LineMap> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line by 1-based line number.
    pub fn line(&self, number: usize) -> Option<&LineMap> {
        number.checked_sub(1).and_then(|i| self.lines.get(i))
    }

    pub fn summary(&self) -> MapSummary {
        let mut summary = MapSummary {
            lines: self.lines.len(),
            ..MapSummary::default()
        };
        for line in &self.lines {
            summary.chars.merge(line.counts());
            if line.code_count() > 0 {
                summary.code_lines += 1;
            } else if line.is_blank_line() {
                summary.blank_lines += 1;
            } else {
                summary.comment_lines += 1;
            }
            if line.has_commented_out() {
                summary.commented_out_lines += 1;
            }
        }
        summary
    }
}

impl<'a> IntoIterator for &'a CodeMap {
    type Item = &'a LineMap;
    type IntoIter = slice::Iter<'a, LineMap>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

impl fmt::Display for CodeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            writeln!(f, "{}{}", i + 1, line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "document_test.rs"]
mod tests;

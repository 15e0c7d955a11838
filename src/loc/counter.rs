use super::report::{LocResult, SourceLine};
use crate::map::CodeMap;

/// Range of 1-based line numbers to measure; `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineWindow {
    begin: usize,
    end: Option<usize>,
}

impl LineWindow {
    /// `begin` 0 is treated as 1; `end` of `None` or `Some(0)` runs to the
    /// last line.
    pub fn new(begin: usize, end: Option<usize>) -> Self {
        Self {
            begin: begin.max(1),
            end: end.filter(|&e| e > 0),
        }
    }

    pub fn all() -> Self {
        Self::new(1, None)
    }

    pub fn begin(&self) -> usize {
        self.begin
    }

    pub fn end(&self) -> Option<usize> {
        self.end
    }

    pub fn contains(&self, line: usize) -> bool {
        line >= self.begin && self.end.is_none_or(|end| line < end)
    }
}

impl Default for LineWindow {
    fn default() -> Self {
        Self::all()
    }
}

/// Count LOC of the lines of `map` inside `window`. `raw_lines` supplies the
/// text of each line; a missing entry is treated as an empty line.
pub fn measure<S: AsRef<str>>(map: &CodeMap, raw_lines: &[S], window: LineWindow) -> LocResult {
    let mut result = LocResult::default();

    for (idx, line) in map.iter().enumerate() {
        let number = idx + 1;
        if window.end.is_some_and(|end| number >= end) {
            break;
        }
        if !window.contains(number) {
            continue;
        }

        let content = raw_lines
            .get(idx)
            .map(|s| s.as_ref().to_string())
            .unwrap_or_default();

        let loc_number = if line.code_count() > 0 {
            result.loc += 1;
            Some(result.loc)
        } else {
            if line.is_blank_line() {
                result.blank += 1;
            } else if line.is_comment_line() {
                result.comment_lines += 1;
            }
            None
        };
        if line.has_commented_out() {
            result.commented_out_lines += 1;
        }

        result.lines.push(SourceLine {
            content,
            number: loc_number,
        });
    }

    result
}

#[cfg(test)]
#[path = "counter_test.rs"]
mod tests;

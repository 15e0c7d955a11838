use std::fmt;

use serde::Serialize;

use super::kind::CharKind;

/// Per-kind character counts of one line (or a sum over many lines).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KindCounts {
    pub blank: usize,
    pub code: usize,
    pub line_comment: usize,
    pub line_comment_out: usize,
    pub block_comment: usize,
    pub block_comment_out: usize,
    pub doc_comment: usize,
}

impl KindCounts {
    pub fn add(&mut self, kind: CharKind) {
        match kind {
            CharKind::Blank => self.blank += 1,
            CharKind::Code => self.code += 1,
            CharKind::LineComment => self.line_comment += 1,
            CharKind::LineCommentOut => self.line_comment_out += 1,
            CharKind::BlockComment => self.block_comment += 1,
            CharKind::BlockCommentOut => self.block_comment_out += 1,
            CharKind::DocComment => self.doc_comment += 1,
        }
    }

    /// All comment-family characters, commented-out code included.
    pub fn comment(&self) -> usize {
        self.line_comment
            + self.line_comment_out
            + self.block_comment
            + self.block_comment_out
            + self.doc_comment
    }

    pub fn commented_out(&self) -> usize {
        self.line_comment_out + self.block_comment_out
    }

    pub fn total(&self) -> usize {
        self.blank + self.code + self.comment()
    }

    pub fn merge(&mut self, other: &KindCounts) {
        self.blank += other.blank;
        self.code += other.code;
        self.line_comment += other.line_comment;
        self.line_comment_out += other.line_comment_out;
        self.block_comment += other.block_comment;
        self.block_comment_out += other.block_comment_out;
        self.doc_comment += other.doc_comment;
    }
}

/// Classification of one physical source line: one `CharKind` per character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineMap {
    kinds: Vec<CharKind>,
    counts: KindCounts,
}

impl LineMap {
    pub fn new(kinds: Vec<CharKind>) -> Self {
        let mut counts = KindCounts::default();
        for &kind in &kinds {
            counts.add(kind);
        }
        Self { kinds, counts }
    }

    pub fn kinds(&self) -> &[CharKind] {
        &self.kinds
    }

    pub fn counts(&self) -> &KindCounts {
        &self.counts
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn code_count(&self) -> usize {
        self.counts.code
    }

    pub fn blank_count(&self) -> usize {
        self.counts.blank
    }

    pub fn comment_count(&self) -> usize {
        self.counts.comment()
    }

    /// Whether the character at `index` belongs to any comment kind.
    /// Out-of-range indexes are not comments.
    pub fn is_comment(&self, index: usize) -> bool {
        self.kinds.get(index).is_some_and(|k| k.is_comment())
    }

    /// A line is blank when it holds neither code nor comment characters,
    /// i.e. it is empty or whitespace only.
    pub fn is_blank_line(&self) -> bool {
        self.counts.code == 0 && self.counts.comment() == 0
    }

    /// Comment-only line: no code, at least one comment character.
    pub fn is_comment_line(&self) -> bool {
        self.counts.code == 0 && self.counts.comment() > 0
    }

    pub fn has_commented_out(&self) -> bool {
        self.counts.commented_out() > 0
    }

    /// The symbol string of this line, e.g. `"0001111"`.
    pub fn symbols(&self) -> String {
        self.kinds.iter().map(|k| k.symbol()).collect()
    }
}

impl fmt::Display for LineMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.counts;
        write!(
            f,
            "(b{},c{},#{}:t{},e{},ec{},tc{},d{}) {}",
            c.blank,
            c.code,
            c.comment(),
            c.block_comment,
            c.line_comment,
            c.line_comment_out,
            c.block_comment_out,
            c.doc_comment,
            self.symbols()
        )
    }
}

#[cfg(test)]
#[path = "line_test.rs"]
mod tests;

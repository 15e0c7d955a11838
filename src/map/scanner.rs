use std::io::Read;

use super::dialect::{Dialect, DialectSpec};
use super::document::CodeMap;
use super::fsm::{State, step_code, step_comment, step_literal};
use super::heuristic::{is_commented_out, strip_block_comment, strip_line_comment};
use super::kind::CharKind;
use super::line::LineMap;

/// Text of the block comment currently open, delimiters included, and the
/// number of characters tagged for it so far. Lives only between the
/// opener and the closer.
#[derive(Debug, Default)]
struct PendingComment {
    text: String,
    len: usize,
}

impl PendingComment {
    fn push(&mut self, chars: &[char]) {
        self.text.extend(chars);
        self.len += chars.len();
    }
}

/// Line-by-line classifier for one artifact.
///
/// Rows are kept as raw kind vectors until `finish`, because closing a
/// block comment may rewrite rows that were completed lines ago.
#[derive(Debug)]
pub struct Scanner {
    dialect: Dialect,
    spec: &'static DialectSpec,
    state: State,
    rows: Vec<Vec<CharKind>>,
    pending: Option<PendingComment>,
}

/// Pick the scanner for a dialect.
pub fn select(dialect: Dialect) -> Scanner {
    Scanner::new(dialect)
}

impl Scanner {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            spec: dialect.spec(),
            state: State::Code,
            rows: Vec::new(),
            pending: None,
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn lines_scanned(&self) -> usize {
        self.rows.len()
    }

    /// Classify one physical line (without its terminator).
    pub fn push_line(&mut self, line: &str) {
        let chars: Vec<char> = line.chars().collect();
        self.rows.push(Vec::with_capacity(chars.len()));

        let mut i = 0;
        while i < chars.len() {
            let rest = &chars[i..];
            let step = match self.state {
                State::Code => step_code(rest, self.spec),
                State::BlockComment => step_comment(rest, self.spec, CharKind::BlockComment),
                State::DocComment => step_comment(rest, self.spec, CharKind::DocComment),
                State::StringLiteral => step_literal(rest, '"'),
                State::CharLiteral => step_literal(rest, '\''),
            };

            let consumed = &rest[..step.advance];
            if step.line_comment {
                self.emit(self.classify_line_comment(consumed), consumed.len());
                break;
            }

            self.emit(step.kind, step.advance);

            if step.new_state == Some(State::BlockComment) {
                self.pending = Some(PendingComment::default());
            }
            if let Some(pending) = self.pending.as_mut() {
                pending.push(consumed);
            }

            let closes_block =
                self.state == State::BlockComment && step.new_state == Some(State::Code);
            if let Some(state) = step.new_state {
                self.state = state;
            }
            if closes_block {
                self.close_block_comment();
            }

            i += step.advance;
        }
    }

    /// Build the document. An unterminated block comment stays classified
    /// as an ordinary comment.
    pub fn finish(self) -> CodeMap {
        if self.state() != State::Code {
            tracing::debug!(
                dialect = %self.dialect,
                state = ?self.state(),
                lines = self.lines_scanned(),
                "input ended inside a comment or literal"
            );
        }
        CodeMap::new(
            self.dialect,
            self.rows.into_iter().map(LineMap::new).collect(),
        )
    }

    fn emit(&mut self, kind: CharKind, count: usize) {
        if let Some(row) = self.rows.last_mut() {
            row.extend(std::iter::repeat_n(kind, count));
        }
    }

    fn classify_line_comment(&self, comment: &[char]) -> CharKind {
        let text: String = comment.iter().collect();
        if is_commented_out(strip_line_comment(&text, self.spec.line_comment)) {
            CharKind::LineCommentOut
        } else {
            CharKind::LineComment
        }
    }

    /// Evaluate the finished block comment and, when it looks like disabled
    /// code, rewrite its characters to `BlockCommentOut`. The comment's
    /// characters are exactly the last `len` tags of the row arena.
    fn close_block_comment(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        let (open, close) = self.spec.block_comment;
        if !is_commented_out(strip_block_comment(&pending.text, open, close)) {
            return;
        }
        self.rows
            .iter_mut()
            .rev()
            .flat_map(|row| row.iter_mut().rev())
            .take(pending.len)
            .for_each(|kind| *kind = CharKind::BlockCommentOut);
    }
}

/// Scan an in-memory sequence of lines.
pub fn scan<I, S>(dialect: Dialect, lines: I) -> CodeMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scanner = select(dialect);
    for line in lines {
        scanner.push_line(line.as_ref());
    }
    scanner.finish()
}

/// Split text into physical lines. `\n`, `\r\n` and a lone `\r` all end a
/// line; a terminator at the very end does not start another one.
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Decode raw file content into owned lines. Invalid UTF-8 is replaced
/// rather than rejected.
pub fn decode_lines(bytes: &[u8]) -> Vec<String> {
    split_lines(&String::from_utf8_lossy(bytes))
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Scan everything `reader` yields, decoded like a file on disk. Only a read
/// failure aborts the scan.
pub fn scan_reader<R: Read>(dialect: Dialect, mut reader: R) -> std::io::Result<CodeMap> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(scan(dialect, decode_lines(&bytes)))
}

#[cfg(test)]
#[path = "scanner_test.rs"]
mod tests;

//! Finite state machine steps for character classification.
//!
//! Each step looks at the remaining characters of the current line and
//! decides how many of them to consume, which `CharKind` they get and
//! whether the state changes. `scanner.rs` drives the steps line by line
//! and owns everything that spans more than one step.

use super::dialect::DialectSpec;
use super::kind::CharKind;

/// Scanner state. Persists across physical lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Code,
    BlockComment,
    DocComment,
    StringLiteral,
    CharLiteral,
}

/// Result of one FSM step.
#[derive(Debug, PartialEq)]
pub(super) struct StepResult {
    pub advance: usize,
    pub kind: CharKind,
    pub new_state: Option<State>,
    /// The rest of the line is a line comment; the driver classifies it.
    pub line_comment: bool,
}

impl StepResult {
    fn emit(advance: usize, kind: CharKind, new_state: Option<State>) -> Self {
        Self {
            advance,
            kind,
            new_state,
            line_comment: false,
        }
    }

    fn line_comment(advance: usize) -> Self {
        Self {
            advance,
            kind: CharKind::LineComment,
            new_state: None,
            line_comment: true,
        }
    }
}

pub(super) fn starts_with(rest: &[char], pat: &str) -> bool {
    let mut chars = rest.iter();
    pat.chars().all(|p| chars.next() == Some(&p))
}

/// Detection priority in code:
/// 1. whitespace
/// 2. line comment opener (consumes the rest of the line)
/// 3. doc comment opener, unless it is really an empty block `/**/`;
///    the closer right after `/*` wins, so `/**/` never opens a doc comment
/// 4. block comment opener
/// 5. char and string literal openers
/// 6. anything else is code
pub(super) fn step_code(rest: &[char], spec: &DialectSpec) -> StepResult {
    let ch = rest[0];
    if ch.is_whitespace() {
        return StepResult::emit(1, CharKind::Blank, None);
    }

    if starts_with(rest, spec.line_comment) {
        return StepResult::line_comment(rest.len());
    }

    let (open, close) = spec.block_comment;

    if let Some(doc) = spec.doc_comment
        && starts_with(rest, doc)
        && !rest
            .get(open.chars().count()..)
            .is_some_and(|after| starts_with(after, close))
    {
        return StepResult::emit(
            doc.chars().count(),
            CharKind::DocComment,
            Some(State::DocComment),
        );
    }

    if starts_with(rest, open) {
        return StepResult::emit(
            open.chars().count(),
            CharKind::BlockComment,
            Some(State::BlockComment),
        );
    }

    match ch {
        '\'' => StepResult::emit(1, CharKind::Code, Some(State::CharLiteral)),
        '"' => StepResult::emit(1, CharKind::Code, Some(State::StringLiteral)),
        _ => StepResult::emit(1, CharKind::Code, None),
    }
}

/// Inside a block or doc comment. Nested openers are not recognized; the
/// first closer ends the comment.
pub(super) fn step_comment(rest: &[char], spec: &DialectSpec, kind: CharKind) -> StepResult {
    let (_, close) = spec.block_comment;
    if starts_with(rest, close) {
        return StepResult::emit(close.chars().count(), kind, Some(State::Code));
    }
    StepResult::emit(1, kind, None)
}

/// Inside a string or char literal. Everything is code, whitespace included.
/// A backslash escapes the next character; at the end of a line the pair is
/// cut short so the tag count never exceeds the line length.
pub(super) fn step_literal(rest: &[char], quote: char) -> StepResult {
    let ch = rest[0];
    if ch == '\\' {
        return StepResult::emit(rest.len().min(2), CharKind::Code, None);
    }
    if ch == quote {
        return StepResult::emit(1, CharKind::Code, Some(State::Code));
    }
    StepResult::emit(1, CharKind::Code, None)
}

#[cfg(test)]
#[path = "fsm_test.rs"]
mod tests;

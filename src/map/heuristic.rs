//! Commented-out code detection.
//!
//! A comment is treated as disabled code when its text ends with one of the
//! characters that close a statement or open/close a block.

const CODE_TAILS: [char; 3] = ['{', '}', ';'];

/// Decide whether a comment body (delimiters already stripped) looks like
/// disabled code.
pub fn is_commented_out(text: &str) -> bool {
    let trimmed = text.trim_end();
    let trimmed = trimmed.strip_suffix("*/").unwrap_or(trimmed);

    trimmed
        .chars()
        .rev()
        .find(|&ch| ch != '*' && !ch.is_whitespace())
        .is_some_and(|tail| CODE_TAILS.contains(&tail))
}

/// Remove the line-comment opener from the start of `text`.
pub fn strip_line_comment<'a>(text: &'a str, open: &str) -> &'a str {
    text.strip_prefix(open).unwrap_or(text)
}

/// Remove the block-comment delimiters from both ends of `text`.
/// A missing closer is tolerated; the opener and closer never overlap.
pub fn strip_block_comment<'a>(text: &'a str, open: &str, close: &str) -> &'a str {
    let inner = text.strip_prefix(open).unwrap_or(text);
    inner.strip_suffix(close).unwrap_or(inner)
}

#[cfg(test)]
#[path = "heuristic_test.rs"]
mod tests;

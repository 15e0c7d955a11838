use serde::Serialize;

/// Category assigned to a single character of a source line.
///
/// `Code` and `Blank` are shared by every dialect; the comment kinds depend
/// on which delimiters the dialect recognizes. `DocComment` is only ever
/// produced by the Java dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CharKind {
    Blank,
    Code,
    LineComment,
    BlockComment,
    DocComment,
    LineCommentOut,
    BlockCommentOut,
}

impl CharKind {
    /// One-digit symbol used when a code map is rendered as text.
    pub fn symbol(self) -> char {
        match self {
            Self::Blank => '0',
            Self::Code => '1',
            Self::LineComment => '2',
            Self::BlockComment => '3',
            Self::DocComment => '4',
            Self::LineCommentOut => '5',
            Self::BlockCommentOut => '6',
        }
    }

    #[cfg(test)]
    pub(crate) fn from_symbol(symbol: char) -> Option<Self> {
        Some(match symbol {
            '0' => Self::Blank,
            '1' => Self::Code,
            '2' => Self::LineComment,
            '3' => Self::BlockComment,
            '4' => Self::DocComment,
            '5' => Self::LineCommentOut,
            '6' => Self::BlockCommentOut,
            _ => return None,
        })
    }

    /// Anything that is neither code nor blank, commented-out kinds included.
    pub fn is_comment(self) -> bool {
        !matches!(self, Self::Code | Self::Blank)
    }

    pub fn is_commented_out(self) -> bool {
        matches!(self, Self::LineCommentOut | Self::BlockCommentOut)
    }
}

#[cfg(test)]
#[path = "kind_test.rs"]
mod tests;

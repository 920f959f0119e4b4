//! Error types for markup parsing.

use thiserror::Error;

/// Errors that can occur when parsing an HTML fragment.
///
/// Positions are byte offsets into the parsed input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MarkupParseError {
    /// A tag was opened with `<` but never closed with `>`.
    #[error("unclosed tag starting at position {0}")]
    UnclosedTag(usize),

    /// A comment was opened with `<!--` but never closed with `-->`.
    #[error("unclosed comment starting at position {0}")]
    UnclosedComment(usize),

    /// Empty close tag (`</>`).
    #[error("empty tag at position {0}")]
    EmptyTag(usize),

    /// Tag name contains characters that are not allowed.
    #[error("invalid tag name `{1}` at position {0}")]
    InvalidTagName(usize, String),

    /// Attribute without a name (`<a ="x">`).
    #[error("invalid attribute in tag at position {0}")]
    InvalidAttribute(usize),

    /// Quoted attribute value without its closing quote.
    #[error("unterminated attribute value in tag at position {0}")]
    UnterminatedAttribute(usize),

    /// Close tag that matches no open element.
    #[error("unexpected close tag </{1}> at position {0}")]
    UnexpectedCloseTag(usize, String),
}

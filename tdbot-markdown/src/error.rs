//! Error types for Markdown parsing

use thiserror::Error;

/// Errors raised while turning Markdown source into an [`MdNode`](crate::ast::MdNode) tree.
///
/// None of these reach the caller of [`RichTextConverter::convert`](crate::RichTextConverter::convert);
/// they trigger the raw-text fallback instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Source exceeds the configured byte limit
    #[error("source is {len} bytes, limit is {limit}")]
    SourceTooLarge { len: usize, limit: usize },
    /// Tree nests deeper than the configured limit
    #[error("markdown nests deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
    /// Any other parser failure
    #[error("parse error: {0}")]
    Parser(String),
}

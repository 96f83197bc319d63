use crate::formatting::span::Span;

use super::kinds::EmphasisDelim;

/// A lexed inline node with byte spans into the block text.
///
/// `full` spans of a block's nodes tile its text exactly; `content` is the
/// part that is displayed once delimiters are stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Text outside any recognized construct.
    Text(Span),
    /// A backtick code span. Raw zone: no other pass looks inside.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Content between the backticks.
        inner: Span,
    },
    /// Strong or italic emphasis.
    Emphasis {
        delim: EmphasisDelim,
        /// Full span including markers.
        full: Span,
        /// Content between the markers.
        inner: Span,
    },
    /// A `(Source: ...)` annotation; the parentheses are part of its text.
    Citation(Span),
}

impl InlineNode {
    /// The full source span, delimiters included.
    pub fn full(&self) -> Span {
        match self {
            InlineNode::Text(sp) | InlineNode::Citation(sp) => *sp,
            InlineNode::CodeSpan { full, .. } | InlineNode::Emphasis { full, .. } => *full,
        }
    }

    /// The span of displayed text, delimiters excluded.
    pub fn content(&self) -> Span {
        match self {
            InlineNode::Text(sp) | InlineNode::Citation(sp) => *sp,
            InlineNode::CodeSpan { inner, .. } | InlineNode::Emphasis { inner, .. } => *inner,
        }
    }
}

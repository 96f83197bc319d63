use crate::formatting::span::Span;

use super::kinds::Severity;

/// The kind inferred for a candidate block, with byte spans into its text.
///
/// Spans point at the pieces that later get inline formatting: each list
/// item's content, a heading's label and body, a callout's remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// Prose; the whole text is formatted, single newlines are soft breaks.
    Paragraph,
    /// Numbered items with their ordinals as written.
    OrderedList { items: Vec<(u64, Span)> },
    /// Bulleted items.
    UnorderedList { items: Vec<Span> },
    /// `Label: body`.
    Heading { label: Span, body: Span },
    /// `Note:`, `Important:` or `Warning:` followed by a remainder.
    Callout { severity: Severity, body: Span },
}

/// A candidate block before inline formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock {
    /// The block's text, trimmed.
    pub text: String,
    pub kind: BlockKind,
}

impl RawBlock {
    /// Text of the piece `span` points at.
    pub fn slice(&self, span: Span) -> &str {
        span.slice(&self.text)
    }
}

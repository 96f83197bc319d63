use serde::Serialize;

use super::{
    blocks::{BlockKind, RawBlock, Severity},
    inline::{InlineNode, parse_inline},
    span::Span,
};

/// A styled run of text inside a block.
///
/// Bold and italic are not distinguished; both are `Emphasis`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum InlineSpan {
    Plain(String),
    Emphasis(String),
    Code(String),
    Citation(String),
}

impl InlineSpan {
    /// The displayed text, without styling.
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::Plain(t)
            | InlineSpan::Emphasis(t)
            | InlineSpan::Code(t)
            | InlineSpan::Citation(t) => t,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, InlineSpan::Plain(_))
    }

    fn from_node(text: &str, node: &InlineNode) -> Self {
        let content = node.content().slice(text).to_string();
        match node {
            InlineNode::Text(_) => InlineSpan::Plain(content),
            InlineNode::Emphasis { .. } => InlineSpan::Emphasis(content),
            InlineNode::CodeSpan { .. } => InlineSpan::Code(content),
            InlineNode::Citation(_) => InlineSpan::Citation(content),
        }
    }
}

/// Formats `text` into inline spans.
pub fn format_inline(text: &str) -> Vec<InlineSpan> {
    parse_inline(text)
        .iter()
        .map(|node| InlineSpan::from_node(text, node))
        .collect()
}

/// Concatenates span texts, styling stripped.
pub fn plain_text(spans: &[InlineSpan]) -> String {
    spans.iter().map(InlineSpan::text).collect()
}

/// A numbered list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderedItem {
    /// The number as written in the source.
    pub ordinal: u64,
    pub spans: Vec<InlineSpan>,
}

/// A classified, inline-formatted block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Paragraph {
        spans: Vec<InlineSpan>,
        /// Byte offsets of the single newlines in [`plain_text`] of `spans`.
        /// Every break sits inside a `Plain` span.
        soft_breaks: Vec<usize>,
    },
    OrderedList {
        items: Vec<OrderedItem>,
    },
    UnorderedList {
        items: Vec<Vec<InlineSpan>>,
    },
    Heading {
        label: String,
        body: Vec<InlineSpan>,
    },
    Callout {
        severity: Severity,
        spans: Vec<InlineSpan>,
    },
}

impl Block {
    /// Applies inline formatting to every piece of a classified block.
    pub fn from_raw(raw: &RawBlock) -> Self {
        let spans_of = |sp: Span| format_inline(raw.slice(sp));
        match &raw.kind {
            BlockKind::Paragraph => {
                let spans = format_inline(&raw.text);
                let soft_breaks = plain_text(&spans)
                    .match_indices('\n')
                    .map(|(i, _)| i)
                    .collect();
                Block::Paragraph { spans, soft_breaks }
            }
            BlockKind::OrderedList { items } => Block::OrderedList {
                items: items
                    .iter()
                    .map(|&(ordinal, sp)| OrderedItem {
                        ordinal,
                        spans: spans_of(sp),
                    })
                    .collect(),
            },
            BlockKind::UnorderedList { items } => Block::UnorderedList {
                items: items.iter().map(|&sp| spans_of(sp)).collect(),
            },
            BlockKind::Heading { label, body } => Block::Heading {
                label: raw.slice(*label).to_string(),
                body: spans_of(*body),
            },
            BlockKind::Callout { severity, body } => Block::Callout {
                severity: *severity,
                spans: spans_of(*body),
            },
        }
    }

    /// True for a paragraph made only of plain text.
    pub fn is_plain_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph { spans, .. } if spans.iter().all(InlineSpan::is_plain))
    }
}

/// The ordered, immutable result of formatting one answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Blocks in source order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Whether the document holds anything beyond one plain paragraph.
    ///
    /// Consumers show the original text verbatim when this is false.
    pub fn has_structure(&self) -> bool {
        match self.blocks.as_slice() {
            [] => false,
            [only] => !only.is_plain_paragraph(),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn paragraph(text: &str) -> Block {
        Block::from_raw(&RawBlock {
            text: text.to_string(),
            kind: BlockKind::Paragraph,
        })
    }

    #[test]
    fn soft_breaks_are_newline_offsets() {
        let Block::Paragraph { soft_breaks, .. } = paragraph("ab\ncd\ne") else {
            panic!("expected Paragraph");
        };
        assert_eq!(soft_breaks, vec![2, 5]);
    }

    #[test]
    fn soft_breaks_index_the_unstyled_text() {
        let Block::Paragraph { spans, soft_breaks } = paragraph("**Fees** are due\nnext week")
        else {
            panic!("expected Paragraph");
        };
        let text = plain_text(&spans);
        assert_eq!(text, "Fees are due\nnext week");
        assert_eq!(soft_breaks, vec![12]);
        assert_eq!(text.find('\n'), Some(12));
    }

    #[test]
    fn plain_text_strips_styling() {
        let spans = format_inline("**Medicine** needs `Physics` (Source: a.pdf)");
        assert_eq!(plain_text(&spans), "Medicine needs Physics (Source: a.pdf)");
    }

    #[test]
    fn empty_document_has_no_structure() {
        assert!(!Document::default().has_structure());
    }

    #[test]
    fn single_plain_paragraph_has_no_structure() {
        let doc = Document::new(vec![paragraph("just\ntext")]);
        assert!(!doc.has_structure());
    }

    #[test]
    fn styled_paragraph_has_structure() {
        let doc = Document::new(vec![paragraph("some *bold* text")]);
        assert!(doc.has_structure());
    }

    #[test]
    fn two_paragraphs_have_structure() {
        let doc = Document::new(vec![paragraph("one"), paragraph("two")]);
        assert!(doc.has_structure());
    }
}

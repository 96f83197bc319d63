//! # Rendering
//!
//! Walks a [`Document`] through a [`RenderTarget`].
//!
//! One classification core serves two kinds of consumer:
//! - [`HtmlTarget`] emits themed HTML markup
//! - [`TreeTarget`] emits serializable [`tree::Node`]s for consumers that
//!   build their own UI
//!
//! Targets map block and span kinds to fixed roles; only the concrete tags
//! and class names differ between them.

pub mod html;
pub mod tree;

pub use html::{CalloutTheme, HtmlTarget, HtmlTheme};
pub use tree::{Node, TreeTarget};

use crate::formatting::{Block, Document, InlineSpan, OrderedItem, blocks::Severity};

/// A render backend. Blocks arrive in document order, exactly once each.
pub trait RenderTarget {
    type Output;

    /// Block text container; `\n` in plain text marks a soft break.
    fn paragraph(&mut self, spans: &[InlineSpan]);
    /// Numbered list with ordinals as written.
    fn ordered_list(&mut self, items: &[OrderedItem]);
    /// Bulleted list.
    fn unordered_list(&mut self, items: &[Vec<InlineSpan>]);
    /// Section label followed by its body, which may be empty.
    fn heading(&mut self, label: &str, body: &[InlineSpan]);
    /// Emphasized container keyed by severity.
    fn callout(&mut self, severity: Severity, spans: &[InlineSpan]);
    /// Consumes the target, yielding everything rendered so far.
    fn finish(self) -> Self::Output;
}

/// Rendered output plus the structure flag consumers use to choose between
/// rich and verbatim display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered<T> {
    pub content: T,
    pub has_structure: bool,
}

/// Renders every block of `doc` into `target`, in order.
pub fn render<T: RenderTarget>(doc: &Document, mut target: T) -> Rendered<T::Output> {
    for block in doc.blocks() {
        match block {
            Block::Paragraph { spans, .. } => target.paragraph(spans),
            Block::OrderedList { items } => target.ordered_list(items),
            Block::UnorderedList { items } => target.unordered_list(items),
            Block::Heading { label, body } => target.heading(label, body),
            Block::Callout { severity, spans } => target.callout(*severity, spans),
        }
    }
    Rendered {
        content: target.finish(),
        has_structure: doc.has_structure(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::format_document;

    /// Records the order in which blocks reach the target.
    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl RenderTarget for Recorder {
        type Output = Vec<String>;

        fn paragraph(&mut self, _spans: &[InlineSpan]) {
            self.0.push("paragraph".into());
        }
        fn ordered_list(&mut self, items: &[OrderedItem]) {
            self.0.push(format!("ordered({})", items.len()));
        }
        fn unordered_list(&mut self, items: &[Vec<InlineSpan>]) {
            self.0.push(format!("unordered({})", items.len()));
        }
        fn heading(&mut self, label: &str, _body: &[InlineSpan]) {
            self.0.push(format!("heading({label})"));
        }
        fn callout(&mut self, severity: Severity, _spans: &[InlineSpan]) {
            self.0.push(format!("callout({})", severity.label()));
        }
        fn finish(self) -> Self::Output {
            self.0
        }
    }

    #[test]
    fn blocks_reach_target_in_order() {
        let doc = format_document("Fees:\n\n1. a\n2. b\n\n- x\n\nWarning: y\n\nend");
        let out = render(&doc, Recorder::default());
        assert_eq!(
            out.content,
            vec![
                "heading(Fees)",
                "ordered(2)",
                "unordered(1)",
                "callout(Warning)",
                "paragraph"
            ]
        );
        assert!(out.has_structure);
    }

    #[test]
    fn empty_document_renders_nothing() {
        let out = render(&Document::default(), Recorder::default());
        assert!(out.content.is_empty());
        assert!(!out.has_structure);
    }
}

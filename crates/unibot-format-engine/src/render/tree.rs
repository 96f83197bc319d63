use serde::Serialize;

use super::RenderTarget;
use crate::formatting::{InlineSpan, OrderedItem, blocks::Severity};

/// A rendered inline run, named by its presentational role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Inline {
    Text { text: String },
    LineBreak,
    Strong { text: String },
    Monospace { text: String },
    Annotation { text: String },
}

/// A list entry; `ordinal` is set for numbered lists only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<u64>,
    pub children: Vec<Inline>,
}

/// A rendered block, named by its presentational role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Node {
    TextContainer {
        children: Vec<Inline>,
    },
    NumberedList {
        items: Vec<ListEntry>,
    },
    BulletedList {
        items: Vec<ListEntry>,
    },
    Section {
        label: String,
        body: Vec<Inline>,
    },
    Callout {
        severity: Severity,
        children: Vec<Inline>,
    },
}

/// Structured render target: a node tree for UIs that build their own
/// widgets instead of injecting markup. Text stays unescaped here; escaping
/// belongs to whatever finally emits markup.
#[derive(Debug, Default)]
pub struct TreeTarget {
    nodes: Vec<Node>,
}

impl TreeTarget {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderTarget for TreeTarget {
    type Output = Vec<Node>;

    fn paragraph(&mut self, spans: &[InlineSpan]) {
        self.nodes.push(Node::TextContainer {
            children: inlines(spans),
        });
    }

    fn ordered_list(&mut self, items: &[OrderedItem]) {
        self.nodes.push(Node::NumberedList {
            items: items
                .iter()
                .map(|item| ListEntry {
                    ordinal: Some(item.ordinal),
                    children: inlines(&item.spans),
                })
                .collect(),
        });
    }

    fn unordered_list(&mut self, items: &[Vec<InlineSpan>]) {
        self.nodes.push(Node::BulletedList {
            items: items
                .iter()
                .map(|spans| ListEntry {
                    ordinal: None,
                    children: inlines(spans),
                })
                .collect(),
        });
    }

    fn heading(&mut self, label: &str, body: &[InlineSpan]) {
        self.nodes.push(Node::Section {
            label: label.to_string(),
            body: inlines(body),
        });
    }

    fn callout(&mut self, severity: Severity, spans: &[InlineSpan]) {
        self.nodes.push(Node::Callout {
            severity,
            children: inlines(spans),
        });
    }

    fn finish(self) -> Vec<Node> {
        self.nodes
    }
}

fn inlines(spans: &[InlineSpan]) -> Vec<Inline> {
    let mut out = vec![];
    for span in spans {
        match span {
            InlineSpan::Plain(text) => {
                for (i, line) in text.split('\n').enumerate() {
                    if i > 0 {
                        out.push(Inline::LineBreak);
                    }
                    if !line.is_empty() {
                        out.push(Inline::Text {
                            text: line.to_string(),
                        });
                    }
                }
            }
            InlineSpan::Emphasis(text) => out.push(Inline::Strong { text: text.clone() }),
            InlineSpan::Code(text) => out.push(Inline::Monospace { text: text.clone() }),
            InlineSpan::Citation(text) => out.push(Inline::Annotation { text: text.clone() }),
        }
    }
    out
}

//! HTML target for chat answers.
//!
//! Produces a flat run of block elements separated by newlines. All answer
//! text is escaped; only the tags and theme classes this module inserts are
//! emitted raw.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use super::RenderTarget;
use crate::formatting::{InlineSpan, OrderedItem, blocks::Severity};

/// Classes for one callout severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalloutTheme {
    /// Outer `<div>`.
    pub container: String,
    /// Inner `<p>`.
    pub text: String,
}

impl CalloutTheme {
    fn new(container: &str, text: &str) -> Self {
        Self {
            container: container.to_string(),
            text: text.to_string(),
        }
    }
}

/// CSS classes for every rendered role. An empty class omits the attribute.
///
/// Defaults are the Tailwind utility classes the chat front end styles with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlTheme {
    pub paragraph: String,
    pub ordered_list: String,
    pub unordered_list: String,
    pub list_item: String,
    pub heading: String,
    pub heading_body: String,
    pub emphasis: String,
    pub code: String,
    pub citation: String,
    pub note: CalloutTheme,
    pub important: CalloutTheme,
    pub warning: CalloutTheme,
}

impl Default for HtmlTheme {
    fn default() -> Self {
        Self {
            paragraph: "mb-3".into(),
            ordered_list: "list-decimal list-inside space-y-1 mb-4".into(),
            unordered_list: "list-disc list-inside space-y-1 mb-4".into(),
            list_item: "mb-1".into(),
            heading: "text-lg font-semibold text-gray-800 mt-6 mb-3".into(),
            heading_body: "text-gray-700 mb-4".into(),
            emphasis: String::new(),
            code: "bg-gray-100 px-2 py-1 rounded text-sm font-mono".into(),
            citation: "text-sm text-gray-500 italic".into(),
            note: CalloutTheme::new(
                "bg-blue-50 border-l-4 border-blue-400 p-4 my-4",
                "text-blue-800",
            ),
            important: CalloutTheme::new(
                "bg-yellow-50 border-l-4 border-yellow-400 p-4 my-4",
                "text-yellow-800",
            ),
            warning: CalloutTheme::new(
                "bg-red-50 border-l-4 border-red-400 p-4 my-4",
                "text-red-800",
            ),
        }
    }
}

impl HtmlTheme {
    /// Theme with every class empty: bare semantic tags.
    pub fn bare() -> Self {
        let none = || CalloutTheme::new("", "");
        Self {
            paragraph: String::new(),
            ordered_list: String::new(),
            unordered_list: String::new(),
            list_item: String::new(),
            heading: String::new(),
            heading_body: String::new(),
            emphasis: String::new(),
            code: String::new(),
            citation: String::new(),
            note: none(),
            important: none(),
            warning: none(),
        }
    }

    pub fn callout(&self, severity: Severity) -> &CalloutTheme {
        match severity {
            Severity::Note => &self.note,
            Severity::Important => &self.important,
            Severity::Warning => &self.warning,
        }
    }
}

/// HTML render target.
///
/// - `<p>` for paragraphs, with `<br>` at soft breaks
/// - `<ol>`/`<ul>` with `<li>` entries; ordinals that do not follow on from
///   the previous item are kept with `start`/`value`
/// - `<h3>` plus a body `<p>` for headings
/// - `<div><p><strong>Label:</strong> ...</p></div>` for callouts
/// - `<strong>`, `<code>` and `<span>` for emphasis, code and citations
pub struct HtmlTarget {
    theme: HtmlTheme,
    out: String,
}

impl HtmlTarget {
    pub fn new(theme: HtmlTheme) -> Self {
        Self {
            theme,
            out: String::new(),
        }
    }

    fn begin_block(&mut self) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
    }

    fn spans(&mut self, spans: &[InlineSpan]) {
        for span in spans {
            match span {
                InlineSpan::Plain(text) => push_text_with_breaks(&mut self.out, text),
                InlineSpan::Emphasis(text) => {
                    push_element(&mut self.out, "strong", &self.theme.emphasis, text)
                }
                InlineSpan::Code(text) => {
                    push_element(&mut self.out, "code", &self.theme.code, text)
                }
                InlineSpan::Citation(text) => {
                    push_element(&mut self.out, "span", &self.theme.citation, text)
                }
            }
        }
    }
}

impl Default for HtmlTarget {
    fn default() -> Self {
        Self::new(HtmlTheme::default())
    }
}

impl RenderTarget for HtmlTarget {
    type Output = String;

    fn paragraph(&mut self, spans: &[InlineSpan]) {
        self.begin_block();
        open_tag(&mut self.out, "p", &self.theme.paragraph);
        self.spans(spans);
        self.out.push_str("</p>");
    }

    fn ordered_list(&mut self, items: &[OrderedItem]) {
        self.begin_block();
        let first = items.first().map_or(1, |i| i.ordinal);
        self.out.push_str("<ol");
        push_class(&mut self.out, &self.theme.ordered_list);
        if first != 1 {
            write!(self.out, r#" start="{first}""#).unwrap();
        }
        self.out.push('>');

        let mut expected = first;
        for item in items {
            self.out.push_str("<li");
            push_class(&mut self.out, &self.theme.list_item);
            if item.ordinal != expected {
                write!(self.out, r#" value="{}""#, item.ordinal).unwrap();
            }
            self.out.push('>');
            self.spans(&item.spans);
            self.out.push_str("</li>");
            expected = item.ordinal.saturating_add(1);
        }
        self.out.push_str("</ol>");
    }

    fn unordered_list(&mut self, items: &[Vec<InlineSpan>]) {
        self.begin_block();
        open_tag(&mut self.out, "ul", &self.theme.unordered_list);
        for item in items {
            open_tag(&mut self.out, "li", &self.theme.list_item);
            self.spans(item);
            self.out.push_str("</li>");
        }
        self.out.push_str("</ul>");
    }

    fn heading(&mut self, label: &str, body: &[InlineSpan]) {
        self.begin_block();
        push_element(&mut self.out, "h3", &self.theme.heading, label);
        if !body.is_empty() {
            open_tag(&mut self.out, "p", &self.theme.heading_body);
            self.spans(body);
            self.out.push_str("</p>");
        }
    }

    fn callout(&mut self, severity: Severity, spans: &[InlineSpan]) {
        self.begin_block();
        let theme = self.theme.callout(severity).clone();
        open_tag(&mut self.out, "div", &theme.container);
        open_tag(&mut self.out, "p", &theme.text);
        write!(self.out, "<strong>{}:</strong>", severity.label()).unwrap();
        if !spans.is_empty() {
            self.out.push(' ');
            self.spans(spans);
        }
        self.out.push_str("</p></div>");
    }

    fn finish(self) -> String {
        self.out
    }
}

fn push_class(out: &mut String, class: &str) {
    if !class.is_empty() {
        write!(
            out,
            r#" class="{}""#,
            html_escape::encode_double_quoted_attribute(class)
        )
        .unwrap();
    }
}

fn open_tag(out: &mut String, tag: &str, class: &str) {
    out.push('<');
    out.push_str(tag);
    push_class(out, class);
    out.push('>');
}

fn push_element(out: &mut String, tag: &str, class: &str, text: &str) {
    open_tag(out, tag, class);
    out.push_str(&html_escape::encode_text(text));
    write!(out, "</{tag}>").unwrap();
}

fn push_text_with_breaks(out: &mut String, text: &str) {
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push_str("<br>");
        }
        out.push_str(&html_escape::encode_text(line));
    }
}

pub mod answer;
pub mod formatting;
pub mod render;

// Re-export key types for easier usage
pub use answer::{
    AnswerPayload, AnswerSource, CannedAnswers, ChatRequest, ConversationTurn, DeviceId,
    ExchangeError, Role, reply_text,
};
pub use formatting::{
    Block, Document, InlineSpan, OrderedItem, blocks::Severity, format_document,
};
pub use render::{HtmlTarget, HtmlTheme, RenderTarget, Rendered, TreeTarget, render};

/// What the chat UI receives for one assistant message.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedResponse {
    /// Rendered HTML; empty for an empty answer.
    pub content: String,
    /// When false the UI shows the original text verbatim instead.
    pub has_formatting: bool,
}

/// Formats an answer to HTML with the default theme.
pub fn format_response(text: &str) -> FormattedResponse {
    format_response_with(text, &HtmlTheme::default())
}

/// Formats an answer to HTML with `theme`.
pub fn format_response_with(text: &str, theme: &HtmlTheme) -> FormattedResponse {
    let doc = format_document(text);
    let rendered = render(&doc, HtmlTarget::new(theme.clone()));
    log::debug!(
        "rendered {} blocks, has_formatting={}",
        doc.len(),
        rendered.has_structure
    );
    FormattedResponse {
        content: rendered.content,
        has_formatting: rendered.has_structure,
    }
}

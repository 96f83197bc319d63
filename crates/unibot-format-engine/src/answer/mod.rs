//! # Answer Exchange
//!
//! Typed contract of the chat backend that produces answers. Transport is
//! not handled here: an [`AnswerSource`] is any black box that turns a
//! [`ChatRequest`] into an [`AnswerPayload`] or an error.
//!
//! The formatter only ever sees the text chosen by
//! [`AnswerPayload::select_text`] or [`reply_text`].

pub mod canned;

pub use canned::CannedAnswers;

use serde::{Deserialize, Serialize};

/// Shown when the backend answered but carried no usable text.
pub const FALLBACK_ANSWER: &str = "I'm sorry, I couldn't process your request. Please try again.";

/// Shown when the backend could not be reached or returned an error.
pub const UNAVAILABLE_ANSWER: &str = "I'm sorry, I'm experiencing some technical difficulties right now. Please try again in a moment.";

#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    #[error("Message is required")]
    EmptyMessage,
    #[error("Answer service failed: {0}")]
    Service(String),
}

/// Opaque per-device identifier. Generating and persisting it is the
/// caller's business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One earlier message of the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

/// A question sent to the answer backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_history: Vec<ConversationTurn>,
    pub device_id: DeviceId,
}

impl ChatRequest {
    /// Builds a request, trimming the message and rejecting a blank one.
    pub fn new(
        message: &str,
        conversation_history: Vec<ConversationTurn>,
        device_id: DeviceId,
    ) -> Result<Self, ExchangeError> {
        let request = Self {
            message: message.trim().to_string(),
            conversation_history,
            device_id,
        };
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<(), ExchangeError> {
        if self.message.trim().is_empty() {
            return Err(ExchangeError::EmptyMessage);
        }
        Ok(())
    }
}

/// A structured answer: a detailed answer with a shorter summary behind it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerPayload {
    #[serde(default)]
    pub detailed_answer: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl AnswerPayload {
    /// The text to display: the detailed answer, else the summary, else
    /// [`FALLBACK_ANSWER`]. Blank fields count as absent.
    pub fn select_text(&self) -> &str {
        [&self.detailed_answer, &self.summary]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|text| !text.trim().is_empty())
            .unwrap_or(FALLBACK_ANSWER)
    }
}

/// The backend collaborator that answers questions.
pub trait AnswerSource {
    fn ask(&self, request: &ChatRequest) -> Result<AnswerPayload, ExchangeError>;
}

/// Asks `source` and returns display text, never failing: errors become
/// [`UNAVAILABLE_ANSWER`].
pub fn reply_text<S: AnswerSource + ?Sized>(source: &S, request: &ChatRequest) -> String {
    match source.ask(request) {
        Ok(payload) => payload.select_text().to_string(),
        Err(e) => {
            log::warn!("answer source failed: {e}");
            UNAVAILABLE_ANSWER.to_string()
        }
    }
}

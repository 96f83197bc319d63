//! # Answer Formatting
//!
//! Turns a raw assistant answer into a [`Document`] of typed blocks.
//!
//! Pipeline: [`normalize`] → [`blocks::BlockClassifier`] →
//! [`blocks::CalloutDetector`] → inline formatting per block → [`Document`].
//!
//! Every call is independent: no state is kept between calls and nothing
//! here performs I/O, so callers on any thread can format concurrently.

pub mod blocks;
pub mod document;
pub mod inline;
pub mod lines;
pub mod normalize;
pub mod span;

#[cfg(test)]
mod tests;

pub use document::{Block, Document, InlineSpan, OrderedItem, format_inline, plain_text};
pub use normalize::normalize;
pub use span::Span;

use blocks::{BlockClassifier, CalloutDetector};

/// Formats raw answer text into a document. Total: empty or whitespace-only
/// input yields an empty document.
pub fn format_document(raw: &str) -> Document {
    let normalized = normalize(raw);
    let classifier = BlockClassifier;
    let detector = CalloutDetector;

    let blocks: Vec<Block> = classifier
        .classify(&normalized)
        .into_iter()
        .map(|raw| detector.detect(raw))
        .map(|raw| Block::from_raw(&raw))
        .collect();

    log::debug!("formatted answer into {} blocks", blocks.len());
    Document::new(blocks)
}

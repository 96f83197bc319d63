//! # Inline Formatting
//!
//! Cursor-based lexing of emphasis, code spans and citations inside a block.
//!
//! ## Architecture
//!
//! Inline lexing is separate from block classification and runs over the text
//! of every paragraph, heading body, callout and list item.
//!
//! The lexer is a sequence of passes. Each pass only sees the text that the
//! earlier passes left unclaimed, so constructs can sit next to each other but
//! never overlap:
//! - Code spans are raw zones and are claimed first
//! - `**` runs are claimed before single `*`, so doubled markers stay whole
//! - Citations are claimed last, outside any emphasis
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, CodeSpan, Emphasis, Citation)
//! - **`kinds`**: delimiter owners (CodeSpan, EmphasisDelim, Citation)
//! - **`cursor`**: `Cursor` confined to one unclaimed window
//! - **`parser`**: `parse_inline()` entry point with `try_parse_*` helpers

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use kinds::EmphasisDelim;
pub use parser::{MAX_CITATIONS, parse_inline};
pub use types::InlineNode;

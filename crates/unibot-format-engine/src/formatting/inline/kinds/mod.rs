//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK = b'\`'` - raw zone that suppresses other passes
//! - **`EmphasisDelim`**: `**`, `*` and `_` markers
//! - **`Citation`**: `OPEN = b"(Source:"`, `CLOSE = b')'`
//!
//! The parser calls these constants; it never hardcodes a delimiter.

pub mod citation;
pub mod code_span;
pub mod emphasis;

pub use citation::Citation;
pub use code_span::CodeSpan;
pub use emphasis::EmphasisDelim;

//! # Block Classification
//!
//! Two-phase block classification.
//!
//! ## Phases
//!
//! 1. **Classification** (`classify`): normalized text is split on blank
//!    lines and each segment gets a `BlockKind` (list, heading, paragraph)
//!    with spans for its formattable pieces
//!
//! 2. **Callout detection** (`callout`): `CalloutDetector` overrides
//!    headings and paragraphs that open with a severity label
//!
//! ## Modules
//!
//! - **`types`**: `RawBlock`, `BlockKind`
//! - **`kinds`**: marker owners (`OrderedMarker`, `BulletMarker`,
//!   `LeadLabel`, `Severity`)
//! - **`classify`**: `BlockClassifier`
//! - **`callout`**: `CalloutDetector`

pub mod callout;
pub mod classify;
pub mod kinds;
pub mod types;

pub use callout::CalloutDetector;
pub use classify::BlockClassifier;
pub use kinds::Severity;
pub use types::{BlockKind, RawBlock};

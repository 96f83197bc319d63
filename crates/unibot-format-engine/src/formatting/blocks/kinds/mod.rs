//! Block-specific types that own their syntax markers.
//!
//! The classifier asks these types whether a line or block matches; it never
//! hardcodes a marker itself.

pub mod callout;
pub mod label;
pub mod list_marker;

pub use callout::Severity;
pub use label::{LeadLabel, lead_label};
pub use list_marker::{BulletMarker, OrderedMarker};

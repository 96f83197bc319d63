use std::{ops::Range, sync::OnceLock};

use regex::Regex;

/// Numbered list marker: `<digits>. <content>`.
pub struct OrderedMarker;

impl OrderedMarker {
    /// Matches a numbered item line, returning its ordinal and the byte range
    /// of the item content within `line`.
    ///
    /// The ordinal is the number as written; it is never renumbered. Numbers
    /// too large for a `u64` do not count as a marker.
    pub fn parse(line: &str) -> Option<(u64, Range<usize>)> {
        static ITEM: OnceLock<Regex> = OnceLock::new();
        let item = ITEM.get_or_init(|| {
            Regex::new(r"^\s*(\d+)\.\s+(\S(?:.*\S)?)\s*$").expect("Invalid list regex")
        });

        let caps = item.captures(line)?;
        let ordinal = caps.get(1)?.as_str().parse().ok()?;
        let content = caps.get(2)?;
        Some((ordinal, content.range()))
    }
}

/// Bullet list marker: `*` or `-` followed by whitespace.
pub struct BulletMarker;

impl BulletMarker {
    pub const MARKERS: [char; 2] = ['*', '-'];

    /// Matches a bullet item line, returning the byte range of its content
    /// within `line`.
    pub fn parse(line: &str) -> Option<Range<usize>> {
        let lead = line.len() - line.trim_start().len();
        let rest = &line[lead..];
        let mut chars = rest.chars();
        let marker = chars.next()?;
        if !Self::MARKERS.contains(&marker) {
            return None;
        }
        let after = chars.as_str();
        if !after.starts_with([' ', '\t']) {
            return None;
        }
        let content = after.trim();
        if content.is_empty() {
            return None;
        }
        let start = lead + marker.len_utf8() + (after.len() - after.trim_start().len());
        Some(start..start + content.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_marker() {
        assert_eq!(OrderedMarker::parse("1. First item"), Some((1, 3..13)));
    }

    #[test]
    fn ordered_marker_keeps_ordinal() {
        assert_eq!(OrderedMarker::parse("7. Seventh"), Some((7, 3..10)));
        assert_eq!(OrderedMarker::parse("12.  Twelfth  "), Some((12, 5..12)));
    }

    #[test]
    fn ordered_marker_requires_space_and_content() {
        assert_eq!(OrderedMarker::parse("1.First"), None);
        assert_eq!(OrderedMarker::parse("1. "), None);
        assert_eq!(OrderedMarker::parse("1) First"), None);
        assert_eq!(OrderedMarker::parse("Step 1. First"), None);
    }

    #[test]
    fn ordered_marker_ignores_trailing_unicode_whitespace() {
        assert_eq!(OrderedMarker::parse("1. a\u{a0}"), Some((1, 3..4)));
        assert_eq!(OrderedMarker::parse("2. b\u{2003}\t"), Some((2, 3..4)));
    }

    #[test]
    fn ordered_marker_rejects_overflowing_number() {
        assert_eq!(OrderedMarker::parse("99999999999999999999999. x"), None);
    }

    #[test]
    fn bullet_markers() {
        assert_eq!(BulletMarker::parse("* item"), Some(2..6));
        assert_eq!(BulletMarker::parse("- item "), Some(2..6));
        assert_eq!(BulletMarker::parse("  -   spaced"), Some(6..12));
    }

    #[test]
    fn bullet_marker_requires_whitespace() {
        assert_eq!(BulletMarker::parse("*emphasis* text"), None);
        assert_eq!(BulletMarker::parse("**bold**"), None);
        assert_eq!(BulletMarker::parse("-dash"), None);
        assert_eq!(BulletMarker::parse("- "), None);
    }
}

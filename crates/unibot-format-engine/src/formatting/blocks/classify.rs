use crate::formatting::{lines::lines_with_spans, span::Span};

use super::{
    kinds::{BulletMarker, OrderedMarker, lead_label},
    types::{BlockKind, RawBlock},
};

/// Separator between blocks. Longer runs of newlines leave empty or
/// newline-led segments behind, which trimming absorbs.
const BLOCK_SEPARATOR: &str = "\n\n";

/// Splits normalized text into blocks and infers each block's kind.
///
/// Precedence, first match wins:
/// 1. ordered list: every non-blank line is `<digits>. <content>`
/// 2. unordered list: every non-blank line is `* <content>` or `- <content>`
/// 3. heading: the first line opens with `Label:`
/// 4. paragraph
///
/// Callouts are not decided here; see [`super::CalloutDetector`].
pub struct BlockClassifier;

impl BlockClassifier {
    /// Classifies every non-blank segment of `normalized`, in source order.
    pub fn classify(&self, normalized: &str) -> Vec<RawBlock> {
        segments(normalized)
            .map(|text| {
                let kind = self.classify_block(text);
                log::trace!("classified block as {kind:?}: {text:?}");
                RawBlock {
                    text: text.to_string(),
                    kind,
                }
            })
            .collect()
    }

    /// Infers the kind of a single trimmed block.
    pub fn classify_block(&self, text: &str) -> BlockKind {
        if let Some(items) = ordered_items(text) {
            return BlockKind::OrderedList { items };
        }
        if let Some(items) = bullet_items(text) {
            return BlockKind::UnorderedList { items };
        }
        if let Some(lead) = lead_label(text) {
            return BlockKind::Heading {
                label: lead.label,
                body: lead.rest,
            };
        }
        BlockKind::Paragraph
    }
}

/// Non-blank, trimmed segments between runs of two or more newlines.
pub fn segments(normalized: &str) -> impl Iterator<Item = &str> {
    normalized
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn ordered_items(text: &str) -> Option<Vec<(u64, Span)>> {
    let mut items = vec![];
    for line in lines_with_spans(text) {
        if line.text.trim().is_empty() {
            continue;
        }
        let (ordinal, content) = OrderedMarker::parse(line.text)?;
        items.push((ordinal, offset(line.span, content)));
    }
    (!items.is_empty()).then_some(items)
}

fn bullet_items(text: &str) -> Option<Vec<Span>> {
    let mut items = vec![];
    for line in lines_with_spans(text) {
        if line.text.trim().is_empty() {
            continue;
        }
        let content = BulletMarker::parse(line.text)?;
        items.push(offset(line.span, content));
    }
    (!items.is_empty()).then_some(items)
}

fn offset(line: Span, local: std::ops::Range<usize>) -> Span {
    Span::new(line.start + local.start, line.start + local.end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn classify(text: &str) -> Vec<RawBlock> {
        BlockClassifier.classify(text)
    }

    #[test]
    fn empty_text_has_no_blocks() {
        assert!(classify("").is_empty());
    }

    #[test]
    fn splits_on_blank_lines() {
        let blocks = classify("one\n\ntwo\n\n\n\nthree\n\n\nfour");
        let texts: Vec<_> = blocks.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three", "four"]);
        assert!(blocks.iter().all(|b| b.kind == BlockKind::Paragraph));
    }

    #[test]
    fn single_newline_stays_in_paragraph() {
        let blocks = classify("line one\nline two");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::Paragraph);
    }

    #[test]
    fn ordered_list() {
        let blocks = classify("1. First item\n2. Second item");
        let BlockKind::OrderedList { items } = &blocks[0].kind else {
            panic!("expected OrderedList, got {:?}", blocks[0].kind);
        };
        let items: Vec<_> = items
            .iter()
            .map(|(n, sp)| (*n, blocks[0].slice(*sp)))
            .collect();
        assert_eq!(items, vec![(1, "First item"), (2, "Second item")]);
    }

    #[test]
    fn ordered_list_keeps_ordinals_verbatim() {
        let blocks = classify("3. c\n1. a\n10. j");
        let BlockKind::OrderedList { items } = &blocks[0].kind else {
            panic!("expected OrderedList");
        };
        let ordinals: Vec<_> = items.iter().map(|(n, _)| *n).collect();
        assert_eq!(ordinals, vec![3, 1, 10]);
    }

    #[test]
    fn trailing_nbsp_keeps_ordered_list() {
        let blocks = classify("1. a\u{a0}\n2. b");
        let BlockKind::OrderedList { items } = &blocks[0].kind else {
            panic!("expected OrderedList, got {:?}", blocks[0].kind);
        };
        let items: Vec<_> = items.iter().map(|(n, sp)| (*n, blocks[0].slice(*sp))).collect();
        assert_eq!(items, vec![(1, "a"), (2, "b")]);
    }

    #[test]
    fn mixed_lines_are_not_a_list() {
        let blocks = classify("1. First\nthen prose");
        assert_eq!(blocks[0].kind, BlockKind::Paragraph);
    }

    #[test]
    fn unordered_list_with_both_markers() {
        let blocks = classify("* Biology\n- Chemistry");
        let BlockKind::UnorderedList { items } = &blocks[0].kind else {
            panic!("expected UnorderedList");
        };
        let items: Vec<_> = items.iter().map(|sp| blocks[0].slice(*sp)).collect();
        assert_eq!(items, vec!["Biology", "Chemistry"]);
    }

    #[test]
    fn whitespace_only_lines_inside_list_are_skipped() {
        let blocks = classify("- a\n   \n- b");
        let BlockKind::UnorderedList { items } = &blocks[0].kind else {
            panic!("expected UnorderedList");
        };
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn ordered_beats_heading() {
        let blocks = classify("1. Fees: 100");
        assert!(matches!(blocks[0].kind, BlockKind::OrderedList { .. }));
    }

    #[test]
    fn heading_with_body_on_next_line() {
        let blocks = classify("Admission Requirements:\nYou need five credits.");
        let BlockKind::Heading { label, body } = blocks[0].kind else {
            panic!("expected Heading");
        };
        assert_eq!(blocks[0].slice(label), "Admission Requirements");
        assert_eq!(blocks[0].slice(body), "You need five credits.");
    }

    #[test]
    fn note_is_a_heading_before_callout_detection() {
        let blocks = classify("Note: Check the deadline.");
        assert!(matches!(blocks[0].kind, BlockKind::Heading { .. }));
    }

    #[test]
    fn sentence_with_citation_is_a_paragraph() {
        let blocks = classify("This costs money (Source: FeesDoc.pdf - 80%).");
        assert_eq!(blocks[0].kind, BlockKind::Paragraph);
    }

    #[test]
    fn heading_needs_no_space_after_colon() {
        let blocks = classify("Office hours:9am to 4pm");
        let BlockKind::Heading { label, body } = blocks[0].kind else {
            panic!("expected Heading, got {:?}", blocks[0].kind);
        };
        assert_eq!(blocks[0].slice(label), "Office hours");
        assert_eq!(blocks[0].slice(body), "9am to 4pm");
    }
}

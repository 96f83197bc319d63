//! Whole-pipeline tests for the formatting module.


use pretty_assertions::assert_eq;

use crate::formatting::{
    Block, InlineSpan, OrderedItem, blocks::Severity, format_document, inline::parse_inline,
    plain_text,
};

const SAMPLES: &[&str] = &[
    "",
    "plain",
    "**Medicine** requires *Biology*, _Chemistry_, and `Physics`.",
    "This costs money (Source: FeesDoc.pdf - 80%).",
    "a (Source: x) b (Source: y) c",
    "**unclosed and `also unclosed",
    "`**raw**` then **bold** then *it* then _u_",
    "snake_case_name and 2 * 3 * 4",
    "***triple*** and ****quad****",
    "Café **crème** `ü` (Source: ñ.pdf)",
    "line one **a\nb** line two",
];

#[test]
fn lexer_invariants_hold_for_samples() {
    for s in SAMPLES {
        invariants::check(s, &parse_inline(s));
    }
}

#[test]
fn example_ordered_list() {
    let doc = format_document("1. First item\n2. Second item");
    assert_eq!(
        doc.blocks(),
        &[Block::OrderedList {
            items: vec![
                OrderedItem {
                    ordinal: 1,
                    spans: vec![InlineSpan::Plain("First item".into())],
                },
                OrderedItem {
                    ordinal: 2,
                    spans: vec![InlineSpan::Plain("Second item".into())],
                },
            ],
        }]
    );
}

#[test]
fn example_heading() {
    let doc = format_document("Admission Requirements:\nYou need five credits.");
    assert_eq!(
        doc.blocks(),
        &[Block::Heading {
            label: "Admission Requirements".into(),
            body: vec![InlineSpan::Plain("You need five credits.".into())],
        }]
    );
}

#[test]
fn example_callout() {
    let doc = format_document("Note: Check the deadline before applying.");
    assert_eq!(
        doc.blocks(),
        &[Block::Callout {
            severity: Severity::Note,
            spans: vec![InlineSpan::Plain(
                "Check the deadline before applying.".into()
            )],
        }]
    );
}

#[test]
fn example_citation() {
    let doc = format_document("This costs money (Source: FeesDoc.pdf - 80%).");
    assert_eq!(
        doc.blocks(),
        &[Block::Paragraph {
            spans: vec![
                InlineSpan::Plain("This costs money ".into()),
                InlineSpan::Citation("(Source: FeesDoc.pdf - 80%)".into()),
                InlineSpan::Plain(".".into()),
            ],
            soft_breaks: vec![],
        }]
    );
}

#[test]
fn example_emphasis_and_code() {
    let doc = format_document("**Medicine** requires *Biology*, _Chemistry_, and `Physics`.");
    assert_eq!(
        doc.blocks(),
        &[Block::Paragraph {
            spans: vec![
                InlineSpan::Emphasis("Medicine".into()),
                InlineSpan::Plain(" requires ".into()),
                InlineSpan::Emphasis("Biology".into()),
                InlineSpan::Plain(", ".into()),
                InlineSpan::Emphasis("Chemistry".into()),
                InlineSpan::Plain(", and ".into()),
                InlineSpan::Code("Physics".into()),
                InlineSpan::Plain(".".into()),
            ],
            soft_breaks: vec![],
        }]
    );
}

#[test]
fn whitespace_only_input_is_empty() {
    assert!(format_document("  \r\n\n\t ").is_empty());
}

#[test]
fn block_order_follows_source() {
    let doc = format_document("Intro\n\n* a\n* b\n\nWarning: late\n\n2. x\n3. y\n\nFees:");
    let kinds: Vec<&str> = doc
        .blocks()
        .iter()
        .map(|b| match b {
            Block::Paragraph { .. } => "paragraph",
            Block::OrderedList { .. } => "ordered",
            Block::UnorderedList { .. } => "unordered",
            Block::Heading { .. } => "heading",
            Block::Callout { .. } => "callout",
        })
        .collect();
    assert_eq!(
        kinds,
        vec!["paragraph", "unordered", "callout", "ordered", "heading"]
    );
}

#[test]
fn crlf_paragraph_keeps_soft_breaks() {
    let doc = format_document("first\r\nsecond\r\n\r\nnext");
    assert_eq!(doc.len(), 2);
    let Block::Paragraph { soft_breaks, .. } = &doc.blocks()[0] else {
        panic!("expected Paragraph");
    };
    assert_eq!(soft_breaks, &vec![5]);
}

#[test]
fn soft_break_after_emphasis_points_into_plain_text() {
    let doc = format_document("**Fees** are due\nnext week");
    let Block::Paragraph { spans, soft_breaks } = &doc.blocks()[0] else {
        panic!("expected Paragraph");
    };
    let text = plain_text(spans);
    assert_eq!(soft_breaks, &vec![12]);
    assert_eq!(&text[12..13], "\n");
}

#[test]
fn label_glued_to_its_colon_body_is_a_heading() {
    let doc = format_document("Office hours:9am to 4pm");
    assert_eq!(
        doc.blocks(),
        &[Block::Heading {
            label: "Office hours".into(),
            body: vec![InlineSpan::Plain("9am to 4pm".into())],
        }]
    );
}

#[test]
fn list_items_are_inline_formatted() {
    let doc = format_document("* **Law** (Source: Law.pdf)\n* `CSC 201`");
    assert_eq!(
        doc.blocks(),
        &[Block::UnorderedList {
            items: vec![
                vec![
                    InlineSpan::Emphasis("Law".into()),
                    InlineSpan::Plain(" ".into()),
                    InlineSpan::Citation("(Source: Law.pdf)".into()),
                ],
                vec![InlineSpan::Code("CSC 201".into())],
            ],
        }]
    );
}

#[test]
fn callout_beats_bold_heading() {
    let doc = format_document("**Important:** Bring your **JAMB** slip.");
    assert_eq!(
        doc.blocks(),
        &[Block::Callout {
            severity: Severity::Important,
            spans: vec![
                InlineSpan::Plain("Bring your ".into()),
                InlineSpan::Emphasis("JAMB".into()),
                InlineSpan::Plain(" slip.".into()),
            ],
        }]
    );
}

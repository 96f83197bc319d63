use crate::formatting::span::Span;

use super::{
    cursor::Cursor,
    kinds::{Citation, CodeSpan, EmphasisDelim},
    types::InlineNode,
};

/// Citations extracted per block or list item. Later `(Source: ...)` runs
/// stay plain text.
pub const MAX_CITATIONS: usize = 1;

/// A region of the block text: either still unclaimed or owned by a node.
#[derive(Debug)]
enum Piece {
    Pending(Span),
    Done(InlineNode),
}

/// Lexes a block's text into a sequence of [`InlineNode`]s.
///
/// Passes run in a fixed order, each over the text the previous passes left
/// unclaimed:
///
/// 1. code spans (raw zones)
/// 2. `**strong**`
/// 3. `*strong*`
/// 4. `_italic_`
/// 5. `(Source: ...)` citations, first occurrence only
///
/// Whatever is left becomes [`InlineNode::Text`]. The `full` spans of the
/// returned nodes cover `s` exactly, in order, with no overlaps. No construct
/// crosses a line break.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    let mut pieces = vec![Piece::Pending(Span::new(0, s.len()))];

    pieces = run_pass(s, pieces, None, try_parse_code_span);
    for delim in [
        EmphasisDelim::DoubleStar,
        EmphasisDelim::Star,
        EmphasisDelim::Underscore,
    ] {
        pieces = run_pass(s, pieces, None, |cur| try_parse_emphasis(cur, delim));
    }
    pieces = run_pass(s, pieces, Some(MAX_CITATIONS), try_parse_citation);

    pieces
        .into_iter()
        .filter_map(|piece| match piece {
            Piece::Pending(sp) if sp.is_empty() => None,
            Piece::Pending(sp) => Some(InlineNode::Text(sp)),
            Piece::Done(node) => Some(node),
        })
        .collect()
}

/// Runs one lexing pass over every pending piece, splitting it around the
/// nodes `try_parse` recognizes. `limit` caps matches across the whole block.
fn run_pass<F>(s: &str, pieces: Vec<Piece>, limit: Option<usize>, mut try_parse: F) -> Vec<Piece>
where
    F: FnMut(&mut Cursor<'_>) -> Option<InlineNode>,
{
    let mut out = Vec::with_capacity(pieces.len());
    let mut found = 0usize;

    for piece in pieces {
        let window = match piece {
            Piece::Pending(sp) => sp,
            done @ Piece::Done(_) => {
                out.push(done);
                continue;
            }
        };

        let mut cur = Cursor::new(s, window);
        let mut text_start = window.start;
        while !cur.eof() && limit.is_none_or(|max| found < max) {
            if let Some(node) = try_parse(&mut cur) {
                let full = node.full();
                out.push(Piece::Pending(Span::new(text_start, full.start)));
                out.push(Piece::Done(node));
                text_start = full.end;
                found += 1;
                continue;
            }
            cur.bump();
        }
        out.push(Piece::Pending(Span::new(text_start, window.end)));
    }

    out
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick, if the span is empty, or if no
/// closing backtick follows on the same line. On failure the cursor is
/// restored.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // `
    let inner_start = cur.pos();

    while let Some(b) = cur.peek() {
        if b == CodeSpan::TICK || b == b'\n' {
            break;
        }
        cur.bump();
    }
    let inner_end = cur.pos();

    if cur.peek() != Some(CodeSpan::TICK) || inner_end == inner_start {
        *cur = saved;
        return None;
    }
    cur.bump(); // closing `

    Some(InlineNode::CodeSpan {
        full: Span::new(start, cur.pos()),
        inner: Span::new(inner_start, inner_end),
    })
}

/// Attempts to parse an emphasis run delimited by `delim`.
///
/// The opener must be followed by non-whitespace and the closer preceded by
/// non-whitespace. On failure the cursor is restored.
fn try_parse_emphasis(cur: &mut Cursor<'_>, delim: EmphasisDelim) -> Option<InlineNode> {
    let marker = delim.marker();
    if !cur.starts_with(marker) || !can_open(cur, delim) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(marker.len());
    let inner_start = cur.pos();

    loop {
        match cur.peek() {
            None | Some(b'\n') => {
                *cur = saved;
                return None;
            }
            Some(_) if cur.starts_with(marker) && can_close(cur, delim, inner_start) => break,
            Some(_) => {
                cur.bump();
            }
        }
    }
    let inner_end = cur.pos();
    cur.bump_n(marker.len());

    Some(InlineNode::Emphasis {
        delim,
        full: Span::new(start, cur.pos()),
        inner: Span::new(inner_start, inner_end),
    })
}

fn can_open(cur: &Cursor<'_>, delim: EmphasisDelim) -> bool {
    let len = delim.marker().len();
    let Some(next) = cur.peek_at(len) else {
        return false;
    };
    if next.is_ascii_whitespace() {
        return false;
    }
    if delim.rejects_doubled_neighbour()
        && (cur.peek_back() == Some(EmphasisDelim::STAR) || next == EmphasisDelim::STAR)
    {
        return false;
    }
    if delim.is_intraword_literal() && cur.peek_back().is_some_and(is_word_byte) {
        return false;
    }
    true
}

fn can_close(cur: &Cursor<'_>, delim: EmphasisDelim, inner_start: usize) -> bool {
    if cur.pos() <= inner_start {
        return false;
    }
    let len = delim.marker().len();
    if cur.peek_back().is_none_or(|b| b.is_ascii_whitespace()) {
        return false;
    }
    if delim.rejects_doubled_neighbour()
        && (cur.peek_back() == Some(EmphasisDelim::STAR)
            || cur.peek_at(len) == Some(EmphasisDelim::STAR))
    {
        return false;
    }
    if delim.is_intraword_literal() && cur.peek_at(len).is_some_and(is_word_byte) {
        return false;
    }
    true
}

/// Letters, digits and any non-ASCII byte count as word characters.
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b >= 0x80
}

/// Attempts to parse a `(Source: ...)` citation at the current position.
///
/// The citation runs to the first closing parenthesis on the same line and
/// must carry some text after `Source:`. On failure the cursor is restored.
fn try_parse_citation(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(Citation::OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(Citation::OPEN.len());
    let body_start = cur.pos();

    while let Some(b) = cur.peek() {
        if b == Citation::CLOSE || b == b'\n' {
            break;
        }
        cur.bump();
    }

    if cur.peek() != Some(Citation::CLOSE) || cur.pos() == body_start {
        *cur = saved;
        return None;
    }
    cur.bump(); // )

    Some(InlineNode::Citation(Span::new(start, cur.pos())))
}

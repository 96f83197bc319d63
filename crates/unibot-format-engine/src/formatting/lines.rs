use super::span::Span;

/// A reference to a single line of a block with its byte span.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// Byte span of this line in the block text, newline excluded.
    pub span: Span,
    /// The line text, newline excluded.
    pub text: &'a str,
}

/// Returns an iterator over the lines of `text` with their byte spans.
///
/// Spans let per-line matches (list markers, labels) be reported as offsets
/// into the whole block rather than into the line.
pub fn lines_with_spans(text: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    text.split('\n').map(move |line| {
        let start = offset;
        offset += line.len() + 1;
        LineRef {
            span: Span::new(start, start + line.len()),
            text: line,
        }
    })
}

use crate::formatting::span::Span;

/// A byte cursor confined to a window of a block's text.
///
/// Each inline pass runs over the still-unclaimed windows of a block. The
/// cursor never reads outside its window, so a pass cannot see delimiters
/// that an earlier pass already consumed.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The whole block text.
    pub s: &'a str,
    /// First byte of the window.
    pub start: usize,
    /// One past the last byte of the window.
    pub end: usize,
    /// Current absolute index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `window` within `s`.
    pub fn new(s: &'a str, window: Span) -> Self {
        Self {
            s,
            start: window.start,
            end: window.end.min(s.len()),
            i: window.start,
        }
    }

    /// Current absolute byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at the end of the window.
    pub fn eof(&self) -> bool {
        self.i >= self.end
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.byte_at(self.i)
    }

    /// Peeks at the byte just before the cursor, if it lies inside the window.
    pub fn peek_back(&self) -> Option<u8> {
        if self.i > self.start {
            self.byte_at(self.i - 1)
        } else {
            None
        }
    }

    /// Peeks `n` bytes ahead of the cursor, staying inside the window.
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.byte_at(self.i + n)
    }

    /// Checks if the rest of the window starts with `pat`.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        if self.i > self.end {
            return pat.is_empty();
        }
        self.s.as_bytes()[self.i..self.end].starts_with(pat)
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    fn byte_at(&self, idx: usize) -> Option<u8> {
        if idx >= self.start && idx < self.end {
            self.s.as_bytes().get(idx).copied()
        } else {
            None
        }
    }
}

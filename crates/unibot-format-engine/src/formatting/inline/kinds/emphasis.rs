/// The delimiter an emphasis run was written with.
///
/// All three map to the same emphasis role once rendered; the distinction is
/// kept so the lexer can report exactly what it consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmphasisDelim {
    /// `**strong**`
    DoubleStar,
    /// `*strong*`
    Star,
    /// `_italic_`
    Underscore,
}

impl EmphasisDelim {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';

    /// The marker bytes that open and close this run.
    pub fn marker(self) -> &'static [u8] {
        match self {
            EmphasisDelim::DoubleStar => b"**",
            EmphasisDelim::Star => b"*",
            EmphasisDelim::Underscore => b"_",
        }
    }

    /// Underscores inside words (`snake_case_name`) are literal text.
    pub fn is_intraword_literal(self) -> bool {
        matches!(self, EmphasisDelim::Underscore)
    }

    /// A lone `*` touching another `*` belongs to a doubled marker and is
    /// never reinterpreted as a single one.
    pub fn rejects_doubled_neighbour(self) -> bool {
        matches!(self, EmphasisDelim::Star)
    }
}

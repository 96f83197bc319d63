/// Citation annotation, e.g. `(Source: FeesDoc.pdf - 80%)`.
///
/// The whole parenthesized run, parentheses included, is the citation text.
pub struct Citation;

impl Citation {
    pub const OPEN: &'static [u8; 8] = b"(Source:";
    pub const CLOSE: u8 = b')';
}

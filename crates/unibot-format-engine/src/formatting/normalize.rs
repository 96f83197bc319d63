/// Prepares raw answer text for block segmentation.
///
/// Line endings are unified to `\n` (both `\r\n` and a lone `\r`) and the
/// whole input is trimmed. Never fails; empty input yields an empty string.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(c);
        }
    }
    out.trim().to_string()
}

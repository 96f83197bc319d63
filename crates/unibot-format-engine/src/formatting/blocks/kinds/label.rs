use crate::formatting::span::Span;

/// Emphasis wrappers a label may be written in, longest first.
const WRAPPERS: [&str; 3] = ["**", "*", "_"];

/// A `Label:` construct at the very start of a block.
///
/// Both headings (`Admission Requirements:`) and callouts (`**Note:**`) open
/// with one. Emphasis around the label is interpreted here, so `Note:`,
/// `**Note:**` and `**Note**:` all yield the label `Note`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadLabel {
    /// The label text, markers and colon excluded.
    pub label: Span,
    /// Everything after the construct up to the end of the block, leading
    /// whitespace skipped. May be empty.
    pub rest: Span,
}

/// Finds the label before the first colon of the block's first line.
///
/// A label starts with a letter or digit and holds only letters, digits,
/// spaces and `-'&/`. Sentences with other punctuation before their first
/// colon, such as `(Source: ...)` or `you need to: 1) ...`, have no label.
pub fn lead_label(text: &str) -> Option<LeadLabel> {
    let line_end = text.find('\n').unwrap_or(text.len());
    let line = &text[..line_end];

    let wrap = WRAPPERS.into_iter().find(|w| line.starts_with(w));
    let open_len = wrap.map_or(0, str::len);
    let colon = open_len + line[open_len..].find(':')?;

    let mut label_end = colon;
    let mut after = colon + 1;
    if let Some(w) = wrap {
        if line[..colon].ends_with(w) && colon - w.len() > open_len {
            // **Label**:
            label_end = colon - w.len();
        } else if line[after..].starts_with(w) {
            // **Label:**
            after += w.len();
        } else {
            return None;
        }
    }

    if !is_label(&line[open_len..label_end]) {
        return None;
    }

    let rest_start = text.len() - text[after..].trim_start().len();

    Some(LeadLabel {
        label: Span::new(open_len, label_end),
        rest: Span::new(rest_start, text.len()),
    })
}

fn is_label(label: &str) -> bool {
    label.chars().next().is_some_and(char::is_alphanumeric)
        && !label.ends_with(' ')
        && label
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '\'' | '&' | '/'))
}

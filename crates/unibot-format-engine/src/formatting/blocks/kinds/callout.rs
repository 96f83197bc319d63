use serde::{Deserialize, Serialize};

/// Severity of a callout block, decided once when the block is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Note,
    Important,
    Warning,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Note, Severity::Important, Severity::Warning];

    /// The literal label that introduces a callout of this severity.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Note => "Note",
            Severity::Important => "Important",
            Severity::Warning => "Warning",
        }
    }

    /// Looks up a severity by its exact, case-sensitive label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

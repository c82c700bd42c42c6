//! Values collected from the user for one analysis.

/// Placeholder used when the sender's title is left blank.
pub const UNKNOWN_TITLE: &str = "Unknown";

/// Fixed relationship menu, in display order.
pub const RELATIONSHIP_OPTIONS: &[&str] = &[
    "Peer",
    "Direct manager (they manage you)",
    "Manager of peer organization",
    "Executive / Senior leadership",
    "Customer",
    "External partner",
];

/// Label for a menu index outside [`RELATIONSHIP_OPTIONS`].
pub const UNLISTED_RELATIONSHIP: &str = "Unspecified relationship";

/// The reader's relationship to the sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relationship {
    /// Zero-based index into [`RELATIONSHIP_OPTIONS`].
    Selected(usize),
    /// Free text typed instead of a menu number.
    Custom(String),
}

impl Relationship {
    /// Plain-text label used when rendering the prompt.
    pub fn label(&self) -> &str {
        match self {
            Self::Selected(index) => RELATIONSHIP_OPTIONS
                .get(*index)
                .copied()
                .unwrap_or(UNLISTED_RELATIONSHIP),
            Self::Custom(text) => text,
        }
    }
}

/// Everything the prompt builder needs for one email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// Trimmed, non-empty email body.
    pub email_content: String,
    pub sender_title: String,
    pub relationship: Relationship,
}

use serde::{Deserialize, Serialize};

/// Marks a section that could not be computed.
pub const PLACEHOLDER: &str = "—";

/// The three-section analysis returned to the client and written to the report.
///
/// Every field is always populated, even on failure paths (with explanatory
/// text or `PLACEHOLDER`), so rendering never has to special-case a gap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub skills: String,
    pub experience: String,
}

impl AnalysisResult {
    /// A result carrying only a message in `summary`, with the other two
    /// sections set to `PLACEHOLDER`.
    pub fn placeholder(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            skills: PLACEHOLDER.to_string(),
            experience: PLACEHOLDER.to_string(),
        }
    }
}

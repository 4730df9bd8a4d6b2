//! Section Splitter — partitions the model's free-text answer into the
//! three named sections by looking for heading keywords.
//!
//! Rules, applied once each (first occurrence only):
//! 1. No `"key skills"` anywhere (any case) → the whole text is the summary.
//! 2. Otherwise split on the literal `"Key Skills"`: what precedes it is the summary.
//! 3. In the remainder, split on the literal `"Experience"` (case-sensitive):
//!    before → skills, after → experience. Without it, the remainder is skills.
//!
//! Later occurrences of either heading stay embedded in whichever section
//! they fall into. Skills and experience are left as empty strings, not
//! placeholders, when their heading is missing.

use crate::models::analysis::AnalysisResult;

const SKILLS_HEADING: &str = "Key Skills";
const EXPERIENCE_HEADING: &str = "Experience";

pub fn split_sections(text: &str) -> AnalysisResult {
    let text = text.trim();
    let mut sections = AnalysisResult::default();

    if !text.to_lowercase().contains("key skills") {
        sections.summary = text.to_string();
        return sections;
    }

    // The presence test ignores case but the split does not; "KEY SKILLS"
    // alone gives no boundary.
    let Some((summary, rest)) = text.split_once(SKILLS_HEADING) else {
        sections.summary = text.to_string();
        return sections;
    };
    sections.summary = summary.trim().to_string();

    match rest.split_once(EXPERIENCE_HEADING) {
        Some((skills, experience)) => {
            sections.skills = skills.trim().to_string();
            sections.experience = experience.trim().to_string();
        }
        None => sections.skills = rest.trim().to_string(),
    }

    sections
}

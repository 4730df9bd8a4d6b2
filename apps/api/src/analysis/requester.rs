//! Analysis Requester — turns résumé text into an `AnalysisResult` via the model.
//!
//! Never fails: an empty résumé short-circuits without a network call, and
//! any model error becomes an explanatory summary with placeholder sections.

use tracing::{debug, info, warn};

use crate::analysis::prompts::RESUME_ANALYSIS_PROMPT;
use crate::analysis::sections::split_sections;
use crate::llm_client::TextGenerator;
use crate::models::analysis::AnalysisResult;

pub const NO_TEXT_MESSAGE: &str = "⚠️ No readable text found in the uploaded resume.";

/// Interpolates the résumé text verbatim into the fixed prompt template.
pub fn build_analysis_prompt(resume_text: &str) -> String {
    RESUME_ANALYSIS_PROMPT.replace("{resume_text}", resume_text)
}

pub async fn generate_analysis(resume_text: &str, model: &dyn TextGenerator) -> AnalysisResult {
    if resume_text.is_empty() {
        info!("No resume text to analyze; skipping model call");
        return AnalysisResult::placeholder(NO_TEXT_MESSAGE);
    }

    let prompt = build_analysis_prompt(resume_text);
    debug!(prompt_chars = prompt.chars().count(), "Requesting resume analysis");

    match model.generate(&prompt).await {
        Ok(text) => split_sections(text.trim()),
        Err(e) => {
            warn!("Resume analysis failed: {e}");
            AnalysisResult::placeholder(format!("⚠️ Error generating analysis: {e}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::fake::FakeGenerator;
    use crate::llm_client::GeminiClient;
    use crate::models::analysis::PLACEHOLDER;

    #[test]
    fn test_prompt_embeds_resume_text_verbatim() {
        let resume = "Jane Doe\n  Rust {braces} & <tags>\n";
        let prompt = build_analysis_prompt(resume);
        assert!(prompt.contains(resume));
        assert!(prompt.starts_with("You are an expert HR recruiter and career analyst."));
        assert!(prompt.contains("Professional Summary"));
        assert!(prompt.contains("Key Skills"));
        assert!(prompt.contains("Experience Highlights"));
        assert!(prompt.contains("1️⃣ Professional Summary – Concise overview (≤ 150 words)"));
        assert!(prompt.contains("3️⃣ Experience Highlights – List 3-7 bullet points"));
        assert!(!prompt.contains("{resume_text}"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(build_analysis_prompt("abc"), build_analysis_prompt("abc"));
    }

    #[tokio::test]
    async fn test_empty_text_short_circuits_without_model_call() {
        let model = FakeGenerator::replying("should not be used");
        let result = generate_analysis("", &model).await;

        assert_eq!(result.summary, NO_TEXT_MESSAGE);
        assert_eq!(result.skills, PLACEHOLDER);
        assert_eq!(result.experience, PLACEHOLDER);
        assert!(model.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_whitespace_only_text_still_calls_model() {
        let model = FakeGenerator::replying("Just a summary");
        let result = generate_analysis(" \n\t ", &model).await;

        assert_eq!(result.summary, "Just a summary");
        assert_eq!(result.skills, "");
        assert_eq!(model.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_model_reply_is_split_into_sections() {
        let model = FakeGenerator::replying(
            "\n  Intro text Key Skills - A - B Experience - C  \n",
        );
        let result = generate_analysis("Jane Doe, Rust engineer", &model).await;

        assert_eq!(result.summary, "Intro text");
        assert_eq!(result.skills, "- A - B");
        assert_eq!(result.experience, "- C");

        let prompts = model.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Jane Doe, Rust engineer"));
    }

    #[tokio::test]
    async fn test_model_error_becomes_placeholder_result() {
        let model = FakeGenerator::failing();
        let result = generate_analysis("Jane Doe", &model).await;

        assert_eq!(
            result.summary,
            "⚠️ Error generating analysis: API error (status 429): quota exceeded"
        );
        assert_eq!(result.skills, PLACEHOLDER);
        assert_eq!(result.experience, PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_missing_api_key_is_reported_in_band() {
        let model = GeminiClient::new(None);
        let result = generate_analysis("Jane Doe", &model).await;

        assert_eq!(
            result.summary,
            "⚠️ Error generating analysis: GOOGLE_API_KEY is not configured"
        );
        assert_eq!(result.skills, PLACEHOLDER);
        assert_eq!(result.experience, PLACEHOLDER);
    }
}

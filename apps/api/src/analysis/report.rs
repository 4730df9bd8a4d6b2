use crate::models::analysis::AnalysisResult;

pub const REPORT_FILE_NAME: &str = "AI_Resume_Analysis.txt";
pub const REPORT_MIME_TYPE: &str = "text/plain";

/// Renders the downloadable plain-text report: the three sections in fixed
/// order, each under its fixed header.
pub fn render_report(result: &AnalysisResult) -> String {
    format!(
        "Professional Summary:\n{}\n\nKey Skills:\n{}\n\nExperience Highlights:\n{}",
        result.summary, result.skills, result.experience
    )
}

pub fn content_disposition() -> String {
    format!("attachment; filename=\"{REPORT_FILE_NAME}\"")
}

// Résumé analysis: prompt -> model -> three sections -> plain-text report.
// All model calls go through llm_client — nothing here talks HTTP to Gemini.

pub mod handlers;
pub mod prompts;
pub mod report;
pub mod requester;
pub mod sections;

// Text Extractor: uploaded PDF bytes -> résumé text shown to the user.
// Read failures never abort the interaction; they become warnings next to
// an empty text.

pub mod handlers;
pub mod pdf;

use bytes::Bytes;
use serde::Serialize;

use crate::extraction::pdf::extract_upload_text;

pub const NO_TEXT_WARNING: &str = "⚠️ Could not extract any text from the uploaded file.";

/// Extracted text plus any user-facing warnings raised while reading it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionOutcome {
    pub extracted_text: String,
    pub warnings: Vec<String>,
}

/// Reads an uploaded PDF, reporting a read error inline and continuing with
/// empty text.
pub async fn extract_for_display(data: Bytes) -> ExtractionOutcome {
    let mut warnings = Vec::new();

    let extracted_text = match extract_upload_text(data).await {
        Ok(text) => text,
        Err(e) => {
            warnings.push(format!("⚠️ Could not read PDF: {e}"));
            String::new()
        }
    };

    if extracted_text.is_empty() {
        warnings.push(NO_TEXT_WARNING.to_string());
    }

    ExtractionOutcome {
        extracted_text,
        warnings,
    }
}

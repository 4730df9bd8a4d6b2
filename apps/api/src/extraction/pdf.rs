use std::panic::{self, AssertUnwindSafe};

use bytes::Bytes;
use pdf_extract::{output_doc_page, Document, OutputError, PlainTextOutput};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum DocumentReadError {
    #[error("{0}")]
    Parse(#[from] OutputError),

    #[error("PDF parser aborted: {0}")]
    Aborted(String),
}

/// Extracts the visible text of every page, in page order, and returns the
/// trimmed concatenation. Pages that fail or carry no text contribute nothing.
///
/// Fails only when the document as a whole cannot be loaded.
pub fn extract_text(bytes: &[u8]) -> Result<String, DocumentReadError> {
    let mut doc = Document::load_mem(bytes).map_err(OutputError::from)?;
    if doc.is_encrypted() {
        doc.decrypt("").map_err(OutputError::from)?;
    }

    let page_numbers: Vec<u32> = doc.get_pages().into_keys().collect();
    debug!(pages = page_numbers.len(), "PDF loaded");

    Ok(join_pages(
        page_numbers.into_iter().map(|page_num| extract_page(&doc, page_num)),
    ))
}

/// Text of a single page, or an empty string if the page cannot be read.
/// pdf-extract panics on several malformed-page shapes (missing MediaBox,
/// undecodable content), so each page runs under `catch_unwind`.
fn extract_page(doc: &Document, page_num: u32) -> String {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut text = String::new();
        {
            let mut output = PlainTextOutput::new(&mut text);
            output_doc_page(doc, &mut output, page_num)?;
        }
        Ok::<_, OutputError>(text)
    }));

    match result {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            debug!(page = page_num, "Skipping unreadable page: {e}");
            String::new()
        }
        Err(_) => {
            debug!(page = page_num, "Skipping page that aborted the PDF parser");
            String::new()
        }
    }
}

/// Concatenates page texts with no separator and trims the result.
pub fn join_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut text = String::new();
    for page in pages {
        text.push_str(page.as_ref());
    }
    text.trim().to_string()
}

/// Runs `extract_text` on the blocking pool.
///
/// A panic inside the PDF parser is reported as `DocumentReadError::Aborted`
/// instead of tearing down the request.
pub async fn extract_upload_text(data: Bytes) -> Result<String, DocumentReadError> {
    let size = data.len();
    let result = tokio::task::spawn_blocking(move || extract_text(&data))
        .await
        .map_err(|e| DocumentReadError::Aborted(e.to_string()))?;

    match &result {
        Ok(text) => debug!(bytes = size, chars = text.chars().count(), "Resume text extracted"),
        Err(e) => warn!(bytes = size, "Could not read PDF: {e}"),
    }
    result
}

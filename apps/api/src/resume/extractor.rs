//! Document Extractor — turns uploaded PDF bytes into one text string per page.

use bytes::Bytes;
use tracing::{debug, warn};

use crate::errors::AppError;

/// Readers accept the header anywhere in the first KiB.
const HEADER_WINDOW: usize = 1024;
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Returns true if the buffer carries a PDF header.
pub fn is_pdf(bytes: &[u8]) -> bool {
    let window = &bytes[..bytes.len().min(HEADER_WINDOW)];
    window.windows(PDF_MAGIC.len()).any(|w| w == PDF_MAGIC)
}

/// Extracts the text of every page, in document order.
///
/// Synchronous and CPU-bound; async callers should use `extract_pages_blocking`.
pub fn extract_pages(bytes: &[u8]) -> Result<Vec<String>, AppError> {
    if bytes.is_empty() {
        return Err(AppError::InvalidDocument("Empty PDF bytes provided".to_string()));
    }
    if !is_pdf(bytes) {
        return Err(AppError::InvalidDocument(
            "upload is not a PDF (missing %PDF- header)".to_string(),
        ));
    }

    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| AppError::InvalidDocument(e.to_string()))?;

    debug!("Extracted {} pages from PDF", pages.len());
    Ok(pages)
}

/// Runs `extract_pages` on the blocking pool. A panic inside the PDF parser
/// is reported as an invalid document rather than tearing down the request.
pub async fn extract_pages_blocking(bytes: Bytes) -> Result<Vec<String>, AppError> {
    match tokio::task::spawn_blocking(move || extract_pages(&bytes)).await {
        Ok(result) => result,
        Err(e) if e.is_panic() => {
            warn!("PDF parser panicked: {e}");
            Err(AppError::InvalidDocument(
                "document could not be parsed".to_string(),
            ))
        }
        Err(e) => Err(AppError::Internal(e.into())),
    }
}

/// Joins page texts into one blob, keeping a marker at each page boundary
/// so words on either side of a page break are never merged.
pub fn join_pages(pages: &[String]) -> String {
    let mut text = String::new();
    for (idx, page) in pages.iter().enumerate() {
        if idx > 0 {
            text.push_str(&format!("\n\n--- Page {} ---\n\n", idx + 1));
        }
        text.push_str(page.trim());
    }
    text
}

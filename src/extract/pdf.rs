// PDF text extraction via lopdf.
//
// Loads the document from memory and extracts text page by page in page
// order. Pages whose content streams cannot be decoded contribute nothing,
// the same as a page without text.

use lopdf::Document;
use tracing::{debug, warn};

use super::traits::TextExtractor;
use crate::error::ExtractError;

/// Extractor that reads page text from a structurally parsed PDF.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let document = Document::load_mem(bytes)?;
        let pages = document.get_pages();
        if pages.is_empty() {
            return Err(ExtractError::NoPages);
        }

        let mut text = String::new();
        for &page_number in pages.keys() {
            match document.extract_text(&[page_number]) {
                Ok(page_text) if !page_text.trim().is_empty() => {
                    text.push_str(&page_text);
                    text.push('\n');
                }
                Ok(_) => debug!(page = page_number, "Page has no text"),
                Err(e) => warn!(page = page_number, error = %e, "Skipping unreadable page"),
            }
        }

        debug!(pages = pages.len(), bytes = text.len(), "Extracted PDF text");
        Ok(text.to_lowercase())
    }
}

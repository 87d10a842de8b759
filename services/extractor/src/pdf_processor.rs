//! PDF Processor
//!
//! Extracts the text of the leading pages of a safety data sheet. Hazard and
//! precautionary statements live in sections 2 and 15, which sit on the first
//! pages of every sheet we have seen.

use std::io::ErrorKind;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use hazcode_utils::{HazcodeError, HazcodeResult};
use tracing::{debug, trace};

/// PDF processing result
#[derive(Debug, Clone)]
pub struct PdfContent {
    /// Text of the kept pages joined by line breaks
    pub text: String,
    pub pages: Vec<PageContent>,
    /// Pages in the document, including the ones that were not kept
    pub page_count: usize,
}

/// Single page content
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub text: String,
}

/// PDF processor
pub struct PdfProcessor {
    max_pages: usize,
}

impl PdfProcessor {
    pub fn new(max_pages: usize) -> Self {
        Self { max_pages }
    }

    /// Read and extract a PDF file
    pub fn extract_file(&self, path: &Path) -> HazcodeResult<PdfContent> {
        let data = std::fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => HazcodeError::not_found(path.display().to_string()),
            _ => HazcodeError::io(format!("{}: {}", path.display(), e)),
        })?;

        let content = self.extract(&data)?;
        for page in &content.pages {
            trace!(page = page.page_number, chars = page.text.len(), "Kept page");
        }
        debug!(
            path = %path.display(),
            pages = content.page_count,
            kept = content.pages.len(),
            "Extracted PDF text"
        );
        Ok(content)
    }

    /// Extract content from PDF bytes
    pub fn extract(&self, data: &[u8]) -> HazcodeResult<PdfContent> {
        let pages = extract_pages(data)?;
        Ok(self.keep_leading_pages(pages))
    }

    fn keep_leading_pages(&self, pages: Vec<String>) -> PdfContent {
        let page_count = pages.len();
        let pages: Vec<PageContent> = pages
            .into_iter()
            .take(self.max_pages)
            .enumerate()
            .map(|(i, text)| PageContent {
                page_number: i + 1,
                text,
            })
            .collect();

        let text = pages
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        PdfContent {
            text,
            pages,
            page_count,
        }
    }
}

impl Default for PdfProcessor {
    fn default() -> Self {
        Self::new(3)
    }
}

/// `pdf_extract` panics on some malformed documents instead of returning an
/// error, so the call runs behind `catch_unwind`.
fn extract_pages(data: &[u8]) -> HazcodeResult<Vec<String>> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(data)
    }));

    match result {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(HazcodeError::document_processing(format!(
            "PDF extraction failed: {}",
            e
        ))),
        Err(_) => Err(HazcodeError::document_processing(
            "PDF extraction panicked (malformed document)",
        )),
    }
}

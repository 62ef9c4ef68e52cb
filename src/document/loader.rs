use crate::error::QaError;
use std::path::Path;

/// One page of extracted text, in reading order.
#[derive(Debug, Clone)]
pub struct Page {
    pub number: usize,
    pub text: String,
}

/// Extracts page-level text from the PDF at `path`.
pub fn load_pdf(path: &Path) -> Result<Vec<Page>, QaError> {
    if !path.is_file() {
        return Err(QaError::DocumentLoad(format!(
            "{} does not exist",
            path.display()
        )));
    }

    let raw = pdf_extract::extract_text_by_pages(path)
        .map_err(|e| QaError::DocumentLoad(format!("{}: {}", path.display(), e)))?;

    let pages: Vec<Page> = raw
        .into_iter()
        .enumerate()
        .map(|(i, text)| Page {
            number: i + 1,
            text,
        })
        .collect();

    if pages.iter().all(|p| p.text.trim().is_empty()) {
        return Err(QaError::DocumentLoad(format!(
            "{} contains no extractable text",
            path.display()
        )));
    }

    tracing::debug!(path = %path.display(), pages = pages.len(), "extracted PDF text");
    Ok(pages)
}

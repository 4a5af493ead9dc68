//! Resume text extraction from uploaded PDF documents.

use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("document is not a readable PDF: {0}")]
    Malformed(String),

    #[error("PDF parser aborted: {0}")]
    Aborted(String),

    #[error("document contains no extractable text")]
    NoText,
}

/// Extracts the text of every page, concatenated in page order.
///
/// Pages without extractable text contribute nothing; a document with zero pages
/// yields an empty string. Only a stream that cannot be parsed as a PDF fails.
/// Parsing is CPU-bound, so it runs on the blocking pool.
pub async fn extract_resume_text(document: Bytes) -> Result<String, ExtractionError> {
    let pages = parse_off_thread(document, |data| {
        pdf_extract::extract_text_from_mem_by_pages(data).map_err(|e| e.to_string())
    })
    .await?;

    debug!("Extracted text from {} PDF page(s)", pages.len());
    Ok(pages.concat())
}

/// Runs `parse` on the blocking pool. A panic inside it becomes `Aborted`.
async fn parse_off_thread<F>(document: Bytes, parse: F) -> Result<Vec<String>, ExtractionError>
where
    F: FnOnce(&[u8]) -> Result<Vec<String>, String> + Send + 'static,
{
    tokio::task::spawn_blocking(move || parse(&document))
        .await
        .map_err(|e| {
            // pdf-extract panics on some malformed inputs
            warn!("PDF extraction task failed: {e}");
            ExtractionError::Aborted(e.to_string())
        })?
        .map_err(ExtractionError::Malformed)
}

#[cfg(test)]
pub(crate) mod fixtures {
    /// Assembles a minimal PDF with one page per entry. An empty entry yields a page
    /// whose content stream draws nothing.
    pub fn build_pdf(pages: &[&str]) -> Vec<u8> {
        let mut objects: Vec<String> = Vec::new();
        let kids: Vec<String> = (0..pages.len())
            .map(|i| format!("{} 0 R", 4 + 2 * i))
            .collect();

        objects.push("<< /Type /Catalog /Pages 2 0 R >>".to_string());
        objects.push(format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            pages.len()
        ));
        objects.push("<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string());

        for (i, text) in pages.iter().enumerate() {
            let content = if text.is_empty() {
                String::new()
            } else {
                format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET")
            };
            objects.push(format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
                 /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
                5 + 2 * i
            ));
            objects.push(format!(
                "<< /Length {} >>\nstream\n{content}\nendstream",
                content.len()
            ));
        }

        let mut out = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            out.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
        }

        let xref_start = out.len();
        out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
        out.extend_from_slice(b"0000000000 65535 f \n");
        for offset in offsets {
            out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        out.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_start}\n%%EOF\n",
                objects.len() + 1
            )
            .as_bytes(),
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::build_pdf;
    use super::*;

    #[tokio::test]
    async fn test_extracts_pages_in_order() {
        let pdf = build_pdf(&["Rust Engineer", "Five years experience"]);
        let text = extract_resume_text(Bytes::from(pdf)).await.unwrap();

        let first = text.find("Rust Engineer").expect("first page text");
        let second = text.find("Five years experience").expect("second page text");
        assert!(first < second);
    }

    #[tokio::test]
    async fn test_page_without_text_contributes_nothing() {
        let pdf = build_pdf(&["", "Skills"]);
        let text = extract_resume_text(Bytes::from(pdf)).await.unwrap();
        assert!(text.contains("Skills"));
    }

    #[tokio::test]
    async fn test_zero_page_document_is_empty_text() {
        let pdf = build_pdf(&[]);
        let text = extract_resume_text(Bytes::from(pdf)).await.unwrap();
        assert!(text.trim().is_empty());
    }

    #[tokio::test]
    async fn test_parser_panic_is_aborted() {
        let result = parse_off_thread(Bytes::from_static(b"%PDF-1.4"), |_| {
            panic!("unsupported font encoding")
        })
        .await;
        assert!(matches!(result, Err(ExtractionError::Aborted(_))));
    }

    #[tokio::test]
    async fn test_parser_error_is_malformed() {
        let result =
            parse_off_thread(Bytes::new(), |_| Err("missing trailer".to_string())).await;
        assert!(matches!(result, Err(ExtractionError::Malformed(msg)) if msg == "missing trailer"));
    }

    #[tokio::test]
    async fn test_non_pdf_bytes_fail() {
        let result = extract_resume_text(Bytes::from_static(b"plain text, not a pdf")).await;
        assert!(result.is_err());
    }
}

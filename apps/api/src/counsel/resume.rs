//! Resume Analyzer panel: PDF text extraction followed by an LLM review.

use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::counsel::prompts::resume_feedback_prompt;
use crate::errors::AppError;
use crate::extract::{extract_resume_text, ExtractionError};
use crate::llm_client::Completion;

/// A validated upload. The document is consumed by extraction.
#[derive(Debug)]
pub struct ResumeUpload {
    pub document: Bytes,
    /// May be empty; the review then speaks about fit in general terms.
    pub target_job: String,
}

#[derive(Debug, Serialize)]
pub struct ResumeFeedbackResponse {
    pub feedback: String,
}

/// True when the upload declares itself a PDF by content type or file name.
pub fn is_pdf(content_type: Option<&str>, file_name: Option<&str>) -> bool {
    let by_type = content_type
        .map(|ct| ct.trim().eq_ignore_ascii_case("application/pdf"))
        .unwrap_or(false);
    let by_name = file_name
        .map(|n| n.to_ascii_lowercase().ends_with(".pdf"))
        .unwrap_or(false);
    by_type || by_name
}

/// Extracts the resume text and asks for feedback against the target job.
///
/// A document without extractable text is an extraction failure; the LLM is not called.
pub async fn analyze_resume(
    upload: ResumeUpload,
    llm: &dyn Completion,
) -> Result<ResumeFeedbackResponse, AppError> {
    let resume_text = extract_resume_text(upload.document).await?;
    if resume_text.trim().is_empty() {
        return Err(ExtractionError::NoText.into());
    }

    info!(
        "Extracted {} characters of resume text, requesting feedback",
        resume_text.len()
    );
    let feedback = llm
        .complete(&resume_feedback_prompt(&resume_text, &upload.target_job))
        .await?;

    Ok(ResumeFeedbackResponse { feedback })
}

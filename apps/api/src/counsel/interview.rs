//! Mock Interview panel.
//!
//! Two steps driven by the page: the question is generated and shown first, then
//! the recorded answer goes through voice capture and, only when a transcript
//! comes back, an evaluation prompt.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::counsel::prompts::{interview_evaluation_prompt, interview_question_prompt};
use crate::errors::AppError;
use crate::llm_client::Completion;
use crate::voice::VoiceOutcome;

pub const INTERVIEW_ROLES: [&str; 4] = [
    "Software Engineer",
    "Data Scientist",
    "Product Manager",
    "Marketing Specialist",
];

#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub role: &'static str,
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub role: &'static str,
    pub voice: VoiceOutcome,
    pub transcript: Option<String>,
    pub feedback: Option<String>,
    /// Present when no answer was captured and no feedback was requested.
    pub notice: Option<String>,
}

/// Resolves a submitted role against the fixed list.
pub fn resolve_role(role: &str) -> Result<&'static str, AppError> {
    let role = role.trim();
    INTERVIEW_ROLES
        .iter()
        .copied()
        .find(|r| *r == role)
        .ok_or_else(|| {
            AppError::Validation(format!(
                "Please select an interview role: {}.",
                INTERVIEW_ROLES.join(", ")
            ))
        })
}

pub async fn ask_question(role: &str, llm: &dyn Completion) -> Result<QuestionResponse, AppError> {
    let role = resolve_role(role)?;
    info!("Requesting interview question for {role}");
    let question = llm.complete(&interview_question_prompt(role)).await?;
    Ok(QuestionResponse { role, question })
}

/// Turns a voice capture into feedback. Nothing is sent to the LLM unless the
/// capture produced a transcript.
pub async fn evaluate_answer(
    role: &'static str,
    voice: VoiceOutcome,
    llm: &dyn Completion,
) -> Result<AnswerResponse, AppError> {
    let Some(answer) = voice.transcript().map(str::to_string) else {
        info!("No interview answer captured for {role}: {}", voice.message());
        let notice = format!("No answer captured: {}", voice.message());
        return Ok(AnswerResponse {
            role,
            voice,
            transcript: None,
            feedback: None,
            notice: Some(notice),
        });
    };

    info!("Requesting interview feedback for {role}");
    let feedback = llm
        .complete(&interview_evaluation_prompt(role, &answer))
        .await?;

    Ok(AnswerResponse {
        role,
        voice,
        transcript: Some(answer),
        feedback: Some(feedback),
        notice: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::fakes::FakeCompletion;

    #[test]
    fn test_resolve_role_accepts_listed_roles_only() {
        assert_eq!(resolve_role(" Data Scientist ").unwrap(), "Data Scientist");
        assert!(matches!(
            resolve_role("Astronaut"),
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_question_prompt_names_role() {
        let llm = FakeCompletion::replying("Explain a hash map. Tell me about a conflict.");
        let response = ask_question("Product Manager", &llm).await.unwrap();

        assert_eq!(response.role, "Product Manager");
        assert_eq!(response.question, "Explain a hash map. Tell me about a conflict.");
        assert!(llm.prompts()[0].contains("for the role of Product Manager"));
    }

    #[tokio::test]
    async fn test_unknown_role_makes_no_llm_call() {
        let llm = FakeCompletion::replying("unused");
        assert!(ask_question("", &llm).await.is_err());
        assert!(llm.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_transcript_is_evaluated() {
        let llm = FakeCompletion::replying("Clear and confident.");
        let voice = VoiceOutcome::Success("I profiled the service first".to_string());

        let response = evaluate_answer("Software Engineer", voice, &llm).await.unwrap();

        assert_eq!(response.feedback.as_deref(), Some("Clear and confident."));
        assert_eq!(response.transcript.as_deref(), Some("I profiled the service first"));
        assert!(response.notice.is_none());
        let prompts = llm.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("I profiled the service first"));
        assert!(prompts[0].contains("As an interviewer for Software Engineer"));
    }

    #[tokio::test]
    async fn test_failed_capture_sends_no_evaluation() {
        for voice in [VoiceOutcome::Unrecognized, VoiceOutcome::ServiceUnavailable] {
            let llm = FakeCompletion::replying("unused");
            let response = evaluate_answer("Data Scientist", voice, &llm).await.unwrap();

            assert!(response.feedback.is_none());
            assert!(response.transcript.is_none());
            assert!(response
                .notice
                .as_deref()
                .unwrap()
                .starts_with("No answer captured"));
            assert!(llm.prompts().is_empty());
        }
    }
}

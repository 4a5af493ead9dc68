//! Axum route handlers for the counselor panels.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;

use crate::counsel::career::{suggest_career_paths, CareerRequest, CareerResponse};
use crate::counsel::interview::{
    ask_question, evaluate_answer, resolve_role, AnswerResponse, QuestionRequest,
    QuestionResponse, INTERVIEW_ROLES,
};
use crate::counsel::learning::{recommend_learning_path, LearningPathRequest, LearningPathResponse};
use crate::counsel::market::{market_insights, MarketInsights};
use crate::counsel::resume::{analyze_resume, is_pdf, ResumeFeedbackResponse, ResumeUpload};
use crate::errors::{AppError, AppJson};
use crate::state::AppState;
use crate::voice::{capture_answer, AudioClip};

#[derive(Debug, Serialize)]
pub struct RolesResponse {
    pub roles: Vec<&'static str>,
    /// Leading part of each recorded answer used as ambient noise; the page asks
    /// for silence during it.
    pub calibration_ms: u64,
}

/// POST /api/v1/career
pub async fn handle_career(
    State(state): State<AppState>,
    AppJson(request): AppJson<CareerRequest>,
) -> Result<Json<CareerResponse>, AppError> {
    let response = suggest_career_paths(&request, state.llm.as_ref()).await?;
    Ok(Json(response))
}

/// POST /api/v1/resume
///
/// Multipart fields: `resume` (PDF file), `target_job` (optional text).
pub async fn handle_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeFeedbackResponse>, AppError> {
    let mut document: Option<Bytes> = None;
    let mut target_job = String::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                if !is_pdf(field.content_type(), field.file_name()) {
                    return Err(AppError::Validation(
                        "Please upload your resume as a PDF file.".to_string(),
                    ));
                }
                document = Some(field.bytes().await?);
            }
            Some("target_job") => target_job = field.text().await?,
            _ => {}
        }
    }

    let document = document
        .filter(|d| !d.is_empty())
        .ok_or_else(|| AppError::Validation("Please upload your resume (PDF only).".to_string()))?;

    let response = analyze_resume(
        ResumeUpload {
            document,
            target_job,
        },
        state.llm.as_ref(),
    )
    .await?;
    Ok(Json(response))
}

/// POST /api/v1/learning-path
pub async fn handle_learning_path(
    State(state): State<AppState>,
    AppJson(request): AppJson<LearningPathRequest>,
) -> Result<Json<LearningPathResponse>, AppError> {
    let response = recommend_learning_path(&request, state.llm.as_ref()).await?;
    Ok(Json(response))
}

/// GET /api/v1/interview/roles
pub async fn handle_interview_roles(State(state): State<AppState>) -> Json<RolesResponse> {
    Json(RolesResponse {
        roles: INTERVIEW_ROLES.to_vec(),
        calibration_ms: state.listen.ambient_duration.as_millis() as u64,
    })
}

/// POST /api/v1/interview/question
pub async fn handle_interview_question(
    State(state): State<AppState>,
    AppJson(request): AppJson<QuestionRequest>,
) -> Result<Json<QuestionResponse>, AppError> {
    let response = ask_question(&request.role, state.llm.as_ref()).await?;
    Ok(Json(response))
}

/// POST /api/v1/interview/answer
///
/// Multipart fields: `role`, `question` (as returned by the question endpoint),
/// `sample_rate` (Hz), `audio` (mono little-endian 16-bit PCM).
pub async fn handle_interview_answer(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnswerResponse>, AppError> {
    let mut role = String::new();
    let mut question = String::new();
    let mut sample_rate = String::new();
    let mut audio: Option<Bytes> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("role") => role = field.text().await?,
            Some("question") => question = field.text().await?,
            Some("sample_rate") => sample_rate = field.text().await?,
            Some("audio") => audio = Some(field.bytes().await?),
            _ => {}
        }
    }

    let role = resolve_role(&role)?;
    if question.trim().is_empty() {
        return Err(AppError::Validation(
            "Start the mock interview to get a question before answering.".to_string(),
        ));
    }
    let sample_rate: u32 = sample_rate
        .trim()
        .parse()
        .map_err(|_| AppError::Validation("sample_rate must be a whole number of Hz".to_string()))?;
    let audio = audio.ok_or_else(|| AppError::Validation("No audio was recorded.".to_string()))?;
    let clip = AudioClip::from_pcm16le(&audio, sample_rate)
        .map_err(|e| AppError::Validation(e.to_string()))?;
    drop(audio);

    let voice = capture_answer(clip, state.speech.as_ref(), &state.listen).await;
    let response = evaluate_answer(role, voice, state.llm.as_ref()).await?;
    Ok(Json(response))
}

/// GET /api/v1/market
pub async fn handle_market() -> Json<MarketInsights> {
    Json(market_insights())
}

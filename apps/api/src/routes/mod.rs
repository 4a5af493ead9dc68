pub mod health;
pub mod page;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::counsel::handlers;
use crate::state::AppState;

/// Upload ceiling for resumes and recorded answers.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::index_handler))
        .route("/health", get(health::health_handler))
        .route("/api/v1/career", post(handlers::handle_career))
        .route(
            "/api/v1/resume",
            post(handlers::handle_resume).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/api/v1/learning-path", post(handlers::handle_learning_path))
        .route("/api/v1/interview/roles", get(handlers::handle_interview_roles))
        .route(
            "/api/v1/interview/question",
            post(handlers::handle_interview_question),
        )
        .route(
            "/api/v1/interview/answer",
            post(handlers::handle_interview_answer).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/api/v1/market", get(handlers::handle_market))
        .with_state(state)
}

//! Learning Path panel.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::counsel::prompts::learning_path_prompt;
use crate::errors::AppError;
use crate::llm_client::Completion;

#[derive(Debug, Deserialize)]
pub struct LearningPathRequest {
    #[serde(default)]
    pub skills_gap: String,
}

#[derive(Debug, Serialize)]
pub struct LearningPathResponse {
    pub learning_path: String,
}

pub async fn recommend_learning_path(
    request: &LearningPathRequest,
    llm: &dyn Completion,
) -> Result<LearningPathResponse, AppError> {
    if request.skills_gap.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter your missing skills.".to_string(),
        ));
    }

    info!("Requesting learning path");
    let learning_path = llm.complete(&learning_path_prompt(&request.skills_gap)).await?;

    Ok(LearningPathResponse { learning_path })
}

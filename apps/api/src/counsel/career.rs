//! Career Guidance panel.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::counsel::prompts::career_prompt;
use crate::errors::AppError;
use crate::llm_client::Completion;

#[derive(Debug, Deserialize)]
pub struct CareerRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub background: String,
}

#[derive(Debug, Serialize)]
pub struct CareerResponse {
    pub recommendations: String,
}

/// Suggests career paths for the user's background. The name is optional.
pub async fn suggest_career_paths(
    request: &CareerRequest,
    llm: &dyn Completion,
) -> Result<CareerResponse, AppError> {
    if request.background.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter your background information.".to_string(),
        ));
    }

    info!("Requesting career paths");
    let recommendations = llm
        .complete(&career_prompt(&request.name, &request.background))
        .await?;

    Ok(CareerResponse { recommendations })
}

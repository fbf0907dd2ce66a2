use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use crate::domain::Feedback;
use crate::infrastructure::observability::sanitize_prompt;

use super::ApiError;

#[derive(Deserialize)]
pub struct FeedbackRequest {
    pub rating: i64,
    #[serde(default)]
    pub text: String,
}

#[derive(Serialize)]
pub struct FeedbackResponse {
    pub message: String,
}

#[tracing::instrument(skip(payload))]
pub async fn feedback_handler(
    payload: Result<Json<FeedbackRequest>, JsonRejection>,
) -> Result<Json<FeedbackResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let feedback = Feedback::new(request.rating, request.text)?;

    tracing::info!(
        rating = feedback.rating,
        text = %sanitize_prompt(&feedback.text),
        "Feedback received"
    );

    Ok(Json(FeedbackResponse {
        message: "Feedback received".to_string(),
    }))
}

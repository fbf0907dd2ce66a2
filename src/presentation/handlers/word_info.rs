use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use crate::domain::WordInfo;
use crate::presentation::state::AppState;

use super::ApiError;

#[derive(Deserialize)]
pub struct WordInfoQuery {
    pub word: Option<String>,
}

#[derive(Serialize)]
pub struct WordInfoResponse {
    pub word: String,
    pub definition: String,
    pub synonyms: String,
}

impl From<WordInfo> for WordInfoResponse {
    fn from(info: WordInfo) -> Self {
        Self {
            word: info.word,
            definition: info.definition,
            synonyms: info.synonyms,
        }
    }
}

#[tracing::instrument(skip(state, query), fields(word = query.word.as_deref().unwrap_or_default()))]
pub async fn word_info_handler(
    State(state): State<AppState>,
    Query(query): Query<WordInfoQuery>,
) -> Result<Json<WordInfoResponse>, ApiError> {
    let word = query.word.unwrap_or_default();
    let info = state.word_info_service.lookup(&word).await?;

    tracing::info!("Word info returned");

    Ok(Json(info.into()))
}

use axum::Json;
use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};

use crate::domain::{Audience, SimplifyInput, UploadedFile};
use crate::presentation::state::AppState;

use super::ApiError;

#[derive(Serialize)]
pub struct SimplifyResponse {
    #[serde(rename = "simplifiedText")]
    pub simplified_text: String,
}

#[derive(Deserialize, Default)]
struct SimplifyJsonBody {
    audience: Option<String>,
    text: Option<String>,
    url: Option<String>,
}

/// A `/simplify` request decoded from either multipart form data or JSON.
#[derive(Debug)]
pub struct SimplifyForm {
    pub audience: Audience,
    pub input: SimplifyInput,
}

impl<S> FromRequest<S> for SimplifyForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadRequest(e.body_text()))?;
            return read_multipart(multipart).await;
        }

        let Json(body) = Json::<SimplifyJsonBody>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        Ok(Self {
            audience: parse_audience(body.audience.as_deref())?,
            input: SimplifyInput {
                file: None,
                url: body.url,
                text: body.text,
            },
        })
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<SimplifyForm, ApiError> {
    let mut audience = None;
    let mut input = SimplifyInput::default();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to read multipart");
        ApiError::BadRequest(format!("Failed to read multipart: {}", e))
    })? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let declared_mime = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {}", e)))?;

                tracing::debug!(
                    filename = %filename,
                    content_type = %declared_mime,
                    bytes = data.len(),
                    "File upload received"
                );

                input.file = Some(UploadedFile {
                    filename,
                    declared_mime,
                    data: data.to_vec(),
                });
            }
            "audience" | "text" | "url" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read {name}: {e}")))?;
                match name.as_str() {
                    "audience" => audience = Some(value),
                    "text" => input.text = Some(value),
                    _ => input.url = Some(value),
                }
            }
            other => tracing::debug!(field = other, "Ignoring unknown multipart field"),
        }
    }

    Ok(SimplifyForm {
        audience: parse_audience(audience.as_deref())?,
        input,
    })
}

/// A missing or blank audience means the general public.
fn parse_audience(raw: Option<&str>) -> Result<Audience, ApiError> {
    match raw.map(str::trim).filter(|a| !a.is_empty()) {
        Some(label) => label.parse().map_err(ApiError::BadRequest),
        None => Ok(Audience::default()),
    }
}

#[tracing::instrument(skip(state, form), fields(audience = %form.audience))]
pub async fn simplify_handler(
    State(state): State<AppState>,
    form: SimplifyForm,
) -> Result<Json<SimplifyResponse>, ApiError> {
    let simplified_text = state
        .simplification_service
        .simplify(form.input, form.audience)
        .await?;

    Ok(Json(SimplifyResponse { simplified_text }))
}

use axum::Json;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use serde::Serialize;

const INDEX_PAGE: &str = "<!DOCTYPE html>
<html lang=\"en\">
<head><meta charset=\"utf-8\"><title>Plainify</title></head>
<body>
<h1>Plainify is running</h1>
<p>POST /simplify, GET /word-info, POST /feedback</p>
</body>
</html>
";

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
        }),
    )
}

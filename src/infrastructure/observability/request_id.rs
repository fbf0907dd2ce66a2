use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use tracing::Span;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_CALLER_ID_LEN: usize = 128;

#[derive(Clone, Debug)]
pub struct RequestId(pub String);

/// Tags the request with an id and echoes it in the response.
///
/// A caller-supplied `x-request-id` is kept only when it is short printable
/// ASCII; anything else is replaced by a fresh uuid. Must sit inside the
/// `TraceLayer` so the id is recorded on the span from [`make_request_span`].
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|id| is_acceptable_caller_id(id))
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let header_value = HeaderValue::from_str(&request_id).ok();
    if let Some(value) = &header_value {
        request.headers_mut().insert(REQUEST_ID_HEADER, value.clone());
    }

    Span::current().record("request_id", request_id.as_str());
    request.extensions_mut().insert(RequestId(request_id));

    let mut response = next.run(request).await;

    if let Some(value) = header_value {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

/// Span factory for `TraceLayer::make_span_with`. The id is recorded later by
/// [`request_id_middleware`], which runs inside this span.
pub fn make_request_span(request: &Request) -> Span {
    tracing::info_span!(
        "request",
        request_id = tracing::field::Empty,
        method = %request.method(),
        uri = %request.uri().path(),
    )
}

fn is_acceptable_caller_id(id: &str) -> bool {
    !id.is_empty() && id.len() <= MAX_CALLER_ID_LEN && id.bytes().all(|b| b.is_ascii_graphic())
}

use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::http::{header::CONTENT_TYPE, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;

/// Request body accepted as either JSON or XML, keyed off `Content-Type`.
/// Anything that is not explicitly XML goes through the JSON path, so the
/// default behavior matches a plain `Json<T>` extractor.
pub struct JsonOrXml<T>(pub T);

fn is_xml(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| {
            let ct = ct.to_ascii_lowercase();
            ct.starts_with("application/xml") || ct.starts_with("text/xml")
        })
        .unwrap_or(false)
}

#[async_trait]
impl<S, T> FromRequest<S> for JsonOrXml<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_xml(&req) {
            let body = String::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            let value = quick_xml::de::from_str(&body).map_err(|e| {
                (StatusCode::BAD_REQUEST, format!("invalid xml body: {e}")).into_response()
            })?;
            Ok(JsonOrXml(value))
        } else {
            let Json(value) = Json::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(JsonOrXml(value))
        }
    }
}

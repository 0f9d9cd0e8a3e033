use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::Response;
use axum::routing::post;
use axum::Router;
use serde_json::Value;

use crate::error::{GatewayError, Result};
use crate::payload::{normalize, EndpointKind, MultipartFile};
use crate::translate::translate;
use crate::AppState;

/// POST /clasificar - forward an image (multipart file, base64, or URL) to
/// the classifier backend. The backend's verdict is relayed verbatim,
/// whatever its status.
async fn clasificar(State(state): State<Arc<AppState>>, request: Request) -> Result<Response> {
    let (multipart, json) = split_request(request).await?;
    let payload = normalize(EndpointKind::Image, multipart, json.as_ref())?;

    let outcome = state
        .dispatcher
        .dispatch(&state.routes.classify, Some(payload))
        .await;
    Ok(translate(
        outcome,
        false,
        "could not reach the image classification service",
    ))
}

/// Lift the `image` multipart field or the JSON body out of the request.
/// A multipart request never falls through to JSON interpretation.
async fn split_request(request: Request) -> Result<(Option<MultipartFile>, Option<Value>)> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if content_type.starts_with("multipart/form-data") {
        let mut multipart = Multipart::from_request(request, &()).await.map_err(|e| {
            GatewayError::bad_request(format!("invalid multipart body: {e}"))
        })?;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| GatewayError::bad_request(format!("invalid multipart body: {e}")))?
        {
            if field.name() != Some("image") {
                continue;
            }
            let filename = field.file_name().unwrap_or_default().to_string();
            let declared_mime = field.content_type().map(str::to_string);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| GatewayError::bad_request(format!("invalid multipart body: {e}")))?
                .to_vec();
            return Ok((
                Some(MultipartFile {
                    filename,
                    bytes,
                    declared_mime,
                }),
                None,
            ));
        }

        // Multipart without an image field matches no normalization rule.
        return Ok((None, None));
    }

    let bytes = Bytes::from_request(request, &())
        .await
        .map_err(|_| GatewayError::bad_request("could not read request body"))?;
    Ok((None, serde_json::from_slice(&bytes).ok()))
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/clasificar", post(clasificar))
        .route("/clasificar-genero", post(clasificar))
        .with_state(state)
}

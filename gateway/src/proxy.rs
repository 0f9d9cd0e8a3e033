//! Dispatcher: one outbound call per inbound request.
//!
//! Serializes a normalized payload onto the wire per the route's forward
//! mode and performs exactly one HTTP call. No retries.

use std::time::Duration;

use axum::body::Bytes;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::{json, Value};

use crate::payload::InboundPayload;
use crate::routes::{ForwardMode, Method, Route};

/// A backend call that completed at the transport level, whatever its
/// status code or body.
#[derive(Debug, Clone)]
pub struct ProxyResult {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("could not build outbound request: {0}")]
    InvalidOutbound(String),
}

/// Forwards normalized payloads to backends.
pub struct Dispatcher {
    http_client: Client,
}

impl Dispatcher {
    /// No timeout is applied unless one is configured; an unconfigured
    /// dispatcher blocks as long as the backend does.
    pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http_client: builder.build()?,
        })
    }

    /// Issue the single outbound call for this request.
    pub async fn dispatch(
        &self,
        route: &Route,
        payload: Option<InboundPayload>,
    ) -> Result<ProxyResult, DispatchError> {
        let url = route.url();

        tracing::debug!(route = route.name, %url, "forwarding to backend");

        let request = match route.method {
            Method::Get => self.http_client.get(&url),
            Method::Post => self.http_client.post(&url),
        };

        let request = match payload {
            None => request,
            Some(payload) => {
                let carries_bytes = matches!(
                    payload,
                    InboundPayload::MultipartImage { .. } | InboundPayload::Base64Image { .. }
                );
                if carries_bytes && route.forward_mode == ForwardMode::JsonOrMultipart {
                    request.multipart(multipart_form(payload)?)
                } else {
                    request.json(&json_body(&payload))
                }
            }
        };

        let response = request.send().await?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?;

        Ok(ProxyResult {
            status,
            content_type,
            body,
        })
    }
}

/// JSON body mirroring the normalized fields. Byte-bearing payloads are
/// re-encoded; routes that carry bytes normally use multipart instead.
fn json_body(payload: &InboundPayload) -> Value {
    match payload {
        InboundPayload::MultipartImage { bytes, .. } | InboundPayload::Base64Image { raw_bytes: bytes } => {
            json!({ "image_base64": BASE64.encode(bytes) })
        }
        InboundPayload::UrlImage { url } => json!({ "url": url }),
        InboundPayload::Text { content } => json!({ "text": content }),
        InboundPayload::TextBatch { items } => json!({ "texts": items }),
        InboundPayload::Question { question, context } => {
            json!({ "question": question, "context": context })
        }
    }
}

/// Multipart body carrying the original file bytes, filename and MIME.
fn multipart_form(payload: InboundPayload) -> Result<Form, DispatchError> {
    let part = match payload {
        InboundPayload::MultipartImage {
            filename,
            bytes,
            declared_mime,
        } => {
            let part = Part::bytes(bytes).file_name(filename);
            match declared_mime {
                Some(mime) => part
                    .mime_str(&mime)
                    .map_err(|e| DispatchError::InvalidOutbound(e.to_string()))?,
                None => part,
            }
        }
        InboundPayload::Base64Image { raw_bytes } => Part::bytes(raw_bytes)
            .file_name("image")
            .mime_str("application/octet-stream")
            .map_err(|e| DispatchError::InvalidOutbound(e.to_string()))?,
        _ => {
            return Err(DispatchError::InvalidOutbound(
                "payload carries no file bytes".to_string(),
            ))
        }
    };

    Ok(Form::new().part("image", part))
}

//! Request-shape normalization.
//!
//! Every inbound body is classified into exactly one `InboundPayload`
//! variant by an ordered, total set of rules; anything that matches no rule
//! fails closed with a 400. A multipart image field always beats a JSON
//! body on the same request.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::Value;

use crate::error::{GatewayError, Result};

/// One recognized request shape. Normalization never produces more than
/// one variant per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundPayload {
    MultipartImage {
        filename: String,
        bytes: Vec<u8>,
        declared_mime: Option<String>,
    },
    /// Image bytes already decoded from a base64 string or data URI.
    Base64Image { raw_bytes: Vec<u8> },
    UrlImage { url: String },
    /// A single non-empty text.
    Text { content: String },
    /// An ordered batch of texts. Empty items are kept, not filtered; the
    /// backend decides what to do with them.
    TextBatch { items: Vec<String> },
    /// A question plus the context to answer it from.
    Question { question: String, context: String },
}

/// What shape of body a logical endpoint expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
    /// Image endpoints: multipart file, `url`, or `image_base64`.
    Image,
    /// Single required text field.
    Text { field: &'static str },
    /// Required list-of-strings field.
    TextBatch { field: &'static str },
    /// Both `question` and `context` required.
    Question,
}

/// A file lifted out of a multipart body before classification.
#[derive(Debug, Clone)]
pub struct MultipartFile {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub declared_mime: Option<String>,
}

/// Classify a request body. Rules are evaluated in order and the first
/// match wins; no rule matching is a 400.
pub fn normalize(
    kind: EndpointKind,
    multipart: Option<MultipartFile>,
    json: Option<&Value>,
) -> Result<InboundPayload> {
    // Rule 1: a multipart image field takes precedence over any JSON body.
    if let Some(file) = multipart {
        if file.filename.is_empty() {
            return Err(GatewayError::bad_request(
                "multipart image field has an empty filename",
            ));
        }
        return Ok(InboundPayload::MultipartImage {
            filename: file.filename,
            bytes: file.bytes,
            declared_mime: file.declared_mime,
        });
    }

    // Rule 2: a parsed JSON body, interpreted per endpoint kind.
    if let Some(body) = json {
        return match kind {
            EndpointKind::Image => normalize_image(body),
            EndpointKind::Text { field } => normalize_text(body, field),
            EndpointKind::TextBatch { field } => normalize_batch(body, field),
            EndpointKind::Question => normalize_question(body),
        };
    }

    // Rule 3: neither multipart nor JSON.
    Err(GatewayError::bad_request("unsupported request format"))
}

fn normalize_image(body: &Value) -> Result<InboundPayload> {
    if let Some(url) = non_empty_str(body, "url") {
        return Ok(InboundPayload::UrlImage {
            url: url.to_string(),
        });
    }

    if let Some(encoded) = non_empty_str(body, "image_base64") {
        // Anything up to the first comma is a data-URI MIME prefix.
        let data = match encoded.split_once(',') {
            Some((_, rest)) => rest,
            None => encoded,
        };
        let raw_bytes = BASE64.decode(data).map_err(|e| {
            GatewayError::bad_request(format!("could not decode base64 image: {e}"))
        })?;
        return Ok(InboundPayload::Base64Image { raw_bytes });
    }

    Err(GatewayError::bad_request(
        "no valid image source: send a multipart 'image' file, or JSON with 'url' or 'image_base64'",
    ))
}

fn normalize_text(body: &Value, field: &'static str) -> Result<InboundPayload> {
    match non_empty_str(body, field) {
        Some(content) => Ok(InboundPayload::Text {
            content: content.to_string(),
        }),
        None => Err(GatewayError::bad_request(format!(
            "missing or empty field '{field}'"
        ))),
    }
}

fn normalize_batch(body: &Value, field: &'static str) -> Result<InboundPayload> {
    let items = body.get(field).and_then(Value::as_array).ok_or_else(|| {
        GatewayError::bad_request(format!("field '{field}' must be a list of texts"))
    })?;

    let items = items
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| {
            GatewayError::bad_request(format!("field '{field}' must contain only strings"))
        })?;

    Ok(InboundPayload::TextBatch { items })
}

fn normalize_question(body: &Value) -> Result<InboundPayload> {
    let (Some(question), Some(context)) = (
        non_empty_str(body, "question"),
        non_empty_str(body, "context"),
    ) else {
        return Err(GatewayError::bad_request(
            "both 'question' and 'context' are required and must be non-empty",
        ));
    };

    Ok(InboundPayload::Question {
        question: question.to_string(),
        context: context.to_string(),
    })
}

/// A string field that is non-empty after trimming, or nothing. Fields of
/// the wrong type count as absent, so they fail closed downstream.
fn non_empty_str<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn image_file() -> MultipartFile {
        MultipartFile {
            filename: "cat.png".to_string(),
            bytes: b"not really a png".to_vec(),
            declared_mime: Some("image/png".to_string()),
        }
    }

    #[test]
    fn multipart_beats_json_body() {
        let body = json!({ "url": "http://example.com/cat.png" });
        let payload = normalize(EndpointKind::Image, Some(image_file()), Some(&body)).unwrap();
        assert!(matches!(payload, InboundPayload::MultipartImage { .. }));
    }

    #[test]
    fn multipart_with_empty_filename_fails_closed() {
        let file = MultipartFile {
            filename: String::new(),
            bytes: vec![],
            declared_mime: None,
        };
        let err = normalize(EndpointKind::Image, Some(file), None).unwrap_err();
        assert_eq!(err.http_status, 400);
    }

    #[test]
    fn url_wins_over_base64_when_both_present() {
        let body = json!({ "url": "http://example.com/a.png", "image_base64": "aGk=" });
        let payload = normalize(EndpointKind::Image, None, Some(&body)).unwrap();
        assert_eq!(
            payload,
            InboundPayload::UrlImage {
                url: "http://example.com/a.png".to_string()
            }
        );
    }

    #[test]
    fn base64_strips_one_data_uri_prefix() {
        let body = json!({ "image_base64": "data:image/png;base64,aGVsbG8=" });
        let payload = normalize(EndpointKind::Image, None, Some(&body)).unwrap();
        assert_eq!(
            payload,
            InboundPayload::Base64Image {
                raw_bytes: b"hello".to_vec()
            }
        );
    }

    #[test]
    fn base64_without_comma_decodes_whole_string() {
        let body = json!({ "image_base64": "aGVsbG8=" });
        let payload = normalize(EndpointKind::Image, None, Some(&body)).unwrap();
        assert_eq!(
            payload,
            InboundPayload::Base64Image {
                raw_bytes: b"hello".to_vec()
            }
        );
    }

    #[test]
    fn invalid_base64_is_a_400_never_a_500() {
        let body = json!({ "image_base64": "%%%not base64%%%" });
        let err = normalize(EndpointKind::Image, None, Some(&body)).unwrap_err();
        assert_eq!(err.http_status, 400);
        assert!(err.message.contains("base64"));
    }

    #[test]
    fn empty_json_names_the_missing_image_sources() {
        let body = json!({});
        let err = normalize(EndpointKind::Image, None, Some(&body)).unwrap_err();
        assert_eq!(err.http_status, 400);
        assert!(err.message.contains("url"));
        assert!(err.message.contains("image_base64"));
    }

    #[test]
    fn text_must_be_non_empty_after_trim() {
        let kind = EndpointKind::Text { field: "text" };
        let err = normalize(kind, None, Some(&json!({ "text": "   " }))).unwrap_err();
        assert_eq!(err.http_status, 400);
        assert!(err.message.contains("text"));

        let payload = normalize(kind, None, Some(&json!({ "text": "hola" }))).unwrap();
        assert_eq!(
            payload,
            InboundPayload::Text {
                content: "hola".to_string()
            }
        );
    }

    #[test]
    fn text_of_the_wrong_type_fails_closed() {
        let kind = EndpointKind::Text { field: "text" };
        let err = normalize(kind, None, Some(&json!({ "text": 42 }))).unwrap_err();
        assert_eq!(err.http_status, 400);
    }

    #[test]
    fn batch_keeps_empty_items_in_order() {
        let kind = EndpointKind::TextBatch { field: "texts" };
        let body = json!({ "texts": ["uno", "", "tres"] });
        let payload = normalize(kind, None, Some(&body)).unwrap();
        assert_eq!(
            payload,
            InboundPayload::TextBatch {
                items: vec!["uno".to_string(), String::new(), "tres".to_string()]
            }
        );
    }

    #[test]
    fn batch_rejects_non_list_and_non_string_items() {
        let kind = EndpointKind::TextBatch { field: "texts" };
        assert_eq!(
            normalize(kind, None, Some(&json!({ "texts": "uno" })))
                .unwrap_err()
                .http_status,
            400
        );
        assert_eq!(
            normalize(kind, None, Some(&json!({ "texts": ["uno", 2] })))
                .unwrap_err()
                .http_status,
            400
        );
    }

    #[test]
    fn question_requires_both_fields() {
        let err = normalize(
            EndpointKind::Question,
            None,
            Some(&json!({ "question": "¿qué?" })),
        )
        .unwrap_err();
        assert_eq!(err.http_status, 400);

        let payload = normalize(
            EndpointKind::Question,
            None,
            Some(&json!({ "question": "¿qué?", "context": "esto" })),
        )
        .unwrap();
        assert!(matches!(payload, InboundPayload::Question { .. }));
    }

    #[test]
    fn no_body_at_all_is_unsupported() {
        let err = normalize(EndpointKind::Image, None, None).unwrap_err();
        assert_eq!(err.http_status, 400);
        assert!(err.message.contains("unsupported"));
    }
}

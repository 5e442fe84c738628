use actix_web::{body::EitherBody, http::header::ContentType, HttpRequest, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;

/// `code` of a successful envelope
pub const SUCCESS_CODE: u16 = 0;
/// `code` used when the payload itself could not be written
pub const SERIALIZATION_FAILURE_CODE: u16 = 500;

/// Envelope around every successful API payload.
///
/// Errors are not wrapped; they are rendered by `WebError` with their own
/// status and body.
#[derive(Debug, Serialize)]
pub struct WebResponse<T> {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> WebResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            message: "success".into(),
            data: Some(data),
        }
    }
}

impl<T> Responder for WebResponse<T>
where
    T: Serialize,
{
    type Body = EitherBody<String>;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        match serde_json::to_string(&self) {
            Ok(body) => HttpResponse::Ok()
                .content_type(ContentType::json())
                .message_body(body)
                .map(|resp| resp.map_into_left_body())
                .unwrap_or_else(|e| HttpResponse::from_error(e).map_into_right_body()),
            Err(e) => {
                error!(error = %e, "failed to serialize response payload");
                let fallback = WebResponse::<()> {
                    code: SERIALIZATION_FAILURE_CODE,
                    message: "failed to serialize response".into(),
                    data: None,
                };
                HttpResponse::InternalServerError()
                    .content_type(ContentType::json())
                    .body(serde_json::to_string(&fallback).unwrap_or_default())
                    .map_into_right_body()
            }
        }
    }
}

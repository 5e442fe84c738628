use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use std::collections::BTreeMap;
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

use crate::{storage::StorageError, symbolic::SymbolicError, BrewError};

#[derive(Error, Debug)]
pub enum WebError {
    #[error("BadRequest: `{0}`")]
    BadRequest(String),
    /// Request body, query or path could not be decoded
    #[error("MalformedRequest: `{0}`")]
    MalformedRequest(String),
    #[error("{0}")]
    Symbolic(#[from] SymbolicError),
    #[error("Validation failed: {}", summarize(.0))]
    Validation(#[from] ValidationErrors),
    #[error("`{0}` not found")]
    NotFound(String),
    #[error("Conflict: `{0}`")]
    Conflict(String),
    #[error("InternalError: `{0}`")]
    InternalError(String),
    #[error("StorageError: `{0}`")]
    StorageError(#[from] StorageError),
}

impl From<std::io::Error> for WebError {
    fn from(e: std::io::Error) -> Self {
        WebError::InternalError(e.to_string())
    }
}

impl From<BrewError> for WebError {
    fn from(e: BrewError) -> Self {
        match e {
            BrewError::StorageError(storage) => WebError::StorageError(storage),
            BrewError::SymbolicError(symbolic) => WebError::Symbolic(symbolic),
            BrewError::WebError(web) => web,
            other => WebError::InternalError(other.to_string()),
        }
    }
}

/// Flattens (possibly nested) validator errors into `field -> messages`.
///
/// Field names are reported in camelCase, as they appear on the wire. Nested
/// struct fields are joined with `.` and list items with `[i]`.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    let mut out = BTreeMap::new();
    collect_messages(errors, None, &mut out);
    out
}

fn collect_messages(
    errors: &ValidationErrors,
    prefix: Option<&str>,
    out: &mut BTreeMap<String, Vec<String>>,
) {
    for (field, kind) in errors.errors() {
        let field = camel_case(field);
        let path = match prefix {
            Some(p) => format!("{p}.{field}"),
            None => field,
        };
        match kind {
            ValidationErrorsKind::Field(list) => {
                let messages = out.entry(path).or_default();
                for err in list {
                    messages.push(
                        err.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| err.code.to_string()),
                    );
                }
            }
            ValidationErrorsKind::Struct(inner) => collect_messages(inner, Some(&path), out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_messages(inner, Some(&format!("{path}[{index}]")), out);
                }
            }
        }
    }
}

/// `roast_level` -> `roastLevel`, `r#type` -> `type`; other names are kept.
fn camel_case(field: &str) -> String {
    let field = field.strip_prefix("r#").unwrap_or(field);
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = !out.is_empty();
        } else if upper {
            out.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn summarize(errors: &ValidationErrors) -> String {
    field_messages(errors)
        .into_iter()
        .map(|(field, messages)| format!("{field}: {}", messages.join("; ")))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ResponseError for WebError {
    fn status_code(&self) -> StatusCode {
        match self {
            WebError::NotFound(_) | WebError::StorageError(StorageError::EntityNotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            WebError::Conflict(_) | WebError::StorageError(StorageError::Conflict(_)) => {
                StatusCode::CONFLICT
            }
            WebError::InternalError(_) | WebError::StorageError(StorageError::Corrupted(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut body = json!({
            "message": self.to_string()
        });
        match self {
            WebError::BadRequest(_) => {
                body["error"] = json!("Bad Request");
            }
            WebError::MalformedRequest(msg) => {
                body["error"] = json!("Malformed Request");
                body["message"] = json!(msg);
            }
            WebError::Symbolic(err) if err.is_decode() => {
                body["error"] = json!("Malformed Request");
                body["type"] = json!(err.type_name());
                body["value"] = json!(err.attempted_value());
                body["accepted"] = json!(err.accepted_values());
            }
            WebError::Symbolic(err) => {
                body["error"] = json!("Validation Failed");
                body["type"] = json!(err.type_name());
                body["accepted"] = json!(err.accepted_values());
            }
            WebError::Validation(errors) => {
                body["error"] = json!("Validation Failed");
                body["fields"] = json!(field_messages(errors));
            }
            WebError::NotFound(_) => {
                body["error"] = json!("Not Found");
            }
            WebError::Conflict(_) => {
                body["error"] = json!("Conflict");
            }
            WebError::InternalError(_) => {
                body["error"] = json!("Internal Server Error");
            }
            WebError::StorageError(storage) => match storage {
                StorageError::EntityNotFound(msg) => {
                    body["error"] = json!("Not Found");
                    body["message"] = json!(format!("`{msg}` not found"));
                }
                StorageError::Conflict(msg) => {
                    body["error"] = json!("Conflict");
                    body["message"] = json!(msg);
                }
                StorageError::InvalidReference(msg) => {
                    body["error"] = json!("Bad Request");
                    body["message"] = json!(msg);
                }
                StorageError::MissingField(field) => {
                    body["error"] = json!("Validation Failed");
                    body["message"] = json!(format!("{field} is required"));
                }
                StorageError::Corrupted(_) => {
                    body["error"] = json!("Storage Error");
                }
            },
        }
        HttpResponse::build(self.status_code()).json(body)
    }
}

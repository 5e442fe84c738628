//! Extractor configuration.
//!
//! Every body, query and path that fails to decode is answered with a
//! "Malformed Request". When a symbolic field was at fault the body also
//! carries the type, the attempted value and the accepted names. Payloads
//! that decode but break a rule are answered with "Validation Failed" and the
//! full per-field list.

use actix_web::HttpRequest;
use actix_web_validator::{Error, JsonConfig, PathConfig, QueryConfig};
use brewlog_codec::wire;
use brewlog_error::web::WebError;
use tracing::warn;

pub(crate) fn json_config(limit: usize) -> JsonConfig {
    JsonConfig::default()
        .limit(limit)
        .error_handler(|err, req| reject(err, req).into())
}

pub(crate) fn query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, req| reject(err, req).into())
}

pub(crate) fn path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, req| reject(err, req).into())
}

fn reject(err: Error, req: &HttpRequest) -> WebError {
    let err = match err {
        Error::Validate(errors) => WebError::Validation(errors),
        other => {
            let message = other.to_string();
            match wire::take_failure(&message) {
                Some(symbolic) => WebError::Symbolic(symbolic),
                None => WebError::MalformedRequest(message),
            }
        }
    };
    warn!(method = %req.method(), path = req.path(), error = %err, "rejected request");
    err
}

//! Shared response writers.

use salvo::Response;
use salvo::http::{HeaderValue, StatusCode};
use salvo::writing::Json;
use serde_json::json;

use crate::error::AppError;

/// Sets a header, logging instead of failing on an invalid value.
pub(super) fn set_header(res: &mut Response, name: &'static str, value: &str) {
    match HeaderValue::from_str(value) {
        Ok(value) => {
            if res.add_header(name, value, true).is_err() {
                tracing::warn!(header = name, "Failed to add header to response");
            }
        }
        Err(e) => tracing::warn!(header = name, error = %e, "Invalid header value"),
    }
}

/// Writes raw bytes with a content type.
pub(super) fn write_bytes(res: &mut Response, content_type: &str, bytes: Vec<u8>) {
    set_header(res, "Content-Type", content_type);
    if let Err(e) = res.write_body(bytes) {
        tracing::error!(error = %e, "Failed to write response body");
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
    }
}

/// Logs `err` and answers with its status and a JSON error body.
pub(super) fn write_error(res: &mut Response, err: &AppError) {
    let status = err.status_code();
    if status.is_server_error() {
        tracing::error!(error = %err, "Request failed");
    } else {
        tracing::debug!(error = %err, %status, "Request rejected");
    }

    res.status_code(status);
    res.render(Json(json!({ "error": err.to_string() })));
}

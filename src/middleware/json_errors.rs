use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::core::AppError;

/// Maximum accepted JSON body (activity events are small)
pub const MAX_JSON_PAYLOAD: usize = 16 * 1024;

/// JSON extractor config that reports body errors in the standard
/// `{"error": {...}}` envelope instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_JSON_PAYLOAD)
        .error_handler(json_error_handler)
}

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(path = %req.path(), error = %err, "Rejected JSON payload");
    AppError::validation(err.to_string()).into()
}

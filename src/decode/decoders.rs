//! Decoder functions

use super::types::{ApiErrorBody, PageResponse};
use crate::error::{Error, Result};

/// Decode a search page body
pub fn decode_page(body: &str) -> Result<PageResponse> {
    serde_json::from_str(body).map_err(|e| Error::decode(format!("invalid search page: {e}")))
}

/// Turn an HTTP status error into an API error when the body is the
/// StackExchange error envelope; anything else is returned unchanged
pub fn classify_http_error(err: Error) -> Error {
    match err {
        Error::HttpStatus { status, body } => match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(api) => Error::Api {
                id: api.error_id,
                name: api.error_name,
                message: api.error_message,
            },
            Err(_) => Error::HttpStatus { status, body },
        },
        other => other,
    }
}

use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse, ResponseError};
use thiserror::Error;
use crate::models::ErrorResponse;

/// Extractor failure rendered as an `ErrorResponse` body
#[derive(Debug, Error)]
#[error("{}: {}", .0.error, .0.message)]
pub struct PayloadError(pub ErrorResponse);

impl PayloadError {
    fn bad_request(error: &str, message: String) -> Self {
        Self(ErrorResponse {
            error: error.to_string(),
            message,
            status_code: StatusCode::BAD_REQUEST.as_u16(),
        })
    }
}

impl ResponseError for PayloadError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(&self.0)
    }
}

/// JSON body extractor config that answers malformed bodies with `invalid_json`
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req: &HttpRequest| {
        tracing::info!("JSON payload error on {}: {}", req.path(), err);
        PayloadError::bad_request("invalid_json", format!("Invalid JSON: {}", err)).into()
    })
}

/// Query extractor config that answers malformed query strings with `invalid_query`
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: error::QueryPayloadError, req: &HttpRequest| {
        tracing::info!("Query error on {}: {}", req.path(), err);
        PayloadError::bad_request("invalid_query", format!("Invalid query: {}", err)).into()
    })
}

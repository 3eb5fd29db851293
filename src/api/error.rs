use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::ServiceError;

/// HTTP-facing error. Everything a handler can fail with ends up here.
#[derive(Debug)]
pub enum ApiError {
    /// 400 - validation failed before any outbound call
    BadRequest(String),

    /// 502 - the news provider answered with a non-success payload
    BadGateway(String),

    /// 500 - generation failure or transport error
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, detail) = match self {
            ApiError::BadRequest(d) => (StatusCode::BAD_REQUEST, "bad_request", d),
            ApiError::BadGateway(d) => (StatusCode::BAD_GATEWAY, "bad_gateway", d),
            ApiError::Internal(d) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", d),
        };

        (status, Json(ErrorBody { error, detail })).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::UpstreamNews(_) => ApiError::BadGateway(err.to_string()),
            ServiceError::Generation(_) => ApiError::Internal(err.to_string()),
            ServiceError::Network(_) => ApiError::Internal(err.to_string()),
        }
    }
}

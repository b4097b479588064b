use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use berth_core::{ProviderError, RuntimeError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Provider(e) => match e {
                ProviderError::MissingInput(_) | ProviderError::InvalidInput(_) => {
                    StatusCode::BAD_REQUEST
                }
                ProviderError::Runtime(RuntimeError::NotFound(_)) => StatusCode::NOT_FOUND,
                ProviderError::ProtocolViolation(_) | ProviderError::Runtime(_) => {
                    StatusCode::BAD_GATEWAY
                }
                ProviderError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
                ProviderError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidRequest(_) => "invalid_request",
            ApiError::Provider(e) => e.kind(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.kind(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

//! Mapping from handler failures to HTTP responses.
//!
//! Validation problems answer 400 with the reason as a plain-text body. Every
//! storage failure, a missing todo included, answers 500 with a fixed body;
//! existing clients rely on that contract.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::storage::StorageError;

pub const SERVER_ERROR_BODY: &str = "Server encountered an error.";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::BadRequest(message) => {
                tracing::debug!(%status, %message, "rejected request");
                (status, message).into_response()
            }
            AppError::Storage(source) => {
                tracing::error!(%status, error = %source, "storage operation failed");
                (status, SERVER_ERROR_BODY).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TodoId;

    #[test]
    fn bad_request_maps_to_400() {
        let err = AppError::bad_request("lol");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "bad request: lol");
    }

    #[test]
    fn not_found_maps_to_500() {
        let err = AppError::from(StorageError::NotFound(TodoId(7)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "todo 7 not found");
    }

    #[test]
    fn unavailable_maps_to_500() {
        let resp = AppError::from(StorageError::Unavailable("down".into())).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` covers the router's 404 for unknown paths. A missing todo is
//! reported by the server as a 500, so it lands in `HttpError` with the raw
//! status and body like every other unexpected status.

/// Errors returned by `TodoClient` parse methods and `BlockingClient` calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a status other than the one the endpoint promises.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The request never produced a response (connection refused, bad URL, ...).
    #[error("transport error: {0}")]
    Transport(String),
}

//! HTTP API for managing todos.
//!
//! # Design
//! The storage backend is injected into [`app`] and shared with every handler
//! as router state; there is no global store. Handlers depend only on the
//! [`Storage`] trait, so tests can swap in [`FailingStorage`] to exercise the
//! error paths.

pub mod config;
pub mod error;
mod handlers;
pub mod model;
pub mod storage;

use std::future::Future;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::{ConfigError, ServerConfig};
pub use error::{AppError, SERVER_ERROR_BODY};
pub use handlers::{NOT_FOUND_BODY, STATUS_MESSAGE};
pub use model::{AddRequest, Todo, TodoId};
pub use storage::{FailingStorage, InMemoryStorage, Storage, StorageError};

pub fn app<S: Storage>(storage: S) -> Router {
    Router::new()
        .route("/status", get(handlers::status))
        .route("/todo", get(handlers::list::<S>))
        .route("/todo/create", post(handlers::add_todo::<S>))
        .route("/todo/{id}", get(handlers::get_todo::<S>))
        .route("/todo/{id}/finish", post(handlers::finish_todo::<S>))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(storage)
}

/// Serve the API on `listener` until `shutdown` resolves.
pub async fn run<S, F>(listener: TcpListener, storage: S, shutdown: F) -> Result<(), std::io::Error>
where
    S: Storage,
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(storage))
        .with_graceful_shutdown(shutdown)
        .await
}

//! One handler per endpoint. Each turns a request into a single storage call.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppError;
use crate::model::{AddRequest, Todo, TodoId};
use crate::storage::Storage;

pub const STATUS_MESSAGE: &str = "API is up and working!";
pub const NOT_FOUND_BODY: &str = "404 page not found";

pub(crate) async fn list<S: Storage>(State(storage): State<S>) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = storage.get_all().await?;
    Ok(Json(todos))
}

pub(crate) async fn status() -> Json<&'static str> {
    Json(STATUS_MESSAGE)
}

/// The body is decoded here rather than through the `Json` extractor so that
/// every malformed payload, whatever the content type, is answered with 400.
pub(crate) async fn add_todo<S: Storage>(
    State(storage): State<S>,
    body: Bytes,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let input: AddRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::bad_request(format!("invalid request body: {e}")))?;
    input.validate().map_err(AppError::bad_request)?;

    let todo = storage.add_todo(input.title, input.content).await?;
    tracing::info!(id = %todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

pub(crate) async fn get_todo<S: Storage>(
    State(storage): State<S>,
    Path(raw_id): Path<String>,
) -> Result<Json<Todo>, AppError> {
    let id = parse_id(&raw_id)?;
    let todo = storage.get_todo(id).await?;
    Ok(Json(todo))
}

pub(crate) async fn finish_todo<S: Storage>(
    State(storage): State<S>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&raw_id)?;
    storage.finish_todo(id).await?;
    tracing::info!(%id, "finished todo");
    Ok(StatusCode::OK)
}

pub(crate) async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}

fn parse_id(raw: &str) -> Result<TodoId, AppError> {
    raw.parse()
        .map_err(|_| AppError::bad_request(format!("invalid todo id: {raw:?}")))
}

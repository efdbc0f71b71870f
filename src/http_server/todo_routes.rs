//! Todo HTTP Routes
//!
//! One handler per endpoint. Each handler calls exactly one store operation;
//! store failures are passed to the error boundary as `ApiError::Store`.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use super::errors::{ApiError, ApiResult};
use crate::store::{StoreResult, Todo, TodoId, TodoPatch, TodoStore};

pub const TODO_DELETED: &str = "Todo deleted";

// ==================
// Shared State
// ==================

/// Todo state shared across handlers
#[derive(Clone)]
pub struct TodoState {
    pub store: Arc<dyn TodoStore>,
}

impl TodoState {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    /// Run a store operation on the blocking pool
    async fn run<T, F>(&self, op: F) -> ApiResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&dyn TodoStore) -> StoreResult<T> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let result = tokio::task::spawn_blocking(move || op(store.as_ref()))
            .await
            .map_err(|e| ApiError::Internal(format!("store task failed: {}", e)))?;
        Ok(result?)
    }
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ==================
// Todo Routes
// ==================

/// Create todo routes mounted under `prefix` (`None` mounts them at the root)
///
/// The collection is listed at both `{prefix}` and `{prefix}/`.
pub fn todo_routes(state: TodoState, prefix: Option<&str>) -> Router {
    let base = prefix.unwrap_or("");
    let router = Router::new()
        .route(&format!("{}/", base), get(list_todos_handler))
        .route(&format!("{}/add", base), post(create_todo_handler))
        .route(&format!("{}/:todo_id", base), get(get_todo_handler))
        .route(&format!("{}/update/:todo_id", base), put(update_todo_handler))
        .route(&format!("{}/delete/:todo_id", base), delete(delete_todo_handler));

    let router = match prefix {
        Some(prefix) => router.route(prefix, get(list_todos_handler)),
        None => router,
    };

    router.with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Parse a path segment as an id
///
/// A segment that is not a number can never match a stored id, so callers
/// treat `None` as not found.
pub fn parse_todo_id(raw: &str) -> Option<TodoId> {
    raw.trim().parse().ok()
}

/// Title from a create body, if it is a non-empty string
fn required_title(body: &Value) -> Option<&str> {
    body.get("title")
        .and_then(Value::as_str)
        .filter(|title| !title.is_empty())
}

/// Fields to merge from an update body
///
/// A missing or non-JSON body, or a JSON value that is not an object, merges
/// nothing. An object whose known fields have the wrong type is an error.
fn patch_from_body(body: Result<Json<Value>, JsonRejection>) -> Result<TodoPatch, String> {
    match body {
        Ok(Json(value)) if value.is_object() => {
            serde_json::from_value(value).map_err(|e| e.to_string())
        }
        _ => Ok(TodoPatch::default()),
    }
}

// ==================
// Handlers
// ==================

async fn list_todos_handler(State(state): State<TodoState>) -> ApiResult<Json<Vec<Todo>>> {
    let todos = state.run(|store| store.load_all()).await?;
    Ok(Json(todos))
}

async fn create_todo_handler(
    State(state): State<TodoState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Todo>)> {
    // A missing or unparseable body has no title either.
    let Ok(Json(body)) = body else {
        return Err(ApiError::title_required());
    };
    let title = required_title(&body)
        .ok_or_else(ApiError::title_required)?
        .to_string();

    let todo = state.run(move |store| store.insert(&title)).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn get_todo_handler(
    State(state): State<TodoState>,
    Path(todo_id): Path<String>,
) -> ApiResult<Json<Todo>> {
    let id = parse_todo_id(&todo_id).ok_or(ApiError::NotFound)?;

    state
        .run(move |store| store.get_by_id(id))
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn update_todo_handler(
    State(state): State<TodoState>,
    Path(todo_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Todo>> {
    let id = parse_todo_id(&todo_id).ok_or(ApiError::NotFound)?;

    match patch_from_body(body) {
        Ok(patch) => state
            .run(move |store| store.update(id, patch))
            .await?
            .map(Json)
            .ok_or(ApiError::NotFound),
        // Unknown ids are reported before a malformed body.
        Err(reason) => match state.run(move |store| store.get_by_id(id)).await? {
            Some(_) => Err(ApiError::InvalidBody(reason)),
            None => Err(ApiError::NotFound),
        },
    }
}

async fn delete_todo_handler(
    State(state): State<TodoState>,
    Path(todo_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_todo_id(&todo_id).ok_or(ApiError::NotFound)?;

    if state.run(move |store| store.delete(id)).await? {
        Ok(Json(MessageResponse {
            message: TODO_DELETED.to_string(),
        }))
    } else {
        Err(ApiError::NotFound)
    }
}

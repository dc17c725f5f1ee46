//! Todo Endpoints
//!
//! Frontend bindings for task CRUD.

use serde::Serialize;

use super::{delete_unit, get_json, post_unit, put_unit, ApiError};
use crate::models::{Priority, Status, Todo, TodoDraft};

// ========================
// Payload Structs
// ========================

/// `POST /todos` body. The legacy `completed` mirror is always sent so older
/// API consumers keep seeing a consistent document.
#[derive(Serialize)]
struct CreateTodoPayload<'a> {
    title: &'a str,
    description: &'a str,
    priority: Priority,
    status: Status,
    completed: bool,
}

impl<'a> CreateTodoPayload<'a> {
    fn from_draft(draft: &'a TodoDraft) -> CreateTodoPayload<'a> {
        CreateTodoPayload {
            title: &draft.title,
            description: &draft.description,
            priority: draft.priority,
            status: draft.status,
            completed: draft.status.is_completed(),
        }
    }
}

/// `PUT /todos/{id}` body; fields left `None` are not touched by the API.
#[derive(Serialize, Default)]
pub struct UpdateTodoPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl<'a> UpdateTodoPayload<'a> {
    /// Full-draft update (card edit form): every editable field plus the
    /// recomputed mirror.
    pub fn from_draft(draft: &'a TodoDraft) -> UpdateTodoPayload<'a> {
        UpdateTodoPayload {
            title: Some(&draft.title),
            description: Some(&draft.description),
            priority: Some(draft.priority),
            status: Some(draft.status),
            completed: Some(draft.status.is_completed()),
        }
    }

    /// Status-only update (pill cycle), mirror kept in sync.
    pub fn status_change(status: Status) -> UpdateTodoPayload<'static> {
        UpdateTodoPayload {
            status: Some(status),
            completed: Some(status.is_completed()),
            ..Default::default()
        }
    }
}

// ========================
// Endpoints
// ========================

/// `GET /todos`. Normalizes each row on the way in so the rest of the app
/// only sees canonical status variants and a trustworthy `completed` mirror.
pub async fn list_todos() -> Result<Vec<Todo>, ApiError> {
    let todos: Vec<Todo> = get_json("/todos").await?;
    Ok(todos.into_iter().map(Todo::normalized).collect())
}

/// `POST /todos`. Callers reload the list on success; the server assigns the
/// identifier, the client never invents one.
pub async fn create_todo(draft: &TodoDraft) -> Result<(), ApiError> {
    post_unit("/todos", &CreateTodoPayload::from_draft(draft)).await
}

pub async fn update_todo(id: &str, payload: &UpdateTodoPayload<'_>) -> Result<(), ApiError> {
    put_unit(&format!("/todos/{id}"), payload).await
}

pub async fn delete_todo(id: &str) -> Result<(), ApiError> {
    delete_unit(&format!("/todos/{id}")).await
}

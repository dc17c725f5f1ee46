//! Frontend Models
//!
//! Data structures matching the remote API's wire format.

use serde::{Deserialize, Serialize};

/// Task priority, lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Wire token, also used as the form control value.
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn parse(value: &str) -> Option<Priority> {
        match value {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

/// Task status. The canonical wire token for the middle state is the
/// hyphenated `in-progress`; legacy rows sometimes carry `in progress` or
/// `inprogress`, which deserialize to the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Pending,
    #[serde(alias = "in progress", alias = "inprogress")]
    InProgress,
    Completed,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Pending, Status::InProgress, Status::Completed];

    /// Canonical wire token, also used as the form control value.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::InProgress => "in-progress",
            Status::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::InProgress => "In Progress",
            Status::Completed => "Completed",
        }
    }

    /// Parse a form/wire token, normalizing the legacy spellings here so the
    /// rest of the app only ever sees the canonical variants.
    pub fn parse(value: &str) -> Option<Status> {
        match value {
            "pending" => Some(Status::Pending),
            "in-progress" | "in progress" | "inprogress" => Some(Status::InProgress),
            "completed" => Some(Status::Completed),
            _ => None,
        }
    }

    /// Next status along the fixed cycle pending → in-progress → completed.
    pub fn cycle(self) -> Status {
        match self {
            Status::Pending => Status::InProgress,
            Status::InProgress => Status::Completed,
            Status::Completed => Status::Pending,
        }
    }

    pub fn is_completed(self) -> bool {
        self == Status::Completed
    }
}

/// Task card (matches the API's todo document).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: Status,
    /// Legacy mirror kept for backward compatibility; status is authoritative.
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    /// Recompute the legacy `completed` mirror from status. Rows written by
    /// older clients can carry a stale mirror.
    pub fn normalized(mut self) -> Todo {
        self.completed = self.status.is_completed();
        self
    }
}

/// Authenticated user profile (camelCase on the wire).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: String,
}

impl User {
    /// Greeting name: first name, then username, then a generic fallback.
    pub fn display_name(&self) -> &str {
        if let Some(first) = self.first_name.as_deref() {
            if !first.is_empty() {
                return first;
            }
        }
        if let Some(username) = self.username.as_deref() {
            if !username.is_empty() {
                return username;
            }
        }
        "User"
    }
}

/// `POST /auth/login` response body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Editable task fields, used by the creation form and as the per-card edit
/// draft. Defaults match the creation form's initial values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TodoDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_cycle_order() {
        assert_eq!(Status::Pending.cycle(), Status::InProgress);
        assert_eq!(Status::InProgress.cycle(), Status::Completed);
        assert_eq!(Status::Completed.cycle(), Status::Pending);
    }

    #[test]
    fn test_status_cycle_visits_every_state() {
        for start in Status::ALL {
            let mut seen = vec![start];
            let mut current = start;
            for _ in 0..2 {
                current = current.cycle();
                seen.push(current);
            }
            seen.sort_by_key(|s| s.as_str());
            seen.dedup();
            assert_eq!(seen.len(), 3);
            assert_eq!(current.cycle(), start);
        }
    }

    #[test]
    fn test_status_wire_form_is_hyphenated() {
        assert_eq!(
            serde_json::to_value(Status::InProgress).unwrap(),
            json!("in-progress")
        );
        assert_eq!(serde_json::to_value(Status::Pending).unwrap(), json!("pending"));
        assert_eq!(
            serde_json::to_value(Status::Completed).unwrap(),
            json!("completed")
        );
    }

    #[test]
    fn test_status_accepts_legacy_spellings() {
        for raw in ["\"in-progress\"", "\"in progress\"", "\"inprogress\""] {
            let status: Status = serde_json::from_str(raw).unwrap();
            assert_eq!(status, Status::InProgress);
        }
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(Status::parse("pending"), Some(Status::Pending));
        assert_eq!(Status::parse("in progress"), Some(Status::InProgress));
        assert_eq!(Status::parse("inprogress"), Some(Status::InProgress));
        assert_eq!(Status::parse("in-progress"), Some(Status::InProgress));
        assert_eq!(Status::parse("completed"), Some(Status::Completed));
        assert_eq!(Status::parse("done"), None);
        assert_eq!(Status::parse(""), None);
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!(Priority::parse("low"), Some(Priority::Low));
        assert_eq!(Priority::parse("medium"), Some(Priority::Medium));
        assert_eq!(Priority::parse("high"), Some(Priority::High));
        assert_eq!(Priority::parse("urgent"), None);
    }

    #[test]
    fn test_todo_deserializes_server_document() {
        let todo: Todo = serde_json::from_value(json!({
            "_id": "64f1c0ffee",
            "title": "Buy milk",
            "description": "2 liters",
            "priority": "high",
            "status": "pending",
            "completed": false,
            "user": "ignored-extra-field"
        }))
        .unwrap();
        assert_eq!(todo.id, "64f1c0ffee");
        assert_eq!(todo.title, "Buy milk");
        assert_eq!(todo.priority, Priority::High);
        assert_eq!(todo.status, Status::Pending);
    }

    #[test]
    fn test_todo_defaults_for_missing_fields() {
        let todo: Todo = serde_json::from_value(json!({
            "_id": "1",
            "title": "Bare minimum"
        }))
        .unwrap();
        assert_eq!(todo.description, "");
        assert_eq!(todo.priority, Priority::Medium);
        assert_eq!(todo.status, Status::Pending);
        assert!(!todo.completed);
    }

    #[test]
    fn test_normalized_recomputes_stale_mirror() {
        let stale: Todo = serde_json::from_value(json!({
            "_id": "1",
            "title": "Ship it",
            "status": "completed",
            "completed": false
        }))
        .unwrap();
        let todo = stale.normalized();
        assert!(todo.completed);

        let stale: Todo = serde_json::from_value(json!({
            "_id": "2",
            "title": "Not done",
            "status": "in progress",
            "completed": true
        }))
        .unwrap();
        let todo = stale.normalized();
        assert_eq!(todo.status, Status::InProgress);
        assert!(!todo.completed);
    }

    #[test]
    fn test_display_name_fallback_chain() {
        let user: User = serde_json::from_value(json!({
            "firstName": "Ada",
            "username": "ada42",
            "email": "ada@example.com"
        }))
        .unwrap();
        assert_eq!(user.display_name(), "Ada");

        let user: User = serde_json::from_value(json!({
            "firstName": "",
            "username": "ada42",
            "email": "ada@example.com"
        }))
        .unwrap();
        assert_eq!(user.display_name(), "ada42");

        let user: User = serde_json::from_value(json!({
            "email": "ada@example.com"
        }))
        .unwrap();
        assert_eq!(user.display_name(), "User");
    }

    #[test]
    fn test_draft_defaults_match_creation_form() {
        let draft = TodoDraft::default();
        assert_eq!(draft.priority, Priority::Medium);
        assert_eq!(draft.status, Status::Pending);
        assert!(draft.title.is_empty());
    }
}

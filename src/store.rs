//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Status, Todo, TodoDraft};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Task cards, kept in server response order
    pub todos: Vec<Todo>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole list with a fresh server response
pub fn store_set_todos(store: &AppStore, todos: Vec<Todo>) {
    store.todos().set(todos);
}

/// Merge an acknowledged edit draft into the matching card, in place
pub fn store_merge_draft(store: &AppStore, id: &str, draft: &TodoDraft) {
    merge_draft_in(&mut store.todos().write(), id, draft);
}

/// Set a card's status after the server acknowledged it
pub fn store_set_status(store: &AppStore, id: &str, status: Status) {
    set_status_in(&mut store.todos().write(), id, status);
}

/// Remove a card by ID
pub fn store_remove_todo(store: &AppStore, id: &str) {
    store.todos().write().retain(|todo| todo.id != id);
}

/// Drop every cached card. Cached cards belong to the session that loaded
/// them; `App` calls this whenever the session ends so the next login starts
/// from an empty list.
pub fn store_clear_todos(store: &AppStore) {
    store.todos().write().clear();
}

// Merge logic on plain slices, separate from the reactive wrappers so it can
// run under plain `cargo test`.

fn merge_draft_in(todos: &mut [Todo], id: &str, draft: &TodoDraft) {
    if let Some(todo) = todos.iter_mut().find(|todo| todo.id == id) {
        todo.title = draft.title.clone();
        todo.description = draft.description.clone();
        todo.priority = draft.priority;
        todo.status = draft.status;
        todo.completed = draft.status.is_completed();
    }
}

fn set_status_in(todos: &mut [Todo], id: &str, status: Status) {
    if let Some(todo) = todos.iter_mut().find(|todo| todo.id == id) {
        todo.status = status;
        todo.completed = status.is_completed();
    }
}

/// Cards whose status is anything but completed
pub fn uncompleted_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|todo| !todo.status.is_completed()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    fn make_todo(id: &str, title: &str, status: Status) -> Todo {
        Todo {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            priority: Priority::Medium,
            status,
            completed: status.is_completed(),
        }
    }

    #[test]
    fn test_merge_draft_replaces_in_place() {
        let mut todos = vec![
            make_todo("a", "First", Status::Pending),
            make_todo("b", "Second", Status::Pending),
            make_todo("c", "Third", Status::Pending),
        ];
        let draft = TodoDraft {
            title: "Second, revised".to_string(),
            description: "now with notes".to_string(),
            priority: Priority::High,
            status: Status::Completed,
        };
        merge_draft_in(&mut todos, "b", &draft);

        let ids: Vec<&str> = todos.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert_eq!(todos[1].title, "Second, revised");
        assert_eq!(todos[1].priority, Priority::High);
        assert!(todos[1].completed);
        assert_eq!(todos[0].title, "First");
        assert_eq!(todos[2].title, "Third");
    }

    #[test]
    fn test_merge_draft_unknown_id_is_noop() {
        let mut todos = vec![make_todo("a", "Only", Status::Pending)];
        let before = todos.clone();
        merge_draft_in(&mut todos, "missing", &TodoDraft::default());
        assert_eq!(todos, before);
    }

    #[test]
    fn test_set_status_syncs_completed_mirror() {
        let mut todos = vec![make_todo("a", "Task", Status::InProgress)];
        set_status_in(&mut todos, "a", Status::Completed);
        assert_eq!(todos[0].status, Status::Completed);
        assert!(todos[0].completed);

        set_status_in(&mut todos, "a", Status::Pending);
        assert_eq!(todos[0].status, Status::Pending);
        assert!(!todos[0].completed);
    }

    #[test]
    fn test_remove_targets_exactly_one() {
        let mut todos = vec![
            make_todo("a", "First", Status::Pending),
            make_todo("b", "Second", Status::Pending),
            make_todo("c", "Third", Status::Pending),
        ];
        todos.retain(|todo| todo.id != "b");
        let ids: Vec<&str> = todos.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn test_clear_discards_cached_cards() {
        let store = Store::new(AppState {
            todos: vec![
                make_todo("a", "First", Status::Pending),
                make_todo("b", "Second", Status::Completed),
            ],
        });
        store_clear_todos(&store);
        assert!(store.todos().with(|todos| todos.is_empty()));
    }

    #[test]
    fn test_uncompleted_count_ignores_completed_only() {
        let todos = vec![
            make_todo("a", "One", Status::Pending),
            make_todo("b", "Two", Status::InProgress),
            make_todo("c", "Three", Status::Completed),
            make_todo("d", "Four", Status::Completed),
        ];
        assert_eq!(uncompleted_count(&todos), 2);
        assert_eq!(uncompleted_count(&[]), 0);
    }
}

//! Form Validation
//!
//! Synchronous per-field rules for the auth and task forms. Each offending
//! field gets exactly one human-readable message, keyed by the form control
//! name; submission is blocked until the map is empty. Server-side
//! rejections are a separate top-level error, never a field error.

use std::collections::HashMap;

use crate::models::{Priority, Status, TodoDraft};

/// One message per offending form control.
pub type FieldErrors = HashMap<&'static str, String>;

// ========================
// Task Form
// ========================

/// Raw control values from the create/edit task forms.
pub struct TodoFormInput<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub priority: &'a str,
    pub status: &'a str,
}

/// Validate a task form, producing a typed draft on success. Legacy status
/// spellings (`in progress`, `inprogress`) are accepted and normalized here.
pub fn validate_todo(input: &TodoFormInput<'_>) -> Result<TodoDraft, FieldErrors> {
    let mut errors = FieldErrors::new();

    if input.title.is_empty() {
        errors.insert("title", "Title is required".to_string());
    } else if input.title.chars().count() < 3 {
        errors.insert("title", "Title must be at least 3 characters".to_string());
    }

    let priority = if input.priority.is_empty() {
        errors.insert("priority", "Priority is required".to_string());
        None
    } else {
        let parsed = Priority::parse(input.priority);
        if parsed.is_none() {
            errors.insert("priority", "Invalid priority level".to_string());
        }
        parsed
    };

    let status = if input.status.is_empty() {
        errors.insert("status", "Status is required".to_string());
        None
    } else {
        let parsed = Status::parse(input.status);
        if parsed.is_none() {
            errors.insert("status", "Invalid status".to_string());
        }
        parsed
    };

    if !errors.is_empty() {
        return Err(errors);
    }
    // Both parses succeeded once errors is empty.
    match (priority, status) {
        (Some(priority), Some(status)) => Ok(TodoDraft {
            title: input.title.to_string(),
            description: input.description.to_string(),
            priority,
            status,
        }),
        _ => Err(errors),
    }
}

// ========================
// Auth Forms
// ========================

/// Raw control values from the registration form.
pub struct RegistrationInput<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Empty map means the form may be submitted.
pub fn validate_registration(input: &RegistrationInput<'_>) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if input.first_name.is_empty() {
        errors.insert("firstName", "First name is required".to_string());
    } else if input.first_name.chars().count() < 2 {
        errors.insert("firstName", "First name must be at least 2 characters".to_string());
    }

    if input.last_name.is_empty() {
        errors.insert("lastName", "Last name is required".to_string());
    } else if input.last_name.chars().count() < 2 {
        errors.insert("lastName", "Last name must be at least 2 characters".to_string());
    }

    if input.username.is_empty() {
        errors.insert("username", "Username is required".to_string());
    } else if input.username.chars().count() < 3 {
        errors.insert("username", "Username must be at least 3 characters".to_string());
    } else if input.username.chars().count() > 20 {
        errors.insert("username", "Username must be less than 20 characters".to_string());
    } else if !input
        .username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        errors.insert(
            "username",
            "Username can only contain letters, numbers and underscores".to_string(),
        );
    }

    if input.email.is_empty() {
        errors.insert("email", "Email is required".to_string());
    } else if !is_valid_email(input.email) {
        errors.insert("email", "Invalid email address".to_string());
    }

    if input.password.is_empty() {
        errors.insert("password", "Password is required".to_string());
    } else if input.password.chars().count() < 8 {
        errors.insert("password", "Password must be at least 8 characters".to_string());
    } else if !input.password.chars().any(|c| c.is_ascii_alphabetic()) {
        errors.insert("password", "Password must contain at least one letter".to_string());
    } else if !input.password.chars().any(|c| c.is_ascii_digit()) {
        errors.insert("password", "Password must contain at least one number".to_string());
    }

    errors
}

/// Empty map means the form may be submitted.
pub fn validate_login(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if email.is_empty() {
        errors.insert("email", "Email is required".to_string());
    } else if !is_valid_email(email) {
        errors.insert("email", "Invalid email address".to_string());
    }

    if password.is_empty() {
        errors.insert("password", "Password is required".to_string());
    }

    errors
}

/// Structural email check: one `@`, non-empty local part, dotted domain.
fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo_input<'a>(title: &'a str, priority: &'a str, status: &'a str) -> TodoFormInput<'a> {
        TodoFormInput {
            title,
            description: "",
            priority,
            status,
        }
    }

    #[test]
    fn test_valid_todo_form_produces_draft() {
        let draft = validate_todo(&todo_input("Buy milk", "high", "pending")).unwrap();
        assert_eq!(draft.title, "Buy milk");
        assert_eq!(draft.priority, Priority::High);
        assert_eq!(draft.status, Status::Pending);
    }

    #[test]
    fn test_short_title_reports_exactly_one_error() {
        let errors = validate_todo(&todo_input("ab", "medium", "pending")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["title"], "Title must be at least 3 characters");
    }

    #[test]
    fn test_empty_title_uses_required_message() {
        let errors = validate_todo(&todo_input("", "medium", "pending")).unwrap_err();
        assert_eq!(errors["title"], "Title is required");
    }

    #[test]
    fn test_todo_form_rejects_unknown_tokens() {
        let errors = validate_todo(&todo_input("Valid title", "urgent", "done")).unwrap_err();
        assert_eq!(errors["priority"], "Invalid priority level");
        assert_eq!(errors["status"], "Invalid status");
    }

    #[test]
    fn test_todo_form_requires_priority_and_status() {
        let errors = validate_todo(&todo_input("Valid title", "", "")).unwrap_err();
        assert_eq!(errors["priority"], "Priority is required");
        assert_eq!(errors["status"], "Status is required");
    }

    #[test]
    fn test_todo_form_normalizes_legacy_status_spellings() {
        for raw in ["in progress", "inprogress", "in-progress"] {
            let draft = validate_todo(&todo_input("Valid title", "low", raw)).unwrap();
            assert_eq!(draft.status, Status::InProgress);
        }
    }

    fn registration<'a>(
        username: &'a str,
        email: &'a str,
        password: &'a str,
    ) -> RegistrationInput<'a> {
        RegistrationInput {
            first_name: "Ada",
            last_name: "Lovelace",
            username,
            email,
            password,
        }
    }

    #[test]
    fn test_valid_registration_has_no_errors() {
        let errors = validate_registration(&registration("ada_42", "ada@example.com", "passw0rd"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_registration_name_rules() {
        let errors = validate_registration(&RegistrationInput {
            first_name: "A",
            last_name: "",
            username: "ada42",
            email: "ada@example.com",
            password: "passw0rd",
        });
        assert_eq!(errors["firstName"], "First name must be at least 2 characters");
        assert_eq!(errors["lastName"], "Last name is required");
    }

    #[test]
    fn test_registration_username_rules() {
        let errors = validate_registration(&registration("ab", "a@b.co", "passw0rd"));
        assert_eq!(errors["username"], "Username must be at least 3 characters");

        let errors = validate_registration(&registration(
            "abcdefghijklmnopqrstu",
            "a@b.co",
            "passw0rd",
        ));
        assert_eq!(errors["username"], "Username must be less than 20 characters");

        let errors = validate_registration(&registration("ada lovelace", "a@b.co", "passw0rd"));
        assert_eq!(
            errors["username"],
            "Username can only contain letters, numbers and underscores"
        );

        let errors = validate_registration(&registration("ada_lovelace", "a@b.co", "passw0rd"));
        assert!(!errors.contains_key("username"));
    }

    #[test]
    fn test_registration_password_rules() {
        let errors = validate_registration(&registration("ada42", "a@b.co", "short1"));
        assert_eq!(errors["password"], "Password must be at least 8 characters");

        let errors = validate_registration(&registration("ada42", "a@b.co", "12345678"));
        assert_eq!(errors["password"], "Password must contain at least one letter");

        let errors = validate_registration(&registration("ada42", "a@b.co", "passwords"));
        assert_eq!(errors["password"], "Password must contain at least one number");
    }

    #[test]
    fn test_login_rules() {
        assert!(validate_login("ada@example.com", "anything").is_empty());

        let errors = validate_login("", "");
        assert_eq!(errors["email"], "Email is required");
        assert_eq!(errors["password"], "Password is required");

        let errors = validate_login("not-an-email", "pw");
        assert_eq!(errors["email"], "Invalid email address");
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@missing-local.com"));
        assert!(!is_valid_email("no-domain@"));
        assert!(!is_valid_email("no-tld@domain"));
        assert!(!is_valid_email("two@@signs.com"));
        assert!(!is_valid_email("has space@domain.com"));
        assert!(!is_valid_email("trailing-dot@domain."));
    }
}

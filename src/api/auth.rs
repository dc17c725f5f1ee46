//! Auth Endpoints
//!
//! Frontend bindings for registration, login, and profile lookup.

use serde::Serialize;

use super::{get_json, post_json, post_unit, ApiError};
use crate::models::{AuthResponse, User};

// ========================
// Payload Structs
// ========================

#[derive(Serialize)]
pub struct RegisterPayload<'a> {
    #[serde(rename = "firstName")]
    pub first_name: &'a str,
    #[serde(rename = "lastName")]
    pub last_name: &'a str,
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
struct LoginPayload<'a> {
    email: &'a str,
    password: &'a str,
}

// ========================
// Endpoints
// ========================

/// `POST /auth/register`. The new account logs in explicitly afterwards; the
/// API returns no token here.
pub async fn register(payload: &RegisterPayload<'_>) -> Result<(), ApiError> {
    post_unit("/auth/register", payload).await
}

/// `POST /auth/login`, returning the bearer token and the profile.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    post_json("/auth/login", &LoginPayload { email, password }).await
}

/// `GET /auth/me` using the stored token.
pub async fn fetch_profile() -> Result<User, ApiError> {
    get_json("/auth/me").await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_payload_uses_camel_case() {
        let payload = RegisterPayload {
            first_name: "Ada",
            last_name: "Lovelace",
            username: "ada42",
            email: "ada@example.com",
            password: "s3cretpass",
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "username": "ada42",
                "email": "ada@example.com",
                "password": "s3cretpass"
            })
        );
    }
}

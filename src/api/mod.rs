//! API Client
//!
//! HTTP bindings to the remote task service, organized by domain. Requests
//! are JSON over fetch, carry the stored bearer token when one is present,
//! and normalize every failure path into [`ApiError`].

mod auth;
mod todos;

use std::fmt;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::storage;

// Re-export all public items
pub use auth::*;
pub use todos::*;

const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// API origin. Override at compile time, e.g. `API_BASE_URL=https://api.example.com`.
pub fn base_url() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or(DEFAULT_BASE_URL)
}

// ========================
// Error Type
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Request never produced an HTTP response.
    Network,
    /// 401/403: token missing, invalid, or expired.
    Unauthorized,
    /// Any other non-2xx response.
    Api,
    /// 2xx response whose body failed to parse.
    Decode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// HTTP status, 0 when no response was received.
    pub status: u16,
    pub kind: ApiErrorKind,
    message: String,
    from_server: bool,
}

impl ApiError {
    /// Best available human-readable text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The API's own `{ "error": … }` message, when the body carried one.
    /// Forms show this directly and fall back to a generic line otherwise.
    pub fn server_message(&self) -> Option<&str> {
        self.from_server.then_some(self.message.as_str())
    }

    /// Callers force a logout when this is true.
    pub fn is_unauthorized(&self) -> bool {
        self.kind == ApiErrorKind::Unauthorized
    }

    fn network(err: gloo_net::Error) -> ApiError {
        ApiError {
            status: 0,
            kind: ApiErrorKind::Network,
            message: err.to_string(),
            from_server: false,
        }
    }

    fn decode(err: gloo_net::Error) -> ApiError {
        ApiError {
            status: 0,
            kind: ApiErrorKind::Decode,
            message: err.to_string(),
            from_server: false,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// Error body shape used by the API: `{ "error": "…" }`.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

// ========================
// Request Plumbing
// ========================

fn endpoint(path: &str) -> String {
    format!("{}{}", base_url(), path)
}

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match storage::load_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let kind = if status == 401 || status == 403 {
        ApiErrorKind::Unauthorized
    } else {
        ApiErrorKind::Api
    };
    // Prefer the API's own message when the body parses as { "error": … }.
    let (message, from_server) = match response.json::<ErrorBody>().await {
        Ok(ErrorBody { error: Some(message) }) if !message.is_empty() => (message, true),
        _ => (format!("Request failed with status {status}"), false),
    };
    ApiError {
        status,
        kind,
        message,
        from_server,
    }
}

async fn send(request: Request) -> Result<Response, ApiError> {
    let response = request.send().await.map_err(ApiError::network)?;
    if response.ok() {
        Ok(response)
    } else {
        Err(error_from_response(response).await)
    }
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let request = authorized(Request::get(&endpoint(path)))
        .build()
        .map_err(ApiError::network)?;
    let response = send(request).await?;
    response.json::<T>().await.map_err(ApiError::decode)
}

async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let request = authorized(Request::post(&endpoint(path)))
        .json(body)
        .map_err(ApiError::network)?;
    let response = send(request).await?;
    response.json::<T>().await.map_err(ApiError::decode)
}

/// POST where the caller only needs success/failure, not the body.
async fn post_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let request = authorized(Request::post(&endpoint(path)))
        .json(body)
        .map_err(ApiError::network)?;
    send(request).await.map(|_| ())
}

async fn put_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let request = authorized(Request::put(&endpoint(path)))
        .json(body)
        .map_err(ApiError::network)?;
    send(request).await.map(|_| ())
}

async fn delete_unit(path: &str) -> Result<(), ApiError> {
    let request = authorized(Request::delete(&endpoint(path)))
        .build()
        .map_err(ApiError::network)?;
    send(request).await.map(|_| ())
}

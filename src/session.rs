//! Session Store
//!
//! Auth session state (persisted token + cached profile) behind a context so
//! any component can gate on it. Constructed once in `App`, provided via the
//! Leptos Context API, never a global singleton.

use leptos::prelude::*;
use web_sys::console;

use crate::api;
use crate::models::User;
use crate::storage;

/// Session signals provided via context
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Whether a verified token is present - read
    pub is_logged_in: ReadSignal<bool>,
    set_is_logged_in: WriteSignal<bool>,
    /// Cached profile of the logged-in user - read
    pub user: ReadSignal<Option<User>>,
    set_user: WriteSignal<Option<User>>,
    /// True until the startup token check finishes - read
    pub loading: ReadSignal<bool>,
    set_loading: WriteSignal<bool>,
}

impl SessionContext {
    pub fn new(
        is_logged_in: (ReadSignal<bool>, WriteSignal<bool>),
        user: (ReadSignal<Option<User>>, WriteSignal<Option<User>>),
        loading: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            is_logged_in: is_logged_in.0,
            set_is_logged_in: is_logged_in.1,
            user: user.0,
            set_user: user.1,
            loading: loading.0,
            set_loading: loading.1,
        }
    }

    /// Resolve the persisted token into a session, once at startup. A token
    /// that fails verification for any reason is evicted so the next launch
    /// starts clean. The loading flag clears on every path; session-gated
    /// views must not render while it is set.
    pub async fn initialize(self) {
        if storage::load_token().is_none() {
            self.set_loading.set(false);
            return;
        }
        match api::fetch_profile().await {
            Ok(user) => {
                self.set_user.set(Some(user));
                self.set_is_logged_in.set(true);
            }
            Err(err) => {
                console::error_1(&format!("[SESSION] token verification failed: {err}").into());
                storage::clear_token();
                self.set_user.set(None);
                self.set_is_logged_in.set(false);
            }
        }
        self.set_loading.set(false);
    }

    /// Install a fresh token + profile after a successful login. No network
    /// call; the token was just issued.
    pub fn login(&self, token: &str, user: User) {
        storage::store_token(token);
        self.set_user.set(Some(user));
        self.set_is_logged_in.set(true);
    }

    /// Evict the token and clear all cached session state.
    pub fn logout(&self) {
        storage::clear_token();
        self.set_user.set(None);
        self.set_is_logged_in.set(false);
    }

    /// Replace the cached profile without touching the token.
    pub fn update_profile(&self, user: User) {
        self.set_user.set(Some(user));
    }
}

/// Get the session from context
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

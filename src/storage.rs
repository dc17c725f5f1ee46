//! Token Storage
//!
//! Persists the auth token in browser localStorage so sessions survive
//! reloads. All accessors degrade to no-ops when storage is unavailable
//! (private browsing, storage disabled).

const TOKEN_STORAGE_KEY: &str = "token";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Token persisted by a previous session, if any.
pub fn load_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()
}

pub fn store_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
    }
}

pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_STORAGE_KEY);
    }
}

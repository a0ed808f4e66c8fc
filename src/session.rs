//! Admin session kept in `localStorage`.
//!
//! The flag only drives the client-side redirect to `/login`; the API is
//! what actually checks the bearer token.

use leptos::logging::{log, warn};
use web_sys::Storage;

use crate::models::admin::{Admin, LoginData};

pub const TOKEN_KEY: &str = "authToken";
pub const AUTHENTICATED_KEY: &str = "isAuthenticated";
pub const USER_KEY: &str = "user";

/// Stored in place of a token when login succeeds without returning one.
pub const TOKEN_SENTINEL: &str = "authenticated";

fn storage() -> Option<Storage> {
    if cfg!(not(target_arch = "wasm32")) {
        return None;
    }
    web_sys::window()?.local_storage().ok().flatten()
}

/// `Authorization` header value for a stored token.
pub fn bearer_value(token: Option<&str>) -> Option<String> {
    token
        .filter(|t| !t.is_empty() && *t != TOKEN_SENTINEL)
        .map(|t| format!("Bearer {}", t))
}

/// Token to persist after a successful login.
pub fn token_from_login(data: &LoginData) -> String {
    data.token
        .clone()
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| TOKEN_SENTINEL.to_string())
}

pub fn token() -> Option<String> {
    storage()?.get_item(TOKEN_KEY).ok().flatten()
}

pub fn authorization_header() -> Option<String> {
    bearer_value(token().as_deref())
}

pub fn is_authenticated() -> bool {
    let Some(storage) = storage() else {
        return false;
    };
    let flag = storage.get_item(AUTHENTICATED_KEY).ok().flatten();
    let token = storage.get_item(TOKEN_KEY).ok().flatten();
    flag.as_deref() == Some("true") && token.is_some_and(|t| !t.is_empty())
}

pub fn current_user() -> Option<Admin> {
    let raw = storage()?.get_item(USER_KEY).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

/// Persists the login result.
pub fn store(data: &LoginData) {
    let Some(storage) = storage() else {
        warn!("[SESSION] localStorage unavailable, login not persisted");
        return;
    };
    let token = token_from_login(data);
    let _ = storage.set_item(TOKEN_KEY, &token);
    let _ = storage.set_item(AUTHENTICATED_KEY, "true");
    if let Some(user) = &data.user {
        match serde_json::to_string(user) {
            Ok(json) => {
                let _ = storage.set_item(USER_KEY, &json);
            }
            Err(e) => warn!("[SESSION] Could not serialize user: {}", e),
        }
    }
    log!("[SESSION] Stored session for {:?}", data.user.as_ref().map(|u| &u.username));
}

pub fn clear() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(AUTHENTICATED_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
    log!("[SESSION] Session cleared");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_value_skips_sentinel_and_empty() {
        assert_eq!(bearer_value(Some("abc.def")).as_deref(), Some("Bearer abc.def"));
        assert_eq!(bearer_value(Some(TOKEN_SENTINEL)), None);
        assert_eq!(bearer_value(Some("")), None);
        assert_eq!(bearer_value(None), None);
    }

    #[test]
    fn test_token_from_login_uses_sentinel_when_missing() {
        let with_token = LoginData {
            token: Some("jwt".into()),
            user: None,
        };
        assert_eq!(token_from_login(&with_token), "jwt");
        assert_eq!(token_from_login(&LoginData::default()), TOKEN_SENTINEL);
    }

    #[test]
    fn test_no_storage_off_browser() {
        assert!(!is_authenticated());
        assert_eq!(token(), None);
        assert_eq!(current_user(), None);
    }
}

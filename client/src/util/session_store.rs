//! Browser localStorage persistence for the logged-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login ends with a hard navigation, so the user reported by `POST /api/login`
//! is written here and read back by the app root after hydration. Outside the
//! browser every read misses and every write is a no-op.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::types::SessionUser;

const SESSION_USER_KEY: &str = "comissao.session_user";

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        let _ = storage.set_item(key, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove `key` from `localStorage`.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

pub fn load_session_user() -> Option<SessionUser> {
    load_json(SESSION_USER_KEY)
}

pub fn remember_session_user(user: &SessionUser) {
    save_json(SESSION_USER_KEY, user);
}

pub fn forget_session_user() {
    remove(SESSION_USER_KEY);
}

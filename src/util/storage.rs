//! Browser localStorage helpers for durable client state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes browser-only read/write behavior so session and theme code
//! can persist values without repeating web-sys glue. Off-browser builds
//! read as empty and write as no-ops.

/// Storage key holding the bearer token between page loads.
/// Absence means logged out.
pub const TOKEN_KEY: &str = "token";

/// Storage key holding the theme preference (`"light"` / `"dark"`).
pub const THEME_KEY: &str = "theme";

/// Load a string value from `localStorage` for `key`.
pub fn load_string(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Save a string value to `localStorage` for `key`.
pub fn save_string(key: &str, value: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}

/// Remove `key` from `localStorage`.
pub fn remove(key: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
    }
}

//! Session token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token lives in a site-wide, session-scoped cookie readable by client
//! code, so the SSR host's route guard sees the same value the browser sends
//! as a bearer credential. The server is the trust boundary; nothing here
//! signs or encrypts the token.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex};

/// Cookie that holds the access token.
pub const TOKEN_COOKIE: &str = "token";

/// Storage contract for the access token.
pub trait SessionStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);

    fn has_token(&self) -> bool {
        self.get().is_some()
    }
}

/// Find `name` in a `document.cookie` style string. Empty values count as absent.
pub fn read_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Cookie assignment without `expires`, so it lasts for the browser session.
pub fn session_cookie(name: &str, value: &str) -> String {
    format!("{name}={value}; path=/")
}

/// Cookie assignment that deletes `name` immediately.
pub fn expired_cookie(name: &str) -> String {
    format!("{name}=; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT")
}

/// In-process store for tests and server rendering.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn with_token(token: &str) -> Self {
        Self { token: Mutex::new(Some(token.to_owned())) }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<String> {
        self.token.lock().ok().and_then(|t| t.clone())
    }

    fn set(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_owned()).filter(|t| !t.is_empty());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}

/// `document.cookie` backed store.
#[cfg(feature = "hydrate")]
pub struct CookieSessionStore;

#[cfg(feature = "hydrate")]
impl CookieSessionStore {
    fn document() -> Option<web_sys::HtmlDocument> {
        use wasm_bindgen::JsCast;
        web_sys::window()?.document()?.dyn_into().ok()
    }

    fn write(cookie: &str) {
        let Some(doc) = Self::document() else {
            return;
        };
        if doc.set_cookie(cookie).is_err() {
            leptos::logging::warn!("failed to write session cookie");
        }
    }
}

#[cfg(feature = "hydrate")]
impl SessionStore for CookieSessionStore {
    fn get(&self) -> Option<String> {
        let cookies = Self::document()?.cookie().ok()?;
        read_cookie(&cookies, TOKEN_COOKIE)
    }

    fn set(&self, token: &str) {
        Self::write(&session_cookie(TOKEN_COOKIE, token));
    }

    fn clear(&self) {
        Self::write(&expired_cookie(TOKEN_COOKIE));
    }
}

/// The store for the current build target.
pub fn default_session_store() -> Arc<dyn SessionStore> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(CookieSessionStore)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(MemorySessionStore::default())
    }
}

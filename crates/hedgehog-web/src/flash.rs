//! Cookie sessions and read-once flash messages.
//!
//! A session is nothing more than a random id in the `hedgehog.sid` cookie.
//! Flash messages for a session live in a moka cache whose time-to-live
//! matches the cookie lifetime. Handlers never touch a shared flash map
//! directly: rendering handlers take a [`Flash`] extractor, which has
//! already removed the session's messages from the cache, so the messages
//! are shown exactly once.

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::time::Duration;

use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};
use moka::future::Cache;

use hedgehog_core::ValidationErrors;

use crate::state::AppState;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "hedgehog.sid";

/// Upper bound on concurrently live sessions holding flash messages.
const FLASH_CACHE_CAPACITY: u64 = 10_000;

/// Key/value messages carried to the next rendered page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlashMessages(BTreeMap<String, String>);

impl FlashMessages {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&ValidationErrors> for FlashMessages {
    fn from(errors: &ValidationErrors) -> Self {
        let mut messages = Self::default();
        for (field, message) in errors.iter() {
            messages.insert(field.flash_key(), message);
        }
        messages
    }
}

/// Flash message storage keyed by session id.
#[derive(Clone)]
pub struct FlashStore {
    cache: Cache<String, FlashMessages>,
    ttl: Duration,
}

impl FlashStore {
    pub fn new(ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(FLASH_CACHE_CAPACITY)
            .time_to_live(ttl)
            .build();
        Self { cache, ttl }
    }

    /// Session and message lifetime.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Replace the pending messages for a session.
    pub async fn set(&self, session: &Session, messages: FlashMessages) {
        if messages.is_empty() {
            return;
        }
        self.cache.insert(session.id.clone(), messages).await;
    }

    /// Remove and return the pending messages for a session.
    pub async fn take(&self, session: &Session) -> FlashMessages {
        self.cache.remove(&session.id).await.unwrap_or_default()
    }
}

/// The requester's session, issued on first contact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    id: String,
    is_new: bool,
    ttl: Duration,
}

impl Session {
    /// Read the session cookie, or start a new session if there is none.
    pub fn from_headers(headers: &HeaderMap, ttl: Duration) -> Self {
        match session_cookie(headers) {
            Some(id) => Self {
                id: id.to_string(),
                is_new: false,
                ttl,
            },
            None => Self {
                id: uuid::Uuid::new_v4().simple().to_string(),
                is_new: true,
                ttl,
            },
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// `Set-Cookie` value for a newly issued session.
    ///
    /// Existing sessions get no header: the cookie is not renewed on activity.
    pub fn set_cookie(&self) -> Option<HeaderValue> {
        if !self.is_new {
            return None;
        }
        let value = format!(
            "{SESSION_COOKIE}={}; Max-Age={}; Path=/; HttpOnly; SameSite=Lax",
            self.id,
            self.ttl.as_secs()
        );
        HeaderValue::from_str(&value).ok()
    }

    /// Attach the session cookie (if new) to a response.
    pub fn attach(&self, response: impl IntoResponse) -> Response {
        let mut response = response.into_response();
        if let Some(cookie) = self.set_cookie() {
            response.headers_mut().append(SET_COOKIE, cookie);
        }
        response
    }
}

/// Find a well-formed session id in the request's cookies.
fn session_cookie(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, id)| id)
        .filter(|id| id.len() == 32 && id.chars().all(|c| c.is_ascii_hexdigit()))
}

impl FromRequestParts<AppState> for Session {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Session::from_headers(&parts.headers, state.flash.ttl()))
    }
}

/// Per-request flash context handed to rendering handlers.
///
/// Extracting it consumes the session's pending messages.
#[derive(Clone, Debug)]
pub struct Flash {
    pub session: Session,
    pub messages: FlashMessages,
}

impl FromRequestParts<AppState> for Flash {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = Session::from_headers(&parts.headers, state.flash.ttl());
        let messages = if session.is_new {
            FlashMessages::default()
        } else {
            state.flash.take(&session).await
        };
        Ok(Flash { session, messages })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hedgehog_core::{Field, HedgehogFields};

    const TTL: Duration = Duration::from_secs(60);

    fn headers_with_cookie(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn new_session_without_cookie() {
        let session = Session::from_headers(&HeaderMap::new(), TTL);
        assert!(session.is_new);
        assert_eq!(session.id().len(), 32);

        let cookie = session.set_cookie().unwrap();
        let cookie = cookie.to_str().unwrap();
        assert!(cookie.starts_with(&format!("hedgehog.sid={}", session.id())));
        assert!(cookie.contains("Max-Age=60"));
        assert!(cookie.contains("HttpOnly"));
    }

    #[test]
    fn existing_session_is_not_renewed() {
        let id = "0123456789abcdef0123456789abcdef";
        let headers = headers_with_cookie(&format!("theme=dark; hedgehog.sid={id}"));
        let session = Session::from_headers(&headers, TTL);
        assert!(!session.is_new);
        assert_eq!(session.id(), id);
        assert!(session.set_cookie().is_none());
    }

    #[test]
    fn malformed_session_cookie_starts_new_session() {
        let headers = headers_with_cookie("hedgehog.sid=not-a-session");
        let session = Session::from_headers(&headers, TTL);
        assert!(session.is_new);
        assert_ne!(session.id(), "not-a-session");
    }

    #[test]
    fn flash_messages_from_validation_errors() {
        let mut fields = HedgehogFields::new("H", "Erinaceus europaeus", "ok", "http://x");
        fields.description = None;
        let errors = hedgehog_core::validate::validate(&fields).unwrap_err();
        let messages = FlashMessages::from(&errors);

        assert_eq!(
            messages.get(Field::CommonName.flash_key()),
            Some("Common name must be between 2 and 100 characters.")
        );
        assert_eq!(messages.get("descriptionError"), Some("Description is required."));
        assert_eq!(messages.get("imageURLError"), None);
    }

    #[tokio::test]
    async fn flash_is_read_once() {
        let store = FlashStore::new(TTL);
        let session = Session::from_headers(&HeaderMap::new(), TTL);

        let mut messages = FlashMessages::default();
        messages.insert("commonNameError", "Common name is required.");
        store.set(&session, messages.clone()).await;

        assert_eq!(store.take(&session).await, messages);
        assert!(store.take(&session).await.is_empty());
    }

    #[tokio::test]
    async fn flash_is_per_session() {
        let store = FlashStore::new(TTL);
        let alice = Session::from_headers(&HeaderMap::new(), TTL);
        let bob = Session::from_headers(&HeaderMap::new(), TTL);

        let mut messages = FlashMessages::default();
        messages.insert("imageURLError", "Image URL is required.");
        store.set(&alice, messages).await;

        assert!(store.take(&bob).await.is_empty());
        assert_eq!(
            store.take(&alice).await.get("imageURLError"),
            Some("Image URL is required.")
        );
    }
}

//! Server-side sessions.
//!
//! A [`SessionStore`] is built once at startup and handed to every component
//! that needs it. Sessions are shared as `Arc<Session>`; attribute writes go
//! straight to the session object and are seen by every holder.

use std::any::Any;
use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

/// Cookie that carries the session identifier.
pub const SESSION_COOKIE: &str = "JSESSIONID";

type Attribute = Arc<dyn Any + Send + Sync>;

#[derive(Debug)]
pub struct Session {
    id: String,
    attributes: DashMap<String, Attribute>,
}

impl Session {
    /// A session with a fresh random identifier.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4().to_string())
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: DashMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_attribute<T: Any + Send + Sync>(&self, key: impl Into<String>, value: T) {
        self.attributes.insert(key.into(), Arc::new(value));
    }

    /// Returns the attribute under `key` if it holds a `T`.
    pub fn attribute<T: Any + Send + Sync>(&self, key: &str) -> Option<Arc<T>> {
        let value = Arc::clone(self.attributes.get(key)?.value());
        value.downcast::<T>().ok()
    }

    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Session {}

/// Registry of live sessions keyed by identifier.
///
/// Safe to share across connections; there is no expiry.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<String, Arc<Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Inserts `session`, replacing any session with the same id.
    pub fn add(&self, session: Arc<Session>) {
        tracing::debug!(session_id = %session.id(), "Session stored");
        self.sessions.insert(session.id().to_string(), session);
    }

    pub fn find(&self, id: &str) -> Option<Arc<Session>> {
        if self.sessions.is_empty() {
            return None;
        }
        self.sessions.get(id).map(|entry| Arc::clone(entry.value()))
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

//! Session markers and the in-memory session store.
//!
//! ARCHITECTURE
//! ============
//! A session marker is the whole of "being logged in": who you are, which
//! role you picked, and (for teachers) which subject you teach. Markers are
//! written once on login/signup, read by the dashboard and learner chat, and
//! removed on logout. Nothing is checked against credentials.
//!
//! The store starts empty and is only ever cleared explicitly; there is no
//! expiry sweep.

use std::collections::HashMap;
use std::fmt::{self, Write};
use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a random 32-byte hex session token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

// =============================================================================
// SESSION MARKER
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Learner,
    Teacher,
}

impl UserType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Learner => "learner",
            Self::Teacher => "teacher",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The minimal record identifying the current mock-authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMarker {
    pub user_type: UserType,
    pub username: String,
    /// Teaching subject. Always `None` for learners.
    pub subject: Option<String>,
}

impl SessionMarker {
    #[must_use]
    pub fn learner(username: impl Into<String>) -> Self {
        Self { user_type: UserType::Learner, username: username.into(), subject: None }
    }

    #[must_use]
    pub fn teacher(username: impl Into<String>, subject: impl Into<String>) -> Self {
        Self { user_type: UserType::Teacher, username: username.into(), subject: Some(subject.into()) }
    }
}

// =============================================================================
// SESSION STORE
// =============================================================================

/// Token-keyed session markers. Cheap to clone; clones share the map.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, SessionMarker>>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a marker under a fresh token and return the token.
    pub async fn create(&self, marker: SessionMarker) -> String {
        let token = generate_token();
        self.inner.write().await.insert(token.clone(), marker);
        token
    }

    /// Look up the marker for `token`.
    pub async fn get(&self, token: &str) -> Option<SessionMarker> {
        self.inner.read().await.get(token).cloned()
    }

    /// Remove the marker for `token`, returning it if it existed.
    pub async fn clear(&self, token: &str) -> Option<SessionMarker> {
        self.inner.write().await.remove(token)
    }

    /// Number of live sessions.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

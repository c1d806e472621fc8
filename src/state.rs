//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the runtime config, the session store, open chat
//! conversations keyed by ID, and the chooser every bot reply is drawn
//! with. Everything lives in memory and starts empty.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::PortalConfig;
use crate::services::chatbot::{Chooser, RandomChooser};
use crate::services::conversation::Conversation;
use crate::services::session::SessionStore;

/// Shared application state. Clone is required by Axum; all inner fields
/// are Arc-wrapped or share their storage on clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<PortalConfig>,
    pub sessions: SessionStore,
    pub conversations: Arc<RwLock<HashMap<Uuid, Conversation>>>,
    pub chooser: Arc<dyn Chooser>,
}

impl AppState {
    #[must_use]
    pub fn new(config: PortalConfig) -> Self {
        Self::with_chooser(config, Arc::new(RandomChooser))
    }

    #[must_use]
    pub fn with_chooser(config: PortalConfig, chooser: Arc<dyn Chooser>) -> Self {
        Self {
            config: Arc::new(config),
            sessions: SessionStore::new(),
            conversations: Arc::new(RwLock::new(HashMap::new())),
            chooser,
        }
    }

    /// Drop every conversation owned by `token`. Returns how many were removed.
    pub async fn close_owned_conversations(&self, token: &str) -> usize {
        let mut conversations = self.conversations.write().await;
        let before = conversations.len();
        conversations.retain(|_, c| c.owner() != Some(token));
        before - conversations.len()
    }

    /// Drop every conversation idle for at least `limit`. Conversations
    /// with a reply in flight are kept. Returns how many were removed.
    pub async fn evict_idle_conversations(&self, limit: Duration) -> usize {
        let mut conversations = self.conversations.write().await;
        let before = conversations.len();
        conversations.retain(|_, c| !c.is_idle(limit));
        before - conversations.len()
    }
}

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::services::chatbot::LearnerProfile;

    /// Chooser that always picks the same index (wrapped to the set length).
    pub struct FixedChooser(pub usize);

    impl Chooser for FixedChooser {
        fn choose(&self, _len: usize) -> usize {
            self.0
        }
    }

    /// The demo learner used across chatbot tests.
    #[must_use]
    pub fn sample_profile() -> LearnerProfile {
        crate::services::dashboard::learner_profile("Thandi")
    }

    /// Create a test `AppState` with zero delays and a deterministic chooser.
    #[must_use]
    pub fn test_app_state() -> AppState {
        test_app_state_with_config(PortalConfig::immediate())
    }

    /// Create a test `AppState` from `config` with a deterministic chooser.
    #[must_use]
    pub fn test_app_state_with_config(config: PortalConfig) -> AppState {
        AppState::with_chooser(config, Arc::new(FixedChooser(0)))
    }

    /// Create a test `AppState` whose chat replies take `delay`.
    #[must_use]
    pub fn test_app_state_with_reply_delay(delay: Duration) -> AppState {
        let mut config = PortalConfig::immediate();
        config.delays.chat_reply = delay;
        test_app_state_with_config(config)
    }

    /// Seed a conversation into the app state and return its ID.
    pub async fn seed_conversation(state: &AppState, conversation: Conversation) -> Uuid {
        let id = conversation.id;
        state.conversations.write().await.insert(id, conversation);
        id
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use rplus_core::UserSession;
use tokio::sync::Mutex;

/// Hands out the per-user session entry. The entry is an async mutex the
/// conversation layer holds for the whole turn — including generator awaits
/// — which is what serializes turns within one session while leaving other
/// sessions free to proceed.
pub trait SessionStore: Send + Sync {
    fn entry(&self, user_id: &str) -> Arc<Mutex<UserSession>>;
}

/// In-memory store, the only backend: sessions live for the process
/// lifetime and are deliberately not persisted across restarts.
#[derive(Clone, Default)]
pub struct MemoryStore {
    sessions: Arc<RwLock<HashMap<String, Arc<Mutex<UserSession>>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.read().len()
    }
}

impl SessionStore for MemoryStore {
    fn entry(&self, user_id: &str) -> Arc<Mutex<UserSession>> {
        if let Some(existing) = self.sessions.read().get(user_id) {
            return existing.clone();
        }

        self.sessions
            .write()
            .entry(user_id.to_string())
            .or_default()
            .clone()
    }
}

//! In-memory session store.
//!
//! A process-wide map from session id to transcript, owned explicitly and
//! injected into request handlers (never a module-level singleton). Entries
//! are created on first reference and live for the process lifetime — there
//! is no eviction, expiry, or delete API.

use mentora_core::session::{SessionId, Transcript, Turn};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Mapping from session identifier to an append-only transcript.
///
/// All access is serialized through a single `RwLock`; expected contention
/// is low. The lock must never be held across the provider call.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Transcript>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a supplied session id, or create a fresh session.
    ///
    /// A supplied id that is already known is returned unchanged and its
    /// transcript reused. Anything else — absent or unknown — mints a fresh
    /// UUID-backed id with an empty transcript, so callers cannot seed the
    /// store with chosen tokens.
    pub async fn resolve_or_create(&self, id: Option<&str>) -> SessionId {
        let mut sessions = self.sessions.write().await;

        if let Some(id) = id
            && sessions.contains_key(id)
        {
            return SessionId::from(id);
        }

        let new_id = SessionId::new();
        sessions.insert(new_id.to_string(), Transcript::new());
        debug!(session = %new_id, "Created new session");
        new_id
    }

    /// Append a turn to a session's transcript.
    ///
    /// Silent no-op for an unknown id; `resolve_or_create` is always invoked
    /// first on the request path, so this should not occur.
    pub async fn append(&self, id: &SessionId, turn: Turn) {
        let mut sessions = self.sessions.write().await;
        if let Some(transcript) = sessions.get_mut(id.as_str()) {
            transcript.push(turn);
        }
    }

    /// A snapshot of a session's transcript; empty for an unknown id.
    pub async fn history(&self, id: &SessionId) -> Vec<Turn> {
        let sessions = self.sessions.read().await;
        sessions
            .get(id.as_str())
            .map(|t| t.turns().to_vec())
            .unwrap_or_default()
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn absent_id_mints_fresh_session() {
        let store = SessionStore::new();
        let id = store.resolve_or_create(None).await;
        assert!(!id.as_str().is_empty());
        assert_eq!(store.len().await, 1);
        assert!(store.history(&id).await.is_empty());
    }

    #[tokio::test]
    async fn fresh_ids_are_never_reissued() {
        let store = SessionStore::new();
        let a = store.resolve_or_create(None).await;
        let b = store.resolve_or_create(None).await;
        assert_ne!(a, b);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn known_id_is_returned_unchanged() {
        let store = SessionStore::new();
        let id = store.resolve_or_create(None).await;
        store.append(&id, Turn::user("hello")).await;

        let resolved = store.resolve_or_create(Some(id.as_str())).await;
        assert_eq!(resolved, id);
        assert_eq!(store.history(&id).await.len(), 1);
    }

    #[tokio::test]
    async fn unknown_supplied_id_mints_fresh_session() {
        let store = SessionStore::new();
        let resolved = store.resolve_or_create(Some("made-up-token")).await;
        assert_ne!(resolved.as_str(), "made-up-token");
        assert!(store.history(&SessionId::from("made-up-token")).await.is_empty());
    }

    #[tokio::test]
    async fn resolve_is_idempotent_for_known_ids() {
        let store = SessionStore::new();
        let id = store.resolve_or_create(None).await;
        store.append(&id, Turn::assistant("a")).await;

        let first = store.resolve_or_create(Some(id.as_str())).await;
        let second = store.resolve_or_create(Some(id.as_str())).await;
        assert_eq!(first, second);
        assert_eq!(store.len().await, 1);
        assert_eq!(store.history(&id).await.len(), 1);
    }

    #[tokio::test]
    async fn appends_preserve_order() {
        let store = SessionStore::new();
        let id = store.resolve_or_create(None).await;
        store.append(&id, Turn::user("first")).await;
        store.append(&id, Turn::assistant("second")).await;

        let history = store.history(&id).await;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].content, "first");
        assert_eq!(history[1].content, "second");
    }

    #[tokio::test]
    async fn append_to_unknown_id_is_a_noop() {
        let store = SessionStore::new();
        let ghost = SessionId::from("ghost");
        store.append(&ghost, Turn::user("lost")).await;
        assert!(store.is_empty().await);
        assert!(store.history(&ghost).await.is_empty());
    }

    #[tokio::test]
    async fn sessions_are_isolated() {
        let store = SessionStore::new();
        let a = store.resolve_or_create(None).await;
        let b = store.resolve_or_create(None).await;
        store.append(&a, Turn::user("only in a")).await;

        assert_eq!(store.history(&a).await.len(), 1);
        assert!(store.history(&b).await.is_empty());
    }
}

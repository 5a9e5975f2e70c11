use crate::models::{ChatMessage, ChatRole, ChatSession, ConversationContext, UserProfile};
use dashmap::DashMap;
use thiserror::Error;

/// Errors that can occur with store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Profile not found for user {0}")]
    NotFound(String),
}

/// Keyed profile storage.
///
/// Injected into the routes so tests and future persistent backends can
/// swap the implementation. `put` is a full overwrite that creates the
/// entry if absent; callers pre-validate profiles at the HTTP boundary.
pub trait ProfileStore: Send + Sync {
    fn get(&self, user_id: &str) -> Result<UserProfile, StoreError>;
    fn put(&self, user_id: &str, profile: UserProfile);
    fn delete(&self, user_id: &str) -> Result<(), StoreError>;
    /// Snapshot of every stored (id, profile) pair, for match iteration.
    fn all(&self) -> Vec<(String, UserProfile)>;
}

/// In-memory profile store backed by a concurrent map. Accesses to distinct
/// user ids never contend; last write wins per key.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: DashMap<String, UserProfile>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn get(&self, user_id: &str) -> Result<UserProfile, StoreError> {
        self.profiles
            .get(user_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| StoreError::NotFound(user_id.to_string()))
    }

    fn put(&self, user_id: &str, profile: UserProfile) {
        self.profiles.insert(user_id.to_string(), profile);
    }

    fn delete(&self, user_id: &str) -> Result<(), StoreError> {
        self.profiles
            .remove(user_id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(user_id.to_string()))
    }

    fn all(&self) -> Vec<(String, UserProfile)> {
        self.profiles
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }
}

/// Keyed chat session storage. Sessions are created lazily on first append.
pub trait SessionStore: Send + Sync {
    fn append_user(&self, user_id: &str, content: &str) -> ChatMessage;
    fn append_assistant(&self, user_id: &str, content: &str) -> ChatMessage;
    /// Ordered transcript for a user; empty if no session exists yet.
    fn transcript(&self, user_id: &str) -> Vec<ChatMessage>;
    fn context(&self, user_id: &str) -> Option<ConversationContext>;
    fn clear(&self, user_id: &str);
}

/// In-memory session store backed by a concurrent map.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<String, ChatSession>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn append(&self, user_id: &str, role: ChatRole, content: &str) -> ChatMessage {
        self.sessions
            .entry(user_id.to_string())
            .or_default()
            .push(role, content)
    }
}

impl SessionStore for InMemorySessionStore {
    fn append_user(&self, user_id: &str, content: &str) -> ChatMessage {
        self.append(user_id, ChatRole::User, content)
    }

    fn append_assistant(&self, user_id: &str, content: &str) -> ChatMessage {
        self.append(user_id, ChatRole::Assistant, content)
    }

    fn transcript(&self, user_id: &str) -> Vec<ChatMessage> {
        self.sessions
            .get(user_id)
            .map(|session| session.value().messages.clone())
            .unwrap_or_default()
    }

    fn context(&self, user_id: &str) -> Option<ConversationContext> {
        self.sessions
            .get(user_id)
            .map(|session| session.value().context.clone())
    }

    fn clear(&self, user_id: &str) {
        self.sessions.remove(user_id);
    }
}

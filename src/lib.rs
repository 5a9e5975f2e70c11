//! Date Mate API - dating advisor and matchmaking backend
//!
//! This library provides the compatibility scorer and matches service used
//! by the Date Mate app, together with the in-memory profile/session stores
//! and the gateway to the hosted chat-completion API.

pub mod auth;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod rate_limit;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_match_score, MatchResult, Matcher};
pub use crate::models::{
    ChatMessage, ChatRole, RedactedProfile, ScoredMatch, ScoringWeights, UserProfile,
};
pub use crate::services::{InMemoryProfileStore, InMemorySessionStore, ProfileStore, SessionStore};

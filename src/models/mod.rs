// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ChatMessage, ChatRole, ChatSession, ConversationContext, RedactedProfile, ScoredMatch,
    ScoringWeights, UserProfile,
};
pub use requests::{ChatRequest, MatchQuery, TokenRequest};
pub use responses::{ChatResponse, DeleteResponse, ErrorBody, HealthResponse, TokenResponse};

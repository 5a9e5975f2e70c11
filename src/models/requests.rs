use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for the chat endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1))]
    pub message: String,
    #[validate(length(min = 1))]
    pub user_id: String,
}

/// Query parameters for the matches endpoint. Defaults come from the
/// matching settings when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchQuery {
    pub min_score: Option<f64>,
    pub limit: Option<usize>,
}

/// Request body for development token minting.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TokenRequest {
    #[validate(length(min = 1))]
    pub user_id: String,
}

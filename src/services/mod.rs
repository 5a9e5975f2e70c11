// Service exports
pub mod groq;
pub mod prompts;
pub mod store;

pub use groq::{GroqClient, GroqError};
pub use prompts::{ChatMode, DATING_ADVISOR_PROMPT, FALLBACK_MESSAGE, ONLINE_PARTNER_PROMPT};
pub use store::{
    InMemoryProfileStore, InMemorySessionStore, ProfileStore, SessionStore, StoreError,
};

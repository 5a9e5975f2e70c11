use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Option sets for the enumerated profile fields. An empty string means
/// "not provided"; anything else must be one of these values.
pub const GENDER_OPTIONS: &[&str] = &["Male", "Female", "Non-binary", "Other"];

pub const RELATIONSHIP_GOAL_OPTIONS: &[&str] = &[
    "Casual dating",
    "Long-term relationship",
    "Marriage",
    "Friendship first",
    "Not sure yet",
];

pub const LOVE_LANGUAGE_OPTIONS: &[&str] = &[
    "Words of Affirmation",
    "Quality Time",
    "Physical Touch",
    "Acts of Service",
    "Receiving Gifts",
];

pub const COMMUNICATION_STYLE_OPTIONS: &[&str] =
    &["Direct", "Indirect", "Emotional", "Analytical", "Mixed"];

pub const EDUCATION_OPTIONS: &[&str] = &[
    "High School",
    "Some College",
    "Bachelor's",
    "Master's",
    "PhD",
    "Other",
];

/// A user's stored dating-preference record.
///
/// Stored as-is on PUT (full replacement, no partial patch). Validation runs
/// at the HTTP boundary; the scorer and stores assume pre-validated data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserProfile {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 18, max = 99))]
    pub age: u8,
    #[validate(custom(function = validate_gender))]
    pub gender: String,
    /// Gender strings the user wants to be matched with. Matching is literal
    /// string membership, so entries should use the gender vocabulary.
    #[serde(default)]
    pub interested_in: Vec<String>,
    #[validate(custom(function = validate_relationship_goals))]
    #[serde(default)]
    pub relationship_goals: String,
    #[serde(default)]
    pub hobbies: Vec<String>,
    #[serde(default)]
    pub personality_traits: Vec<String>,
    #[serde(default)]
    pub ideal_partner_traits: Vec<String>,
    #[serde(default)]
    pub deal_breakers: Vec<String>,
    #[validate(custom(function = validate_love_language))]
    #[serde(default)]
    pub love_language: String,
    #[validate(custom(function = validate_communication_style))]
    #[serde(default)]
    pub communication_style: String,
    #[serde(default)]
    pub life_goals: Vec<String>,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[validate(custom(function = validate_education))]
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub occupation: String,
}

fn validate_option(
    value: &str,
    options: &[&str],
    code: &'static str,
) -> Result<(), ValidationError> {
    if value.is_empty() || options.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new(code))
    }
}

fn validate_gender(value: &str) -> Result<(), ValidationError> {
    validate_option(value, GENDER_OPTIONS, "invalid_gender")
}

fn validate_relationship_goals(value: &str) -> Result<(), ValidationError> {
    validate_option(value, RELATIONSHIP_GOAL_OPTIONS, "invalid_relationship_goals")
}

fn validate_love_language(value: &str) -> Result<(), ValidationError> {
    validate_option(value, LOVE_LANGUAGE_OPTIONS, "invalid_love_language")
}

fn validate_communication_style(value: &str) -> Result<(), ValidationError> {
    validate_option(value, COMMUNICATION_STYLE_OPTIONS, "invalid_communication_style")
}

fn validate_education(value: &str) -> Result<(), ValidationError> {
    validate_option(value, EDUCATION_OPTIONS, "invalid_education")
}

/// Candidate profile as returned to other users: deal_breakers and values
/// never leave the server, so the type simply has no such fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactedProfile {
    pub name: String,
    pub age: u8,
    pub gender: String,
    pub interested_in: Vec<String>,
    pub relationship_goals: String,
    pub hobbies: Vec<String>,
    pub personality_traits: Vec<String>,
    pub ideal_partner_traits: Vec<String>,
    pub love_language: String,
    pub communication_style: String,
    pub life_goals: Vec<String>,
    pub location: String,
    pub languages: Vec<String>,
    pub education: String,
    pub occupation: String,
}

impl From<&UserProfile> for RedactedProfile {
    fn from(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            age: profile.age,
            gender: profile.gender.clone(),
            interested_in: profile.interested_in.clone(),
            relationship_goals: profile.relationship_goals.clone(),
            hobbies: profile.hobbies.clone(),
            personality_traits: profile.personality_traits.clone(),
            ideal_partner_traits: profile.ideal_partner_traits.clone(),
            love_language: profile.love_language.clone(),
            communication_style: profile.communication_style.clone(),
            life_goals: profile.life_goals.clone(),
            location: profile.location.clone(),
            languages: profile.languages.clone(),
            education: profile.education.clone(),
            occupation: profile.occupation.clone(),
        }
    }
}

/// Scored match result, computed per request and never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredMatch {
    pub user_id: String,
    pub match_score: f64,
    pub profile: RedactedProfile,
}

/// Message role in a chat transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// A single transcript entry. Immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Lightweight conversation context tracked alongside the transcript.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationContext {
    pub recent_topics: Vec<String>,
    pub last_match_suggested: Option<String>,
    pub last_date_discussed: Option<String>,
}

const TRACKED_TOPICS: &[&str] = &["date", "match", "profile", "advice", "relationship"];
const MAX_RECENT_TOPICS: usize = 5;

impl ConversationContext {
    /// Keyword scan over an incoming user message. Keeps at most five
    /// distinct topics, first seen first.
    pub fn note_topics(&mut self, message: &str) {
        let lowered = message.to_lowercase();
        for topic in TRACKED_TOPICS {
            if self.recent_topics.len() >= MAX_RECENT_TOPICS {
                break;
            }
            if lowered.contains(topic) && !self.recent_topics.iter().any(|t| t == topic) {
                self.recent_topics.push((*topic).to_string());
            }
        }
    }
}

/// Per-user chat session: append-only message log plus context.
///
/// The system prompt is prepended once per gateway request and is never part
/// of this log.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    pub messages: Vec<ChatMessage>,
    pub context: ConversationContext,
    pub last_updated: Option<DateTime<Utc>>,
}

impl ChatSession {
    pub fn push(&mut self, role: ChatRole, content: &str) -> ChatMessage {
        if role == ChatRole::User {
            self.context.note_topics(content);
        }
        let message = ChatMessage::new(role, content);
        self.last_updated = Some(message.timestamp);
        self.messages.push(message.clone());
        message
    }
}

/// Scoring weights for the compatibility formula.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub hobbies: f64,
    pub relationship_goals: f64,
    pub values: f64,
    pub languages: f64,
    pub affinity: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            hobbies: 3.0,
            relationship_goals: 5.0,
            values: 4.0,
            languages: 2.0,
            affinity: 3.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_profile() -> UserProfile {
        UserProfile {
            name: "Alice".to_string(),
            age: 28,
            gender: "Female".to_string(),
            interested_in: vec!["Male".to_string()],
            relationship_goals: "Marriage".to_string(),
            hobbies: vec![],
            personality_traits: vec![],
            ideal_partner_traits: vec![],
            deal_breakers: vec!["smoking".to_string()],
            love_language: "Quality Time".to_string(),
            communication_style: "Direct".to_string(),
            life_goals: vec![],
            values: vec!["Family".to_string()],
            location: "Berlin".to_string(),
            languages: vec!["English".to_string()],
            education: "Master's".to_string(),
            occupation: "Engineer".to_string(),
        }
    }

    #[test]
    fn test_valid_profile_passes_validation() {
        assert!(minimal_profile().validate().is_ok());
    }

    #[test]
    fn test_age_out_of_range_rejected() {
        let mut profile = minimal_profile();
        profile.age = 17;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_unknown_enum_value_rejected() {
        let mut profile = minimal_profile();
        profile.love_language = "Telepathy".to_string();
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_empty_enum_value_allowed() {
        let mut profile = minimal_profile();
        profile.relationship_goals = String::new();
        profile.education = String::new();
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_redaction_drops_sensitive_fields() {
        let profile = minimal_profile();
        let redacted = RedactedProfile::from(&profile);
        let json = serde_json::to_value(&redacted).unwrap();
        assert!(json.get("deal_breakers").is_none());
        assert!(json.get("values").is_none());
        assert_eq!(json["name"], "Alice");
    }

    #[test]
    fn test_topic_tracking_caps_at_five() {
        let mut context = ConversationContext::default();
        context.note_topics("my date went well, good match, nice profile");
        context.note_topics("need advice about this relationship");
        context.note_topics("another date and more advice");
        assert_eq!(context.recent_topics.len(), 5);
        assert_eq!(context.recent_topics[0], "date");
    }

    #[test]
    fn test_session_push_records_in_order() {
        let mut session = ChatSession::default();
        session.push(ChatRole::User, "hello");
        session.push(ChatRole::Assistant, "hi there");
        assert_eq!(session.messages.len(), 2);
        assert_eq!(session.messages[0].role, ChatRole::User);
        assert_eq!(session.messages[1].role, ChatRole::Assistant);
        assert!(session.messages[0].timestamp <= session.messages[1].timestamp);
    }
}

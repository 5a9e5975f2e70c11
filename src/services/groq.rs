use crate::models::ChatMessage;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the completion API
#[derive(Debug, Error)]
pub enum GroqError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Groq chat-completion client.
///
/// One attempt per call, bounded by the configured timeout; callers decide
/// what to do on failure (the chat routes substitute a fallback message).
pub struct GroqClient {
    base_url: String,
    api_key: String,
    model: String,
    temperature: f64,
    max_tokens: u32,
    client: Client,
}

impl GroqClient {
    pub fn new(
        base_url: String,
        api_key: String,
        model: String,
        temperature: f64,
        max_tokens: u32,
        timeout_secs: u64,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            model,
            temperature,
            max_tokens,
            client,
        }
    }

    /// Generate a completion for the given system prompt and transcript.
    ///
    /// The system prompt is prepended to the wire message list here; it is
    /// never part of the persisted transcript. Timestamps are stripped from
    /// the outgoing messages.
    pub async fn generate(
        &self,
        system_prompt: &str,
        transcript: &[ChatMessage],
    ) -> Result<String, GroqError> {
        let mut messages = Vec::with_capacity(transcript.len() + 1);
        messages.push(json!({ "role": "system", "content": system_prompt }));
        for message in transcript {
            messages.push(json!({
                "role": message.role.as_str(),
                "content": message.content,
            }));
        }

        let url = format!(
            "{}/chat/completions",
            self.base_url.trim_end_matches('/')
        );

        tracing::debug!("Requesting completion from {} ({} messages)", url, messages.len());

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "model": self.model,
                "messages": messages,
                "temperature": self.temperature,
                "max_tokens": self.max_tokens,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Completion request failed: {} - {}", status, body);
            return Err(GroqError::ApiError(format!(
                "Completion request failed: {}",
                status
            )));
        }

        let json: Value = response.json().await?;

        json.get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .map(str::to_string)
            .ok_or_else(|| GroqError::InvalidResponse("Missing choices[0].message.content".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChatRole;

    fn test_client(base_url: String) -> GroqClient {
        GroqClient::new(
            base_url,
            "test_key".to_string(),
            "mixtral-8x7b-32768".to_string(),
            0.7,
            4096,
            5,
        )
    }

    #[tokio::test]
    async fn test_generate_parses_completion() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer test_key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"Be yourself!"}}]}"#)
            .create_async()
            .await;

        let client = test_client(server.url());
        let transcript = vec![ChatMessage::new(ChatRole::User, "any advice?")];
        let reply = client.generate("You are an advisor.", &transcript).await.unwrap();

        assert_eq!(reply, "Be yourself!");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_non_success_is_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(500)
            .with_body("upstream exploded")
            .create_async()
            .await;

        let client = test_client(server.url());
        let result = client.generate("prompt", &[]).await;

        assert!(matches!(result, Err(GroqError::ApiError(_))));
    }

    #[tokio::test]
    async fn test_generate_malformed_body_is_invalid_response() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let client = test_client(server.url());
        let result = client.generate("prompt", &[]).await;

        assert!(matches!(result, Err(GroqError::InvalidResponse(_))));
    }
}

//! Completion API client
//!
//! A thin chat-completions client with forced JSON-object response mode.
//! Any non-success status or malformed body surfaces as
//! [`HubError::Completion`]; callers convert that into their fallback
//! payloads, never into an HTTP error.

use crate::config::CompletionConfig;
use crate::utils::error::{HubError, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use super::types::ChatMessage;

/// Completion API client
#[derive(Debug, Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl CompletionClient {
    /// Create a new client from configuration
    ///
    /// Fails if no API key is configured; callers decide beforehand
    /// whether to construct the client at all.
    pub fn new(config: &CompletionConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| HubError::config("Completion API key not configured"))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(HubError::HttpClient)?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
        })
    }

    /// Send a chat completion request and parse the JSON-mode answer
    ///
    /// The request forces `response_format: json_object`, so the returned
    /// message content is itself a JSON document, parsed into `T`.
    pub async fn complete_json<T: DeserializeOwned>(
        &self,
        messages: &[ChatMessage],
        max_tokens: u32,
    ) -> Result<T> {
        let url = format!("{}/chat/completions", self.api_base);
        debug!("Requesting completion: model={} max_tokens={}", self.model, max_tokens);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "model": self.model,
                "messages": messages,
                "response_format": { "type": "json_object" },
                "max_tokens": max_tokens,
            }))
            .send()
            .await
            .map_err(|e| HubError::completion(format!("completion request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HubError::completion(format!(
                "completion API error: {} - {}",
                status.as_u16(),
                body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| HubError::completion(format!("malformed completion response: {}", e)))?;

        let content = completion
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or_else(|| HubError::completion("completion response had no choices"))?;

        serde_json::from_str(content)
            .map_err(|e| HubError::completion(format!("malformed completion content: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::types::{system_message, user_message};
    use serde_json::Value;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server_uri: &str) -> CompletionClient {
        let config = CompletionConfig {
            api_key: Some("test-key".to_string()),
            api_base: format!("{}/v1", server_uri),
            model: "gpt-4o".to_string(),
            timeout: 5,
        };
        CompletionClient::new(&config).unwrap()
    }

    #[test]
    fn test_new_requires_api_key() {
        let config = CompletionConfig::default();
        assert!(CompletionClient::new(&config).is_err());
    }

    #[tokio::test]
    async fn test_complete_json_parses_json_mode_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("Authorization", "Bearer test-key"))
            .and(body_partial_json(serde_json::json!({
                "model": "gpt-4o",
                "response_format": { "type": "json_object" },
                "max_tokens": 2000,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{
                    "message": { "content": "{\"summary\": \"review NSGs\", \"concepts\": []}" }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server.uri());
        let messages = vec![system_message("system"), user_message("user")];
        let value: Value = client.complete_json(&messages, 2000).await.unwrap();
        assert_eq!(value["summary"], "review NSGs");
    }

    #[tokio::test]
    async fn test_complete_json_surfaces_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let client = client_for(&server.uri());
        let result: Result<Value> = client.complete_json(&[user_message("hi")], 100).await;
        let err = result.unwrap_err();
        assert!(matches!(err, HubError::Completion(_)));
        assert!(err.to_string().contains("429"));
    }

    #[tokio::test]
    async fn test_complete_json_surfaces_malformed_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{ "message": { "content": "not json at all" } }]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server.uri());
        let result: Result<Value> = client.complete_json(&[user_message("hi")], 100).await;
        assert!(matches!(result.unwrap_err(), HubError::Completion(_)));
    }

    #[tokio::test]
    async fn test_complete_json_surfaces_empty_choices() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "choices": [] })),
            )
            .mount(&server)
            .await;

        let client = client_for(&server.uri());
        let result: Result<Value> = client.complete_json(&[user_message("hi")], 100).await;
        assert!(result.unwrap_err().to_string().contains("no choices"));
    }
}

use serde::{Deserialize, Serialize};

use super::types::CompletionClient;
use super::EnhanceError;

/// Default chat-completions endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Cost-effective default model for structured text transformation.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Sampling settings tuned for consistent, structured output.
const TEMPERATURE: f32 = 0.1;
const TOP_P: f32 = 0.9;
const MAX_TOKENS: u32 = 1500;

/// OpenAI-compatible chat-completions HTTP client.
pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl OpenAiClient {
    /// Create a client for an OpenAI-compatible endpoint. Fails when no API
    /// key is configured rather than letting the first request 401.
    pub fn new(
        base_url: &str,
        api_key: &str,
        model: &str,
        timeout_secs: u64,
    ) -> Result<Self, EnhanceError> {
        if api_key.trim().is_empty() {
            return Err(EnhanceError::NotConfigured);
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| EnhanceError::HttpClient(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            client,
            timeout_secs,
        })
    }

    /// API key reduced to a displayable fragment for logs and status output.
    pub fn masked_api_key(&self) -> String {
        if self.api_key.len() <= 11 {
            return "***".to_string();
        }
        format!(
            "{}...{}",
            &self.api_key[..7],
            &self.api_key[self.api_key.len() - 4..]
        )
    }
}

/// Request body for /chat/completions
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response body from /chat/completions
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

impl CompletionClient for OpenAiClient {
    fn complete(&self, system: &str, user: &str) -> Result<String, EnhanceError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            top_p: TOP_P,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    EnhanceError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    EnhanceError::HttpClient(format!(
                        "Request timed out after {}s",
                        self.timeout_secs
                    ))
                } else {
                    EnhanceError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(EnhanceError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| EnhanceError::HttpClient(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(EnhanceError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_is_rejected_at_construction() {
        let result = OpenAiClient::new(DEFAULT_BASE_URL, "  ", DEFAULT_MODEL, 30);
        assert!(matches!(result, Err(EnhanceError::NotConfigured)));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client =
            OpenAiClient::new("https://api.openai.com/v1/", "sk-test-key-0123456789", DEFAULT_MODEL, 30)
                .unwrap();
        assert_eq!(client.base_url, "https://api.openai.com/v1");
    }

    #[test]
    fn api_key_is_masked_for_display() {
        let client = OpenAiClient::new(
            DEFAULT_BASE_URL,
            "sk-proj-abcdefghij1234",
            DEFAULT_MODEL,
            30,
        )
        .unwrap();
        assert_eq!(client.masked_api_key(), "sk-proj...1234");
    }

    #[test]
    fn short_api_key_is_fully_masked() {
        let client = OpenAiClient::new(DEFAULT_BASE_URL, "sk-short", DEFAULT_MODEL, 30).unwrap();
        assert_eq!(client.masked_api_key(), "***");
    }

    #[test]
    fn chat_request_serializes_expected_shape() {
        let body = ChatRequest {
            model: "gpt-4o-mini",
            messages: vec![ChatMessage {
                role: "system",
                content: "be brief",
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            top_p: TOP_P,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["max_tokens"], 1500);
    }

    #[test]
    fn chat_response_parses_choice_content() {
        let parsed: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"SERVICE PROVIDED: ..."}}]}"#,
        )
        .unwrap();
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("SERVICE PROVIDED: ...")
        );
    }
}

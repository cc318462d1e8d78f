use crate::domain::model::ProviderKind;
use crate::domain::ports::{ChatProvider, ProviderSettings};
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const DEEPSEEK_ENDPOINT: &str = "https://api.deepseek.com/v1/chat/completions";
pub const DEEPSEEK_MODEL: &str = "deepseek-chat";
pub const OPENAI_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const OPENAI_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_MAX_TOKENS: u32 = 500;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: [WireMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Default connection settings for a remote provider. The key is left empty.
pub fn preset(kind: ProviderKind) -> Option<ProviderSettings> {
    let (endpoint, model) = match kind {
        ProviderKind::DeepSeek => (DEEPSEEK_ENDPOINT, DEEPSEEK_MODEL),
        ProviderKind::OpenAi => (OPENAI_ENDPOINT, OPENAI_MODEL),
        ProviderKind::LocalTemplate => return None,
    };
    Some(ProviderSettings {
        endpoint: endpoint.to_string(),
        api_key: String::new(),
        model: model.to_string(),
        max_tokens: DEFAULT_MAX_TOKENS,
        temperature: DEFAULT_TEMPERATURE,
    })
}

/// Client for OpenAI-compatible `/chat/completions` endpoints.
pub struct ChatCompletionClient {
    client: Client,
    name: String,
    settings: ProviderSettings,
}

impl ChatCompletionClient {
    pub fn new(name: impl Into<String>, settings: ProviderSettings) -> Self {
        Self::with_client(Client::new(), name, settings)
    }

    pub fn with_client(client: Client, name: impl Into<String>, settings: ProviderSettings) -> Self {
        Self {
            client,
            name: name.into(),
            settings,
        }
    }

    fn provider_error(&self, message: impl Into<String>) -> AppError {
        AppError::ProviderError {
            provider: self.name.clone(),
            message: message.into(),
        }
    }
}

#[async_trait]
impl ChatProvider for ChatCompletionClient {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let body = CompletionRequest {
            model: &self.settings.model,
            messages: [
                WireMessage {
                    role: "system",
                    content: system,
                },
                WireMessage {
                    role: "user",
                    content: user,
                },
            ],
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };

        tracing::debug!(
            "POST {} (model {}, {} chars)",
            self.settings.endpoint,
            self.settings.model,
            user.len()
        );

        let response = self
            .client
            .post(&self.settings.endpoint)
            .bearer_auth(&self.settings.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("{} responded with {}", self.name, status);
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(self.provider_error(format!("HTTP {}: {}", status.as_u16(), text)));
        }

        let parsed: CompletionResponse = response.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| self.provider_error("response contained no choices"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn settings_for(server: &MockServer) -> ProviderSettings {
        ProviderSettings {
            endpoint: server.url("/v1/chat/completions"),
            api_key: "sk-test".to_string(),
            model: "deepseek-chat".to_string(),
            max_tokens: 500,
            temperature: 0.7,
        }
    }

    #[test]
    fn presets_cover_remote_providers_only() {
        let deepseek = preset(ProviderKind::DeepSeek).unwrap();
        assert_eq!(deepseek.endpoint, DEEPSEEK_ENDPOINT);
        assert_eq!(deepseek.model, "deepseek-chat");
        assert_eq!(preset(ProviderKind::OpenAi).unwrap().model, "gpt-3.5-turbo");
        assert!(preset(ProviderKind::LocalTemplate).is_none());
    }

    #[tokio::test]
    async fn sends_system_and_user_messages_with_bearer_key() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1/chat/completions")
                    .header("authorization", "Bearer sk-test")
                    .json_body(serde_json::json!({
                        "model": "deepseek-chat",
                        "messages": [
                            {"role": "system", "content": "be helpful"},
                            {"role": "user", "content": "Which intake for Germany?"}
                        ],
                        "max_tokens": 500,
                        "temperature": 0.7
                    }));
                then.status(200).json_body(serde_json::json!({
                    "id": "cmpl-1",
                    "choices": [
                        {"index": 0, "message": {"role": "assistant", "content": "September and March."}},
                        {"index": 1, "message": {"role": "assistant", "content": "ignored"}}
                    ]
                }));
            })
            .await;

        let client = ChatCompletionClient::new("deepseek", settings_for(&server));
        let reply = client
            .complete("be helpful", "Which intake for Germany?")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(reply, "September and March.");
    }

    #[tokio::test]
    async fn empty_choices_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/chat/completions");
                then.status(200).json_body(serde_json::json!({"choices": []}));
            })
            .await;

        let client = ChatCompletionClient::new("openai", settings_for(&server));
        let err = client.complete("s", "u").await.unwrap_err();
        assert!(matches!(err, AppError::ProviderError { .. }));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/chat/completions");
                then.status(401)
                    .json_body(serde_json::json!({"error": {"message": "Invalid API key"}}));
            })
            .await;

        let client = ChatCompletionClient::new("openai", settings_for(&server));
        let err = client.complete("s", "u").await.unwrap_err();
        assert!(err.to_string().contains("HTTP 401"));
    }
}

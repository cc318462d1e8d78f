use crate::adapters::chat_completion::ChatCompletionClient;
use crate::core::templates::LocalTemplates;
use crate::domain::model::{ChatMessage, ProviderKind, Sender, Transcript};
use crate::domain::ports::{ChatProvider, ConfigProvider};
use std::collections::HashMap;
use std::sync::Arc;

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful study abroad consultant. Provide accurate information about studying overseas, visa processes, costs, and university applications.";

pub const APOLOGY: &str = "Sorry, I encountered an error. Please try again later.";

/// Study-abroad assistant. Each reply is an independent request; the
/// transcript is kept for display and never sent to a provider.
pub struct Assistant {
    local: LocalTemplates,
    remotes: HashMap<ProviderKind, Arc<dyn ChatProvider>>,
    system_prompt: String,
    selected: ProviderKind,
    transcript: Transcript,
}

impl Assistant {
    pub fn new() -> Self {
        Self {
            local: LocalTemplates::new(),
            remotes: HashMap::new(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            selected: ProviderKind::LocalTemplate,
            transcript: Transcript::new(),
        }
    }

    /// Registers a client for every remote provider that has a credential.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        let mut assistant = Self::new()
            .with_system_prompt(config.system_prompt())
            .selecting(config.default_provider());

        for kind in [ProviderKind::DeepSeek, ProviderKind::OpenAi] {
            match config.provider(kind) {
                Some(settings) if settings.has_credential() => {
                    tracing::debug!("{} provider configured ({})", kind, settings.model);
                    let client = ChatCompletionClient::new(kind.to_string(), settings);
                    assistant = assistant.with_provider(kind, Arc::new(client));
                }
                _ => tracing::debug!("{} provider has no credential", kind),
            }
        }
        assistant
    }

    pub fn with_provider(mut self, kind: ProviderKind, provider: Arc<dyn ChatProvider>) -> Self {
        if kind.is_remote() {
            self.remotes.insert(kind, provider);
        } else {
            tracing::warn!("Ignoring provider registered for the local templates");
        }
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn selecting(mut self, kind: ProviderKind) -> Self {
        self.selected = kind;
        self
    }

    pub fn select(&mut self, kind: ProviderKind) {
        tracing::info!("Assistant provider switched to {}", kind.label());
        self.selected = kind;
    }

    pub fn selected(&self) -> ProviderKind {
        self.selected
    }

    pub fn is_available(&self, kind: ProviderKind) -> bool {
        !kind.is_remote() || self.remotes.contains_key(&kind)
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn reset(&mut self) {
        self.transcript.reset();
    }

    /// Answers one message with the given provider. Never fails: provider
    /// errors are logged and replaced with [`APOLOGY`].
    pub async fn reply(&self, kind: ProviderKind, message: &str) -> String {
        if !kind.is_remote() {
            return self.local.respond(message).to_string();
        }

        let Some(provider) = self.remotes.get(&kind) else {
            tracing::warn!("{} provider selected but not configured", kind);
            return APOLOGY.to_string();
        };

        match provider.complete(&self.system_prompt, message).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("{} API error: {}", provider.name(), e);
                APOLOGY.to_string()
            }
        }
    }

    /// Appends the user's message and the reply from the selected provider.
    /// Blank input is ignored.
    pub async fn send(&mut self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }

        self.transcript.push(ChatMessage::new(Sender::User, text));
        let reply = self.reply(self.selected, text).await;
        self.transcript
            .push(ChatMessage::new(Sender::Assistant, reply.clone()));
        Some(reply)
    }
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new()
    }
}

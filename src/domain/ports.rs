use crate::domain::model::{Consultation, NewConsultation, ProviderKind};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Connection parameters for the hosted consultation table.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSettings {
    pub url: String,
    pub anon_key: String,
    pub table: String,
}

impl StoreSettings {
    pub fn has_credential(&self) -> bool {
        is_credential(&self.anon_key)
    }
}

/// An empty value or an unresolved `${VAR}` placeholder counts as no credential.
pub fn is_credential(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && !(value.starts_with("${") && value.ends_with('}'))
}

/// Connection parameters for one chat-completion provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSettings {
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl ProviderSettings {
    pub fn has_credential(&self) -> bool {
        is_credential(&self.api_key)
    }
}

pub trait ConfigProvider: Send + Sync {
    fn store(&self) -> Option<StoreSettings>;
    /// Settings for a remote provider, with defaults filled in. `None` for the local templates.
    fn provider(&self, kind: ProviderKind) -> Option<ProviderSettings>;
    fn default_provider(&self) -> ProviderKind;
    fn system_prompt(&self) -> &str;
}

#[async_trait]
pub trait ConsultationStore: Send + Sync {
    /// Inserts one row and returns it as stored, with id and timestamps filled in.
    async fn insert(&self, request: &NewConsultation) -> Result<Consultation>;
}

#[async_trait]
pub trait ChatProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Sends a system instruction plus one user message and returns the reply text.
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}

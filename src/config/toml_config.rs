use crate::adapters::chat_completion::preset;
use crate::adapters::supabase::DEFAULT_TABLE;
use crate::core::assistant::DEFAULT_SYSTEM_PROMPT;
use crate::domain::model::ProviderKind;
use crate::domain::ports::{ConfigProvider, ProviderSettings, StoreSettings};
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub store: Option<StoreSection>,
    #[serde(default)]
    pub assistant: AssistantSection,
    #[serde(default)]
    pub providers: ProvidersSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSection {
    pub url: String,
    pub anon_key: String,
    pub table: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssistantSection {
    #[serde(default)]
    pub default_provider: ProviderKind,
    pub system_prompt: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvidersSection {
    pub deepseek: Option<ProviderSection>,
    pub openai: Option<ProviderSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderSection {
    #[serde(default)]
    pub api_key: String,
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl ProviderSection {
    /// Overlays this section on the provider's preset.
    fn apply_to(&self, mut base: ProviderSettings) -> ProviderSettings {
        base.api_key = self.api_key.clone();
        if let Some(endpoint) = &self.endpoint {
            base.endpoint = endpoint.clone();
        }
        if let Some(model) = &self.model {
            base.model = model.clone();
        }
        if let Some(max_tokens) = self.max_tokens {
            base.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature {
            base.temperature = temperature;
        }
        base
    }
}

impl TomlConfig {
    /// Reads and parses a TOML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AppError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML text after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AppError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AppError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    fn provider_section(&self, kind: ProviderKind) -> Option<&ProviderSection> {
        match kind {
            ProviderKind::DeepSeek => self.providers.deepseek.as_ref(),
            ProviderKind::OpenAi => self.providers.openai.as_ref(),
            ProviderKind::LocalTemplate => None,
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn store(&self) -> Option<StoreSettings> {
        self.store.as_ref().map(|s| StoreSettings {
            url: s.url.clone(),
            anon_key: s.anon_key.clone(),
            table: s.table.clone().unwrap_or_else(|| DEFAULT_TABLE.to_string()),
        })
    }

    fn provider(&self, kind: ProviderKind) -> Option<ProviderSettings> {
        let base = preset(kind)?;
        Some(match self.provider_section(kind) {
            Some(section) => section.apply_to(base),
            None => base,
        })
    }

    fn default_provider(&self) -> ProviderKind {
        self.assistant.default_provider
    }

    fn system_prompt(&self) -> &str {
        self.assistant
            .system_prompt
            .as_deref()
            .unwrap_or(DEFAULT_SYSTEM_PROMPT)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(store) = self.store() {
            validation::validate_url("store.url", &store.url)?;
            if !store.has_credential() {
                return Err(AppError::MissingConfigError {
                    field: "store.anon_key".to_string(),
                });
            }
            validation::validate_non_empty_string("store.table", &store.table)?;
        }

        for kind in [ProviderKind::DeepSeek, ProviderKind::OpenAi] {
            if let Some(settings) = self.provider(kind) {
                validate_provider(kind, &settings)?;
            }
        }
        Ok(())
    }
}

pub(crate) fn validate_provider(kind: ProviderKind, settings: &ProviderSettings) -> Result<()> {
    validation::validate_url(&format!("providers.{}.endpoint", kind), &settings.endpoint)?;
    validation::validate_non_empty_string(&format!("providers.{}.model", kind), &settings.model)?;
    validation::validate_positive_number(
        &format!("providers.{}.max_tokens", kind),
        settings.max_tokens,
    )?;
    validation::validate_range(
        &format!("providers.{}.temperature", kind),
        settings.temperature,
        0.0,
        2.0,
    )
}

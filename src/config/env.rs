use crate::adapters::chat_completion::preset;
use crate::adapters::supabase::DEFAULT_TABLE;
use crate::config::toml_config::validate_provider;
use crate::core::assistant::DEFAULT_SYSTEM_PROMPT;
use crate::domain::model::ProviderKind;
use crate::domain::ports::{ConfigProvider, ProviderSettings, StoreSettings};
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{self, Validate};

/// Configuration taken from process environment variables only.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub store: Option<StoreSettings>,
    pub deepseek: ProviderSettings,
    pub openai: ProviderSettings,
    pub default_provider: ProviderKind,
    pub system_prompt: String,
}

impl EnvConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        // The store needs both values; one without the other is a mistake.
        let store = match (var("SUPABASE_URL"), var("SUPABASE_ANON_KEY")) {
            (Some(url), Some(anon_key)) => Some(StoreSettings {
                url,
                anon_key,
                table: var("SUPABASE_TABLE").unwrap_or_else(|| DEFAULT_TABLE.to_string()),
            }),
            (None, None) => None,
            (Some(_), None) => {
                return Err(AppError::MissingConfigError {
                    field: "SUPABASE_ANON_KEY".to_string(),
                })
            }
            (None, Some(_)) => {
                return Err(AppError::MissingConfigError {
                    field: "SUPABASE_URL".to_string(),
                })
            }
        };

        let default_provider = match var("SASA_PROVIDER") {
            Some(value) => value.parse()?,
            None => ProviderKind::default(),
        };

        let provider = |kind: ProviderKind, prefix: &str| -> Result<ProviderSettings> {
            let mut settings = preset(kind).ok_or_else(|| AppError::ConfigError {
                message: format!("no preset for {}", kind),
            })?;
            if let Some(key) = var(&format!("{}_API_KEY", prefix)) {
                settings.api_key = key;
            }
            if let Some(endpoint) = var(&format!("{}_API_URL", prefix)) {
                settings.endpoint = endpoint;
            }
            if let Some(model) = var(&format!("{}_MODEL", prefix)) {
                settings.model = model;
            }
            Ok(settings)
        };

        Ok(Self {
            store,
            deepseek: provider(ProviderKind::DeepSeek, "DEEPSEEK")?,
            openai: provider(ProviderKind::OpenAi, "OPENAI")?,
            default_provider,
            system_prompt: var("SASA_SYSTEM_PROMPT")
                .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
        })
    }
}

impl ConfigProvider for EnvConfig {
    fn store(&self) -> Option<StoreSettings> {
        self.store.clone()
    }

    fn provider(&self, kind: ProviderKind) -> Option<ProviderSettings> {
        match kind {
            ProviderKind::DeepSeek => Some(self.deepseek.clone()),
            ProviderKind::OpenAi => Some(self.openai.clone()),
            ProviderKind::LocalTemplate => None,
        }
    }

    fn default_provider(&self) -> ProviderKind {
        self.default_provider
    }

    fn system_prompt(&self) -> &str {
        &self.system_prompt
    }
}

impl Validate for EnvConfig {
    fn validate(&self) -> Result<()> {
        if let Some(store) = &self.store {
            validation::validate_url("SUPABASE_URL", &store.url)?;
            if !store.has_credential() {
                return Err(AppError::MissingConfigError {
                    field: "SUPABASE_ANON_KEY".to_string(),
                });
            }
        }
        validate_provider(ProviderKind::DeepSeek, &self.deepseek)?;
        validate_provider(ProviderKind::OpenAi, &self.openai)?;
        tracing::debug!("Environment configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn empty_environment_means_local_only() {
        let config = EnvConfig::from_lookup(lookup(&[])).unwrap();
        assert!(config.store().is_none());
        assert_eq!(config.default_provider(), ProviderKind::LocalTemplate);
        assert!(!config.deepseek.has_credential());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn reads_store_and_provider_overrides() {
        let config = EnvConfig::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://abc.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
            ("SASA_PROVIDER", "openai"),
            ("OPENAI_API_KEY", "sk-openai"),
            ("OPENAI_MODEL", "gpt-4o-mini"),
            ("DEEPSEEK_API_URL", "http://localhost:9000/v1/chat/completions"),
        ]))
        .unwrap();

        let store = config.store().unwrap();
        assert_eq!(store.table, "consultations");
        assert_eq!(config.default_provider(), ProviderKind::OpenAi);
        assert_eq!(config.openai.model, "gpt-4o-mini");
        assert!(config.openai.has_credential());
        assert_eq!(
            config.deepseek.endpoint,
            "http://localhost:9000/v1/chat/completions"
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn half_configured_store_is_rejected() {
        let err = EnvConfig::from_lookup(lookup(&[("SUPABASE_URL", "https://abc.supabase.co")]))
            .unwrap_err();
        assert!(matches!(err, AppError::MissingConfigError { field } if field == "SUPABASE_ANON_KEY"));
    }

    #[test]
    fn placeholder_store_key_fails_validation() {
        let config = EnvConfig::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://abc.supabase.co"),
            ("SUPABASE_ANON_KEY", "${SUPABASE_ANON_KEY}"),
        ]))
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(AppError::MissingConfigError { field }) if field == "SUPABASE_ANON_KEY"
        ));
    }

    #[test]
    fn unknown_provider_is_rejected() {
        assert!(EnvConfig::from_lookup(lookup(&[("SASA_PROVIDER", "bard")])).is_err());
    }
}

#[cfg(feature = "cli")]
pub mod cli;
pub mod env;
pub mod toml_config;

use crate::domain::model::ProviderKind;
use crate::domain::ports::{ConfigProvider, ProviderSettings, StoreSettings};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::path::Path;

pub use env::EnvConfig;
pub use toml_config::TomlConfig;

pub const DEFAULT_CONFIG_FILE: &str = "sasa.toml";

/// Whichever configuration source was found at startup.
#[derive(Debug, Clone)]
pub enum LoadedConfig {
    File(TomlConfig),
    Env(EnvConfig),
}

impl LoadedConfig {
    /// Reads the TOML file when it exists, otherwise falls back to the environment.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            tracing::info!("Loading configuration from {}", path.display());
            Ok(LoadedConfig::File(TomlConfig::from_file(path)?))
        } else {
            tracing::debug!("{} not found, using environment variables", path.display());
            Ok(LoadedConfig::Env(EnvConfig::from_env()?))
        }
    }

    fn inner(&self) -> &dyn ConfigProvider {
        match self {
            LoadedConfig::File(config) => config,
            LoadedConfig::Env(config) => config,
        }
    }
}

impl ConfigProvider for LoadedConfig {
    fn store(&self) -> Option<StoreSettings> {
        self.inner().store()
    }

    fn provider(&self, kind: ProviderKind) -> Option<ProviderSettings> {
        self.inner().provider(kind)
    }

    fn default_provider(&self) -> ProviderKind {
        self.inner().default_provider()
    }

    fn system_prompt(&self) -> &str {
        self.inner().system_prompt()
    }
}

impl Validate for LoadedConfig {
    fn validate(&self) -> Result<()> {
        match self {
            LoadedConfig::File(config) => config.validate(),
            LoadedConfig::Env(config) => config.validate(),
        }
    }
}

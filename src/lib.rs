pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{ChatCompletionClient, InMemoryStore, SupabaseStore};
pub use config::{EnvConfig, LoadedConfig, TomlConfig};
pub use core::assistant::Assistant;
pub use core::booking::{BookingForm, BookingService};
pub use core::templates::LocalTemplates;
pub use utils::error::{AppError, Result};

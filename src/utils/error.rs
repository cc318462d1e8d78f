use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Required fields missing: {}", .fields.join(", "))]
    MissingFields { fields: Vec<String> },

    #[error("Store rejected the write (HTTP {status}): {message}")]
    StoreError {
        status: u16,
        code: Option<String>,
        message: String,
        details: Option<String>,
        hint: Option<String>,
    },

    #[error("{provider} provider error: {message}")]
    ProviderError { provider: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Validation,
    Storage,
    Provider,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::HttpError(_) => ErrorCategory::Network,
            AppError::IoError(_) | AppError::SerializationError(_) => ErrorCategory::Data,
            AppError::ConfigError { .. }
            | AppError::MissingConfigError { .. }
            | AppError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            AppError::MissingFields { .. } => ErrorCategory::Validation,
            AppError::StoreError { .. } => ErrorCategory::Storage,
            AppError::ProviderError { .. } => ErrorCategory::Provider,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network | ErrorCategory::Storage | ErrorCategory::Provider => {
                ErrorSeverity::Medium
            }
            ErrorCategory::Validation | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::HttpError(_) => "Could not reach the remote service.".to_string(),
            AppError::MissingFields { fields } => {
                format!("Please fill in: {}", fields.join(", "))
            }
            AppError::StoreError { message, .. } => {
                format!("The booking could not be saved: {}", message)
            }
            AppError::ProviderError { provider, .. } => {
                format!("The {} assistant is unavailable.", provider)
            }
            AppError::MissingConfigError { field } => {
                format!("Configuration value '{}' is not set.", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your network connection and try again",
            ErrorCategory::Configuration => {
                "Check sasa.toml or the SUPABASE_* / *_API_KEY environment variables"
            }
            ErrorCategory::Validation => "Provide the missing fields and submit again",
            ErrorCategory::Storage => "Try again later; the form has been kept",
            ErrorCategory::Provider => "Switch to the local assistant or try again later",
            ErrorCategory::Data => "Check the input files and their format",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

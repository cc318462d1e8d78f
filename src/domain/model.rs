use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::utils::error::AppError;

/// A consultation request as submitted by the booking form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewConsultation {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_of_choice: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_of_education: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_comments: Option<String>,
}

/// Server-assigned row id. Hosted tables may use a UUID or an integer key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Uuid> for RecordId {
    fn from(id: Uuid) -> Self {
        RecordId(id.to_string())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(RecordId(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => text,
            Raw::Unsigned(n) => n.to_string(),
            Raw::Signed(n) => n.to_string(),
        }))
    }
}

/// Accepts RFC 3339 as well as `timestamp without time zone` columns, read as UTC.
fn lenient_timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    if let Ok(ts) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&raw, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognised timestamp '{}'", raw)))
}

/// A stored consultation row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consultation {
    pub id: RecordId,
    #[serde(flatten)]
    pub request: NewConsultation,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    #[serde(rename = "mock", alias = "demo", alias = "local")]
    LocalTemplate,
    DeepSeek,
    #[serde(rename = "openai", alias = "chatgpt")]
    OpenAi,
}

impl ProviderKind {
    pub fn label(&self) -> &'static str {
        match self {
            ProviderKind::LocalTemplate => "Demo",
            ProviderKind::DeepSeek => "DeepSeek",
            ProviderKind::OpenAi => "ChatGPT",
        }
    }

    pub fn is_remote(&self) -> bool {
        !matches!(self, ProviderKind::LocalTemplate)
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProviderKind::LocalTemplate => "mock",
            ProviderKind::DeepSeek => "deepseek",
            ProviderKind::OpenAi => "openai",
        };
        f.write_str(name)
    }
}

impl FromStr for ProviderKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mock" | "demo" | "local" => Ok(ProviderKind::LocalTemplate),
            "deepseek" => Ok(ProviderKind::DeepSeek),
            "openai" | "chatgpt" => Ok(ProviderKind::OpenAi),
            other => Err(AppError::InvalidConfigValueError {
                field: "provider".to_string(),
                value: other.to_string(),
                reason: "expected one of: mock, deepseek, openai".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        }
    }
}

pub const GREETING: &str = "Hello! I can help you with information about studying abroad, costs, visa requirements, and more. What would you like to know?";

/// Display history of a chat session. Messages are only ever appended.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::new(Sender::Assistant, GREETING)],
        }
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drops every exchange and starts over from the greeting.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_kind_parses_ui_aliases() {
        assert_eq!("Demo".parse::<ProviderKind>().unwrap(), ProviderKind::LocalTemplate);
        assert_eq!("chatgpt".parse::<ProviderKind>().unwrap(), ProviderKind::OpenAi);
        assert_eq!("deepseek".parse::<ProviderKind>().unwrap(), ProviderKind::DeepSeek);
        assert!("gemini".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn provider_kind_deserializes_from_config_names() {
        let kind: ProviderKind = serde_json::from_str("\"mock\"").unwrap();
        assert_eq!(kind, ProviderKind::LocalTemplate);
        let kind: ProviderKind = serde_json::from_str("\"openai\"").unwrap();
        assert_eq!(kind, ProviderKind::OpenAi);
    }

    #[test]
    fn none_fields_are_not_serialized() {
        let request = NewConsultation {
            full_name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            phone_number: "+91 98765 43210".into(),
            country_of_choice: Some("Germany".into()),
            level_of_education: None,
            selected_service: None,
            service_price: None,
            additional_comments: None,
        };
        let body = serde_json::to_value(&request).unwrap();
        let obj = body.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert!(!obj.contains_key("level_of_education"));
    }

    #[test]
    fn consultation_row_flattens_request_fields() {
        let row = serde_json::json!({
            "id": "7b0c2a6e-4f0e-4d43-9a57-1d1c1f2a9b10",
            "full_name": "Asha Rao",
            "email": "asha@example.com",
            "phone_number": "123",
            "country_of_choice": null,
            "created_at": "2024-12-15T10:00:00.123456+00:00",
            "updated_at": "2024-12-15T10:00:00.123456+00:00"
        });
        let stored: Consultation = serde_json::from_value(row).unwrap();
        assert_eq!(stored.request.full_name, "Asha Rao");
        assert_eq!(stored.request.country_of_choice, None);
    }

    #[test]
    fn consultation_row_accepts_integer_id_and_naive_timestamps() {
        let row = serde_json::json!({
            "id": 42,
            "full_name": "Asha Rao",
            "email": "asha@example.com",
            "phone_number": "123",
            "created_at": "2024-12-15T10:00:00.123456",
            "updated_at": "2024-12-15 10:00:00"
        });
        let stored: Consultation = serde_json::from_value(row).unwrap();
        assert_eq!(stored.id.as_str(), "42");
        assert_eq!(stored.created_at.to_rfc3339(), "2024-12-15T10:00:00.123456+00:00");
        assert!(stored.updated_at < stored.created_at);

        let bad = serde_json::json!({
            "id": "x",
            "full_name": "Asha Rao",
            "email": "asha@example.com",
            "phone_number": "123",
            "created_at": "yesterday",
            "updated_at": "yesterday"
        });
        assert!(serde_json::from_value::<Consultation>(bad).is_err());
    }

    #[test]
    fn transcript_reset_restores_greeting() {
        let mut transcript = Transcript::new();
        transcript.push(ChatMessage::new(Sender::User, "hi"));
        assert_eq!(transcript.len(), 2);
        transcript.reset();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.messages()[0].text, GREETING);
    }
}

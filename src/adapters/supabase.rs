use crate::domain::model::{Consultation, NewConsultation};
use crate::domain::ports::{ConsultationStore, StoreSettings};
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_TABLE: &str = "consultations";

/// Error body returned by PostgREST on a rejected request.
#[derive(Debug, Default, Deserialize)]
struct PostgrestError {
    code: Option<String>,
    message: Option<String>,
    details: Option<String>,
    hint: Option<String>,
}

/// Writes consultation rows through the Supabase REST interface.
pub struct SupabaseStore {
    client: Client,
    endpoint: String,
    anon_key: String,
}

impl SupabaseStore {
    pub fn new(settings: &StoreSettings) -> Self {
        Self::with_client(Client::new(), settings)
    }

    pub fn with_client(client: Client, settings: &StoreSettings) -> Self {
        let base = settings.url.trim_end_matches('/');
        Self {
            client,
            endpoint: format!("{}/rest/v1/{}", base, settings.table),
            anon_key: settings.anon_key.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ConsultationStore for SupabaseStore {
    async fn insert(&self, request: &NewConsultation) -> Result<Consultation> {
        tracing::debug!("Inserting consultation into {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Prefer", "return=representation")
            .json(&[request])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Store responded with {}", status);

        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let body: PostgrestError = serde_json::from_str(&raw).unwrap_or_default();
            return Err(AppError::StoreError {
                status: status.as_u16(),
                code: body.code,
                message: body.message.unwrap_or(raw),
                details: body.details,
                hint: body.hint,
            });
        }

        // The row is written by now, so decode failures are store errors.
        let raw = response.text().await?;
        let mut rows: Vec<Consultation> =
            serde_json::from_str(&raw).map_err(|e| AppError::StoreError {
                status: status.as_u16(),
                code: None,
                message: format!(
                    "consultation may already be stored, but the response could not be read: {}",
                    e
                ),
                details: Some(raw.clone()),
                hint: Some("check the table before submitting again".to_string()),
            })?;
        if rows.len() != 1 {
            return Err(AppError::StoreError {
                status: status.as_u16(),
                code: None,
                message: format!("expected exactly one inserted row, got {}", rows.len()),
                details: None,
                hint: None,
            });
        }

        let stored = rows.remove(0);
        tracing::info!("Stored consultation {}", stored.id);
        Ok(stored)
    }
}

use crate::domain::model::{Consultation, NewConsultation};
use crate::domain::ports::ConsultationStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Process-local store. Assigns ids and timestamps the way the hosted table does.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    rows: Arc<Mutex<Vec<Consultation>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn rows(&self) -> Vec<Consultation> {
        self.rows.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.rows.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.lock().await.is_empty()
    }
}

#[async_trait]
impl ConsultationStore for InMemoryStore {
    async fn insert(&self, request: &NewConsultation) -> Result<Consultation> {
        let now = Utc::now();
        let stored = Consultation {
            id: Uuid::new_v4().into(),
            request: request.clone(),
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().await.push(stored.clone());
        tracing::debug!("Stored consultation {} in memory", stored.id);
        Ok(stored)
    }
}

use crate::domain::catalog::{Country, PricingTier};
use crate::domain::model::{Consultation, NewConsultation};
use crate::domain::ports::ConsultationStore;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::blank_fields;

pub const FAILURE_NOTICE: &str = "Something went wrong. Please try again.";

/// Raw booking form input. Text stays as typed until submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub country_of_choice: String,
    pub level_of_education: String,
    pub selected_service: String,
    pub service_price: String,
    pub additional_comments: String,
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form opened from a pricing card.
    pub fn for_tier(tier: &PricingTier) -> Self {
        Self {
            selected_service: tier.title.to_string(),
            service_price: tier.price.to_string(),
            ..Self::default()
        }
    }

    /// Form opened from a destination card.
    pub fn for_country(country: &Country) -> Self {
        Self {
            country_of_choice: country.name.to_string(),
            ..Self::default()
        }
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        blank_fields(&[
            ("full_name", self.full_name.as_str()),
            ("email", self.email.as_str()),
            ("phone_number", self.phone_number.as_str()),
        ])
    }

    pub fn to_request(&self) -> Result<NewConsultation> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::MissingFields {
                fields: missing.into_iter().map(String::from).collect(),
            });
        }

        Ok(NewConsultation {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            country_of_choice: optional(&self.country_of_choice),
            level_of_education: optional(&self.level_of_education),
            selected_service: optional(&self.selected_service),
            service_price: optional(&self.service_price),
            additional_comments: optional(&self.additional_comments),
        })
    }

    /// Clears what the visitor typed but keeps the preselected service.
    pub fn reset(&mut self) {
        *self = Self {
            selected_service: std::mem::take(&mut self.selected_service),
            service_price: std::mem::take(&mut self.service_price),
            ..Self::default()
        };
    }
}

/// Text shown after a successful booking.
pub fn confirmation(stored: &Consultation) -> String {
    let service = stored
        .request
        .selected_service
        .as_deref()
        .unwrap_or("a free consultation");
    format!(
        "Thank you, {}! We've received your consultation request for {}. \
         Our team will contact you within 24 hours to schedule your session.",
        stored.request.full_name, service
    )
}

pub struct BookingService<S: ConsultationStore> {
    store: S,
}

impl<S: ConsultationStore> BookingService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Checks required fields, then writes exactly one row. The form is only
    /// borrowed, so on failure it is still there to edit and resubmit.
    pub async fn submit(&self, form: &BookingForm) -> Result<Consultation> {
        let request = form.to_request()?;

        match self.store.insert(&request).await {
            Ok(stored) => {
                tracing::info!(
                    "Consultation {} booked for {:?}",
                    stored.id,
                    stored.request.selected_service
                );
                Ok(stored)
            }
            Err(e) => {
                tracing::error!("Consultation submission failed: {}", e);
                Err(e)
            }
        }
    }
}

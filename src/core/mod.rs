pub mod assistant;
pub mod booking;
pub mod templates;

pub use crate::domain::model::{Consultation, NewConsultation, ProviderKind};
pub use crate::domain::ports::{ChatProvider, ConfigProvider, ConsultationStore};
pub use crate::utils::error::Result;

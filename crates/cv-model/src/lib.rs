//! cv-model: request and response data model for the cycle service.

pub mod request;
pub mod types;

mod wire;

pub use request::{CycleRequest, efficiency_from_percent};
pub use types::{CycleResult, CycleSummary, ProcessStep, Quality, StatePoint};

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(thiserror::Error, Debug)]
pub enum ModelError {
    #[error("Malformed cycle response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Invalid request: {what}")]
    InvalidRequest { what: &'static str },

    #[error(transparent)]
    Core(#[from] cv_core::CvError),
}

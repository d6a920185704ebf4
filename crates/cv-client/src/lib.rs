//! cv-client: async HTTP boundary to the cycle-computation service.

pub mod dispatcher;
pub mod gate;

pub use dispatcher::{DispatchReply, Dispatcher};
pub use gate::ResponseGate;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Rejected request: {0}")]
    Request(#[source] cv_model::ModelError),

    #[error("Network failure: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Cycle service returned HTTP {status}")]
    Status { status: reqwest::StatusCode },

    #[error("Malformed response: {0}")]
    Malformed(#[source] cv_model::ModelError),
}

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod dashboard;
pub mod reservations;
pub mod settings;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures surfaced by the service layer.
///
/// Validation problems are caught before any write is attempted; store
/// failures abort the whole pipeline and reach the caller as one opaque
/// error. Nothing here retries automatically; the UI's refresh button is
/// the retry.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed user input, surfaced with a message fit for the operator.
    #[error("{0}")]
    Form(String),
    /// Any repository read or write failure.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

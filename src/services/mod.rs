//! Page-level use cases, generic over the backend reader.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod tag;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input is invalid or the requested listing is empty.
    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

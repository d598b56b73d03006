//! Error conversion glue between the domain and service layers.
//!
//! The domain layer must not depend on service error types, so the mapping of
//! rejected route input onto a not-found outcome lives here.

use crate::domain::types::TypeConstraintError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(_: TypeConstraintError) -> Self {
        ServiceError::NotFound
    }
}

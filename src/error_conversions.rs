//! Error conversion glue between the value-type layer and collaborator errors.
//!
//! The domain layer must not depend on service or repository error types, so
//! the conversions live here.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::FetchError;

impl From<TypeConstraintError> for FetchError {
    fn from(val: TypeConstraintError) -> Self {
        FetchError::Decode(val.to_string())
    }
}

#[cfg(feature = "client")]
impl From<TypeConstraintError> for crate::services::ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        crate::services::ServiceError::TypeConstraint(val.to_string())
    }
}

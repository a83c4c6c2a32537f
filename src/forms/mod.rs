//! Request DTOs backing the platform's submit flows.
//!
//! Each form is validated once, here, and converted into a domain payload.
//! Nothing past this boundary sees unvalidated input.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod application;
pub mod auth;
pub mod band;
pub mod profile;
pub mod review;
pub mod vacancy;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    Constraint(#[from] TypeConstraintError),

    #[error("invalid band id")]
    InvalidBandId,

    #[error("invalid vacancy id")]
    InvalidVacancyId,

    #[error("member row {0} needs both a name and an instrument")]
    IncompleteMember(usize),

    #[error("a band needs at least one member")]
    NoMembers,

    #[error("duplicate member: {0}")]
    DuplicateMember(String),
}

/// Trims an optional free-text field, mapping blank input to `None`.
pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

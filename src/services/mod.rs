//! Session-guarded use cases consumed by the rendering layer.

use thiserror::Error;

use crate::domain::session::{AuthenticatedUser, Session};
use crate::forms::FormError;
use crate::repository::errors::FetchError;

pub mod applications;
pub mod auth;
pub mod bands;
pub mod fetch;
pub mod list;
pub mod profile;
pub mod reviews;
pub mod vacancies;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Form error: {0}")]
    Form(#[from] FormError),

    #[error("Type constraint error: {0}")]
    TypeConstraint(String),

    #[error("Not found")]
    NotFound,

    #[error("Fetch error: {0}")]
    Fetch(FetchError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<FetchError> for ServiceError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Unauthorized => ServiceError::Unauthorized,
            FetchError::NotFound => ServiceError::NotFound,
            other => ServiceError::Fetch(other),
        }
    }
}

/// Returns the signed-in user or [`ServiceError::Unauthorized`].
pub fn require_user(session: &Session) -> ServiceResult<&AuthenticatedUser> {
    session.current_user().ok_or(ServiceError::Unauthorized)
}

/// Returns the signed-in user when it holds `role`.
pub fn require_role<'a>(session: &'a Session, role: &str) -> ServiceResult<&'a AuthenticatedUser> {
    let user = require_user(session)?;
    if user.has_role(role) {
        Ok(user)
    } else {
        Err(ServiceError::Unauthorized)
    }
}

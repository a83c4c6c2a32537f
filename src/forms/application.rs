use serde::Deserialize;
use validator::Validate;

use crate::domain::application::NewApplication;
use crate::domain::types::VacancyId;
use crate::forms::{FormError, optional_text};

#[derive(Debug, Deserialize, Validate)]
/// Form data for applying to a vacancy.
pub struct ApplicationForm {
    pub vacancy_id: i32,
    /// Optional cover message.
    #[validate(length(max = 1000))]
    pub message: Option<String>,
}

impl TryFrom<ApplicationForm> for NewApplication {
    type Error = FormError;

    fn try_from(form: ApplicationForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(NewApplication {
            vacancy_id: VacancyId::new(form.vacancy_id).map_err(|_| FormError::InvalidVacancyId)?,
            message: optional_text(form.message).map(|s| ammonia::clean(&s)),
        })
    }
}

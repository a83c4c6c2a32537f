use serde::Deserialize;
use validator::Validate;

use crate::domain::types::{BandId, Instrument};
use crate::domain::vacancy::NewVacancy;
use crate::forms::{FormError, optional_text};

#[derive(Debug, Deserialize, Validate)]
pub struct VacancyForm {
    pub band_id: i32,
    #[validate(length(min = 1, max = 50))]
    pub instrument: String,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

impl TryFrom<VacancyForm> for NewVacancy {
    type Error = FormError;

    fn try_from(form: VacancyForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(NewVacancy {
            band_id: BandId::new(form.band_id).map_err(|_| FormError::InvalidBandId)?,
            instrument: Instrument::new(form.instrument)?,
            description: optional_text(form.description).map(|s| ammonia::clean(&s)),
        })
    }
}

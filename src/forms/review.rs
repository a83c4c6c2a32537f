use serde::Deserialize;
use validator::Validate;

use crate::domain::review::NewReview;
use crate::domain::types::{BandId, ReviewText, Score};
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
pub struct ReviewForm {
    pub band_id: i32,
    #[validate(range(min = 1, max = 5))]
    pub score: u8,
    #[validate(length(min = 1, max = 2000))]
    pub text: String,
}

impl TryFrom<ReviewForm> for NewReview {
    type Error = FormError;

    fn try_from(form: ReviewForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(NewReview {
            band_id: BandId::new(form.band_id).map_err(|_| FormError::InvalidBandId)?,
            score: Score::new(form.score)?,
            text: ReviewText::new(form.text)?,
        })
    }
}

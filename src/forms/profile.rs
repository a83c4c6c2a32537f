use serde::Deserialize;
use validator::Validate;

use crate::domain::profile::UpdateProfile;
use crate::domain::types::{Email, Instrument, Username};
use crate::forms::{FormError, optional_text};

#[derive(Debug, Deserialize, Validate)]
pub struct ProfileForm {
    #[validate(length(min = 3, max = 32))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 80))]
    pub city: Option<String>,
    #[validate(length(max = 2000))]
    pub bio: Option<String>,
    /// Comma-separated list of instruments.
    #[serde(default)]
    pub instruments: String,
}

/// Splits the instrument list, dropping blanks and case-insensitive repeats.
fn parse_instruments(raw: &str) -> Result<Vec<Instrument>, FormError> {
    let mut instruments: Vec<Instrument> = Vec::new();
    for item in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if instruments
            .iter()
            .any(|known| known.as_str().eq_ignore_ascii_case(item))
        {
            continue;
        }
        instruments.push(Instrument::new(item)?);
    }
    Ok(instruments)
}

impl TryFrom<ProfileForm> for UpdateProfile {
    type Error = FormError;

    fn try_from(form: ProfileForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(UpdateProfile {
            username: Username::new(form.username)?,
            email: Email::new(form.email)?,
            instruments: parse_instruments(&form.instruments)?,
            city: optional_text(form.city),
            bio: optional_text(form.bio).map(|s| ammonia::clean(&s)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruments_are_split_and_deduplicated() {
        let profile = UpdateProfile::try_from(ProfileForm {
            username: "bassist".to_string(),
            email: "Bassist@Example.com".to_string(),
            city: None,
            bio: None,
            instruments: " Bass, guitar,,bass , Vocals".to_string(),
        })
        .unwrap();

        let instruments: Vec<_> = profile.instruments.iter().map(|i| i.as_str()).collect();
        assert_eq!(instruments, vec!["Bass", "guitar", "Vocals"]);
        assert_eq!(profile.email.as_str(), "bassist@example.com");
    }

    #[test]
    fn short_username_fails_validation() {
        let err = UpdateProfile::try_from(ProfileForm {
            username: "ab".to_string(),
            email: "a@example.com".to_string(),
            city: None,
            bio: None,
            instruments: String::new(),
        })
        .unwrap_err();

        assert!(matches!(err, FormError::Validation(_)));
    }
}

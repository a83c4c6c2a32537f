//! Band registration form with a dynamic list of membership rows.

use std::collections::HashSet;

use serde::Deserialize;
use validator::Validate;

use crate::domain::band::{BandMember, NewBand};
use crate::domain::types::{BandName, Instrument, MemberName};
use crate::forms::{FormError, optional_text};

#[derive(Debug, Deserialize, Validate)]
pub struct BandForm {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 50))]
    pub genre: Option<String>,
    #[validate(length(max = 80))]
    pub city: Option<String>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    /// Member names, parallel to `member_instrument`.
    #[serde(default)]
    #[validate(length(max = 20))]
    pub member_name: Vec<String>,
    #[serde(default)]
    #[validate(length(max = 20))]
    pub member_instrument: Vec<String>,
}

impl BandForm {
    /// Pairs up the parallel member columns, skipping fully blank rows.
    fn members(&self) -> Result<Vec<BandMember>, FormError> {
        let rows = self.member_name.len().max(self.member_instrument.len());
        let mut seen = HashSet::new();
        let mut members = Vec::new();

        for row in 0..rows {
            let name = self.member_name.get(row).map_or("", |s| s.trim());
            let instrument = self.member_instrument.get(row).map_or("", |s| s.trim());

            match (name.is_empty(), instrument.is_empty()) {
                (true, true) => continue,
                (false, false) => {}
                _ => return Err(FormError::IncompleteMember(row + 1)),
            }

            if !seen.insert(name.to_lowercase()) {
                return Err(FormError::DuplicateMember(name.to_string()));
            }

            members.push(BandMember {
                name: MemberName::new(name)?,
                instrument: Instrument::new(instrument)?,
            });
        }

        if members.is_empty() {
            return Err(FormError::NoMembers);
        }

        Ok(members)
    }
}

impl TryFrom<BandForm> for NewBand {
    type Error = FormError;

    fn try_from(form: BandForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let members = form.members()?;

        Ok(NewBand::new(
            BandName::new(form.name)?,
            optional_text(form.genre),
            optional_text(form.city),
            form.description,
            members,
        ))
    }
}

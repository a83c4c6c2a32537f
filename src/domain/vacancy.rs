use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{BandId, BandName, Instrument, VacancyId};
use crate::view::{SortValue, Sortable};

/// An open slot a band is looking to fill.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Vacancy {
    pub id: VacancyId,
    pub band_id: BandId,
    pub band_name: BandName,
    pub instrument: Instrument,
    pub description: Option<String>,
    #[serde(default)]
    pub closed: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VacancySortKey {
    CreatedAt,
    Instrument,
    BandName,
}

impl Sortable for Vacancy {
    type Key = VacancySortKey;

    fn sort_value(&self, key: VacancySortKey) -> Option<SortValue<'_>> {
        Some(match key {
            VacancySortKey::CreatedAt => SortValue::Timestamp(self.created_at),
            VacancySortKey::Instrument => SortValue::Text(self.instrument.as_str()),
            VacancySortKey::BandName => SortValue::Text(self.band_name.as_str()),
        })
    }
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NewVacancy {
    pub band_id: BandId,
    pub instrument: Instrument,
    pub description: Option<String>,
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{BandId, BandName, Instrument, MemberName};
use crate::view::{SortValue, Sortable};

/// A single membership row: who plays what.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BandMember {
    pub name: MemberName,
    pub instrument: Instrument,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Band {
    pub id: BandId,
    pub name: BandName,
    pub genre: Option<String>,
    pub city: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub members: Vec<BandMember>,
    /// Average review score scaled by 100, absent until the first review.
    pub rating: Option<u16>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandSortKey {
    Name,
    CreatedAt,
    MemberCount,
    Rating,
}

impl Sortable for Band {
    type Key = BandSortKey;

    fn sort_value(&self, key: BandSortKey) -> Option<SortValue<'_>> {
        match key {
            BandSortKey::Name => Some(SortValue::Text(self.name.as_str())),
            BandSortKey::CreatedAt => Some(SortValue::Timestamp(self.created_at)),
            BandSortKey::MemberCount => Some(SortValue::Number(self.members.len() as i64)),
            BandSortKey::Rating => self.rating.map(|rating| SortValue::Number(rating.into())),
        }
    }
}

/// Validated payload for registering a band.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NewBand {
    pub name: BandName,
    pub genre: Option<String>,
    pub city: Option<String>,
    pub description: Option<String>,
    pub members: Vec<BandMember>,
}

impl NewBand {
    #[must_use]
    pub fn new(
        name: BandName,
        genre: Option<String>,
        city: Option<String>,
        description: Option<String>,
        members: Vec<BandMember>,
    ) -> Self {
        Self {
            name,
            genre: genre.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            city: city.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            description: description
                .map(|s| ammonia::clean(&s).trim().to_string())
                .filter(|s| !s.is_empty()),
            members,
        }
    }
}

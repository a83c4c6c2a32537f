use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{BandId, ReviewId, ReviewText, Score, Username};
use crate::view::{SortValue, Sortable};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: ReviewId,
    pub band_id: BandId,
    pub author_name: Username,
    pub score: Score,
    pub text: ReviewText,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewSortKey {
    CreatedAt,
    Score,
}

impl Sortable for Review {
    type Key = ReviewSortKey;

    fn sort_value(&self, key: ReviewSortKey) -> Option<SortValue<'_>> {
        Some(match key {
            ReviewSortKey::CreatedAt => SortValue::Timestamp(self.created_at),
            ReviewSortKey::Score => SortValue::Number(self.score.get().into()),
        })
    }
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NewReview {
    pub band_id: BandId,
    pub score: Score,
    pub text: ReviewText,
}

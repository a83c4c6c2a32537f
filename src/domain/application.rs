use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ApplicationId, Username, VacancyId};
use crate::view::{SortValue, Sortable};

/// Review state of an application. Declaration order is the sort order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

/// A musician's response to a vacancy.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Application {
    pub id: ApplicationId,
    pub vacancy_id: VacancyId,
    pub applicant_name: Username,
    pub message: Option<String>,
    #[serde(default)]
    pub status: ApplicationStatus,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationSortKey {
    CreatedAt,
    Status,
    ApplicantName,
}

impl Sortable for Application {
    type Key = ApplicationSortKey;

    fn sort_value(&self, key: ApplicationSortKey) -> Option<SortValue<'_>> {
        Some(match key {
            ApplicationSortKey::CreatedAt => SortValue::Timestamp(self.created_at),
            ApplicationSortKey::Status => SortValue::Number(self.status as i64),
            ApplicationSortKey::ApplicantName => SortValue::Text(self.applicant_name.as_str()),
        })
    }
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NewApplication {
    pub vacancy_id: VacancyId,
    pub message: Option<String>,
}

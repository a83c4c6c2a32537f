//! Read-only repository backed by a JSON export of the platform's data.
//!
//! The file is re-read on every call, so each list request behaves like a
//! fresh fetch and picks up edits made between calls.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::application::Application;
use crate::domain::band::Band;
use crate::domain::review::Review;
use crate::domain::types::{BandId, VacancyId};
use crate::domain::vacancy::Vacancy;
use crate::repository::errors::FetchResult;
use crate::repository::{ApplicationReader, BandReader, ReviewReader, VacancyReader};

/// On-disk layout of a snapshot file. Missing sections are empty.
#[derive(Debug, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub bands: Vec<Band>,
    #[serde(default)]
    pub vacancies: Vec<Vacancy>,
    #[serde(default)]
    pub applications: Vec<Application>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone)]
pub struct JsonSnapshotRepository {
    path: PathBuf,
}

impl JsonSnapshotRepository {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn load(&self) -> FetchResult<Snapshot> {
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl BandReader for JsonSnapshotRepository {
    fn list_bands(&self) -> FetchResult<Vec<Band>> {
        Ok(self.load()?.bands)
    }
}

impl VacancyReader for JsonSnapshotRepository {
    fn list_vacancies(&self, band_id: Option<BandId>) -> FetchResult<Vec<Vacancy>> {
        let vacancies = self.load()?.vacancies;
        Ok(match band_id {
            Some(band_id) => vacancies
                .into_iter()
                .filter(|vacancy| vacancy.band_id == band_id)
                .collect(),
            None => vacancies,
        })
    }
}

impl ApplicationReader for JsonSnapshotRepository {
    fn list_applications(&self, vacancy_id: VacancyId) -> FetchResult<Vec<Application>> {
        Ok(self
            .load()?
            .applications
            .into_iter()
            .filter(|application| application.vacancy_id == vacancy_id)
            .collect())
    }
}

impl ReviewReader for JsonSnapshotRepository {
    fn list_reviews(&self, band_id: BandId) -> FetchResult<Vec<Review>> {
        Ok(self
            .load()?
            .reviews
            .into_iter()
            .filter(|review| review.band_id == band_id)
            .collect())
    }
}

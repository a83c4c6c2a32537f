//! Data collaborators the list views and forms talk to.
//!
//! Readers return whole collections; the view layer treats every successful
//! result as a full replacement of what it was showing.

use crate::domain::application::{Application, NewApplication};
use crate::domain::band::{Band, NewBand};
use crate::domain::profile::{Profile, UpdateProfile};
use crate::domain::review::{NewReview, Review};
use crate::domain::session::AuthenticatedUser;
use crate::domain::types::{BandId, UserId, VacancyId};
use crate::domain::vacancy::{NewVacancy, Vacancy};
use crate::repository::errors::FetchResult;

pub mod errors;
pub mod snapshot;

#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use snapshot::JsonSnapshotRepository;

/// Exchanges credentials for an authenticated identity.
pub trait Authenticator {
    fn login(&self, email: &str, password: &str) -> FetchResult<AuthenticatedUser>;
}

pub trait BandReader {
    fn list_bands(&self) -> FetchResult<Vec<Band>>;
}

pub trait VacancyReader {
    /// Lists vacancies, optionally only those of `band_id`.
    fn list_vacancies(&self, band_id: Option<BandId>) -> FetchResult<Vec<Vacancy>>;
}

pub trait ApplicationReader {
    fn list_applications(&self, vacancy_id: VacancyId) -> FetchResult<Vec<Application>>;
}

pub trait ReviewReader {
    fn list_reviews(&self, band_id: BandId) -> FetchResult<Vec<Review>>;
}

pub trait BandWriter {
    fn create_band(&self, new_band: &NewBand) -> FetchResult<Band>;
}

pub trait VacancyWriter {
    fn create_vacancy(&self, new_vacancy: &NewVacancy) -> FetchResult<Vacancy>;
}

pub trait ApplicationWriter {
    fn create_application(&self, application: &NewApplication) -> FetchResult<Application>;
}

pub trait ReviewWriter {
    fn create_review(&self, review: &NewReview) -> FetchResult<Review>;
}

pub trait ProfileWriter {
    fn update_profile(&self, user_id: UserId, updates: &UpdateProfile) -> FetchResult<Profile>;
}

//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::application::{Application, NewApplication};
use crate::domain::band::{Band, NewBand};
use crate::domain::profile::{Profile, UpdateProfile};
use crate::domain::review::{NewReview, Review};
use crate::domain::session::AuthenticatedUser;
use crate::domain::types::{BandId, UserId, VacancyId};
use crate::domain::vacancy::{NewVacancy, Vacancy};
use crate::repository::errors::FetchResult;
use crate::repository::{
    ApplicationReader, ApplicationWriter, Authenticator, BandReader, BandWriter, ProfileWriter,
    ReviewReader, ReviewWriter, VacancyReader, VacancyWriter,
};

mock! {
    pub Repository {}

    impl Authenticator for Repository {
        fn login(&self, email: &str, password: &str) -> FetchResult<AuthenticatedUser>;
    }

    impl BandReader for Repository {
        fn list_bands(&self) -> FetchResult<Vec<Band>>;
    }

    impl VacancyReader for Repository {
        fn list_vacancies(&self, band_id: Option<BandId>) -> FetchResult<Vec<Vacancy>>;
    }

    impl ApplicationReader for Repository {
        fn list_applications(&self, vacancy_id: VacancyId) -> FetchResult<Vec<Application>>;
    }

    impl ReviewReader for Repository {
        fn list_reviews(&self, band_id: BandId) -> FetchResult<Vec<Review>>;
    }

    impl BandWriter for Repository {
        fn create_band(&self, new_band: &NewBand) -> FetchResult<Band>;
    }

    impl VacancyWriter for Repository {
        fn create_vacancy(&self, new_vacancy: &NewVacancy) -> FetchResult<Vacancy>;
    }

    impl ApplicationWriter for Repository {
        fn create_application(&self, application: &NewApplication) -> FetchResult<Application>;
    }

    impl ReviewWriter for Repository {
        fn create_review(&self, review: &NewReview) -> FetchResult<Review>;
    }

    impl ProfileWriter for Repository {
        fn update_profile(&self, user_id: UserId, updates: &UpdateProfile) -> FetchResult<Profile>;
    }
}

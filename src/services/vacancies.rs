use crate::domain::session::{BAND_ADMIN_ROLE, Session};
use crate::domain::types::BandId;
use crate::domain::vacancy::{NewVacancy, Vacancy, VacancySortKey};
use crate::dto::list::{ListPageData, ListQuery};
use crate::forms::vacancy::VacancyForm;
use crate::models::config::ClientConfig;
use crate::repository::{VacancyReader, VacancyWriter};
use crate::services::list::build_list_page;
use crate::services::{ServiceResult, require_role, require_user};

/// Loads open vacancies, optionally restricted to one band.
pub fn load_vacancies_page<R>(
    repo: &R,
    session: &Session,
    config: &ClientConfig,
    band_id: Option<BandId>,
    query: ListQuery<VacancySortKey>,
) -> ServiceResult<ListPageData<Vacancy, VacancySortKey>>
where
    R: VacancyReader + ?Sized,
{
    require_user(session)?;

    let vacancies = repo
        .list_vacancies(band_id)
        .map_err(|err| {
            log::error!("Failed to list vacancies: {err}");
            err
        })?
        .into_iter()
        .filter(|vacancy| !vacancy.closed)
        .collect();

    Ok(build_list_page(vacancies, &query, config))
}

/// Publishes a vacancy on behalf of a band admin.
pub fn create_vacancy<R>(repo: &R, session: &Session, form: VacancyForm) -> ServiceResult<Vacancy>
where
    R: VacancyWriter + ?Sized,
{
    require_role(session, BAND_ADMIN_ROLE)?;

    let new_vacancy = NewVacancy::try_from(form).map_err(|err| {
        log::error!("Failed to validate vacancy form: {err}");
        err
    })?;

    let vacancy = repo.create_vacancy(&new_vacancy).map_err(|err| {
        log::error!("Failed to create vacancy: {err}");
        err
    })?;

    Ok(vacancy)
}

use crate::domain::application::{Application, ApplicationSortKey, NewApplication};
use crate::domain::session::{BAND_ADMIN_ROLE, MUSICIAN_ROLE, Session};
use crate::domain::types::VacancyId;
use crate::dto::list::{ListPageData, ListQuery};
use crate::forms::application::ApplicationForm;
use crate::models::config::ClientConfig;
use crate::repository::{ApplicationReader, ApplicationWriter};
use crate::services::list::build_list_page;
use crate::services::{ServiceResult, require_role};

/// Loads the applications received for a vacancy. Band admins only.
pub fn load_applications_page<R>(
    repo: &R,
    session: &Session,
    config: &ClientConfig,
    vacancy_id: VacancyId,
    query: ListQuery<ApplicationSortKey>,
) -> ServiceResult<ListPageData<Application, ApplicationSortKey>>
where
    R: ApplicationReader + ?Sized,
{
    require_role(session, BAND_ADMIN_ROLE)?;

    let applications = repo.list_applications(vacancy_id).map_err(|err| {
        log::error!("Failed to list applications for vacancy {vacancy_id}: {err}");
        err
    })?;

    Ok(build_list_page(applications, &query, config))
}

/// Submits the signed-in musician's application to a vacancy.
pub fn apply_to_vacancy<R>(
    repo: &R,
    session: &Session,
    form: ApplicationForm,
) -> ServiceResult<Application>
where
    R: ApplicationWriter + ?Sized,
{
    require_role(session, MUSICIAN_ROLE)?;

    let application = NewApplication::try_from(form).map_err(|err| {
        log::error!("Failed to validate application form: {err}");
        err
    })?;

    let created = repo.create_application(&application).map_err(|err| {
        log::error!("Failed to submit application: {err}");
        err
    })?;

    Ok(created)
}

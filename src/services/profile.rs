use crate::domain::profile::{Profile, UpdateProfile};
use crate::domain::session::Session;
use crate::forms::profile::ProfileForm;
use crate::repository::ProfileWriter;
use crate::services::{ServiceResult, require_user};

/// Saves the signed-in user's profile.
pub fn update_profile<R>(repo: &R, session: &Session, form: ProfileForm) -> ServiceResult<Profile>
where
    R: ProfileWriter + ?Sized,
{
    let user = require_user(session)?;

    let updates = UpdateProfile::try_from(form).map_err(|err| {
        log::error!("Failed to validate profile form: {err}");
        err
    })?;

    let profile = repo.update_profile(user.id, &updates).map_err(|err| {
        log::error!("Failed to update profile of user {}: {err}", user.id);
        err
    })?;

    Ok(profile)
}

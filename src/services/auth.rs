use validator::Validate;

use crate::domain::session::Session;
use crate::forms::FormError;
use crate::forms::auth::LoginForm;
use crate::repository::Authenticator;
use crate::services::ServiceResult;

/// Exchanges credentials for an identity and stores it in `session`.
///
/// A failed login leaves any previous identity in place.
pub fn sign_in<A>(auth: &A, session: &mut Session, form: LoginForm) -> ServiceResult<()>
where
    A: Authenticator + ?Sized,
{
    form.validate().map_err(FormError::from)?;

    let user = auth.login(&form.email, &form.password).map_err(|err| {
        log::error!("Login failed for {}: {err}", form.email);
        err
    })?;

    log::info!("Signed in as {}", user.username);
    session.sign_in(user);
    Ok(())
}

/// Ends the session.
pub fn sign_out(session: &mut Session) {
    if let Some(user) = session.sign_out() {
        log::info!("Signed out {}", user.username);
    }
}

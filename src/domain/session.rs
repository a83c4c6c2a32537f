//! Explicit authentication context.
//!
//! Components receive a `&Session` instead of reading credentials from
//! ambient storage. The session is mutated only by [`Session::sign_in`] and
//! [`Session::sign_out`].

use serde::{Deserialize, Serialize};

use crate::domain::types::{UserId, Username};

/// Role granted to every registered musician.
pub const MUSICIAN_ROLE: &str = "musician";
/// Role allowed to manage a band and its vacancies.
pub const BAND_ADMIN_ROLE: &str = "band_admin";

/// Identity and bearer token returned by the platform after login.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: Username,
    #[serde(default)]
    pub roles: Vec<String>,
    pub token: String,
}

impl AuthenticatedUser {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Session {
    user: Option<AuthenticatedUser>,
}

impl Session {
    /// An anonymous session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever identity the session held.
    pub fn sign_in(&mut self, user: AuthenticatedUser) {
        self.user = Some(user);
    }

    /// Drops the identity, returning it if there was one.
    pub fn sign_out(&mut self) -> Option<AuthenticatedUser> {
        self.user.take()
    }

    pub fn current_user(&self) -> Option<&AuthenticatedUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.user.as_ref().is_some_and(|user| user.has_role(role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(roles: &[&str]) -> AuthenticatedUser {
        AuthenticatedUser {
            id: UserId::new(1).unwrap(),
            username: Username::new("drummer").unwrap(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            token: "token".to_string(),
        }
    }

    #[test]
    fn sign_in_and_out_is_the_only_lifecycle() {
        let mut session = Session::new();
        assert!(!session.is_authenticated());

        session.sign_in(user(&[MUSICIAN_ROLE]));
        assert!(session.is_authenticated());
        assert!(session.has_role(MUSICIAN_ROLE));
        assert!(!session.has_role(BAND_ADMIN_ROLE));

        let previous = session.sign_out();
        assert_eq!(previous.map(|u| u.username.into_inner()), Some("drummer".to_string()));
        assert!(session.current_user().is_none());
        assert!(!session.has_role(MUSICIAN_ROLE));
    }
}

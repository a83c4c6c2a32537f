use serde::{Deserialize, Serialize};
use validator::Validate;

/// Credentials submitted on the login page.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
}

use serde::{Deserialize, Serialize};

use crate::domain::types::{Email, Instrument, UserId, Username};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub id: UserId,
    pub username: Username,
    pub email: Email,
    #[serde(default)]
    pub instruments: Vec<Instrument>,
    pub city: Option<String>,
    pub bio: Option<String>,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct UpdateProfile {
    pub username: Username,
    pub email: Email,
    pub instruments: Vec<Instrument>,
    pub city: Option<String>,
    pub bio: Option<String>,
}

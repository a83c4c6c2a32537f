//! Domain records exposed by the band networking client.

pub mod application;
pub mod band;
pub mod profile;
pub mod review;
pub mod session;
pub mod types;
pub mod vacancy;

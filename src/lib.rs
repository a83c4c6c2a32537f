//! Client library for a band and musician networking platform.
//!
//! The heart of the crate is [`view::PagedSortedView`], the client-side
//! paginated and sortable list model used for bands, vacancies,
//! applications and reviews. Around it sit validated forms, an explicit
//! session, fetch abstractions and session-guarded list services.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod view;

#[cfg(feature = "data")]
mod error_conversions;

#[cfg(feature = "client")]
pub mod models;
#[cfg(feature = "client")]
pub mod services;

/// Page size used until the user picks another one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

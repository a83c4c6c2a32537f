use crate::domain::band::{Band, BandSortKey, NewBand};
use crate::domain::session::{BAND_ADMIN_ROLE, Session};
use crate::dto::list::{ListPageData, ListQuery};
use crate::forms::band::BandForm;
use crate::models::config::ClientConfig;
use crate::repository::{BandReader, BandWriter};
use crate::services::list::build_list_page;
use crate::services::{ServiceResult, require_role, require_user};

/// Loads the band directory page.
pub fn load_bands_page<R>(
    repo: &R,
    session: &Session,
    config: &ClientConfig,
    query: ListQuery<BandSortKey>,
) -> ServiceResult<ListPageData<Band, BandSortKey>>
where
    R: BandReader + ?Sized,
{
    require_user(session)?;

    let bands = repo.list_bands().map_err(|err| {
        log::error!("Failed to list bands: {err}");
        err
    })?;

    Ok(build_list_page(bands, &query, config))
}

/// Validates the band form and registers the band with its members.
pub fn create_band<R>(repo: &R, session: &Session, form: BandForm) -> ServiceResult<Band>
where
    R: BandWriter + ?Sized,
{
    require_role(session, BAND_ADMIN_ROLE)?;

    let new_band = NewBand::try_from(form).map_err(|err| {
        log::error!("Failed to validate band form: {err}");
        err
    })?;

    let band = repo.create_band(&new_band).map_err(|err| {
        log::error!("Failed to create band: {err}");
        err
    })?;

    Ok(band)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::band::BandMember;
    use crate::domain::session::MUSICIAN_ROLE;
    use crate::domain::types::{BandId, BandName, Instrument, MemberName};
    use crate::repository::errors::FetchError;
    use crate::repository::mock::MockRepository;
    use crate::services::ServiceError;
    use crate::services::test_support::{day, session_with_roles};
    use crate::view::SortOrder;

    fn band(id: i32, name: &str, members: usize) -> Band {
        Band {
            id: BandId::new(id).unwrap(),
            name: BandName::new(name).unwrap(),
            genre: None,
            city: None,
            description: None,
            members: (0..members)
                .map(|n| BandMember {
                    name: MemberName::new(format!("m{n}")).unwrap(),
                    instrument: Instrument::new("guitar").unwrap(),
                })
                .collect(),
            rating: None,
            created_at: day(id as u32),
        }
    }

    #[test]
    fn anonymous_session_is_rejected() {
        let repo = MockRepository::new();

        let result = load_bands_page(
            &repo,
            &Session::new(),
            &ClientConfig::default(),
            ListQuery::default(),
        );

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn sorts_and_pages_fetched_bands() {
        let mut repo = MockRepository::new();
        repo.expect_list_bands().times(1).returning(|| {
            Ok(vec![
                band(1, "Abba", 4),
                band(2, "Cream", 3),
                band(3, "Blur", 4),
                band(4, "Doors", 4),
                band(5, "Eels", 1),
                band(6, "Free", 2),
            ])
        });
        let query = ListQuery {
            page: Some(2),
            per_page: Some(5),
            sort: Some(BandSortKey::MemberCount),
            order: Some(SortOrder::Desc),
        };

        let page = load_bands_page(
            &repo,
            &session_with_roles(&[MUSICIAN_ROLE]),
            &ClientConfig::default(),
            query,
        )
        .unwrap();

        assert_eq!(page.list.total_pages, 2);
        assert_eq!(page.list.total_items, 6);
        assert_eq!(page.list.page, 2);
        assert_eq!(page.list.sort, Some(BandSortKey::MemberCount));
        let names: Vec<_> = page.list.items.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Eels"]);
        assert_eq!(page.per_page_choices, vec![5, 10, 20, 50]);
    }

    #[test]
    fn fetch_failure_is_reported() {
        let mut repo = MockRepository::new();
        repo.expect_list_bands()
            .returning(|| Err(FetchError::Network("timeout".to_string())));

        let result = load_bands_page(
            &repo,
            &session_with_roles(&[MUSICIAN_ROLE]),
            &ClientConfig::default(),
            ListQuery::default(),
        );

        assert!(matches!(result, Err(ServiceError::Fetch(FetchError::Network(_)))));
    }

    #[test]
    fn invalid_form_never_reaches_repository() {
        let mut repo = MockRepository::new();
        repo.expect_create_band().never();
        let form = BandForm {
            name: "Solo".to_string(),
            genre: None,
            city: None,
            description: None,
            member_name: vec![],
            member_instrument: vec![],
        };

        let result = create_band(&repo, &session_with_roles(&[BAND_ADMIN_ROLE]), form);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn musicians_cannot_register_bands() {
        let mut repo = MockRepository::new();
        repo.expect_create_band().never();
        let form = BandForm {
            name: "Duo".to_string(),
            genre: None,
            city: None,
            description: None,
            member_name: vec!["Ann".to_string()],
            member_instrument: vec!["sax".to_string()],
        };

        let result = create_band(&repo, &session_with_roles(&[MUSICIAN_ROLE]), form);

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn valid_form_creates_band() {
        let mut repo = MockRepository::new();
        repo.expect_create_band()
            .withf(|new_band| new_band.members.len() == 2)
            .returning(|_| Ok(band(9, "Duo", 2)));
        let form = BandForm {
            name: "Duo".to_string(),
            genre: Some("jazz".to_string()),
            city: None,
            description: None,
            member_name: vec!["Ann".to_string(), "Bo".to_string()],
            member_instrument: vec!["sax".to_string(), "piano".to_string()],
        };

        let band = create_band(&repo, &session_with_roles(&[BAND_ADMIN_ROLE]), form).unwrap();

        assert_eq!(band.id.get(), 9);
    }
}

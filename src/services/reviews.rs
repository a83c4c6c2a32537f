use crate::domain::review::{NewReview, Review, ReviewSortKey};
use crate::domain::session::Session;
use crate::domain::types::BandId;
use crate::dto::list::{ListPageData, ListQuery};
use crate::forms::review::ReviewForm;
use crate::models::config::ClientConfig;
use crate::repository::{ReviewReader, ReviewWriter};
use crate::services::list::build_list_page;
use crate::services::{ServiceResult, require_user};

/// Loads the reviews left for a band.
pub fn load_reviews_page<R>(
    repo: &R,
    session: &Session,
    config: &ClientConfig,
    band_id: BandId,
    query: ListQuery<ReviewSortKey>,
) -> ServiceResult<ListPageData<Review, ReviewSortKey>>
where
    R: ReviewReader + ?Sized,
{
    require_user(session)?;

    let reviews = repo.list_reviews(band_id).map_err(|err| {
        log::error!("Failed to list reviews for band {band_id}: {err}");
        err
    })?;

    Ok(build_list_page(reviews, &query, config))
}

/// Validates and posts a review for a band.
pub fn post_review<R>(repo: &R, session: &Session, form: ReviewForm) -> ServiceResult<Review>
where
    R: ReviewWriter + ?Sized,
{
    require_user(session)?;

    let review = NewReview::try_from(form).map_err(|err| {
        log::error!("Failed to validate review form: {err}");
        err
    })?;

    let created = repo.create_review(&review).map_err(|err| {
        log::error!("Failed to post review: {err}");
        err
    })?;

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::MUSICIAN_ROLE;
    use crate::domain::types::{ReviewId, ReviewText, Score, Username};
    use crate::repository::mock::MockRepository;
    use crate::services::ServiceError;
    use crate::services::test_support::{day, session_with_roles};
    use crate::view::SortOrder;

    fn review(id: i32, score: u8) -> Review {
        Review {
            id: ReviewId::new(id).unwrap(),
            band_id: BandId::new(1).unwrap(),
            author_name: Username::new("fan").unwrap(),
            score: Score::new(score).unwrap(),
            text: ReviewText::new("Loud").unwrap(),
            created_at: day(id as u32),
        }
    }

    #[test]
    fn per_page_change_lands_on_first_page() {
        let mut repo = MockRepository::new();
        repo.expect_list_reviews()
            .returning(|_| Ok((1..=12).map(|id| review(id, 3)).collect()));
        let query = ListQuery {
            page: None,
            per_page: Some(5),
            sort: Some(ReviewSortKey::Score),
            order: Some(SortOrder::Asc),
        };

        let page = load_reviews_page(
            &repo,
            &session_with_roles(&[MUSICIAN_ROLE]),
            &ClientConfig::default(),
            BandId::new(1).unwrap(),
            query,
        )
        .unwrap();

        assert_eq!(page.list.page, 1);
        assert_eq!(page.list.total_pages, 3);
        // Equal scores keep their fetched order.
        let ids: Vec<_> = page.list.items.iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn anonymous_users_cannot_post() {
        let mut repo = MockRepository::new();
        repo.expect_create_review().never();
        let form = ReviewForm {
            band_id: 1,
            score: 5,
            text: "Great".to_string(),
        };

        let result = post_review(&repo, &Session::new(), form);

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }
}

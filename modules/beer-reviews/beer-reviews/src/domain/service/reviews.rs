use std::sync::Arc;

use beer_reviews_sdk::{JoinedReview, Pagination, ReviewListOrder};
use sea_orm::DatabaseConnection;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::pagination::to_row_numbers;
use crate::domain::repos::ReviewsRepository;

pub struct ReviewsService<R: ReviewsRepository> {
    repo: Arc<R>,
    db: DatabaseConnection,
}

impl<R: ReviewsRepository> Clone for ReviewsService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            db: self.db.clone(),
        }
    }
}

impl<R: ReviewsRepository> ReviewsService<R> {
    #[must_use]
    pub fn new(repo: Arc<R>, db: DatabaseConnection) -> Self {
        Self { repo, db }
    }

    #[instrument(skip(self, order), fields(skip = pagination.skip, size = pagination.size, sort = %order.direction))]
    pub async fn list_reviews(
        &self,
        pagination: Pagination,
        order: ReviewListOrder,
    ) -> Result<Vec<JoinedReview>, DomainError> {
        debug!("Listing reviews page");

        let range = to_row_numbers(&pagination);
        if range.is_empty() {
            debug!("Zero-size page requested, skipping query");
            return Ok(Vec::new());
        }

        let reviews = self.repo.list_page(&self.db, range, order).await?;

        debug!("Successfully listed {} reviews in page", reviews.len());
        Ok(reviews)
    }

    #[instrument(skip(self, order), fields(beer_id = %beer_id))]
    pub async fn list_reviews_by_beer(
        &self,
        beer_id: Uuid,
        order: ReviewListOrder,
    ) -> Result<Vec<JoinedReview>, DomainError> {
        let reviews = self.repo.list_by_beer(&self.db, beer_id, order).await?;
        debug!("Found {} reviews for beer", reviews.len());
        Ok(reviews)
    }

    #[instrument(skip(self, order), fields(brewery_id = %brewery_id))]
    pub async fn list_reviews_by_brewery(
        &self,
        brewery_id: Uuid,
        order: ReviewListOrder,
    ) -> Result<Vec<JoinedReview>, DomainError> {
        let reviews = self.repo.list_by_brewery(&self.db, brewery_id, order).await?;
        debug!("Found {} reviews for brewery", reviews.len());
        Ok(reviews)
    }

    #[instrument(skip(self), fields(style_id = %style_id))]
    pub async fn list_reviews_by_style(
        &self,
        style_id: Uuid,
    ) -> Result<Vec<JoinedReview>, DomainError> {
        let reviews = self.repo.list_by_style(&self.db, style_id).await?;
        debug!("Found {} reviews for style", reviews.len());
        Ok(reviews)
    }

    #[instrument(skip(self), fields(location_id = %location_id))]
    pub async fn list_reviews_by_location(
        &self,
        location_id: Uuid,
    ) -> Result<Vec<JoinedReview>, DomainError> {
        let reviews = self.repo.list_by_location(&self.db, location_id).await?;
        debug!("Found {} reviews at location", reviews.len());
        Ok(reviews)
    }

    #[instrument(skip(self))]
    pub async fn count_reviews(&self) -> Result<u64, DomainError> {
        self.repo.count(&self.db).await
    }
}

use async_trait::async_trait;
use beer_reviews_sdk::{JoinedReview, ReviewListOrder};
use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::pagination::RowNumberRange;

/// Read-side repository for joined reviews.
///
/// All listing methods return one [`JoinedReview`] per review id, already
/// flattened, and an empty vector when nothing matches.
#[async_trait]
pub trait ReviewsRepository: Send + Sync {
    /// Reviews whose row number (under `order`) falls inside `range`.
    async fn list_page<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        range: RowNumberRange,
        order: ReviewListOrder,
    ) -> Result<Vec<JoinedReview>, DomainError>;

    async fn list_by_beer<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        beer_id: Uuid,
        order: ReviewListOrder,
    ) -> Result<Vec<JoinedReview>, DomainError>;

    async fn list_by_brewery<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        brewery_id: Uuid,
        order: ReviewListOrder,
    ) -> Result<Vec<JoinedReview>, DomainError>;

    /// Ordered by beer name, then time ascending.
    async fn list_by_style<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        style_id: Uuid,
    ) -> Result<Vec<JoinedReview>, DomainError>;

    /// Ordered by beer name, then time ascending.
    async fn list_by_location<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        location_id: Uuid,
    ) -> Result<Vec<JoinedReview>, DomainError>;

    async fn count<C: ConnectionTrait + Send + Sync>(&self, conn: &C) -> Result<u64, DomainError>;
}

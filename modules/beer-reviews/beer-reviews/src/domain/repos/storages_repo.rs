use async_trait::async_trait;
use beer_reviews_sdk::JoinedStorage;
use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::pagination::RowNumberRange;

/// Read-side repository for joined cellar entries.
///
/// Paged listing is always numbered by `best_before DESC`; the per-entity
/// listings are ordered by beer name, then `best_before` ascending.
#[async_trait]
pub trait StoragesRepository: Send + Sync {
    async fn list_page<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        range: RowNumberRange,
    ) -> Result<Vec<JoinedStorage>, DomainError>;

    async fn list_by_beer<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        beer_id: Uuid,
    ) -> Result<Vec<JoinedStorage>, DomainError>;

    async fn list_by_brewery<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        brewery_id: Uuid,
    ) -> Result<Vec<JoinedStorage>, DomainError>;

    async fn list_by_style<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        style_id: Uuid,
    ) -> Result<Vec<JoinedStorage>, DomainError>;

    async fn count<C: ConnectionTrait + Send + Sync>(&self, conn: &C) -> Result<u64, DomainError>;
}

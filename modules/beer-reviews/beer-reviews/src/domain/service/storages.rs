use std::sync::Arc;

use beer_reviews_sdk::{JoinedStorage, Pagination};
use sea_orm::DatabaseConnection;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::pagination::to_row_numbers;
use crate::domain::repos::StoragesRepository;

pub struct StoragesService<R: StoragesRepository> {
    repo: Arc<R>,
    db: DatabaseConnection,
}

impl<R: StoragesRepository> Clone for StoragesService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            db: self.db.clone(),
        }
    }
}

impl<R: StoragesRepository> StoragesService<R> {
    #[must_use]
    pub fn new(repo: Arc<R>, db: DatabaseConnection) -> Self {
        Self { repo, db }
    }

    #[instrument(skip(self), fields(skip = pagination.skip, size = pagination.size))]
    pub async fn list_storages(
        &self,
        pagination: Pagination,
    ) -> Result<Vec<JoinedStorage>, DomainError> {
        debug!("Listing storage page");

        let range = to_row_numbers(&pagination);
        if range.is_empty() {
            return Ok(Vec::new());
        }

        let storages = self.repo.list_page(&self.db, range).await?;

        debug!("Successfully listed {} storage entries in page", storages.len());
        Ok(storages)
    }

    #[instrument(skip(self), fields(beer_id = %beer_id))]
    pub async fn list_storages_by_beer(
        &self,
        beer_id: Uuid,
    ) -> Result<Vec<JoinedStorage>, DomainError> {
        self.repo.list_by_beer(&self.db, beer_id).await
    }

    #[instrument(skip(self), fields(brewery_id = %brewery_id))]
    pub async fn list_storages_by_brewery(
        &self,
        brewery_id: Uuid,
    ) -> Result<Vec<JoinedStorage>, DomainError> {
        self.repo.list_by_brewery(&self.db, brewery_id).await
    }

    #[instrument(skip(self), fields(style_id = %style_id))]
    pub async fn list_storages_by_style(
        &self,
        style_id: Uuid,
    ) -> Result<Vec<JoinedStorage>, DomainError> {
        self.repo.list_by_style(&self.db, style_id).await
    }

    #[instrument(skip(self))]
    pub async fn count_storages(&self) -> Result<u64, DomainError> {
        self.repo.count(&self.db).await
    }
}

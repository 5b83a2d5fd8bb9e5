use std::sync::Arc;

use beer_reviews_sdk::{
    AnnualContainerStats, AnnualStats, GroupStats, GroupStatsOrder, OverallStats, Pagination,
    RatingStats, StatsFilterParams,
};
use sea_orm::DatabaseConnection;
use tracing::{debug, instrument};

use crate::domain::error::DomainError;
use crate::domain::filter::StatsFilter;
use crate::domain::pagination::to_row_numbers;
use crate::domain::repos::{StatsDimension, StatsRepository};

/// Statistics over reviews.
///
/// Every entry point resolves the raw filter first, so a filter naming more
/// than one identity dimension fails before any query runs.
pub struct StatsService<R: StatsRepository> {
    repo: Arc<R>,
    db: DatabaseConnection,
}

impl<R: StatsRepository> Clone for StatsService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            db: self.db.clone(),
        }
    }
}

impl<R: StatsRepository> StatsService<R> {
    #[must_use]
    pub fn new(repo: Arc<R>, db: DatabaseConnection) -> Self {
        Self { repo, db }
    }

    #[instrument(skip(self, params))]
    pub async fn overall(&self, params: &StatsFilterParams) -> Result<OverallStats, DomainError> {
        let filter = StatsFilter::from_params(params)?;
        debug!(scope = ?filter.scope, "Computing overall stats");
        self.repo.overall(&self.db, filter.scope).await
    }

    #[instrument(skip(self, params))]
    pub async fn annual(&self, params: &StatsFilterParams) -> Result<Vec<AnnualStats>, DomainError> {
        let filter = StatsFilter::from_params(params)?;
        let years = self.repo.annual(&self.db, filter.scope).await?;
        debug!("Computed stats for {} years", years.len());
        Ok(years)
    }

    #[instrument(skip(self, params), fields(skip = pagination.skip, size = pagination.size))]
    pub async fn annual_container(
        &self,
        params: &StatsFilterParams,
        pagination: Pagination,
    ) -> Result<Vec<AnnualContainerStats>, DomainError> {
        let filter = StatsFilter::from_params(params)?;
        let range = to_row_numbers(&pagination);
        if range.is_empty() {
            return Ok(Vec::new());
        }
        self.repo
            .annual_container(&self.db, filter.scope, range)
            .await
    }

    #[instrument(skip(self, params, order), fields(skip = pagination.skip, size = pagination.size))]
    pub async fn brewery(
        &self,
        params: &StatsFilterParams,
        pagination: Pagination,
        order: GroupStatsOrder,
    ) -> Result<Vec<GroupStats>, DomainError> {
        self.grouped(StatsDimension::Brewery, params, pagination, order)
            .await
    }

    #[instrument(skip(self, params, order), fields(skip = pagination.skip, size = pagination.size))]
    pub async fn style(
        &self,
        params: &StatsFilterParams,
        pagination: Pagination,
        order: GroupStatsOrder,
    ) -> Result<Vec<GroupStats>, DomainError> {
        self.grouped(StatsDimension::Style, params, pagination, order)
            .await
    }

    #[instrument(skip(self, params, order), fields(skip = pagination.skip, size = pagination.size))]
    pub async fn location(
        &self,
        params: &StatsFilterParams,
        pagination: Pagination,
        order: GroupStatsOrder,
    ) -> Result<Vec<GroupStats>, DomainError> {
        self.grouped(StatsDimension::Location, params, pagination, order)
            .await
    }

    #[instrument(skip(self, params))]
    pub async fn rating(&self, params: &StatsFilterParams) -> Result<Vec<RatingStats>, DomainError> {
        let filter = StatsFilter::from_params(params)?;
        self.repo.rating(&self.db, filter.scope).await
    }

    #[instrument(skip(self, params, order), fields(dimension = ?dimension, skip = pagination.skip, size = pagination.size))]
    async fn grouped(
        &self,
        dimension: StatsDimension,
        params: &StatsFilterParams,
        pagination: Pagination,
        order: GroupStatsOrder,
    ) -> Result<Vec<GroupStats>, DomainError> {
        let filter = StatsFilter::from_params(params)?;
        let range = to_row_numbers(&pagination);
        if range.is_empty() {
            return Ok(Vec::new());
        }

        let groups = self
            .repo
            .grouped(&self.db, dimension, &filter, range, order)
            .await?;

        debug!("Computed stats for {} groups", groups.len());
        Ok(groups)
    }
}

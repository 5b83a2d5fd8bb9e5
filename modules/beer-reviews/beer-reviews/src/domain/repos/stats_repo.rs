use async_trait::async_trait;
use beer_reviews_sdk::{
    AnnualContainerStats, AnnualStats, GroupStats, GroupStatsOrder, OverallStats, RatingStats,
};
use sea_orm::ConnectionTrait;

use crate::domain::error::DomainError;
use crate::domain::filter::{StatsFilter, StatsScope};
use crate::domain::pagination::RowNumberRange;

/// Grouping dimension of [`StatsRepository::grouped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsDimension {
    Brewery,
    Style,
    Location,
}

/// Aggregations over reviews.
///
/// Every method is scoped by a [`StatsScope`]; only grouped statistics also
/// apply the count and average bounds of the filter.
#[async_trait]
pub trait StatsRepository: Send + Sync {
    async fn overall<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        scope: StatsScope,
    ) -> Result<OverallStats, DomainError>;

    /// Per-year count and average, ascending by year.
    async fn annual<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        scope: StatsScope,
    ) -> Result<Vec<AnnualStats>, DomainError>;

    /// Per (year, container) count and average, windowed by `range`.
    async fn annual_container<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        scope: StatsScope,
        range: RowNumberRange,
    ) -> Result<Vec<AnnualContainerStats>, DomainError>;

    async fn grouped<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        dimension: StatsDimension,
        filter: &StatsFilter,
        range: RowNumberRange,
        order: GroupStatsOrder,
    ) -> Result<Vec<GroupStats>, DomainError>;

    /// Review count per rating value, ascending by rating.
    async fn rating<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        scope: StatsScope,
    ) -> Result<Vec<RatingStats>, DomainError>;
}

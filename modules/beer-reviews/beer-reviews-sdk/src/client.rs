//! `BeerReviewsClient` trait definition.
//!
//! This trait defines the public API for the `beer_reviews` module. It is
//! object-safe so that hosts can hand out `Arc<dyn BeerReviewsClient>`.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::BeerReviewsError;
use crate::models::{
    AnnualContainerStats, AnnualStats, BreweryStats, JoinedReview, JoinedStorage, LocationStats,
    OverallStats, RatingStats, StyleStats,
};
use crate::query::{
    BreweryStatsOrder, LocationStatsOrder, Pagination, ReviewListOrder, StatsFilterParams,
    StyleStatsOrder,
};

/// Public API trait for the `beer_reviews` module.
///
/// Listing methods return an empty vector when nothing matches. Statistics
/// methods take raw [`StatsFilterParams`] and reject a filter that names more
/// than one identity dimension with [`BeerReviewsError::Validation`].
#[async_trait]
pub trait BeerReviewsClient: Send + Sync {
    // ==================== Reviews ====================

    /// List one page of reviews in the requested order.
    async fn list_reviews(
        &self,
        pagination: Pagination,
        order: ReviewListOrder,
    ) -> Result<Vec<JoinedReview>, BeerReviewsError>;

    async fn list_reviews_by_beer(
        &self,
        beer_id: Uuid,
        order: ReviewListOrder,
    ) -> Result<Vec<JoinedReview>, BeerReviewsError>;

    async fn list_reviews_by_brewery(
        &self,
        brewery_id: Uuid,
        order: ReviewListOrder,
    ) -> Result<Vec<JoinedReview>, BeerReviewsError>;

    /// Reviews of beers with the given style, by beer name then time.
    async fn list_reviews_by_style(
        &self,
        style_id: Uuid,
    ) -> Result<Vec<JoinedReview>, BeerReviewsError>;

    /// Reviews at the given location, by beer name then time.
    async fn list_reviews_by_location(
        &self,
        location_id: Uuid,
    ) -> Result<Vec<JoinedReview>, BeerReviewsError>;

    async fn count_reviews(&self) -> Result<u64, BeerReviewsError>;

    // ==================== Storage ====================

    /// List one page of cellar entries, latest best-before first.
    async fn list_storages(
        &self,
        pagination: Pagination,
    ) -> Result<Vec<JoinedStorage>, BeerReviewsError>;

    async fn list_storages_by_beer(
        &self,
        beer_id: Uuid,
    ) -> Result<Vec<JoinedStorage>, BeerReviewsError>;

    async fn list_storages_by_brewery(
        &self,
        brewery_id: Uuid,
    ) -> Result<Vec<JoinedStorage>, BeerReviewsError>;

    async fn list_storages_by_style(
        &self,
        style_id: Uuid,
    ) -> Result<Vec<JoinedStorage>, BeerReviewsError>;

    async fn count_storages(&self) -> Result<u64, BeerReviewsError>;

    // ==================== Statistics ====================

    async fn overall_stats(
        &self,
        filter: &StatsFilterParams,
    ) -> Result<OverallStats, BeerReviewsError>;

    async fn annual_stats(
        &self,
        filter: &StatsFilterParams,
    ) -> Result<Vec<AnnualStats>, BeerReviewsError>;

    async fn annual_container_stats(
        &self,
        filter: &StatsFilterParams,
        pagination: Pagination,
    ) -> Result<Vec<AnnualContainerStats>, BeerReviewsError>;

    async fn brewery_stats(
        &self,
        filter: &StatsFilterParams,
        pagination: Pagination,
        order: BreweryStatsOrder,
    ) -> Result<Vec<BreweryStats>, BeerReviewsError>;

    async fn style_stats(
        &self,
        filter: &StatsFilterParams,
        pagination: Pagination,
        order: StyleStatsOrder,
    ) -> Result<Vec<StyleStats>, BeerReviewsError>;

    async fn location_stats(
        &self,
        filter: &StatsFilterParams,
        pagination: Pagination,
        order: LocationStatsOrder,
    ) -> Result<Vec<LocationStats>, BeerReviewsError>;

    async fn rating_stats(
        &self,
        filter: &StatsFilterParams,
    ) -> Result<Vec<RatingStats>, BeerReviewsError>;
}

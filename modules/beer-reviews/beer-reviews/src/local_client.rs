//! Local implementation of `BeerReviewsClient`.
//!
//! It delegates to the domain services and converts errors to SDK error types.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use beer_reviews_sdk::{
    AnnualContainerStats, AnnualStats, BeerReviewsClient, BeerReviewsError, BreweryStats,
    BreweryStatsOrder, JoinedReview, JoinedStorage, LocationStats, LocationStatsOrder,
    OverallStats, Pagination, RatingStats, ReviewListOrder, StatsFilterParams, StyleStats,
    StyleStatsOrder,
};

use crate::module::ConcreteAppServices;

/// Local implementation of the `BeerReviewsClient` trait that delegates to the domain services.
pub struct BeerReviewsLocalClient {
    services: Arc<ConcreteAppServices>,
}

impl BeerReviewsLocalClient {
    #[must_use]
    pub(crate) fn new(services: Arc<ConcreteAppServices>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl BeerReviewsClient for BeerReviewsLocalClient {
    // Review operations
    async fn list_reviews(
        &self,
        pagination: Pagination,
        order: ReviewListOrder,
    ) -> Result<Vec<JoinedReview>, BeerReviewsError> {
        self.services
            .reviews
            .list_reviews(pagination, order)
            .await
            .map_err(Into::into)
    }

    async fn list_reviews_by_beer(
        &self,
        beer_id: Uuid,
        order: ReviewListOrder,
    ) -> Result<Vec<JoinedReview>, BeerReviewsError> {
        self.services
            .reviews
            .list_reviews_by_beer(beer_id, order)
            .await
            .map_err(Into::into)
    }

    async fn list_reviews_by_brewery(
        &self,
        brewery_id: Uuid,
        order: ReviewListOrder,
    ) -> Result<Vec<JoinedReview>, BeerReviewsError> {
        self.services
            .reviews
            .list_reviews_by_brewery(brewery_id, order)
            .await
            .map_err(Into::into)
    }

    async fn list_reviews_by_style(
        &self,
        style_id: Uuid,
    ) -> Result<Vec<JoinedReview>, BeerReviewsError> {
        self.services
            .reviews
            .list_reviews_by_style(style_id)
            .await
            .map_err(Into::into)
    }

    async fn list_reviews_by_location(
        &self,
        location_id: Uuid,
    ) -> Result<Vec<JoinedReview>, BeerReviewsError> {
        self.services
            .reviews
            .list_reviews_by_location(location_id)
            .await
            .map_err(Into::into)
    }

    async fn count_reviews(&self) -> Result<u64, BeerReviewsError> {
        self.services
            .reviews
            .count_reviews()
            .await
            .map_err(Into::into)
    }

    // Storage operations
    async fn list_storages(
        &self,
        pagination: Pagination,
    ) -> Result<Vec<JoinedStorage>, BeerReviewsError> {
        self.services
            .storages
            .list_storages(pagination)
            .await
            .map_err(Into::into)
    }

    async fn list_storages_by_beer(
        &self,
        beer_id: Uuid,
    ) -> Result<Vec<JoinedStorage>, BeerReviewsError> {
        self.services
            .storages
            .list_storages_by_beer(beer_id)
            .await
            .map_err(Into::into)
    }

    async fn list_storages_by_brewery(
        &self,
        brewery_id: Uuid,
    ) -> Result<Vec<JoinedStorage>, BeerReviewsError> {
        self.services
            .storages
            .list_storages_by_brewery(brewery_id)
            .await
            .map_err(Into::into)
    }

    async fn list_storages_by_style(
        &self,
        style_id: Uuid,
    ) -> Result<Vec<JoinedStorage>, BeerReviewsError> {
        self.services
            .storages
            .list_storages_by_style(style_id)
            .await
            .map_err(Into::into)
    }

    async fn count_storages(&self) -> Result<u64, BeerReviewsError> {
        self.services
            .storages
            .count_storages()
            .await
            .map_err(Into::into)
    }

    // Statistics
    async fn overall_stats(
        &self,
        filter: &StatsFilterParams,
    ) -> Result<OverallStats, BeerReviewsError> {
        self.services.stats.overall(filter).await.map_err(Into::into)
    }

    async fn annual_stats(
        &self,
        filter: &StatsFilterParams,
    ) -> Result<Vec<AnnualStats>, BeerReviewsError> {
        self.services.stats.annual(filter).await.map_err(Into::into)
    }

    async fn annual_container_stats(
        &self,
        filter: &StatsFilterParams,
        pagination: Pagination,
    ) -> Result<Vec<AnnualContainerStats>, BeerReviewsError> {
        self.services
            .stats
            .annual_container(filter, pagination)
            .await
            .map_err(Into::into)
    }

    async fn brewery_stats(
        &self,
        filter: &StatsFilterParams,
        pagination: Pagination,
        order: BreweryStatsOrder,
    ) -> Result<Vec<BreweryStats>, BeerReviewsError> {
        self.services
            .stats
            .brewery(filter, pagination, order)
            .await
            .map_err(Into::into)
    }

    async fn style_stats(
        &self,
        filter: &StatsFilterParams,
        pagination: Pagination,
        order: StyleStatsOrder,
    ) -> Result<Vec<StyleStats>, BeerReviewsError> {
        self.services
            .stats
            .style(filter, pagination, order)
            .await
            .map_err(Into::into)
    }

    async fn location_stats(
        &self,
        filter: &StatsFilterParams,
        pagination: Pagination,
        order: LocationStatsOrder,
    ) -> Result<Vec<LocationStats>, BeerReviewsError> {
        self.services
            .stats
            .location(filter, pagination, order)
            .await
            .map_err(Into::into)
    }

    async fn rating_stats(
        &self,
        filter: &StatsFilterParams,
    ) -> Result<Vec<RatingStats>, BeerReviewsError> {
        self.services.stats.rating(filter).await.map_err(Into::into)
    }
}

//! Beer Reviews SDK
//!
//! This crate provides the public API for the `beer_reviews` module:
//! - `BeerReviewsClient` trait
//! - Model types for joined reviews, cellar entries and statistics
//! - Query value objects (`Pagination`, orderings, `StatsFilterParams`)
//! - Error type (`BeerReviewsError`)
//!
//! ## Usage
//!
//! ```ignore
//! use beer_reviews_sdk::{BeerReviewsClient, Pagination, ReviewListOrder};
//!
//! let reviews = client
//!     .list_reviews(Pagination::new(0, 20), ReviewListOrder::default())
//!     .await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod client;
pub mod errors;
pub mod models;
pub mod query;

pub use client::BeerReviewsClient;
pub use errors::BeerReviewsError;
pub use models::{
    AnnualContainerStats, AnnualStats, BreweryStats, ContainerRef, EntityRef, GroupStats,
    JoinedReview, JoinedStorage, LocationStats, OverallStats, RatingStats, StyleStats,
};
pub use query::{
    BreweryStatsOrder, GroupStatsOrder, GroupStatsProperty, LocationStatsOrder, Pagination,
    ParseOrderError, ReviewListOrder, ReviewSortProperty, SortDirection, StatsFilterParams,
    StyleStatsOrder,
};

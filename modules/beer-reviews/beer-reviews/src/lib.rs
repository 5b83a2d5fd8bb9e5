//! Beer Reviews Module
//!
//! Read-side query layer over a beer-review database: joined review and
//! cellar listings with fan-out-safe pagination, and review statistics.
//!
//! ## Public API
//!
//! The public API is defined in the `beer-reviews-sdk` crate and re-exported here:
//! - `BeerReviewsClient` - trait for consumers
//! - `JoinedReview`, `JoinedStorage`, `OverallStats`, ... - data models
//! - `BeerReviewsError` - error types
//!
//! Build the module with [`BeerReviews::connect`] and hand out
//! [`BeerReviews::client`].
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
// === PUBLIC API (from SDK) ===
pub use beer_reviews_sdk::{
    BeerReviewsClient, BeerReviewsError, JoinedReview, JoinedStorage, OverallStats, Pagination,
    ReviewListOrder, StatsFilterParams,
};

// === MODULE DEFINITION ===
pub mod module;
pub use module::BeerReviews;

// === LOCAL CLIENT ===
// Local client adapter that implements BeerReviewsClient
pub mod local_client;

// === CONFIGURATION ===
pub mod config;
pub use config::BeerReviewsConfig;

// === INTERNAL MODULES ===
// WARNING: These modules are internal implementation details!
// They are exposed only for comprehensive testing and should NOT be used by external consumers.
// Only use the SDK types for stable public APIs.
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;

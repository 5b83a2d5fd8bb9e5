//! Public models for the `beer_reviews` module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the `beer_reviews` module and its consumers. Averages are carried
//! as fixed-point strings with two decimals; an undefined average is `""`.

use time::{Date, OffsetDateTime};
use uuid::Uuid;

/// Reference to a named entity (beer, brewery, style or location).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityRef {
    pub id: Uuid,
    pub name: String,
}

impl EntityRef {
    #[must_use]
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Resolved serving container of a review or cellar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRef {
    pub id: Uuid,
    pub container_type: String,
    pub size: String,
}

/// A review joined with its beer, breweries, styles, container and location.
///
/// `breweries` and `styles` are deduplicated by id and sorted by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedReview {
    pub id: Uuid,
    pub beer: EntityRef,
    pub breweries: Vec<EntityRef>,
    pub styles: Vec<EntityRef>,
    pub container: ContainerRef,
    pub location: Option<EntityRef>,
    pub rating: i32,
    pub smell: Option<String>,
    pub taste: Option<String>,
    pub additional_info: Option<String>,
    pub time: OffsetDateTime,
    pub created_at: OffsetDateTime,
}

/// A cellar entry joined with its beer, breweries, styles and container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedStorage {
    pub id: Uuid,
    pub beer: EntityRef,
    pub breweries: Vec<EntityRef>,
    pub styles: Vec<EntityRef>,
    pub container: ContainerRef,
    pub best_before: Date,
    pub additional_info: Option<String>,
    pub created_at: OffsetDateTime,
}

/// Distinct counts reachable from the reviews matching a filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OverallStats {
    pub beer_count: u64,
    pub brewery_count: u64,
    pub container_count: u64,
    pub location_count: u64,
    pub style_count: u64,
    pub review_count: u64,
    pub review_average: String,
}

/// Review count and average for one calendar year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnualStats {
    pub year: i64,
    pub review_count: u64,
    pub review_average: String,
}

/// Review count and average for one (year, container) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnualContainerStats {
    pub year: i64,
    pub container: ContainerRef,
    pub review_count: u64,
    pub review_average: String,
}

/// Review count and average for one value of a grouping dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupStats {
    pub id: Uuid,
    pub name: String,
    pub review_count: u64,
    pub review_average: String,
}

pub type BreweryStats = GroupStats;
pub type StyleStats = GroupStats;
pub type LocationStats = GroupStats;

/// One bucket of the rating histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingStats {
    pub rating: i32,
    pub count: u64,
}

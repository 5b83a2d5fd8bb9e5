//! Query value objects: pagination, orderings and raw statistics filters.
//!
//! These types are assumed to be shape-checked by the caller. The module only
//! clamps the numeric bounds of [`StatsFilterParams`] and rejects conflicting
//! identity dimensions.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Offset pagination request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pagination {
    pub skip: u64,
    pub size: u64,
}

impl Pagination {
    #[must_use]
    pub fn new(skip: u64, size: u64) -> Self {
        Self { skip, size }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an ordering token is not recognized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} '{value}'")]
pub struct ParseOrderError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseOrderError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(ParseOrderError::new("sort direction", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewSortProperty {
    Rating,
    #[default]
    Time,
}

impl FromStr for ReviewSortProperty {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rating" => Ok(Self::Rating),
            "time" => Ok(Self::Time),
            other => Err(ParseOrderError::new("review sort property", other)),
        }
    }
}

/// Ordering of review listings.
///
/// Ordering by `rating` always breaks ties by `time DESC`, independently of
/// `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReviewListOrder {
    pub property: ReviewSortProperty,
    pub direction: SortDirection,
}

impl ReviewListOrder {
    #[must_use]
    pub fn new(property: ReviewSortProperty, direction: SortDirection) -> Self {
        Self {
            property,
            direction,
        }
    }
}

/// Sort property of grouped statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupStatsProperty {
    #[default]
    Average,
    Count,
    /// The dimension's display name (`brewery_name`, `style_name`, ...).
    Name,
}

impl FromStr for GroupStatsProperty {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "average" => Ok(Self::Average),
            "count" => Ok(Self::Count),
            "brewery_name" | "style_name" | "location_name" | "name" => Ok(Self::Name),
            other => Err(ParseOrderError::new("stats sort property", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroupStatsOrder {
    pub property: GroupStatsProperty,
    pub direction: SortDirection,
}

impl GroupStatsOrder {
    #[must_use]
    pub fn new(property: GroupStatsProperty, direction: SortDirection) -> Self {
        Self {
            property,
            direction,
        }
    }
}

pub type BreweryStatsOrder = GroupStatsOrder;
pub type StyleStatsOrder = GroupStatsOrder;
pub type LocationStatsOrder = GroupStatsOrder;

/// Raw statistics filter as received from the caller.
///
/// At most one of `brewery`, `location` and `style` may be set. The numeric
/// bounds are parsed leniently: anything absent, unparseable or outside the
/// hard bound falls back to the default.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatsFilterParams {
    pub brewery: Option<String>,
    pub location: Option<String>,
    pub style: Option<String>,
    pub min_review_count: Option<String>,
    pub max_review_count: Option<String>,
    pub min_review_average: Option<String>,
    pub max_review_average: Option<String>,
}

impl StatsFilterParams {
    #[must_use]
    pub fn brewery(id: impl Into<String>) -> Self {
        Self {
            brewery: Some(id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn location(id: impl Into<String>) -> Self {
        Self {
            location: Some(id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn style(id: impl Into<String>) -> Self {
        Self {
            style: Some(id.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_sort_tokens() {
        assert_eq!("asc".parse::<SortDirection>(), Ok(SortDirection::Asc));
        assert_eq!("desc".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert!("ASC".parse::<SortDirection>().is_err());

        assert_eq!(
            "rating".parse::<ReviewSortProperty>(),
            Ok(ReviewSortProperty::Rating)
        );
        assert_eq!(
            "style_name".parse::<GroupStatsProperty>(),
            Ok(GroupStatsProperty::Name)
        );
    }

    #[test]
    fn parse_error_names_the_token() {
        let err = "best".parse::<GroupStatsProperty>().unwrap_err();
        assert_eq!(err.to_string(), "unknown stats sort property 'best'");
    }
}

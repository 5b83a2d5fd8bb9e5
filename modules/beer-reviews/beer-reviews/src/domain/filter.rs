//! Statistics filter acceptance.
//!
//! Raw [`StatsFilterParams`] are resolved once into a [`StatsFilter`]: the
//! identity dimension becomes a [`StatsScope`] variant, and each numeric bound
//! is clamped to its hard default independently.

use beer_reviews_sdk::StatsFilterParams;
use thiserror::Error;
use uuid::Uuid;

pub const MIN_REVIEW_COUNT: u64 = 1;
pub const MIN_REVIEW_AVERAGE: f64 = 4.0;
pub const MAX_REVIEW_AVERAGE: f64 = 10.0;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("at most one of brewery, location and style may be given, got: {}", .given.join(", "))]
    ConflictingDimensions { given: Vec<&'static str> },

    #[error("invalid {dimension} id '{value}'")]
    InvalidId {
        dimension: &'static str,
        value: String,
    },
}

/// Which reviews a statistics query looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsScope {
    #[default]
    Unfiltered,
    Brewery(Uuid),
    Location(Uuid),
    Style(Uuid),
}

/// Inclusive review-count bound; `max == None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountRange {
    pub min: u64,
    pub max: Option<u64>,
}

impl Default for CountRange {
    fn default() -> Self {
        Self {
            min: MIN_REVIEW_COUNT,
            max: None,
        }
    }
}

/// Inclusive review-average bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AverageRange {
    pub min: f64,
    pub max: f64,
}

impl Default for AverageRange {
    fn default() -> Self {
        Self {
            min: MIN_REVIEW_AVERAGE,
            max: MAX_REVIEW_AVERAGE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StatsFilter {
    pub scope: StatsScope,
    pub review_count: CountRange,
    pub review_average: AverageRange,
}

impl StatsFilter {
    /// Resolves raw parameters.
    ///
    /// # Errors
    /// Returns [`FilterError::ConflictingDimensions`] when more than one of
    /// brewery, location and style is set, and [`FilterError::InvalidId`] when
    /// the chosen id is not a UUID. Numeric bounds never fail.
    pub fn from_params(params: &StatsFilterParams) -> Result<Self, FilterError> {
        Ok(Self {
            scope: resolve_scope(params)?,
            review_count: CountRange {
                min: parse_count(params.min_review_count.as_deref()).unwrap_or(MIN_REVIEW_COUNT),
                max: parse_count(params.max_review_count.as_deref()),
            },
            review_average: AverageRange {
                min: parse_average(params.min_review_average.as_deref())
                    .unwrap_or(MIN_REVIEW_AVERAGE),
                max: parse_average(params.max_review_average.as_deref())
                    .unwrap_or(MAX_REVIEW_AVERAGE),
            },
        })
    }
}

fn resolve_scope(params: &StatsFilterParams) -> Result<StatsScope, FilterError> {
    let given: Vec<(&'static str, &str)> = [
        ("brewery", params.brewery.as_deref()),
        ("location", params.location.as_deref()),
        ("style", params.style.as_deref()),
    ]
    .into_iter()
    .filter_map(|(dimension, value)| value.map(|v| (dimension, v)))
    .filter(|(_, value)| !value.trim().is_empty())
    .collect();

    match given.as_slice() {
        [] => Ok(StatsScope::Unfiltered),
        [(dimension, value)] => {
            let id = Uuid::parse_str(value.trim()).map_err(|_| FilterError::InvalidId {
                dimension: *dimension,
                value: (*value).to_owned(),
            })?;
            Ok(match *dimension {
                "brewery" => StatsScope::Brewery(id),
                "location" => StatsScope::Location(id),
                _ => StatsScope::Style(id),
            })
        }
        many => Err(FilterError::ConflictingDimensions {
            given: many.iter().map(|(dimension, _)| *dimension).collect(),
        }),
    }
}

fn parse_count(raw: Option<&str>) -> Option<u64> {
    raw?.trim()
        .parse::<u64>()
        .ok()
        .filter(|count| *count >= MIN_REVIEW_COUNT)
}

fn parse_average(raw: Option<&str>) -> Option<f64> {
    raw?.trim()
        .parse::<f64>()
        .ok()
        .filter(|avg| (MIN_REVIEW_AVERAGE..=MAX_REVIEW_AVERAGE).contains(avg))
}

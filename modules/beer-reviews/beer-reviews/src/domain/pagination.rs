use beer_reviews_sdk::Pagination;

/// Inclusive, 1-based row-number window over a numbered relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowNumberRange {
    pub start: u64,
    pub end: u64,
}

impl RowNumberRange {
    /// `true` for a zero-size page (`start > end`), which selects no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Bounds as signed values for binding; saturates instead of wrapping.
    #[must_use]
    pub fn as_i64_bounds(&self) -> (i64, i64) {
        (
            i64::try_from(self.start).unwrap_or(i64::MAX),
            i64::try_from(self.end).unwrap_or(i64::MAX),
        )
    }
}

/// Converts `{skip, size}` into `[skip + 1, skip + size]`.
///
/// `size` is not capped here.
#[must_use]
pub fn to_row_numbers(pagination: &Pagination) -> RowNumberRange {
    RowNumberRange {
        start: pagination.skip.saturating_add(1),
        end: pagination.skip.saturating_add(pagination.size),
    }
}

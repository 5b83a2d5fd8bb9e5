//! Shared `sea_query` building blocks for the read repositories.
//!
//! Paged listings number the *base* relation (reviews, cellar entries or
//! aggregated groups) with `ROW_NUMBER()` before any one-to-many join, keep
//! rows whose number falls in the requested window and order the outer query
//! by that number. A page therefore holds exactly `size` base records no matter
//! how many brewery or style rows each one fans out into.

use beer_reviews_sdk::{ReviewListOrder, ReviewSortProperty, SortDirection};
use sea_orm::sea_query::{
    Alias, ConditionalStatement, Expr, IntoColumnRef, IntoIden, JoinType, Order, OrderedStatement,
    Query, SelectStatement, SimpleExpr, WindowStatement,
};
use sea_orm::{DbBackend, DeriveIden};

use crate::domain::filter::StatsScope;
use crate::domain::pagination::RowNumberRange;
use crate::infra::storage::dialect::instant_of;
use crate::infra::storage::entity::{
    beer, beer_brewery, beer_style, brewery, container, review, style,
};

/// Table and subquery aliases.
///
/// `Rec` is the base record (review or cellar entry, possibly numbered),
/// `G` an aggregated group and `W` its numbered wrapper.
#[derive(Clone, Copy, DeriveIden)]
pub(crate) enum Q {
    Rec,
    B,
    Bb,
    Br,
    Bs,
    S,
    C,
    L,
    D,
    G,
    W,
    Y,
    Rn,
}

/// One `ORDER BY` term.
pub(crate) struct SortKey {
    pub(crate) expr: SimpleExpr,
    pub(crate) order: Order,
}

impl SortKey {
    pub(crate) fn asc(expr: impl Into<SimpleExpr>) -> Self {
        Self {
            expr: expr.into(),
            order: Order::Asc,
        }
    }

    pub(crate) fn desc(expr: impl Into<SimpleExpr>) -> Self {
        Self {
            expr: expr.into(),
            order: Order::Desc,
        }
    }

    pub(crate) fn directed(expr: impl Into<SimpleExpr>, direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Self::asc(expr),
            SortDirection::Desc => Self::desc(expr),
        }
    }
}

/// Adds `ROW_NUMBER() OVER (ORDER BY keys) AS rn` to `select`.
pub(crate) fn with_row_number(select: &mut SelectStatement, keys: Vec<SortKey>) {
    let mut window = WindowStatement::new();
    for key in keys {
        window.order_by_expr(key.expr, key.order);
    }
    select.expr_window_as(Expr::cust("ROW_NUMBER()"), window, Q::Rn);
}

/// `<alias>.rn BETWEEN start AND end`.
pub(crate) fn rn_within(alias: Q, range: RowNumberRange) -> SimpleExpr {
    let (start, end) = range.as_i64_bounds();
    Expr::col((alias, Q::Rn)).between(start, end)
}

/// Applies `keys` to the final ordering of `select`.
pub(crate) fn order_by_keys(select: &mut SelectStatement, keys: Vec<SortKey>) {
    for key in keys {
        select.order_by_expr(key.expr, key.order);
    }
}

/// Review ordering.
///
/// By rating: unrated reviews last, then rating in the requested direction,
/// then newest first. By time: time in the requested direction.
pub(crate) fn review_sort_keys<T>(
    backend: DbBackend,
    table: T,
    order: ReviewListOrder,
) -> Vec<SortKey>
where
    T: IntoIden + Copy + 'static,
{
    let time = || instant_of(backend, Expr::col((table, review::Column::Time)).into());
    match order.property {
        ReviewSortProperty::Rating => vec![
            SortKey::asc(Expr::col((table, review::Column::Rating)).is_null()),
            SortKey::directed(Expr::col((table, review::Column::Rating)), order.direction),
            SortKey::desc(time()),
        ],
        ReviewSortProperty::Time => vec![SortKey::directed(time(), order.direction)],
    }
}

/// Joins the beer, its breweries and styles, and the container onto the
/// record aliased [`Q::Rec`] and selects them under the column names the
/// fan-out row types expect.
pub(crate) fn join_beer_fan_out<B, C>(select: &mut SelectStatement, beer_col: B, container_col: C)
where
    B: IntoIden + 'static,
    C: IntoIden + 'static,
{
    select
        .expr_as(Expr::col((Q::B, beer::Column::Id)), Alias::new("beer_id"))
        .expr_as(Expr::col((Q::B, beer::Column::Name)), Alias::new("beer_name"))
        .expr_as(Expr::col((Q::Br, brewery::Column::Id)), Alias::new("brewery_id"))
        .expr_as(Expr::col((Q::Br, brewery::Column::Name)), Alias::new("brewery_name"))
        .expr_as(Expr::col((Q::S, style::Column::Id)), Alias::new("style_id"))
        .expr_as(Expr::col((Q::S, style::Column::Name)), Alias::new("style_name"))
        .expr_as(Expr::col((Q::C, container::Column::Id)), Alias::new("container_id"))
        .expr_as(
            Expr::col((Q::C, container::Column::ContainerType)),
            Alias::new("container_type"),
        )
        .expr_as(Expr::col((Q::C, container::Column::Size)), Alias::new("container_size"))
        .join_as(
            JoinType::InnerJoin,
            beer::Entity,
            Q::B,
            Expr::col((Q::B, beer::Column::Id)).equals((Q::Rec, beer_col)),
        )
        .join_as(
            JoinType::InnerJoin,
            beer_brewery::Entity,
            Q::Bb,
            Expr::col((Q::Bb, beer_brewery::Column::Beer)).equals((Q::B, beer::Column::Id)),
        )
        .join_as(
            JoinType::InnerJoin,
            brewery::Entity,
            Q::Br,
            Expr::col((Q::Br, brewery::Column::Id)).equals((Q::Bb, beer_brewery::Column::Brewery)),
        )
        .join_as(
            JoinType::InnerJoin,
            beer_style::Entity,
            Q::Bs,
            Expr::col((Q::Bs, beer_style::Column::Beer)).equals((Q::B, beer::Column::Id)),
        )
        .join_as(
            JoinType::InnerJoin,
            style::Entity,
            Q::S,
            Expr::col((Q::S, style::Column::Id)).equals((Q::Bs, beer_style::Column::Style)),
        )
        .join_as(
            JoinType::InnerJoin,
            container::Entity,
            Q::C,
            Expr::col((Q::C, container::Column::Id)).equals((Q::Rec, container_col)),
        );
}

/// `<beer_col> IN (SELECT beer FROM beer_brewery WHERE brewery = id)`.
pub(crate) fn beer_of_brewery<T>(beer_col: T, brewery_id: uuid::Uuid) -> SimpleExpr
where
    T: IntoColumnRef,
{
    Expr::col(beer_col).in_subquery(
        Query::select()
            .column(beer_brewery::Column::Beer)
            .from(beer_brewery::Entity)
            .and_where(Expr::col(beer_brewery::Column::Brewery).eq(brewery_id))
            .to_owned(),
    )
}

/// `<beer_col> IN (SELECT beer FROM beer_style WHERE style = id)`.
pub(crate) fn beer_of_style<T>(beer_col: T, style_id: uuid::Uuid) -> SimpleExpr
where
    T: IntoColumnRef,
{
    Expr::col(beer_col).in_subquery(
        Query::select()
            .column(beer_style::Column::Beer)
            .from(beer_style::Entity)
            .and_where(Expr::col(beer_style::Column::Style).eq(style_id))
            .to_owned(),
    )
}

/// Restriction of the reviews aliased `table` to a statistics scope.
///
/// Brewery and style scopes filter through the association tables so the
/// filtering join never narrows the rows the caller later fans out over.
pub(crate) fn scope_condition<T>(table: T, scope: StatsScope) -> Option<SimpleExpr>
where
    T: IntoIden + Copy + 'static,
{
    match scope {
        StatsScope::Unfiltered => None,
        StatsScope::Brewery(id) => Some(beer_of_brewery((table, review::Column::Beer), id)),
        StatsScope::Style(id) => Some(beer_of_style((table, review::Column::Beer), id)),
        StatsScope::Location(id) => Some(Expr::col((table, review::Column::Location)).eq(id)),
    }
}

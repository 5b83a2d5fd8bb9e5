use async_trait::async_trait;
use beer_reviews_sdk::{
    AnnualContainerStats, AnnualStats, ContainerRef, GroupStats, GroupStatsOrder,
    GroupStatsProperty, OverallStats, RatingStats,
};
use sea_orm::sea_query::{
    Alias, ConditionalStatement, Expr, Func, JoinType, Order, OrderedStatement, Query,
    SelectStatement, SimpleExpr, SubQueryStatement,
};
use sea_orm::{ConnectionTrait, DbBackend, FromQueryResult};
use tracing::debug;
use uuid::Uuid;

use crate::domain::average::render_average;
use crate::domain::error::DomainError;
use crate::domain::filter::{StatsFilter, StatsScope};
use crate::domain::pagination::RowNumberRange;
use crate::domain::repos::{StatsDimension, StatsRepository};
use crate::infra::storage::db::db_err;
use crate::infra::storage::dialect::{avg_of, count_distinct, year_of};
use crate::infra::storage::entity::{
    beer_brewery, beer_style, brewery, container, location, review, style,
};
use crate::infra::storage::query::{rn_within, scope_condition, with_row_number, SortKey, Q};

#[derive(Debug, FromQueryResult)]
struct OverallRow {
    beer_count: i64,
    brewery_count: i64,
    container_count: i64,
    location_count: i64,
    style_count: i64,
    review_count: i64,
    review_average: Option<f64>,
}

#[derive(Debug, FromQueryResult)]
struct FanOutCountsRow {
    brewery_count: i64,
    style_count: i64,
}

#[derive(Debug, FromQueryResult)]
struct ReviewAggregateRow {
    beer_count: i64,
    container_count: i64,
    location_count: i64,
    review_count: i64,
    review_average: Option<f64>,
}

#[derive(Debug, FromQueryResult)]
struct AnnualRow {
    year: i64,
    review_count: i64,
    review_average: Option<f64>,
}

#[derive(Debug, FromQueryResult)]
struct AnnualContainerRow {
    year: i64,
    container_id: Uuid,
    container_type: String,
    container_size: String,
    review_count: i64,
    review_average: Option<f64>,
}

#[derive(Debug, FromQueryResult)]
struct GroupRow {
    id: Uuid,
    name: String,
    review_count: i64,
    review_average: Option<f64>,
}

#[derive(Debug, FromQueryResult)]
struct RatingRow {
    rating: i32,
    count: i64,
}

/// Aggregates are never negative; a driver handing one back is clamped to zero.
fn to_count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or_default()
}

fn scalar(select: SelectStatement) -> SimpleExpr {
    SimpleExpr::SubQuery(None, Box::new(SubQueryStatement::SelectStatement(select)))
}

fn col(table: Q, name: &'static str) -> Expr {
    Expr::col((table, Alias::new(name)))
}

/// `FROM review AS rec` restricted to `scope`.
fn reviews_in(scope: StatsScope) -> SelectStatement {
    let mut select = Query::select();
    select.from_as(review::Entity, Q::Rec);
    if let Some(condition) = scope_condition(Q::Rec, scope) {
        select.and_where(condition);
    }
    select
}

fn join_breweries(select: &mut SelectStatement) {
    select.join_as(
        JoinType::InnerJoin,
        beer_brewery::Entity,
        Q::Bb,
        Expr::col((Q::Bb, beer_brewery::Column::Beer)).equals((Q::Rec, review::Column::Beer)),
    );
}

fn join_styles(select: &mut SelectStatement) {
    select.join_as(
        JoinType::InnerJoin,
        beer_style::Entity,
        Q::Bs,
        Expr::col((Q::Bs, beer_style::Column::Beer)).equals((Q::Rec, review::Column::Beer)),
    );
}

/// Numbers an aggregated relation by `keys` and keeps the rows of `range`.
///
/// `columns` names the output columns of `grouped`; they are carried through
/// unchanged.
fn window_groups(
    grouped: SelectStatement,
    columns: &[&'static str],
    keys: Vec<SortKey>,
    range: RowNumberRange,
) -> SelectStatement {
    let mut numbered = Query::select();
    numbered.from_subquery(grouped, Q::G);
    for name in columns {
        numbered.column((Q::G, Alias::new(*name)));
    }
    with_row_number(&mut numbered, keys);

    let mut select = Query::select();
    select.from_subquery(numbered, Q::W);
    for name in columns {
        select.column((Q::W, Alias::new(*name)));
    }
    select
        .and_where(rn_within(Q::W, range))
        .order_by((Q::W, Q::Rn), Order::Asc);
    select
}

fn group_sort_keys(order: GroupStatsOrder) -> Vec<SortKey> {
    let average = || col(Q::G, "review_average");
    let count = || col(Q::G, "review_count");
    let name = || col(Q::G, "name");
    match order.property {
        GroupStatsProperty::Average => vec![
            SortKey::directed(average(), order.direction),
            SortKey::desc(count()),
            SortKey::asc(name()),
        ],
        GroupStatsProperty::Count => vec![
            SortKey::directed(count(), order.direction),
            SortKey::desc(average()),
            SortKey::asc(name()),
        ],
        GroupStatsProperty::Name => vec![SortKey::directed(name(), order.direction)],
    }
}

/// ORM-based implementation of the `StatsRepository` trait.
#[derive(Clone, Default)]
pub struct OrmStatsRepository;

impl OrmStatsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// One statement of scalar subqueries over the whole review table.
    async fn overall_unfiltered<C: ConnectionTrait + Send + Sync>(
        conn: &C,
    ) -> Result<OverallStats, DomainError> {
        let backend = conn.get_database_backend();
        let over_reviews = |expr: SimpleExpr| {
            let mut select = Query::select();
            select.expr(expr).from_as(review::Entity, Q::Rec);
            select
        };
        let rec = |column: review::Column| -> SimpleExpr { Expr::col((Q::Rec, column)).into() };

        let mut breweries = over_reviews(count_distinct(
            Expr::col((Q::Bb, beer_brewery::Column::Brewery)).into(),
        ));
        join_breweries(&mut breweries);
        let mut styles =
            over_reviews(count_distinct(Expr::col((Q::Bs, beer_style::Column::Style)).into()));
        join_styles(&mut styles);

        let mut select = Query::select();
        select
            .expr_as(
                scalar(over_reviews(count_distinct(rec(review::Column::Beer)))),
                Alias::new("beer_count"),
            )
            .expr_as(scalar(breweries), Alias::new("brewery_count"))
            .expr_as(
                scalar(over_reviews(count_distinct(rec(review::Column::Container)))),
                Alias::new("container_count"),
            )
            .expr_as(
                scalar(over_reviews(count_distinct(rec(review::Column::Location)))),
                Alias::new("location_count"),
            )
            .expr_as(scalar(styles), Alias::new("style_count"))
            .expr_as(
                scalar(over_reviews(Func::count(rec(review::Column::Id)).into())),
                Alias::new("review_count"),
            )
            .expr_as(
                scalar(over_reviews(avg_of(backend, rec(review::Column::Rating)))),
                Alias::new("review_average"),
            );

        let row = OverallRow::find_by_statement(backend.build(&select))
            .one(conn)
            .await
            .map_err(db_err)?;

        Ok(row.map_or_else(OverallStats::default, |row| OverallStats {
            beer_count: to_count(row.beer_count),
            brewery_count: to_count(row.brewery_count),
            container_count: to_count(row.container_count),
            location_count: to_count(row.location_count),
            style_count: to_count(row.style_count),
            review_count: to_count(row.review_count),
            review_average: render_average(row.review_average),
        }))
    }

    /// Brewery and style counts, and the review aggregate, run concurrently.
    ///
    /// Each association is joined in its own subquery, so a beer without a
    /// style still counts towards breweries and vice versa. Everything else
    /// comes from the unjoined reviews.
    async fn overall_scoped<C: ConnectionTrait + Send + Sync>(
        conn: &C,
        scope: StatsScope,
    ) -> Result<OverallStats, DomainError> {
        let backend = conn.get_database_backend();

        let mut breweries = reviews_in(scope);
        join_breweries(&mut breweries);
        breweries.expr(count_distinct(
            Expr::col((Q::Bb, beer_brewery::Column::Brewery)).into(),
        ));
        let mut styles = reviews_in(scope);
        join_styles(&mut styles);
        styles.expr(count_distinct(Expr::col((Q::Bs, beer_style::Column::Style)).into()));

        let mut counts = Query::select();
        counts
            .expr_as(scalar(breweries), Alias::new("brewery_count"))
            .expr_as(scalar(styles), Alias::new("style_count"));

        let rec = |column: review::Column| -> SimpleExpr { Expr::col((Q::Rec, column)).into() };
        let mut aggregate = reviews_in(scope);
        aggregate
            .expr_as(count_distinct(rec(review::Column::Beer)), Alias::new("beer_count"))
            .expr_as(
                count_distinct(rec(review::Column::Container)),
                Alias::new("container_count"),
            )
            .expr_as(
                count_distinct(rec(review::Column::Location)),
                Alias::new("location_count"),
            )
            .expr_as(Func::count(rec(review::Column::Id)), Alias::new("review_count"))
            .expr_as(
                avg_of(backend, rec(review::Column::Rating)),
                Alias::new("review_average"),
            );

        let (counts, aggregate) = tokio::try_join!(
            FanOutCountsRow::find_by_statement(backend.build(&counts)).one(conn),
            ReviewAggregateRow::find_by_statement(backend.build(&aggregate)).one(conn),
        )
        .map_err(db_err)?;

        let mut stats = OverallStats::default();
        if let Some(counts) = counts {
            stats.brewery_count = to_count(counts.brewery_count);
            stats.style_count = to_count(counts.style_count);
        }
        if let Some(aggregate) = aggregate {
            stats.beer_count = to_count(aggregate.beer_count);
            stats.container_count = to_count(aggregate.container_count);
            stats.location_count = to_count(aggregate.location_count);
            stats.review_count = to_count(aggregate.review_count);
            stats.review_average = render_average(aggregate.review_average);
        }
        Ok(stats)
    }

    /// `SELECT <year> AS year, rec.container, rec.rating FROM review AS rec`
    /// restricted to `scope`.
    fn years(backend: DbBackend, scope: StatsScope) -> SelectStatement {
        let mut select = reviews_in(scope);
        select
            .expr_as(
                year_of(backend, Expr::col((Q::Rec, review::Column::Time)).into()),
                Alias::new("year"),
            )
            .expr_as(
                Expr::col((Q::Rec, review::Column::Container)),
                Alias::new("container"),
            )
            .expr_as(Expr::col((Q::Rec, review::Column::Rating)), Alias::new("rating"));
        select
    }
}

#[async_trait]
impl StatsRepository for OrmStatsRepository {
    async fn overall<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        scope: StatsScope,
    ) -> Result<OverallStats, DomainError> {
        match scope {
            StatsScope::Unfiltered => Self::overall_unfiltered(conn).await,
            scoped => Self::overall_scoped(conn, scoped).await,
        }
    }

    async fn annual<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        scope: StatsScope,
    ) -> Result<Vec<AnnualStats>, DomainError> {
        let backend = conn.get_database_backend();

        let mut select = Query::select();
        select
            .from_subquery(Self::years(backend, scope), Q::Y)
            .expr_as(col(Q::Y, "year"), Alias::new("year"))
            .expr_as(Func::count(col(Q::Y, "rating")), Alias::new("review_count"))
            .expr_as(
                avg_of(backend, col(Q::Y, "rating").into()),
                Alias::new("review_average"),
            )
            .group_by_col((Q::Y, Alias::new("year")))
            .order_by((Q::Y, Alias::new("year")), Order::Asc);

        let rows = AnnualRow::find_by_statement(backend.build(&select))
            .all(conn)
            .await
            .map_err(db_err)?;

        Ok(rows
            .into_iter()
            .map(|row| AnnualStats {
                year: row.year,
                review_count: to_count(row.review_count),
                review_average: render_average(row.review_average),
            })
            .collect())
    }

    async fn annual_container<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        scope: StatsScope,
        range: RowNumberRange,
    ) -> Result<Vec<AnnualContainerStats>, DomainError> {
        let backend = conn.get_database_backend();

        let mut grouped = Query::select();
        grouped
            .from_subquery(Self::years(backend, scope), Q::Y)
            .join_as(
                JoinType::InnerJoin,
                container::Entity,
                Q::C,
                Expr::col((Q::C, container::Column::Id)).equals((Q::Y, Alias::new("container"))),
            )
            .expr_as(col(Q::Y, "year"), Alias::new("year"))
            .expr_as(Expr::col((Q::C, container::Column::Id)), Alias::new("container_id"))
            .expr_as(
                Expr::col((Q::C, container::Column::ContainerType)),
                Alias::new("container_type"),
            )
            .expr_as(Expr::col((Q::C, container::Column::Size)), Alias::new("container_size"))
            .expr_as(Func::count(col(Q::Y, "rating")), Alias::new("review_count"))
            .expr_as(
                avg_of(backend, col(Q::Y, "rating").into()),
                Alias::new("review_average"),
            )
            .group_by_col((Q::Y, Alias::new("year")))
            .group_by_col((Q::C, container::Column::Id))
            .group_by_col((Q::C, container::Column::ContainerType))
            .group_by_col((Q::C, container::Column::Size));

        let select = window_groups(
            grouped,
            &[
                "year",
                "container_id",
                "container_type",
                "container_size",
                "review_count",
                "review_average",
            ],
            vec![
                SortKey::asc(col(Q::G, "year")),
                SortKey::asc(col(Q::G, "container_type")),
                SortKey::asc(col(Q::G, "container_size")),
            ],
            range,
        );

        let rows = AnnualContainerRow::find_by_statement(backend.build(&select))
            .all(conn)
            .await
            .map_err(db_err)?;

        Ok(rows
            .into_iter()
            .map(|row| AnnualContainerStats {
                year: row.year,
                container: ContainerRef {
                    id: row.container_id,
                    container_type: row.container_type,
                    size: row.container_size,
                },
                review_count: to_count(row.review_count),
                review_average: render_average(row.review_average),
            })
            .collect())
    }

    async fn grouped<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        dimension: StatsDimension,
        filter: &StatsFilter,
        range: RowNumberRange,
        order: GroupStatsOrder,
    ) -> Result<Vec<GroupStats>, DomainError> {
        let backend = conn.get_database_backend();
        let count: SimpleExpr = Func::count(Expr::col((Q::Rec, review::Column::Id))).into();
        let average = avg_of(backend, Expr::col((Q::Rec, review::Column::Rating)).into());

        let mut grouped = reviews_in(filter.scope);
        match dimension {
            StatsDimension::Brewery => {
                join_breweries(&mut grouped);
                grouped.join_as(
                    JoinType::InnerJoin,
                    brewery::Entity,
                    Q::D,
                    Expr::col((Q::D, brewery::Column::Id))
                        .equals((Q::Bb, beer_brewery::Column::Brewery)),
                );
            }
            StatsDimension::Style => {
                join_styles(&mut grouped);
                grouped.join_as(
                    JoinType::InnerJoin,
                    style::Entity,
                    Q::D,
                    Expr::col((Q::D, style::Column::Id)).equals((Q::Bs, beer_style::Column::Style)),
                );
            }
            StatsDimension::Location => {
                grouped.join_as(
                    JoinType::InnerJoin,
                    location::Entity,
                    Q::D,
                    Expr::col((Q::D, location::Column::Id))
                        .equals((Q::Rec, review::Column::Location)),
                );
            }
        }

        let min_count = i64::try_from(filter.review_count.min).unwrap_or(i64::MAX);
        grouped
            .expr_as(col(Q::D, "id"), Alias::new("id"))
            .expr_as(col(Q::D, "name"), Alias::new("name"))
            .expr_as(count.clone(), Alias::new("review_count"))
            .expr_as(average.clone(), Alias::new("review_average"))
            .group_by_col((Q::D, Alias::new("id")))
            .group_by_col((Q::D, Alias::new("name")))
            .and_having(Expr::expr(count.clone()).gte(min_count))
            .and_having(
                Expr::expr(average)
                    .between(filter.review_average.min, filter.review_average.max),
            );
        if let Some(max) = filter.review_count.max {
            grouped.and_having(Expr::expr(count).lte(i64::try_from(max).unwrap_or(i64::MAX)));
        }

        let select = window_groups(
            grouped,
            &["id", "name", "review_count", "review_average"],
            group_sort_keys(order),
            range,
        );

        let rows = GroupRow::find_by_statement(backend.build(&select))
            .all(conn)
            .await
            .map_err(db_err)?;
        debug!(?dimension, groups = rows.len(), "Fetched grouped stats");

        Ok(rows
            .into_iter()
            .map(|row| GroupStats {
                id: row.id,
                name: row.name,
                review_count: to_count(row.review_count),
                review_average: render_average(row.review_average),
            })
            .collect())
    }

    async fn rating<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        scope: StatsScope,
    ) -> Result<Vec<RatingStats>, DomainError> {
        let backend = conn.get_database_backend();

        let mut select = reviews_in(scope);
        select
            .expr_as(Expr::col((Q::Rec, review::Column::Rating)), Alias::new("rating"))
            .expr_as(
                Func::count(Expr::col((Q::Rec, review::Column::Id))),
                Alias::new("count"),
            )
            .group_by_col((Q::Rec, review::Column::Rating))
            .order_by((Q::Rec, review::Column::Rating), Order::Asc);

        let rows = RatingRow::find_by_statement(backend.build(&select))
            .all(conn)
            .await
            .map_err(db_err)?;

        Ok(rows
            .into_iter()
            .map(|row| RatingStats {
                rating: row.rating,
                count: to_count(row.count),
            })
            .collect())
    }
}

use async_trait::async_trait;
use beer_reviews_sdk::{ContainerRef, EntityRef, JoinedReview, ReviewListOrder};
use sea_orm::sea_query::{
    Alias, ConditionalStatement, Expr, JoinType, Order, OrderedStatement, Query, SelectStatement,
    SimpleExpr,
};
use sea_orm::{
    ConnectionTrait, DbBackend, EntityTrait, FromQueryResult, Iterable, PaginatorTrait,
};
use time::OffsetDateTime;
use tracing::debug;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::flatten::{flatten, FanOutRow};
use crate::domain::pagination::RowNumberRange;
use crate::domain::repos::ReviewsRepository;
use crate::infra::storage::db::db_err;
use crate::infra::storage::dialect::instant_of;
use crate::infra::storage::entity::{beer, location, review};
use crate::infra::storage::query::{
    beer_of_brewery, beer_of_style, join_beer_fan_out, order_by_keys, review_sort_keys,
    rn_within, with_row_number, SortKey, Q,
};

/// One row of the review fan-out join.
#[derive(Debug, FromQueryResult)]
struct ReviewRow {
    id: Uuid,
    beer_id: Uuid,
    beer_name: String,
    brewery_id: Uuid,
    brewery_name: String,
    style_id: Uuid,
    style_name: String,
    container_id: Uuid,
    container_type: String,
    container_size: String,
    location_id: Option<Uuid>,
    location_name: Option<String>,
    rating: i32,
    smell: Option<String>,
    taste: Option<String>,
    additional_info: Option<String>,
    time: OffsetDateTime,
    created_at: OffsetDateTime,
}

impl ReviewRow {
    fn into_fan_out(self) -> FanOutRow<JoinedReview> {
        let location = match (self.location_id, self.location_name) {
            (Some(id), Some(name)) => Some(EntityRef::new(id, name)),
            _ => None,
        };
        FanOutRow {
            key: self.id,
            brewery: EntityRef::new(self.brewery_id, self.brewery_name),
            style: EntityRef::new(self.style_id, self.style_name),
            record: JoinedReview {
                id: self.id,
                beer: EntityRef::new(self.beer_id, self.beer_name),
                breweries: Vec::new(),
                styles: Vec::new(),
                container: ContainerRef {
                    id: self.container_id,
                    container_type: self.container_type,
                    size: self.container_size,
                },
                location,
                rating: self.rating,
                smell: self.smell,
                taste: self.taste,
                additional_info: self.additional_info,
                time: self.time,
                created_at: self.created_at,
            },
        }
    }
}

fn collapse(rows: Vec<ReviewRow>) -> Vec<JoinedReview> {
    flatten(rows.into_iter().map(ReviewRow::into_fan_out))
        .into_iter()
        .map(|f| JoinedReview {
            breweries: f.breweries,
            styles: f.styles,
            ..f.record
        })
        .collect()
}

/// Projection shared by every review listing: the review aliased [`Q::Rec`]
/// with its beer, breweries, styles, container and optional location.
fn project(select: &mut SelectStatement) {
    select
        .expr_as(Expr::col((Q::Rec, review::Column::Id)), Alias::new("id"))
        .expr_as(Expr::col((Q::Rec, review::Column::Rating)), Alias::new("rating"))
        .expr_as(Expr::col((Q::Rec, review::Column::Smell)), Alias::new("smell"))
        .expr_as(Expr::col((Q::Rec, review::Column::Taste)), Alias::new("taste"))
        .expr_as(
            Expr::col((Q::Rec, review::Column::AdditionalInfo)),
            Alias::new("additional_info"),
        )
        .expr_as(Expr::col((Q::Rec, review::Column::Time)), Alias::new("time"))
        .expr_as(Expr::col((Q::Rec, review::Column::CreatedAt)), Alias::new("created_at"))
        .expr_as(Expr::col((Q::L, location::Column::Id)), Alias::new("location_id"))
        .expr_as(Expr::col((Q::L, location::Column::Name)), Alias::new("location_name"));
    join_beer_fan_out(select, review::Column::Beer, review::Column::Container);
    select.join_as(
        JoinType::LeftJoin,
        location::Entity,
        Q::L,
        Expr::col((Q::L, location::Column::Id)).equals((Q::Rec, review::Column::Location)),
    );
}

/// Reviews filtered by `condition`, with the full projection, in `order`.
///
/// The review id closes the ordering so fan-out rows of one review stay
/// adjacent.
fn filtered(condition: SimpleExpr, mut order: Vec<SortKey>) -> SelectStatement {
    order.push(SortKey::asc(Expr::col((Q::Rec, review::Column::Id))));

    let mut select = Query::select();
    select.from_as(review::Entity, Q::Rec);
    project(&mut select);
    select.and_where(condition);
    order_by_keys(&mut select, order);
    select
}

/// By beer name, then time ascending.
fn by_beer_name_then_time(backend: DbBackend) -> Vec<SortKey> {
    vec![
        SortKey::asc(Expr::col((Q::B, beer::Column::Name))),
        SortKey::asc(instant_of(
            backend,
            Expr::col((Q::Rec, review::Column::Time)).into(),
        )),
    ]
}

/// ORM-based implementation of the `ReviewsRepository` trait.
#[derive(Clone, Default)]
pub struct OrmReviewsRepository;

impl OrmReviewsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    async fn fetch<C: ConnectionTrait + Send + Sync>(
        conn: &C,
        select: &SelectStatement,
    ) -> Result<Vec<JoinedReview>, DomainError> {
        let stmt = conn.get_database_backend().build(select);
        let rows = ReviewRow::find_by_statement(stmt)
            .all(conn)
            .await
            .map_err(db_err)?;
        debug!(rows = rows.len(), "Fetched review fan-out rows");
        Ok(collapse(rows))
    }
}

#[async_trait]
impl ReviewsRepository for OrmReviewsRepository {
    async fn list_page<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        range: RowNumberRange,
        order: ReviewListOrder,
    ) -> Result<Vec<JoinedReview>, DomainError> {
        let mut numbered = Query::select();
        numbered.from(review::Entity);
        for column in review::Column::iter() {
            numbered.column((review::Entity, column));
        }
        with_row_number(
            &mut numbered,
            review_sort_keys(conn.get_database_backend(), review::Entity, order),
        );

        let mut select = Query::select();
        select.from_subquery(numbered, Q::Rec);
        project(&mut select);
        select
            .and_where(rn_within(Q::Rec, range))
            .order_by((Q::Rec, Q::Rn), Order::Asc);

        Self::fetch(conn, &select).await
    }

    async fn list_by_beer<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        beer_id: Uuid,
        order: ReviewListOrder,
    ) -> Result<Vec<JoinedReview>, DomainError> {
        let select = filtered(
            Expr::col((Q::Rec, review::Column::Beer)).eq(beer_id),
            review_sort_keys(conn.get_database_backend(), Q::Rec, order),
        );
        Self::fetch(conn, &select).await
    }

    async fn list_by_brewery<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        brewery_id: Uuid,
        order: ReviewListOrder,
    ) -> Result<Vec<JoinedReview>, DomainError> {
        let select = filtered(
            beer_of_brewery((Q::Rec, review::Column::Beer), brewery_id),
            review_sort_keys(conn.get_database_backend(), Q::Rec, order),
        );
        Self::fetch(conn, &select).await
    }

    async fn list_by_style<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        style_id: Uuid,
    ) -> Result<Vec<JoinedReview>, DomainError> {
        let select = filtered(
            beer_of_style((Q::Rec, review::Column::Beer), style_id),
            by_beer_name_then_time(conn.get_database_backend()),
        );
        Self::fetch(conn, &select).await
    }

    async fn list_by_location<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        location_id: Uuid,
    ) -> Result<Vec<JoinedReview>, DomainError> {
        let select = filtered(
            Expr::col((Q::Rec, review::Column::Location)).eq(location_id),
            by_beer_name_then_time(conn.get_database_backend()),
        );
        Self::fetch(conn, &select).await
    }

    async fn count<C: ConnectionTrait + Send + Sync>(&self, conn: &C) -> Result<u64, DomainError> {
        review::Entity::find()
            .count(conn)
            .await
            .map_err(db_err)
    }
}

use async_trait::async_trait;
use beer_reviews_sdk::{ContainerRef, EntityRef, JoinedStorage};
use sea_orm::sea_query::{
    Alias, ConditionalStatement, Expr, Order, OrderedStatement, Query, SelectStatement, SimpleExpr,
};
use sea_orm::{ConnectionTrait, EntityTrait, FromQueryResult, Iterable, PaginatorTrait};
use time::{Date, OffsetDateTime};
use tracing::debug;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::flatten::{flatten, FanOutRow};
use crate::domain::pagination::RowNumberRange;
use crate::domain::repos::StoragesRepository;
use crate::infra::storage::db::db_err;
use crate::infra::storage::entity::{beer, storage};
use crate::infra::storage::query::{
    beer_of_brewery, beer_of_style, join_beer_fan_out, order_by_keys, rn_within, with_row_number,
    SortKey, Q,
};

#[derive(Debug, FromQueryResult)]
struct StorageRow {
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
    best_before: Date,
    additional_info: Option<String>,
    created_at: OffsetDateTime,
}

impl StorageRow {
    fn into_fan_out(self) -> FanOutRow<JoinedStorage> {
        FanOutRow {
            key: self.id,
            brewery: EntityRef::new(self.brewery_id, self.brewery_name),
            style: EntityRef::new(self.style_id, self.style_name),
            record: JoinedStorage {
                id: self.id,
                beer: EntityRef::new(self.beer_id, self.beer_name),
                breweries: Vec::new(),
                styles: Vec::new(),
                container: ContainerRef {
                    id: self.container_id,
                    container_type: self.container_type,
                    size: self.container_size,
                },
                best_before: self.best_before,
                additional_info: self.additional_info,
                created_at: self.created_at,
            },
        }
    }
}

fn collapse(rows: Vec<StorageRow>) -> Vec<JoinedStorage> {
    flatten(rows.into_iter().map(StorageRow::into_fan_out))
        .into_iter()
        .map(|f| JoinedStorage {
            breweries: f.breweries,
            styles: f.styles,
            ..f.record
        })
        .collect()
}

fn project(select: &mut SelectStatement) {
    select
        .expr_as(Expr::col((Q::Rec, storage::Column::Id)), Alias::new("id"))
        .expr_as(
            Expr::col((Q::Rec, storage::Column::BestBefore)),
            Alias::new("best_before"),
        )
        .expr_as(
            Expr::col((Q::Rec, storage::Column::AdditionalInfo)),
            Alias::new("additional_info"),
        )
        .expr_as(
            Expr::col((Q::Rec, storage::Column::CreatedAt)),
            Alias::new("created_at"),
        );
    join_beer_fan_out(select, storage::Column::Beer, storage::Column::Container);
}

/// Cellar entries matching `condition`, by beer name then soonest expiry.
fn filtered(condition: SimpleExpr) -> SelectStatement {
    let mut select = Query::select();
    select.from_as(storage::Entity, Q::Rec);
    project(&mut select);
    select.and_where(condition);
    order_by_keys(
        &mut select,
        vec![
            SortKey::asc(Expr::col((Q::B, beer::Column::Name))),
            SortKey::asc(Expr::col((Q::Rec, storage::Column::BestBefore))),
            SortKey::asc(Expr::col((Q::Rec, storage::Column::Id))),
        ],
    );
    select
}

/// ORM-based implementation of the `StoragesRepository` trait.
#[derive(Clone, Default)]
pub struct OrmStoragesRepository;

impl OrmStoragesRepository {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    async fn fetch<C: ConnectionTrait + Send + Sync>(
        conn: &C,
        select: &SelectStatement,
    ) -> Result<Vec<JoinedStorage>, DomainError> {
        let stmt = conn.get_database_backend().build(select);
        let rows = StorageRow::find_by_statement(stmt)
            .all(conn)
            .await
            .map_err(db_err)?;
        debug!(rows = rows.len(), "Fetched storage fan-out rows");
        Ok(collapse(rows))
    }
}

#[async_trait]
impl StoragesRepository for OrmStoragesRepository {
    async fn list_page<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        range: RowNumberRange,
    ) -> Result<Vec<JoinedStorage>, DomainError> {
        let mut numbered = Query::select();
        numbered.from(storage::Entity);
        for column in storage::Column::iter() {
            numbered.column((storage::Entity, column));
        }
        with_row_number(
            &mut numbered,
            vec![SortKey::desc(Expr::col((
                storage::Entity,
                storage::Column::BestBefore,
            )))],
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
    ) -> Result<Vec<JoinedStorage>, DomainError> {
        let select = filtered(Expr::col((Q::Rec, storage::Column::Beer)).eq(beer_id));
        Self::fetch(conn, &select).await
    }

    async fn list_by_brewery<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        brewery_id: Uuid,
    ) -> Result<Vec<JoinedStorage>, DomainError> {
        let select = filtered(beer_of_brewery((Q::Rec, storage::Column::Beer), brewery_id));
        Self::fetch(conn, &select).await
    }

    async fn list_by_style<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        style_id: Uuid,
    ) -> Result<Vec<JoinedStorage>, DomainError> {
        let select = filtered(beer_of_style((Q::Rec, storage::Column::Beer), style_id));
        Self::fetch(conn, &select).await
    }

    async fn count<C: ConnectionTrait + Send + Sync>(&self, conn: &C) -> Result<u64, DomainError> {
        storage::Entity::find().count(conn).await.map_err(db_err)
    }
}

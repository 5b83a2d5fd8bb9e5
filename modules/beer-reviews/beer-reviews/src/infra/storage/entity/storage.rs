use sea_orm::entity::prelude::*;
use time::{Date, OffsetDateTime};

/// A cellar entry waiting to be drunk.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "storage")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub beer: Uuid,
    pub container: Uuid,
    pub best_before: Date,
    pub additional_info: Option<String>,
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

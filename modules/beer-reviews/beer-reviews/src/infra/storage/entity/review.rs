use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

/// A tasting review. `time` is when the beer was drunk, `created_at` when
/// the review was recorded.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "review")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub beer: Uuid,
    pub container: Uuid,
    pub location: Option<Uuid>,
    pub rating: i32,
    pub smell: Option<String>,
    pub taste: Option<String>,
    pub additional_info: Option<String>,
    pub time: OffsetDateTime,
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

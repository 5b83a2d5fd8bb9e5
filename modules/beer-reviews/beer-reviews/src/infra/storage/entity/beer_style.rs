use sea_orm::entity::prelude::*;

/// Beer to style association (N:N).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "beer_style")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub beer: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub style: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

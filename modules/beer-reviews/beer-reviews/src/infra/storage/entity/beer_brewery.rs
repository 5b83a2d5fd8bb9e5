use sea_orm::entity::prelude::*;

/// Beer to brewery association (N:N); collaboration beers have several rows.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "beer_brewery")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub beer: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub brewery: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

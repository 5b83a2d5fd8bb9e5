//! Infrastructure storage layer - database persistence and query building.
//!
//! ## Architecture
//!
//! This module contains ALL SeaORM-specific code and database operations:
//! - `entity/` - SeaORM entity definitions (catalog tables, associations, reviews, cellar)
//! - `migrations/` - Database schema migrations
//! - `db.rs` - connection setup and `DbErr` conversion
//! - `dialect.rs` - the few expressions that differ per backend
//! - `query.rs` - row numbering, fan-out joins and scope predicates
//! - `*_sea_repo.rs` - repository implementations over `sea_query` statements
//!
//! ## Layering Rules
//!
//! The infrastructure layer:
//! - **Contains**: ALL SeaORM imports and database-specific code
//! - **Uses**: `beer_reviews_sdk` contract types as the domain model
//! - **Implements**: the repository traits of `domain::repos`

pub mod db;
mod dialect;
pub mod entity;
pub mod migrations;
mod query;
mod reviews_sea_repo;
mod stats_sea_repo;
mod storages_sea_repo;

pub use reviews_sea_repo::OrmReviewsRepository;
pub use stats_sea_repo::OrmStatsRepository;
pub use storages_sea_repo::OrmStoragesRepository;

//! Domain service layer.
//!
//! One service per resource family:
//! - `reviews` - paged and per-entity review listings
//! - `storages` - paged and per-entity cellar listings
//! - `stats` - filter acceptance and review aggregations
//!
//! Services own the database handle and translate page requests into
//! row-number windows; repositories own the SQL.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::domain::repos::{ReviewsRepository, StatsRepository, StoragesRepository};

mod reviews;
mod stats;
mod storages;

pub use reviews::ReviewsService;
pub use stats::StatsService;
pub use storages::StoragesService;

// DI Container - aggregates all domain services
pub struct AppServices<RR, SR, TR>
where
    RR: ReviewsRepository,
    SR: StoragesRepository,
    TR: StatsRepository,
{
    pub reviews: ReviewsService<RR>,
    pub storages: StoragesService<SR>,
    pub stats: StatsService<TR>,
}

impl<RR, SR, TR> AppServices<RR, SR, TR>
where
    RR: ReviewsRepository,
    SR: StoragesRepository,
    TR: StatsRepository,
{
    #[must_use]
    pub fn new(reviews_repo: RR, storages_repo: SR, stats_repo: TR, db: DatabaseConnection) -> Self {
        Self {
            reviews: ReviewsService::new(Arc::new(reviews_repo), db.clone()),
            storages: StoragesService::new(Arc::new(storages_repo), db.clone()),
            stats: StatsService::new(Arc::new(stats_repo), db),
        }
    }
}

mod reviews_repo;
mod stats_repo;
mod storages_repo;

pub use reviews_repo::ReviewsRepository;
pub use stats_repo::{StatsDimension, StatsRepository};
pub use storages_repo::StoragesRepository;

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::{debug, info};

use beer_reviews_sdk::BeerReviewsClient;

use crate::config::BeerReviewsConfig;
use crate::domain::service::AppServices;
use crate::infra::storage::db;
use crate::infra::storage::{OrmReviewsRepository, OrmStatsRepository, OrmStoragesRepository};
use crate::local_client::BeerReviewsLocalClient;

/// Type alias for the concrete `AppServices` type used with ORM repositories.
/// This lives in the composition root (module.rs) to avoid infra dependencies in domain.
pub(crate) type ConcreteAppServices =
    AppServices<OrmReviewsRepository, OrmStoragesRepository, OrmStatsRepository>;

/// The `beer_reviews` module: a connected database plus the services on top
/// of it.
#[derive(Clone)]
pub struct BeerReviews {
    services: Arc<ConcreteAppServices>,
    db: DatabaseConnection,
}

impl BeerReviews {
    /// Connects to the configured database, applies migrations when enabled
    /// and wires the services.
    ///
    /// # Errors
    /// Fails when the database cannot be reached or a migration fails.
    pub async fn connect(config: &BeerReviewsConfig) -> anyhow::Result<Self> {
        info!("Initializing beer_reviews module");
        debug!(
            "Loaded beer_reviews config: max_connections={}, run_migrations={}",
            config.max_connections, config.run_migrations
        );

        let db = db::connect(config).await?;
        Ok(Self::from_connection(db))
    }

    /// Wires the services over an existing connection; no migrations run.
    #[must_use]
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let services = Arc::new(AppServices::new(
            OrmReviewsRepository::new(),
            OrmStoragesRepository::new(),
            OrmStatsRepository::new(),
            db.clone(),
        ));
        info!("beer_reviews services ready");
        Self { services, db }
    }

    /// Transport-agnostic client over the local services.
    #[must_use]
    pub fn client(&self) -> Arc<dyn BeerReviewsClient> {
        Arc::new(BeerReviewsLocalClient::new(Arc::clone(&self.services)))
    }

    /// The underlying connection, for hosts that seed or inspect data.
    #[must_use]
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

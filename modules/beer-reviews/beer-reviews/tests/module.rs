#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Module wiring: connecting from configuration and serving a client.

mod support;

use beer_reviews::{BeerReviews, BeerReviewsConfig, Pagination, StatsFilterParams};
use sea_orm::ConnectionTrait;

#[tokio::test]
async fn default_config_connects_and_migrates() {
    let module = BeerReviews::connect(&BeerReviewsConfig::default())
        .await
        .expect("in-memory database should connect");
    let client = module.client();

    assert_eq!(client.count_reviews().await.unwrap(), 0);
    assert_eq!(client.count_storages().await.unwrap(), 0);
    assert!(client
        .list_storages(Pagination::new(0, 10))
        .await
        .unwrap()
        .is_empty());
    assert_eq!(
        client
            .overall_stats(&StatsFilterParams::default())
            .await
            .unwrap()
            .review_average,
        ""
    );
}

#[tokio::test]
async fn seeded_connection_is_visible_to_every_client() {
    let module = BeerReviews::connect(&BeerReviewsConfig::default())
        .await
        .unwrap();
    support::seed_fixture(module.connection()).await;

    // A single pooled connection keeps the in-memory database shared.
    let first = module.client();
    let second = module.clone().client();
    assert_eq!(first.count_reviews().await.unwrap(), 5);
    assert_eq!(second.count_storages().await.unwrap(), 4);
}

#[tokio::test]
async fn migrations_can_be_skipped() {
    let config = BeerReviewsConfig {
        run_migrations: false,
        ..BeerReviewsConfig::default()
    };
    let module = BeerReviews::connect(&config).await.unwrap();

    let tables = module
        .connection()
        .query_all(sea_orm::Statement::from_string(
            module.connection().get_database_backend(),
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'review'",
        ))
        .await
        .unwrap();
    assert!(tables.is_empty());
    assert!(module.client().count_reviews().await.is_err());
}

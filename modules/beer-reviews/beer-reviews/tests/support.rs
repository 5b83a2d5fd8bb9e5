#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Test support utilities for `beer_reviews` integration tests.
//!
//! Provides an in-memory database with the schema applied and seeding
//! helpers, plus one shared fixture most tests read from.

#![allow(dead_code)] // Support module provides utilities that may not all be used

use std::sync::Arc;

use beer_reviews::infra::storage::entity::{
    beer, beer_brewery, beer_style, brewery, container, location, review, storage, style,
};
use beer_reviews::{BeerReviews, BeerReviewsClient};
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};
use sea_orm_migration::MigratorTrait;
use time::macros::datetime;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

/// Create a fresh in-memory `SQLite` database with migrations applied.
///
/// Each call creates a new isolated database for testing.
///
/// # Panics
/// Panics if the database connection or migrations fail.
pub async fn inmem_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    beer_reviews::infra::storage::migrations::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Client over the local services of `db`.
pub fn client(db: &DatabaseConnection) -> Arc<dyn BeerReviewsClient> {
    BeerReviews::from_connection(db.clone()).client()
}

pub async fn seed_brewery(db: &DatabaseConnection, name: &str) -> Uuid {
    let id = Uuid::new_v4();
    brewery::ActiveModel {
        id: Set(id),
        name: Set(name.to_owned()),
    }
    .insert(db)
    .await
    .expect("Failed to seed brewery");
    id
}

pub async fn seed_style(db: &DatabaseConnection, name: &str) -> Uuid {
    let id = Uuid::new_v4();
    style::ActiveModel {
        id: Set(id),
        name: Set(name.to_owned()),
    }
    .insert(db)
    .await
    .expect("Failed to seed style");
    id
}

pub async fn seed_location(db: &DatabaseConnection, name: &str) -> Uuid {
    let id = Uuid::new_v4();
    location::ActiveModel {
        id: Set(id),
        name: Set(name.to_owned()),
    }
    .insert(db)
    .await
    .expect("Failed to seed location");
    id
}

pub async fn seed_container(db: &DatabaseConnection, container_type: &str, size: &str) -> Uuid {
    let id = Uuid::new_v4();
    container::ActiveModel {
        id: Set(id),
        container_type: Set(container_type.to_owned()),
        size: Set(size.to_owned()),
    }
    .insert(db)
    .await
    .expect("Failed to seed container");
    id
}

/// Seed a beer together with its brewery and style associations.
pub async fn seed_beer(
    db: &DatabaseConnection,
    name: &str,
    breweries: &[Uuid],
    styles: &[Uuid],
) -> Uuid {
    let id = Uuid::new_v4();
    beer::ActiveModel {
        id: Set(id),
        name: Set(name.to_owned()),
    }
    .insert(db)
    .await
    .expect("Failed to seed beer");

    for brewery in breweries {
        beer_brewery::ActiveModel {
            beer: Set(id),
            brewery: Set(*brewery),
        }
        .insert(db)
        .await
        .expect("Failed to seed beer_brewery");
    }
    for style in styles {
        beer_style::ActiveModel {
            beer: Set(id),
            style: Set(*style),
        }
        .insert(db)
        .await
        .expect("Failed to seed beer_style");
    }
    id
}

pub async fn seed_review(
    db: &DatabaseConnection,
    beer: Uuid,
    container: Uuid,
    location: Option<Uuid>,
    rating: i32,
    time: OffsetDateTime,
) -> Uuid {
    let id = Uuid::new_v4();
    review::ActiveModel {
        id: Set(id),
        beer: Set(beer),
        container: Set(container),
        location: Set(location),
        rating: Set(rating),
        smell: Set(Some("citrus".to_owned())),
        taste: Set(None),
        additional_info: Set(None),
        time: Set(time),
        created_at: Set(time),
    }
    .insert(db)
    .await
    .expect("Failed to seed review");
    id
}

pub async fn seed_storage(
    db: &DatabaseConnection,
    beer: Uuid,
    container: Uuid,
    best_before: Date,
) -> Uuid {
    let id = Uuid::new_v4();
    storage::ActiveModel {
        id: Set(id),
        beer: Set(beer),
        container: Set(container),
        best_before: Set(best_before),
        additional_info: Set(None),
        created_at: Set(datetime!(2024-01-01 00:00 UTC)),
    }
    .insert(db)
    .await
    .expect("Failed to seed storage");
    id
}

/// Ids of the shared fixture.
///
/// | review | beer        | container | location | rating | time       |
/// |--------|-------------|-----------|----------|--------|------------|
/// | r1     | Hop Bomb    | bottle    | Home     | 8      | 2022-03-01 |
/// | r2     | Hop Bomb    | can       | Pub      | 9      | 2023-06-10 |
/// | r3     | Night Shift | bottle    | -        | 6      | 2023-01-05 |
/// | r4     | Night Shift | bottle    | Home     | 7      | 2023-11-20 |
/// | r5     | Zest        | can       | Pub      | 8      | 2024-02-14 |
///
/// Hop Bomb is brewed by Alpha and Bravo (IPA), Night Shift by Alpha (Stout)
/// and Zest by Charlie (IPA).
///
/// | storage | beer        | container | best before |
/// |---------|-------------|-----------|-------------|
/// | s1      | Hop Bomb    | bottle    | 2025-06-01  |
/// | s2      | Night Shift | bottle    | 2026-01-01  |
/// | s3      | Zest        | can       | 2024-12-01  |
/// | s4      | Hop Bomb    | can       | 2024-08-01  |
pub struct Fixture {
    pub alpha: Uuid,
    pub bravo: Uuid,
    pub charlie: Uuid,
    pub ipa: Uuid,
    pub stout: Uuid,
    pub home: Uuid,
    pub pub_: Uuid,
    pub bottle: Uuid,
    pub can: Uuid,
    pub hop_bomb: Uuid,
    pub night_shift: Uuid,
    pub zest: Uuid,
    pub r1: Uuid,
    pub r2: Uuid,
    pub r3: Uuid,
    pub r4: Uuid,
    pub r5: Uuid,
    pub s1: Uuid,
    pub s2: Uuid,
    pub s3: Uuid,
    pub s4: Uuid,
}

pub async fn seed_fixture(db: &DatabaseConnection) -> Fixture {
    let alpha = seed_brewery(db, "Alpha").await;
    let bravo = seed_brewery(db, "Bravo").await;
    let charlie = seed_brewery(db, "Charlie").await;
    let ipa = seed_style(db, "IPA").await;
    let stout = seed_style(db, "Stout").await;
    let home = seed_location(db, "Home").await;
    let pub_ = seed_location(db, "Pub").await;
    let bottle = seed_container(db, "bottle", "0.33").await;
    let can = seed_container(db, "can", "0.5").await;

    let hop_bomb = seed_beer(db, "Hop Bomb", &[bravo, alpha], &[ipa]).await;
    let night_shift = seed_beer(db, "Night Shift", &[alpha], &[stout]).await;
    let zest = seed_beer(db, "Zest", &[charlie], &[ipa]).await;

    let r1 = seed_review(db, hop_bomb, bottle, Some(home), 8, datetime!(2022-03-01 18:00 UTC)).await;
    let r2 = seed_review(db, hop_bomb, can, Some(pub_), 9, datetime!(2023-06-10 20:30 UTC)).await;
    let r3 = seed_review(db, night_shift, bottle, None, 6, datetime!(2023-01-05 19:00 UTC)).await;
    let r4 = seed_review(db, night_shift, bottle, Some(home), 7, datetime!(2023-11-20 21:15 UTC)).await;
    let r5 = seed_review(db, zest, can, Some(pub_), 8, datetime!(2024-02-14 17:45 UTC)).await;

    let s1 = seed_storage(db, hop_bomb, bottle, time::macros::date!(2025-06-01)).await;
    let s2 = seed_storage(db, night_shift, bottle, time::macros::date!(2026-01-01)).await;
    let s3 = seed_storage(db, zest, can, time::macros::date!(2024-12-01)).await;
    let s4 = seed_storage(db, hop_bomb, can, time::macros::date!(2024-08-01)).await;

    Fixture {
        alpha,
        bravo,
        charlie,
        ipa,
        stout,
        home,
        pub_,
        bottle,
        can,
        hop_bomb,
        night_shift,
        zest,
        r1,
        r2,
        r3,
        r4,
        r5,
        s1,
        s2,
        s3,
        s4,
    }
}

/// Fresh database seeded with the shared fixture, plus a client over it.
pub async fn setup() -> (DatabaseConnection, Fixture, Arc<dyn BeerReviewsClient>) {
    let db = inmem_db().await;
    let fixture = seed_fixture(&db).await;
    let client = client(&db);
    (db, fixture, client)
}

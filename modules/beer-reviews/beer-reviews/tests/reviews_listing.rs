#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Integration tests for joined review listings.
//!
//! These tests verify:
//! - Page windows count reviews, not joined rows
//! - Consecutive pages are disjoint and cover every review
//! - Rating and time ordering, including the newest-first tie-break
//! - Per-entity listings and their fixed orderings

mod support;

use std::collections::HashSet;

use beer_reviews::{JoinedReview, Pagination, ReviewListOrder};
use beer_reviews_sdk::{ReviewSortProperty, SortDirection};
use support::{
    inmem_db, seed_beer, seed_brewery, seed_container, seed_review, seed_style, setup,
};
use time::macros::datetime;
use uuid::Uuid;

fn ids(reviews: &[JoinedReview]) -> Vec<Uuid> {
    reviews.iter().map(|r| r.id).collect()
}

fn by_rating(direction: SortDirection) -> ReviewListOrder {
    ReviewListOrder::new(ReviewSortProperty::Rating, direction)
}

fn by_time(direction: SortDirection) -> ReviewListOrder {
    ReviewListOrder::new(ReviewSortProperty::Time, direction)
}

#[tokio::test]
async fn page_size_counts_reviews_not_fan_out_rows() {
    let db = inmem_db().await;
    let b1 = seed_brewery(&db, "Brewery One").await;
    let b2 = seed_brewery(&db, "Another Brewery").await;
    let s1 = seed_style(&db, "IPA").await;
    let s2 = seed_style(&db, "Stout").await;
    let bottle = seed_container(&db, "bottle", "0.33").await;
    let collab = seed_beer(&db, "Collab", &[b1, b2], &[s1, s2]).await;
    for day in 1..=5 {
        let time = datetime!(2023-01-01 12:00 UTC) + time::Duration::days(day);
        seed_review(&db, collab, bottle, None, 7, time).await;
    }
    let client = support::client(&db);

    let page = client
        .list_reviews(Pagination::new(0, 2), by_time(SortDirection::Desc))
        .await
        .unwrap();

    assert_eq!(page.len(), 2);
    for review in &page {
        let breweries: Vec<&str> = review.breweries.iter().map(|b| b.name.as_str()).collect();
        let styles: Vec<&str> = review.styles.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(breweries, vec!["Another Brewery", "Brewery One"]);
        assert_eq!(styles, vec!["IPA", "Stout"]);
    }
}

#[tokio::test]
async fn consecutive_pages_are_disjoint_and_complete() {
    let (_db, f, client) = setup().await;

    let mut seen = Vec::new();
    for skip in [0, 2, 4] {
        let page = client
            .list_reviews(Pagination::new(skip, 2), by_rating(SortDirection::Desc))
            .await
            .unwrap();
        assert!(page.len() <= 2);
        seen.extend(ids(&page));
    }

    let unique: HashSet<Uuid> = seen.iter().copied().collect();
    assert_eq!(seen.len(), 5);
    assert_eq!(unique, HashSet::from([f.r1, f.r2, f.r3, f.r4, f.r5]));
}

#[tokio::test]
async fn rating_order_breaks_ties_newest_first() {
    let (_db, f, client) = setup().await;

    let desc = client
        .list_reviews(Pagination::new(0, 10), by_rating(SortDirection::Desc))
        .await
        .unwrap();
    assert_eq!(ids(&desc), vec![f.r2, f.r5, f.r1, f.r4, f.r3]);

    // Ties stay newest first even when ratings ascend.
    let asc = client
        .list_reviews(Pagination::new(0, 10), by_rating(SortDirection::Asc))
        .await
        .unwrap();
    assert_eq!(ids(&asc), vec![f.r3, f.r4, f.r5, f.r1, f.r2]);
}

#[tokio::test]
async fn time_order_follows_direction() {
    let (_db, f, client) = setup().await;

    let desc = client
        .list_reviews(Pagination::new(0, 10), by_time(SortDirection::Desc))
        .await
        .unwrap();
    assert_eq!(ids(&desc), vec![f.r5, f.r4, f.r2, f.r3, f.r1]);

    let asc = client
        .list_reviews(Pagination::new(1, 2), by_time(SortDirection::Asc))
        .await
        .unwrap();
    assert_eq!(ids(&asc), vec![f.r3, f.r2]);
}

#[tokio::test]
async fn empty_windows_return_no_reviews() {
    let (_db, _f, client) = setup().await;

    let zero = client
        .list_reviews(Pagination::new(0, 0), ReviewListOrder::default())
        .await
        .unwrap();
    assert!(zero.is_empty());

    let past_end = client
        .list_reviews(Pagination::new(50, 10), ReviewListOrder::default())
        .await
        .unwrap();
    assert!(past_end.is_empty());

    let huge = client
        .list_reviews(Pagination::new(u64::MAX, u64::MAX), ReviewListOrder::default())
        .await
        .unwrap();
    assert!(huge.is_empty());
}

#[tokio::test]
async fn joined_review_carries_resolved_entities() {
    let (_db, f, client) = setup().await;

    let reviews = client
        .list_reviews_by_beer(f.hop_bomb, by_time(SortDirection::Asc))
        .await
        .unwrap();

    assert_eq!(ids(&reviews), vec![f.r1, f.r2]);
    let first = &reviews[0];
    assert_eq!(first.beer.name, "Hop Bomb");
    assert_eq!(first.container.container_type, "bottle");
    assert_eq!(first.container.size, "0.33");
    assert_eq!(first.location.as_ref().map(|l| l.id), Some(f.home));
    assert_eq!(first.rating, 8);
    assert_eq!(first.smell.as_deref(), Some("citrus"));
    assert_eq!(first.taste, None);
    assert_eq!(first.time, datetime!(2022-03-01 18:00 UTC));
    let breweries: Vec<Uuid> = first.breweries.iter().map(|b| b.id).collect();
    assert_eq!(breweries, vec![f.alpha, f.bravo]);
}

#[tokio::test]
async fn review_without_location_is_kept() {
    let (_db, f, client) = setup().await;

    let reviews = client
        .list_reviews_by_beer(f.night_shift, by_time(SortDirection::Asc))
        .await
        .unwrap();

    assert_eq!(ids(&reviews), vec![f.r3, f.r4]);
    assert!(reviews[0].location.is_none());
    assert!(reviews[1].location.is_some());
}

#[tokio::test]
async fn brewery_listing_keeps_collaborating_breweries() {
    let (_db, f, client) = setup().await;

    let reviews = client
        .list_reviews_by_brewery(f.bravo, by_rating(SortDirection::Desc))
        .await
        .unwrap();

    assert_eq!(ids(&reviews), vec![f.r2, f.r1]);
    for review in &reviews {
        let names: Vec<&str> = review.breweries.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Bravo"]);
    }

    let alpha = client
        .list_reviews_by_brewery(f.alpha, by_time(SortDirection::Desc))
        .await
        .unwrap();
    assert_eq!(ids(&alpha), vec![f.r4, f.r2, f.r3, f.r1]);
}

#[tokio::test]
async fn style_and_location_listings_order_by_beer_then_time() {
    let (_db, f, client) = setup().await;

    let ipa = client.list_reviews_by_style(f.ipa).await.unwrap();
    assert_eq!(ids(&ipa), vec![f.r1, f.r2, f.r5]);

    let home = client.list_reviews_by_location(f.home).await.unwrap();
    assert_eq!(ids(&home), vec![f.r1, f.r4]);

    let pub_ = client.list_reviews_by_location(f.pub_).await.unwrap();
    assert_eq!(ids(&pub_), vec![f.r2, f.r5]);
}

#[tokio::test]
async fn unknown_ids_give_empty_listings() {
    let (_db, _f, client) = setup().await;
    let unknown = Uuid::new_v4();

    assert!(client
        .list_reviews_by_beer(unknown, ReviewListOrder::default())
        .await
        .unwrap()
        .is_empty());
    assert!(client
        .list_reviews_by_brewery(unknown, ReviewListOrder::default())
        .await
        .unwrap()
        .is_empty());
    assert!(client.list_reviews_by_style(unknown).await.unwrap().is_empty());
    assert!(client.list_reviews_by_location(unknown).await.unwrap().is_empty());
}

#[tokio::test]
async fn count_reviews_counts_rows_once() {
    let (_db, _f, client) = setup().await;
    assert_eq!(client.count_reviews().await.unwrap(), 5);

    let empty = support::client(&inmem_db().await);
    assert_eq!(empty.count_reviews().await.unwrap(), 0);
}

#[tokio::test]
async fn time_order_compares_instants_across_offsets() {
    let db = inmem_db().await;
    let brewery = seed_brewery(&db, "Offset Brewing").await;
    let style = seed_style(&db, "Sour").await;
    let bottle = seed_container(&db, "bottle", "0.33").await;
    let beer = seed_beer(&db, "Gose", &[brewery], &[style]).await;
    // 21:30 UTC on May 31st, written with a +03:00 offset.
    let earlier = seed_review(&db, beer, bottle, None, 7, datetime!(2023-06-01 00:30 +3)).await;
    let later = seed_review(&db, beer, bottle, None, 7, datetime!(2023-05-31 22:00 UTC)).await;
    let client = support::client(&db);

    let desc = client
        .list_reviews(Pagination::new(0, 10), by_time(SortDirection::Desc))
        .await
        .unwrap();
    assert_eq!(ids(&desc), vec![later, earlier]);

    // Equal ratings fall back to newest first.
    let by_rating_asc = client
        .list_reviews(Pagination::new(0, 10), by_rating(SortDirection::Asc))
        .await
        .unwrap();
    assert_eq!(ids(&by_rating_asc), vec![later, earlier]);

    let by_beer = client
        .list_reviews_by_beer(beer, by_time(SortDirection::Asc))
        .await
        .unwrap();
    assert_eq!(ids(&by_beer), vec![earlier, later]);

    let by_style = client.list_reviews_by_style(style).await.unwrap();
    assert_eq!(ids(&by_style), vec![earlier, later]);
}

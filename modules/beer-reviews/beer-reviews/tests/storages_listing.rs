#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Integration tests for joined cellar (storage) listings.

mod support;

use beer_reviews::{JoinedStorage, Pagination};
use support::{inmem_db, setup};
use time::macros::date;
use uuid::Uuid;

fn ids(storages: &[JoinedStorage]) -> Vec<Uuid> {
    storages.iter().map(|s| s.id).collect()
}

#[tokio::test]
async fn pages_are_numbered_by_best_before_desc() {
    let (_db, f, client) = setup().await;

    let first = client.list_storages(Pagination::new(0, 3)).await.unwrap();
    assert_eq!(ids(&first), vec![f.s2, f.s1, f.s3]);
    assert_eq!(first[0].best_before, date!(2026-01-01));

    let second = client.list_storages(Pagination::new(3, 3)).await.unwrap();
    assert_eq!(ids(&second), vec![f.s4]);
}

#[tokio::test]
async fn cellar_entry_collapses_brewery_fan_out() {
    let (_db, f, client) = setup().await;

    let hop_bomb = client.list_storages_by_beer(f.hop_bomb).await.unwrap();
    assert_eq!(ids(&hop_bomb), vec![f.s4, f.s1]);
    for entry in &hop_bomb {
        let breweries: Vec<Uuid> = entry.breweries.iter().map(|b| b.id).collect();
        assert_eq!(breweries, vec![f.alpha, f.bravo]);
        assert_eq!(entry.styles.len(), 1);
        assert_eq!(entry.beer.name, "Hop Bomb");
    }
    assert_eq!(hop_bomb[0].container.container_type, "can");
}

#[tokio::test]
async fn brewery_and_style_listings_order_by_beer_then_best_before() {
    let (_db, f, client) = setup().await;

    let alpha = client.list_storages_by_brewery(f.alpha).await.unwrap();
    assert_eq!(ids(&alpha), vec![f.s4, f.s1, f.s2]);

    let ipa = client.list_storages_by_style(f.ipa).await.unwrap();
    assert_eq!(ids(&ipa), vec![f.s4, f.s1, f.s3]);

    let stout = client.list_storages_by_style(f.stout).await.unwrap();
    assert_eq!(ids(&stout), vec![f.s2]);
}

#[tokio::test]
async fn empty_cellar_and_unknown_ids() {
    let (_db, _f, client) = setup().await;
    assert!(client.list_storages(Pagination::new(0, 0)).await.unwrap().is_empty());
    assert!(client
        .list_storages_by_brewery(Uuid::new_v4())
        .await
        .unwrap()
        .is_empty());

    let empty = support::client(&inmem_db().await);
    assert!(empty.list_storages(Pagination::new(0, 10)).await.unwrap().is_empty());
    assert_eq!(empty.count_storages().await.unwrap(), 0);
}

#[tokio::test]
async fn count_storages_counts_entries() {
    let (_db, _f, client) = setup().await;
    assert_eq!(client.count_storages().await.unwrap(), 4);
}

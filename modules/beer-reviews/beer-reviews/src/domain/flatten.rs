//! Join-and-flatten aggregation.
//!
//! Joining a review (or cellar entry) against `beer_brewery` and `beer_style`
//! yields one row per (record x brewery x style). [`flatten`] collapses those
//! rows back into one record per primary id, keeping first-seen order, with
//! breweries and styles deduplicated by id and sorted by name.

use std::cmp::Ordering;
use std::collections::HashMap;

use beer_reviews_sdk::EntityRef;
use uuid::Uuid;

/// One raw row of a fan-out join.
#[derive(Debug, Clone)]
pub struct FanOutRow<T> {
    pub key: Uuid,
    pub brewery: EntityRef,
    pub style: EntityRef,
    pub record: T,
}

/// A collapsed record with its child collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flattened<T> {
    pub record: T,
    pub breweries: Vec<EntityRef>,
    pub styles: Vec<EntityRef>,
}

/// Collapses fan-out rows.
///
/// Output length is the number of distinct keys and output order is the
/// order in which each key was first seen. The record payload of the first
/// row for a key wins.
#[must_use]
pub fn flatten<T, I>(rows: I) -> Vec<Flattened<T>>
where
    I: IntoIterator<Item = FanOutRow<T>>,
{
    let mut index: HashMap<Uuid, usize> = HashMap::new();
    let mut out: Vec<Flattened<T>> = Vec::new();

    for row in rows {
        if let Some(&pos) = index.get(&row.key) {
            let entry = &mut out[pos];
            push_unique(&mut entry.breweries, row.brewery);
            push_unique(&mut entry.styles, row.style);
        } else {
            index.insert(row.key, out.len());
            out.push(Flattened {
                record: row.record,
                breweries: vec![row.brewery],
                styles: vec![row.style],
            });
        }
    }

    for entry in &mut out {
        entry.breweries.sort_by(|a, b| collate(&a.name, &b.name));
        entry.styles.sort_by(|a, b| collate(&a.name, &b.name));
    }

    out
}

fn push_unique(list: &mut Vec<EntityRef>, item: EntityRef) {
    if !list.iter().any(|existing| existing.id == item.id) {
        list.push(item);
    }
}

/// Locale-style name comparison: case-insensitive first, then exact.
///
/// This approximates a locale collator. Letters compare by code point after
/// lowercasing, so `Ä` and `Å` sort after `z` and `Ä` comes before `Å`, where
/// a Finnish collator puts `Å` first and a German one files `Ä` under `A`.
/// `sort_by` is stable, so fully equal names keep arrival order.
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

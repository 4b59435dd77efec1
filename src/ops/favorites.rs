//! Favorite toggling and the favorites listing.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::dates::{date_id, parse_date_id};
use crate::devotional::{generate, Devotional};
use crate::errors::AppResult;
use crate::store::AnnotationStore;

/// Flips the favorite flag for a date's entry and persists the change.
///
/// Returns the new state: `true` when the entry is now favorited.
///
/// # Arguments
///
/// * `store` - The loaded annotation store
/// * `date` - The calendar date whose entry is toggled
///
/// # Errors
///
/// Returns an error if the state file cannot be written, for example
/// when another process holds the lock.
pub fn toggle_favorite(store: &mut AnnotationStore, date: NaiveDate) -> AppResult<bool> {
    let id = date_id(date);
    let favorite = store.toggle_favorite(&id)?;
    info!("Favorite for {} is now {}", id, favorite);
    Ok(favorite)
}

/// Lists favorited entries, most recent date first.
///
/// Entries are regenerated from their stored identifiers, so the list
/// always reflects the current corpus.
pub fn list_favorites(store: &AnnotationStore) -> Vec<Devotional> {
    let ids = store.list_favorite_ids();
    debug!("Listing {} favorites", ids.len());

    let mut entries: Vec<Devotional> = ids
        .iter()
        .map(|id| generate(parse_date_id(id)))
        .collect();
    entries.sort_by(|a, b| b.date_iso.cmp(&a.date_iso));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::AnnotationStore;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_toggle_favorite_round_trip() {
        let dir = tempdir().unwrap();
        let mut store = AnnotationStore::load(dir.path().join("state.json"));

        assert!(toggle_favorite(&mut store, date(2024, 1, 1)).unwrap());
        assert!(store.is_favorite("2024-01-01"));

        assert!(!toggle_favorite(&mut store, date(2024, 1, 1)).unwrap());
        assert!(!store.is_favorite("2024-01-01"));
    }

    #[test]
    fn test_list_favorites_sorts_most_recent_first() {
        let dir = tempdir().unwrap();
        let mut store = AnnotationStore::load(dir.path().join("state.json"));
        store.set_favorite("2024-01-05", true).unwrap();
        store.set_favorite("2023-12-31", true).unwrap();
        store.set_favorite("2024-06-10", true).unwrap();

        let favorites = list_favorites(&store);

        let ids: Vec<&str> = favorites.iter().map(|entry| entry.id.as_str()).collect();
        assert_eq!(ids, vec!["2024-06-10", "2024-01-05", "2023-12-31"]);
    }

    #[test]
    fn test_list_favorites_skips_untoggled_entries() {
        let dir = tempdir().unwrap();
        let mut store = AnnotationStore::load(dir.path().join("state.json"));
        store.set_favorite("2024-01-05", true).unwrap();
        store.set_favorite("2024-01-06", true).unwrap();
        store.set_favorite("2024-01-06", false).unwrap();

        let favorites = list_favorites(&store);

        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].id, "2024-01-05");
    }

    #[test]
    fn test_listed_favorites_carry_generated_content() {
        let dir = tempdir().unwrap();
        let mut store = AnnotationStore::load(dir.path().join("state.json"));
        store.set_favorite("2024-01-01", true).unwrap();

        let favorites = list_favorites(&store);

        assert_eq!(favorites[0].title, "Marriage: Friendship and joy");
        assert_eq!(favorites[0].day_of_year, 1);
    }
}

//! Journal note writing, reading, deletion, and the journal listing.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::dates::{date_id, parse_date_id};
use crate::devotional::{generate, Devotional};
use crate::errors::AppResult;
use crate::store::AnnotationStore;

/// A saved journal note joined with its regenerated devotional entry.
#[derive(Debug, Clone)]
pub struct JournalNote {
    /// The entry the note was written against.
    pub devotional: Devotional,
    /// The note text as the user saved it.
    pub text: String,
    /// RFC 3339 timestamp of the last save.
    pub updated_at: String,
}

/// Saves the journal note for a date's entry, replacing any prior text.
///
/// # Arguments
///
/// * `store` - The loaded annotation store
/// * `date` - The calendar date the note belongs to
/// * `text` - The note text to save
///
/// # Errors
///
/// Returns an error if the state file cannot be written.
pub fn write_note(store: &mut AnnotationStore, date: NaiveDate, text: &str) -> AppResult<()> {
    let id = date_id(date);
    store.set_journal_text(&id, text)?;
    info!("Saved journal note for {} ({} chars)", id, text.chars().count());
    Ok(())
}

/// Returns the stored journal note text for a date's entry, if any.
pub fn read_note(store: &AnnotationStore, date: NaiveDate) -> Option<String> {
    let id = date_id(date);
    let note = store.journal_record(&id).map(|record| record.text.clone());
    debug!("Read journal note for {}: present={}", id, note.is_some());
    note
}

/// Deletes the journal note for a date's entry.
///
/// Returns `true` if a note existed and was removed. Deleting an absent
/// note is a no-op and does not touch the state file.
///
/// # Errors
///
/// Returns an error if the state file cannot be written.
pub fn delete_note(store: &mut AnnotationStore, date: NaiveDate) -> AppResult<bool> {
    let id = date_id(date);
    let deleted = store.delete_journal_entry(&id)?;
    info!("Delete journal note for {}: existed={}", id, deleted);
    Ok(deleted)
}

/// Lists journal notes joined with their regenerated entries, most
/// recently updated first.
pub fn list_notes(store: &AnnotationStore) -> Vec<JournalNote> {
    let ids = store.list_journal_ids();
    debug!("Listing {} journal notes", ids.len());

    let mut notes: Vec<JournalNote> = ids
        .iter()
        .filter_map(|id| {
            store.journal_record(id).map(|record| JournalNote {
                devotional: generate(parse_date_id(id)),
                text: record.text.clone(),
                updated_at: record.updated_at.clone(),
            })
        })
        .collect();
    notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::AnnotationStore;
    use chrono::NaiveDate;
    use std::thread;
    use std::time::Duration;
    use tempfile::tempdir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_write_then_list_returns_the_note() {
        let dir = tempdir().unwrap();
        let mut store = AnnotationStore::load(dir.path().join("state.json"));

        write_note(&mut store, date(2024, 1, 1), "A quiet morning.").unwrap();

        let notes = list_notes(&store);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].devotional.id, "2024-01-01");
        assert_eq!(notes[0].text, "A quiet morning.");
        assert!(!notes[0].updated_at.is_empty());
    }

    #[test]
    fn test_list_notes_sorts_most_recently_updated_first() {
        let dir = tempdir().unwrap();
        let mut store = AnnotationStore::load(dir.path().join("state.json"));

        write_note(&mut store, date(2024, 3, 10), "first").unwrap();
        // Timestamps carry millisecond precision; keep them distinct.
        thread::sleep(Duration::from_millis(5));
        write_note(&mut store, date(2024, 1, 2), "second").unwrap();

        let notes = list_notes(&store);
        let ids: Vec<&str> = notes.iter().map(|note| note.devotional.id.as_str()).collect();
        assert_eq!(ids, vec!["2024-01-02", "2024-03-10"]);
    }

    #[test]
    fn test_read_note_returns_saved_text_only_for_its_date() {
        let dir = tempdir().unwrap();
        let mut store = AnnotationStore::load(dir.path().join("state.json"));

        assert!(read_note(&store, date(2024, 1, 1)).is_none());

        write_note(&mut store, date(2024, 1, 1), "Evening walk.").unwrap();
        assert_eq!(
            read_note(&store, date(2024, 1, 1)).as_deref(),
            Some("Evening walk.")
        );
        assert!(read_note(&store, date(2024, 1, 2)).is_none());
    }

    #[test]
    fn test_rewriting_a_note_replaces_the_text() {
        let dir = tempdir().unwrap();
        let mut store = AnnotationStore::load(dir.path().join("state.json"));

        write_note(&mut store, date(2024, 1, 1), "draft").unwrap();
        write_note(&mut store, date(2024, 1, 1), "final").unwrap();

        let notes = list_notes(&store);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].text, "final");
    }

    #[test]
    fn test_delete_note_reports_whether_one_existed() {
        let dir = tempdir().unwrap();
        let mut store = AnnotationStore::load(dir.path().join("state.json"));

        assert!(!delete_note(&mut store, date(2024, 1, 1)).unwrap());

        write_note(&mut store, date(2024, 1, 1), "to be removed").unwrap();
        assert!(delete_note(&mut store, date(2024, 1, 1)).unwrap());
        assert!(list_notes(&store).is_empty());
    }
}

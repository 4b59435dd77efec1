//! The daily reading: one date's entry joined with its annotations.

use chrono::NaiveDate;
use tracing::debug;

use crate::devotional::{self, Devotional};
use crate::store::AnnotationStore;

/// A generated devotional entry together with the user's saved state
/// for its date.
#[derive(Debug, Clone)]
pub struct DailyReading {
    /// The generated entry for the requested date.
    pub devotional: Devotional,
    /// Whether the entry is currently favorited.
    pub favorite: bool,
    /// The saved journal note for the entry, if any.
    pub journal_text: Option<String>,
}

/// Assembles the reading for a date: the generated entry plus the
/// favorite flag and journal note stored under its identifier.
///
/// Generation is deterministic and the store lookups are in-memory, so
/// this cannot fail.
///
/// # Arguments
///
/// * `store` - The loaded annotation store
/// * `date` - The calendar date to read
pub fn daily_reading(store: &AnnotationStore, date: NaiveDate) -> DailyReading {
    let devotional = devotional::generate(date);
    let favorite = store.is_favorite(&devotional.id);
    let journal_text = store
        .journal_record(&devotional.id)
        .map(|record| record.text.clone());

    debug!(
        "Assembled reading for {}: favorite={}, has_note={}",
        devotional.id,
        favorite,
        journal_text.is_some()
    );

    DailyReading {
        devotional,
        favorite,
        journal_text,
    }
}

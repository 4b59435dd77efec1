//! High-level operations joining the generator with the annotation store.
//!
//! Each operation backs one user-facing view: the daily reading, window
//! search, the favorites list, and the journal list. Operations return
//! data and log with tracing; rendering belongs to the caller.

pub mod favorites;
pub mod journal;
pub mod search;
pub mod show;

// Re-export commonly used functions
pub use favorites::{list_favorites, toggle_favorite};
pub use journal::{delete_note, list_notes, read_note, write_note, JournalNote};
pub use search::search_devotionals;
pub use show::{daily_reading, DailyReading};

//! Free-text and category search over an aggregated window.

use crate::constants::MAX_SEARCH_RESULTS;
use crate::corpus::CategoryFilter;
use crate::devotional::Devotional;

/// Filters a window of generated entries by category and free-text query.
///
/// The query is trimmed and matched case-insensitively as a substring of
/// the entry's title, focus, scripture reference, scripture theme, guided
/// prayer, and action step. Journaling prompts are not part of the search
/// text. Window order is preserved, and the result is capped at
/// [`MAX_SEARCH_RESULTS`] entries after all filtering.
pub fn search(window: &[Devotional], filter: CategoryFilter, query: &str) -> Vec<Devotional> {
    let needle = query.trim().to_lowercase();

    let mut results: Vec<Devotional> = window
        .iter()
        .filter(|entry| filter.matches(entry.category))
        .filter(|entry| needle.is_empty() || search_blob(entry).contains(&needle))
        .cloned()
        .collect();
    results.truncate(MAX_SEARCH_RESULTS);
    results
}

fn search_blob(entry: &Devotional) -> String {
    format!(
        "{} {} {} {} {} {}",
        entry.title,
        entry.focus,
        entry.scripture_ref,
        entry.scripture_theme,
        entry.guided_prayer,
        entry.action_step
    )
    .to_lowercase()
}

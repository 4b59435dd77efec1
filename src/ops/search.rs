//! Free-text and category search across a generated window.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::corpus::CategoryFilter;
use crate::devotional::Devotional;
use crate::errors::{AppError, AppResult};
use crate::search::search;
use crate::window::build_window;

/// Searches the devotional entries generated around a center date.
///
/// # Flow
///
/// 1. Parse the category label into a filter
/// 2. Generate the window of entries around `center`
/// 3. Filter by category and lowercased substring match
///
/// # Arguments
///
/// * `center` - The date the window is anchored on
/// * `days_before` - Days generated before the center, inclusive
/// * `days_after` - Days generated after the center, inclusive
/// * `category` - Category label, `"all"` or a category name
/// * `query` - Free-text query; empty or whitespace matches everything
///
/// # Errors
///
/// Returns `AppError::Query` if the category label is not recognized.
pub fn search_devotionals(
    center: NaiveDate,
    days_before: u64,
    days_after: u64,
    category: &str,
    query: &str,
) -> AppResult<Vec<Devotional>> {
    let filter: CategoryFilter = category.parse().map_err(AppError::Query)?;

    info!(
        "Searching around {} (-{}/+{} days), category {}, query {:?}",
        center, days_before, days_after, filter, query
    );

    let window = build_window(center, days_before, days_after);
    debug!("Generated window of {} entries", window.len());

    let results = search(&window, filter, query);
    info!("Search matched {} entries", results.len());

    Ok(results)
}

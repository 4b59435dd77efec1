//! Sliding-window aggregation over generated entries.
//!
//! Search and listing views operate on a bounded range of calendar days
//! around a center date. The window is materialized by running the
//! generator once per day; nothing is cached, so the window is always
//! consistent with the current corpus.

use chrono::{Days, NaiveDate};

use crate::devotional::{self, Devotional};

/// Generates one entry per calendar day from `center - days_before` through
/// `center + days_after`, inclusive, in ascending date order.
///
/// Bounds that would leave the representable calendar saturate at its
/// limits instead of panicking, so callers can pass arbitrary spans.
pub fn build_window(center: NaiveDate, days_before: u64, days_after: u64) -> Vec<Devotional> {
    let start = center
        .checked_sub_days(Days::new(days_before))
        .unwrap_or(NaiveDate::MIN);
    let end = center
        .checked_add_days(Days::new(days_after))
        .unwrap_or(NaiveDate::MAX);

    let capacity = end.signed_duration_since(start).num_days().max(0) as usize + 1;
    let mut entries = Vec::with_capacity(capacity);
    let mut cursor = start;
    while cursor <= end {
        entries.push(devotional::generate(cursor));
        match cursor.succ_opt() {
            Some(next) => cursor = next,
            None => break,
        }
    }
    entries
}

//! The deterministic date-to-devotional generator.
//!
//! Every calendar date maps to exactly one [`Devotional`]: the category
//! rotates on a fixed 5-day cycle anchored to January 1, and two variation
//! indices derived from the day-of-year and the year select one item from
//! each content pool. The mapping is pure and stateless, so the same date
//! always regenerates an identical entry, which is what lets favorites and
//! journal notes be keyed by date alone.
//!
//! The variation indices are a deliberate reproducible hash, not randomness:
//!
//! ```text
//! i1 = (day_of_year * 7  + year) mod 997
//! i2 = (day_of_year * 13 + year) mod 991
//! ```
//!
//! The moduli are primes larger than any pool, and the differing strides
//! keep the two indices from tracking each other. Including the year means
//! the same day-of-year reads differently year over year, while the
//! category rotation stays a function of day-of-year only.

use chrono::{Datelike, NaiveDate};

use crate::constants::{
    SECOND_PROMPT_OFFSET, VARIATION_A_MODULUS, VARIATION_A_STRIDE, VARIATION_B_MODULUS,
    VARIATION_B_STRIDE,
};
use crate::corpus::{self, Category, Scripture};
use crate::dates;

/// A generated devotional entry for one calendar date.
///
/// Derived data, never stored: regenerating for the same date yields an
/// identical value. `id` and `date_iso` both carry the canonical
/// `YYYY-MM-DD` identifier for the date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Devotional {
    /// Unique per calendar date; equal to `date_iso`.
    pub id: String,
    /// The entry's date in `YYYY-MM-DD` form.
    pub date_iso: String,
    /// 1-based ordinal of the date within its year.
    pub day_of_year: u32,
    /// The rotating category for this date.
    pub category: Category,
    /// `"{category}: {capitalized focus}"`.
    pub title: String,
    /// The focus statement, as written in the pool.
    pub focus: String,
    /// NKJV scripture reference, or empty if the pool is empty.
    pub scripture_ref: String,
    /// One-line theme of the scripture, or empty if the pool is empty.
    pub scripture_theme: String,
    /// The guided prayer for the day.
    pub guided_prayer: String,
    /// Up to two journaling prompts. Empty picks are dropped; duplicate
    /// non-empty picks are kept.
    pub journal_prompts: Vec<String>,
    /// The action step, drawn from the category pool plus the shared pool.
    pub action_step: String,
}

/// Generates the devotional entry for a calendar date.
///
/// Pure and total: never fails, performs no I/O, and returns the same
/// value for the same date on every call.
pub fn generate(date: NaiveDate) -> Devotional {
    let day_of_year = dates::day_of_year(date);
    let year = i64::from(date.year());

    let category = Category::from_day_of_year(day_of_year);
    let pool = category.pool();

    let i1 =
        (i64::from(day_of_year) * VARIATION_A_STRIDE + year).rem_euclid(VARIATION_A_MODULUS);
    let i2 =
        (i64::from(day_of_year) * VARIATION_B_STRIDE + year).rem_euclid(VARIATION_B_MODULUS);

    let focus = pick(pool.focuses, i1);
    let scripture = pick_scripture(pool.scriptures, i2);
    let prompt_a = pick(pool.prompts, i1);
    let prompt_b = pick(pool.prompts, i2 + SECOND_PROMPT_OFFSET);

    let id = dates::date_id(date);

    Devotional {
        date_iso: id.clone(),
        id,
        day_of_year,
        category,
        title: format!("{}: {}", category, capitalize(focus)),
        focus: focus.to_string(),
        scripture_ref: scripture.map(|s| s.reference).unwrap_or("").to_string(),
        scripture_theme: scripture.map(|s| s.theme).unwrap_or("").to_string(),
        guided_prayer: pick(pool.prayers, i1).to_string(),
        journal_prompts: [prompt_a, prompt_b]
            .into_iter()
            .filter(|prompt| !prompt.is_empty())
            .map(str::to_string)
            .collect(),
        action_step: pick_action(category, i2),
    }
}

/// Uppercases the first character of a string, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Selects an item from a pool by index modulo the pool length.
///
/// An empty pool yields an empty string rather than a panic; the generator
/// must stay total even against a miscurated corpus.
fn pick<'a>(pool: &[&'a str], index: i64) -> &'a str {
    if pool.is_empty() {
        return "";
    }
    pool[index.rem_euclid(pool.len() as i64) as usize]
}

fn pick_scripture(pool: &'static [Scripture], index: i64) -> Option<&'static Scripture> {
    if pool.is_empty() {
        return None;
    }
    pool.get(index.rem_euclid(pool.len() as i64) as usize)
}

/// Selects the action step from the category pool concatenated with the
/// shared cross-category pool, without materializing the concatenation.
fn pick_action(category: Category, index: i64) -> String {
    let category_actions = category.pool().actions;
    let shared = corpus::shared_actions();
    let combined_len = category_actions.len() + shared.len();
    if combined_len == 0 {
        return String::new();
    }
    let idx = index.rem_euclid(combined_len as i64) as usize;
    let chosen = if idx < category_actions.len() {
        category_actions[idx]
    } else {
        shared[idx - category_actions.len()]
    };
    chosen.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_generate_is_deterministic() {
        let date = ymd(2024, 6, 15);
        let first = generate(date);
        let second = generate(date);
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_january_first_2024() {
        // Pinned vector: doy = 1, year = 2024, so
        // i1 = (1 * 7 + 2024) % 997 = 37 and i2 = (1 * 13 + 2024) % 991 = 55.
        let entry = generate(ymd(2024, 1, 1));

        assert_eq!(entry.id, "2024-01-01");
        assert_eq!(entry.date_iso, "2024-01-01");
        assert_eq!(entry.day_of_year, 1);
        assert_eq!(entry.category, Category::Marriage);
        assert_eq!(entry.focus, "Friendship and joy");
        assert_eq!(entry.title, "Marriage: Friendship and joy");
        assert_eq!(entry.scripture_ref, "Proverbs 4:23");
        assert_eq!(entry.scripture_theme, "Guard the heart");
        assert_eq!(
            entry.guided_prayer,
            "Protect our marriage from temptation, distraction, and division."
        );
        assert_eq!(
            entry.journal_prompts,
            vec![
                "Is there anything we need to forgive or address gently and directly?",
                "What is one practical way I can honor my spouse today?",
            ]
        );
        assert_eq!(
            entry.action_step,
            "Ask: “What would make you feel supported this week?” and listen fully."
        );
    }

    #[test]
    fn test_generate_children_day_2024() {
        // doy = 3 lands on Children; i1 = 51, i2 = 81.
        let entry = generate(ymd(2024, 1, 3));

        assert_eq!(entry.day_of_year, 3);
        assert_eq!(entry.category, Category::Children);
        assert_eq!(entry.focus, "Protection and godly friends");
        assert_eq!(entry.scripture_ref, "Proverbs 22:6");
        assert_eq!(entry.scripture_theme, "Train up a child");
        assert_eq!(
            entry.guided_prayer,
            "Give them wisdom, discernment, and godly friends."
        );
        assert_eq!(
            entry.journal_prompts,
            vec![
                "How can we speak life and purpose over our children today?",
                "Which child (or area) needs focused prayer today, and why?",
            ]
        );
        assert_eq!(
            entry.action_step,
            "Speak one blessing over a child by name (even if they are not present)."
        );
    }

    #[test]
    fn test_category_cycles_over_consecutive_days() {
        let expected = [
            Category::Marriage,
            Category::BlendedFamily,
            Category::Children,
            Category::Parents,
            Category::Grandchildren,
        ];
        for (offset, want) in expected.iter().enumerate() {
            let entry = generate(ymd(2024, 1, 1 + offset as u32));
            assert_eq!(entry.category, *want, "day {}", offset + 1);
        }
        // Day 6 wraps back to the first category
        assert_eq!(generate(ymd(2024, 1, 6)).category, Category::Marriage);
    }

    #[test]
    fn test_same_day_of_year_same_category_across_years() {
        let a = generate(ymd(2024, 1, 1));
        let b = generate(ymd(2025, 1, 1));
        assert_eq!(a.category, b.category);
        // The year feeds the variation indices, so content should differ:
        // i1 becomes 38 in 2025, selecting focus index 8.
        assert_eq!(b.focus, "Healthy conflict resolution");
        assert_ne!(a.focus, b.focus);
    }

    #[test]
    fn test_year_end_category_depends_on_leap_year() {
        // Day 366 and day 365 land on different rotation slots
        assert_eq!(generate(ymd(2024, 12, 31)).day_of_year, 366);
        assert_eq!(generate(ymd(2024, 12, 31)).category, Category::Marriage);
        assert_eq!(generate(ymd(2023, 12, 31)).day_of_year, 365);
        assert_eq!(
            generate(ymd(2023, 12, 31)).category,
            Category::Grandchildren
        );
    }

    #[test]
    fn test_prompts_are_always_two_from_the_pool() {
        for offset in 0..30 {
            let entry = generate(ymd(2024, 3, 1 + offset));
            assert_eq!(entry.journal_prompts.len(), 2, "{}", entry.id);
            let pool = entry.category.pool().prompts;
            for prompt in &entry.journal_prompts {
                assert!(pool.contains(&prompt.as_str()), "{}", entry.id);
            }
        }
    }

    #[test]
    fn test_action_step_comes_from_combined_pool() {
        for offset in 0..30 {
            let entry = generate(ymd(2024, 7, 1 + offset));
            let pool = entry.category.pool().actions;
            let in_category = pool.contains(&entry.action_step.as_str());
            let in_shared = corpus::shared_actions().contains(&entry.action_step.as_str());
            assert!(in_category || in_shared, "{}", entry.id);
        }
    }

    #[test]
    fn test_generate_is_total_for_extreme_dates() {
        // Far past and far future dates still produce complete entries
        for date in [ymd(1, 1, 1), ymd(9999, 12, 31), ymd(1970, 1, 1)] {
            let entry = generate(date);
            assert!(!entry.focus.is_empty());
            assert!(!entry.guided_prayer.is_empty());
            assert!(!entry.action_step.is_empty());
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hello world"), "Hello world");
        assert_eq!(capitalize("Already capital"), "Already capital");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("a"), "A");
    }

    #[test]
    fn test_pick_returns_empty_for_empty_pool() {
        assert_eq!(pick(&[], 42), "");
    }

    #[test]
    fn test_pick_wraps_by_pool_length() {
        let pool = ["a", "b", "c"];
        assert_eq!(pick(&pool, 0), "a");
        assert_eq!(pick(&pool, 4), "b");
        assert_eq!(pick(&pool, 300), "a");
    }
}

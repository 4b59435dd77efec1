//! The devotional content corpus.
//!
//! This module defines the five thematic categories and the curated text
//! pools behind them: focus statements, scripture references, guided
//! prayers, journaling prompts, and action steps. Scripture entries are
//! NKJV references with a short theme line, not full verse text.
//!
//! The pools are process-wide immutable static data. Their text, order,
//! and lengths are load-bearing: the date-to-content mapping indexes into
//! them by position, so reordering or resizing a pool remaps every date.

mod data;

use std::fmt;
use std::str::FromStr;

/// The five devotional categories, in rotation order.
///
/// Day 1 of any year (January 1) maps to `Marriage`; each following day
/// advances one position, wrapping after `Grandchildren`.
pub const CATEGORIES: [Category; 5] = [
    Category::Marriage,
    Category::BlendedFamily,
    Category::Children,
    Category::Parents,
    Category::Grandchildren,
];

/// A thematic devotional category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Marriage,
    BlendedFamily,
    Children,
    Parents,
    Grandchildren,
}

impl Category {
    /// Returns the human-readable label for this category.
    pub fn label(self) -> &'static str {
        match self {
            Category::Marriage => "Marriage",
            Category::BlendedFamily => "Blended Family",
            Category::Children => "Children",
            Category::Parents => "Parents",
            Category::Grandchildren => "Grandchildren",
        }
    }

    /// Returns the content pools for this category.
    pub fn pool(self) -> &'static ContentPool {
        match self {
            Category::Marriage => &data::MARRIAGE,
            Category::BlendedFamily => &data::BLENDED_FAMILY,
            Category::Children => &data::CHILDREN,
            Category::Parents => &data::PARENTS,
            Category::Grandchildren => &data::GRANDCHILDREN,
        }
    }

    /// Returns the category for a 1-based day-of-year ordinal.
    ///
    /// The rotation is anchored so day 1 maps to the first category and the
    /// cycle repeats every five days, regardless of year.
    pub fn from_day_of_year(day_of_year: u32) -> Category {
        let index = day_of_year.saturating_sub(1) as usize % CATEGORIES.len();
        CATEGORIES[index]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Parses a category label case-insensitively, accepting `-` or `_`
    /// in place of spaces (e.g. `blended-family`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "marriage" => Ok(Category::Marriage),
            "blended family" => Ok(Category::BlendedFamily),
            "children" => Ok(Category::Children),
            "parents" => Ok(Category::Parents),
            "grandchildren" => Ok(Category::Grandchildren),
            _ => Err(format!(
                "unknown category '{}'; expected 'all' or one of: Marriage, Blended Family, Children, Parents, Grandchildren",
                s
            )),
        }
    }
}

/// A scripture reference paired with its short theme line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scripture {
    /// The NKJV reference, e.g. "Proverbs 4:23".
    pub reference: &'static str,
    /// A one-line summary of the passage's theme.
    pub theme: &'static str,
}

/// The curated text pools for one category.
///
/// All slices are non-empty and fixed at compile time. `actions` holds the
/// category-specific action steps; the generator appends the shared pool
/// from [`shared_actions`] when selecting one.
pub struct ContentPool {
    pub focuses: &'static [&'static str],
    pub scriptures: &'static [Scripture],
    pub prayers: &'static [&'static str],
    pub prompts: &'static [&'static str],
    pub actions: &'static [&'static str],
}

/// Returns the action steps shared across all categories.
pub fn shared_actions() -> &'static [&'static str] {
    data::SHARED_ACTIONS
}

/// A category constraint applied when searching generated entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Match entries from every category.
    All,
    /// Match entries from a single category only.
    Only(Category),
}

impl CategoryFilter {
    /// Returns true if an entry of the given category passes this filter.
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(category) => f.write_str(category.label()),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    /// Parses `all` (case-insensitive) or any category label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>().map(CategoryFilter::Only)
    }
}

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::str::FromStr;

use crate::constants::{DEFAULT_WINDOW_DAYS_AFTER, DEFAULT_WINDOW_DAYS_BEFORE};
use crate::dates::parse_date_id;

/// A daily family devotional generator with favorites and journaling
#[derive(Parser, Debug)]
#[clap(
    name = "selah",
    about = "A daily family devotional generator with favorites and journaling"
)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Date to operate on (format: YYYY-MM-DD or YYYYMMDD, defaults to today)
    #[clap(short = 'd', long, global = true)]
    pub date: Option<String>,

    #[clap(subcommand)]
    pub command: Option<Command>,
}

/// The available devotional operations. Running without a subcommand
/// shows the reading for the chosen date.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the devotional reading for a date
    Show,

    /// Search entries generated around a date
    Search {
        /// Free-text query matched against entry text; omit to list the window
        query: Option<String>,

        /// Category filter: "all" or a category name
        #[clap(short = 'c', long, default_value = "all")]
        category: String,

        /// Days generated before the date
        #[clap(long, default_value_t = DEFAULT_WINDOW_DAYS_BEFORE)]
        before: u64,

        /// Days generated after the date
        #[clap(long, default_value_t = DEFAULT_WINDOW_DAYS_AFTER)]
        after: u64,
    },

    /// Toggle the favorite flag on a date's entry
    Favorite,

    /// List favorited entries, most recent date first
    Favorites,

    /// Save, print, or delete the journal note for a date's entry
    Journal {
        /// The note text to save; omit to print the stored note
        text: Option<String>,

        /// Delete the note instead of writing one
        #[clap(long, conflicts_with = "text")]
        delete: bool,
    },

    /// List journal notes, most recently updated first
    Journals,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        CliArgs::parse_from(std::env::args())
    }

    /// Get the date if specified, parsing it into a NaiveDate.
    ///
    /// Accepts the canonical `YYYY-MM-DD` form and the compact `YYYYMMDD`
    /// form; anything else degrades through the forgiving identifier
    /// parser, so a supplied date always resolves to some reading.
    pub fn parse_date(&self) -> Option<NaiveDate> {
        self.date.as_ref().map(|date_str| {
            // Strict forms first so YYYYMMDD is not read as a bare year
            NaiveDate::from_str(date_str)
                .or_else(|_| NaiveDate::parse_from_str(date_str, "%Y%m%d"))
                .unwrap_or_else(|_| parse_date_id(date_str))
        })
    }
}

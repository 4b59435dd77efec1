/*!
# Selah - A Daily Family Devotional Generator

Selah maps every calendar date to one devotional entry drawn from an
embedded corpus of five family themes. The same date always produces the
same reading, so a household can follow along on any machine with no
account and no network.

This file contains the main application flow, coordinating the various
components to implement the devotional functionality.

## Usage

```
selah [COMMAND] [OPTIONS]

Commands:
  show       Show the devotional reading for a date (default)
  search     Search entries generated around a date
  favorite   Toggle the favorite flag on a date's entry
  favorites  List favorited entries, most recent date first
  journal    Save, print, or delete the journal note for a date's entry
  journals   List journal notes, most recently updated first

Options:
  -d, --date <DATE>  Date to operate on (YYYY-MM-DD or YYYYMMDD, defaults to today)
  -h, --help         Print help information
  -V, --version      Print version information
```

## Configuration

The application can be configured with the following environment variables:
- `SELAH_DIR`: The directory holding the annotation state file (defaults to "~/Documents/selah")
- `RUST_LOG`: Log level filter (defaults to "info")
- `SELAH_LOG_FORMAT`: Set to "json" for JSON-encoded logs
*/

use chrono::Local;
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use selah::cli::{CliArgs, Command};
use selah::config::Config;
use selah::constants::{DEFAULT_LOG_LEVEL, ENV_VAR_LOG_FORMAT, LOG_FORMAT_JSON};
use selah::devotional::generate;
use selah::errors::AppResult;
use selah::ops::{self, DailyReading, JournalNote};
use selah::store::AnnotationStore;
use selah::Devotional;

/// Initializes the tracing subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to "info". Logs go to
/// stderr so stdout stays clean for the rendered output; setting
/// `SELAH_LOG_FORMAT=json` switches to the JSON encoder.
fn setup_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let json = std::env::var(ENV_VAR_LOG_FORMAT)
        .map(|format| format.eq_ignore_ascii_case(LOG_FORMAT_JSON))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .init();
    }
}

/// The main entry point for the selah application.
///
/// This function coordinates the overall application flow:
/// 1. Initializes logging
/// 2. Parses command-line arguments
/// 3. Loads and validates configuration
/// 4. Loads the annotation store (missing or corrupt state starts empty)
/// 5. Dispatches the requested command and renders its result
///
/// # Errors
///
/// This function can return various types of errors, including:
/// - Configuration errors (missing or invalid configuration)
/// - Query errors (unknown category)
/// - Annotation store errors (state file locked or unwritable)
fn main() -> AppResult<()> {
    setup_logging();

    info!("Starting selah");

    // Parse command-line arguments
    let args = CliArgs::parse();
    debug!("CLI arguments: {:?}", args);

    // Resolve the operative date; malformed values degrade through the
    // forgiving identifier parser instead of failing
    let date = args
        .parse_date()
        .unwrap_or_else(|| Local::now().date_naive());

    // Load and validate configuration
    info!("Loading configuration");
    let config = Config::load()?;
    config.validate()?;
    debug!("Data directory: {:?}", config.data_dir);

    let mut store = AnnotationStore::load(config.state_file());

    match args.command {
        None | Some(Command::Show) => {
            let reading = ops::daily_reading(&store, date);
            render_reading(&reading);
        }
        Some(Command::Search {
            query,
            category,
            before,
            after,
        }) => {
            let results = ops::search_devotionals(
                date,
                before,
                after,
                &category,
                query.as_deref().unwrap_or(""),
            )?;
            render_search_results(&results, before, after);
        }
        Some(Command::Favorite) => {
            let favorite = ops::toggle_favorite(&mut store, date)?;
            let entry = generate(date);
            if favorite {
                println!("★ Favorited {}", entry.id);
            } else {
                println!("☆ Unfavorited {}", entry.id);
            }
            println!("{}", entry.title);
        }
        Some(Command::Favorites) => {
            render_favorites(&ops::list_favorites(&store));
        }
        Some(Command::Journal { text, delete }) => {
            if delete {
                let existed = ops::delete_note(&mut store, date)?;
                if existed {
                    println!("Deleted note for {}.", generate(date).id);
                } else {
                    println!("No note for {}.", generate(date).id);
                }
            } else if let Some(text) = text {
                ops::write_note(&mut store, date, &text)?;
                println!("Saved note for {}.", generate(date).id);
            } else {
                match ops::read_note(&store, date) {
                    Some(note) => println!("{}", note),
                    None => println!("No note for {}.", generate(date).id),
                }
            }
        }
        Some(Command::Journals) => {
            render_notes(&ops::list_notes(&store));
        }
    }

    Ok(())
}

/// Prints one devotional reading with its annotations.
fn render_reading(reading: &DailyReading) {
    let d = &reading.devotional;

    println!("{}", d.title);
    println!(
        "{} | {} | Day {} | NKJV: {}",
        d.date_iso,
        d.category.label(),
        d.day_of_year,
        d.scripture_ref
    );
    if reading.favorite {
        println!("★ Favorited");
    }

    println!();
    println!("Focus: {}", d.focus);

    println!();
    println!("Scripture (NKJV reference): {}", d.scripture_ref);
    println!("Theme: {}", d.scripture_theme);

    println!();
    println!("Guided Prayer");
    println!("{}", d.guided_prayer);

    println!();
    println!("Action Step (Do This Today)");
    println!("{}", d.action_step);

    println!();
    println!("Journaling Prompts");
    for prompt in &d.journal_prompts {
        println!("- {}", prompt);
    }

    if let Some(note) = &reading.journal_text {
        println!();
        println!("Journal");
        println!("{}", note);
    }
}

/// Prints search results with the window framing the user asked for.
fn render_search_results(results: &[Devotional], before: u64, after: u64) {
    println!(
        "Showing {} result(s) (window: last {} days + next {} days).",
        results.len(),
        before,
        after
    );
    for entry in results {
        println!();
        println!("{}  {}", entry.date_iso, entry.title);
        println!("    {} | {}", entry.scripture_ref, entry.scripture_theme);
    }
}

fn render_favorites(favorites: &[Devotional]) {
    if favorites.is_empty() {
        println!("No favorites yet.");
        return;
    }
    println!("{} saved", favorites.len());
    for entry in favorites {
        println!();
        println!("{}  {}", entry.date_iso, entry.title);
    }
}

fn render_notes(notes: &[JournalNote]) {
    if notes.is_empty() {
        println!("No journal notes yet.");
        return;
    }
    println!("{} note(s)", notes.len());
    for note in notes {
        println!();
        println!("{}  {}", note.devotional.date_iso, note.devotional.title);
        println!("Last updated: {}", note.updated_at);
        println!("{}", note.text);
    }
}

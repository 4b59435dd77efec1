/*!
# Selah

Selah is a daily family devotional generator. Every calendar date maps
deterministically to one devotional entry built from an embedded corpus of
five family themes, so the same date always yields the same reading on any
machine, with no network and no randomness.

## Core Features

- Show the devotional reading for today or any date
- Search entries across a window of generated days, by category and free text
- Favorite entries and list them back, most recent first
- Keep a short journal note per entry, listed by last update
- Annotations persist in a single JSON state file

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `corpus`: The embedded devotional content and its categories
- `dates`: Date identifiers and day-of-year helpers
- `devotional`: Deterministic entry generation
- `window` / `search`: Window aggregation and filtering
- `store`: The persistent annotation store
- `ops`: High-level operations behind each CLI command
- `errors`: Error handling infrastructure

## Usage Example

```rust,no_run
use chrono::Local;
use selah::ops;
use selah::store::AnnotationStore;
use selah::Config;

fn main() -> selah::AppResult<()> {
    // Load configuration
    let config = Config::load()?;
    config.validate()?;

    // Show today's reading
    let store = AnnotationStore::load(config.state_file());
    let reading = ops::daily_reading(&store, Local::now().date_naive());
    println!("{}", reading.devotional.title);
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// The embedded devotional corpus and its five categories
pub mod corpus;
/// Calendar-date identifiers and day-of-year helpers
pub mod dates;
/// Deterministic devotional entry generation
pub mod devotional;
/// Error types and utilities for error handling
pub mod errors;
/// High-level operations joining the generator with the annotation store
pub mod ops;
/// Free-text and category search over generated windows
pub mod search;
/// Persistent favorites and journal annotations
pub mod store;
/// Date-window aggregation around a center date
pub mod window;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use corpus::{Category, CategoryFilter};
pub use devotional::Devotional;
pub use errors::{AppError, AppResult};
pub use store::AnnotationStore;

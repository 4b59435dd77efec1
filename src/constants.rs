//! Constants used throughout the application.
//!
//! This module contains all constants used in the Selah application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "selah";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A daily family devotional generator with favorites and journaling";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the Selah data directory.
pub const ENV_VAR_SELAH_DIR: &str = "SELAH_DIR";
/// Environment variable selecting the log output format (text or json).
pub const ENV_VAR_LOG_FORMAT: &str = "SELAH_LOG_FORMAT";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory name for devotional state within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = "Documents/selah";

// Validation
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// File System Parameters
/// Filename of the persisted annotation state. The `v1` suffix tracks the
/// content-mapping version; bumping the rotation constants means a new file.
pub const STATE_FILE_NAME: &str = "devotional-v1.json";
/// Default POSIX permissions for newly created directories (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;
/// Default POSIX permissions for newly created files (owner read/write).
#[cfg(unix)]
pub const DEFAULT_FILE_PERMISSIONS: u32 = 0o600;

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Year assumed when a date identifier has no parseable year component.
pub const DEFAULT_PARSE_YEAR: i32 = 1970;

// Rotation Parameters
//
// These constants define the deterministic date-to-content mapping. They are
// load-bearing: changing any of them remaps every date to different content
// and orphans previously saved favorite and journal identifiers.
/// Day-of-year multiplier for the first variation index.
pub const VARIATION_A_STRIDE: i64 = 7;
/// Modulus for the first variation index. Prime, larger than any pool.
pub const VARIATION_A_MODULUS: i64 = 997;
/// Day-of-year multiplier for the second variation index.
pub const VARIATION_B_STRIDE: i64 = 13;
/// Modulus for the second variation index. Prime, larger than any pool.
pub const VARIATION_B_MODULUS: i64 = 991;
/// Offset applied to the second journal prompt so the pair rarely collides.
pub const SECOND_PROMPT_OFFSET: i64 = 3;

// Search Window
/// Default number of days before the center date included in a search window.
pub const DEFAULT_WINDOW_DAYS_BEFORE: u64 = 120;
/// Default number of days after the center date included in a search window.
pub const DEFAULT_WINDOW_DAYS_AFTER: u64 = 30;
/// Maximum number of entries returned by a search.
pub const MAX_SEARCH_RESULTS: usize = 60;

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "selah";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";

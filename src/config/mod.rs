//! Configuration management for the selah application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. The only setting today is
//! the data directory that holds the persisted annotation state.
//!
//! # Environment Variables
//!
//! - `SELAH_DIR`: Path to the data directory (defaults to ~/Documents/selah)
//! - `HOME`: Used for expanding the default data directory path

use crate::constants::{
    DEFAULT_DATA_SUBDIR, ENV_VAR_HOME, ENV_VAR_SELAH_DIR, STATE_FILE_NAME,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the selah application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use selah::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/path/to/data"),
/// };
/// assert!(config.validate().is_ok());
/// ```
pub struct Config {
    /// Directory where the annotation state file is stored.
    ///
    /// Loaded from the SELAH_DIR environment variable with a fallback to
    /// ~/Documents/selah if not specified.
    pub data_dir: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &"[REDACTED_PATH]")
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The data directory comes from `SELAH_DIR`, falling back to
    /// `~/Documents/selah`. The path is expanded with `shellexpand` so `~`
    /// and environment variable references work.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if path expansion fails or the resulting
    /// path is empty.
    pub fn load() -> AppResult<Self> {
        let data_dir_str = env::var(ENV_VAR_SELAH_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_else(|_| "".to_string());
            format!("{}/{}", home, DEFAULT_DATA_SUBDIR)
        });

        // Expand the path (handles ~ and environment variables)
        let expanded_path = shellexpand::full(&data_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;

        let data_dir = PathBuf::from(expanded_path.into_owned());

        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        Ok(Config { data_dir })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the data directory path is empty or
    /// not absolute.
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(
                "Data directory must be an absolute path".to_string(),
            ));
        }

        Ok(())
    }

    /// Returns the path of the annotation state file inside the data
    /// directory.
    pub fn state_file(&self) -> PathBuf {
        self.data_dir.join(STATE_FILE_NAME)
    }
}

//! Persistence for per-entry annotations (favorites and journal notes).
//!
//! Generated devotionals are stateless; the only mutable state in the
//! application is the annotation layer the user writes on top of them,
//! keyed by entry identifier. It lives in a single JSON document:
//!
//! ```json
//! {
//!   "favorites": { "2024-01-26": true },
//!   "journal":   { "2024-01-26": { "text": "...", "updatedAt": "2024-01-26T21:14:03.512Z" } }
//! }
//! ```
//!
//! Loading is fail-soft: a missing, unreadable, or malformed state file
//! degrades to an empty state rather than an error, so the reading flow is
//! never blocked by a bad file. Every mutation flushes the whole document
//! back to disk under an exclusive advisory lock.

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[cfg(unix)]
use crate::constants::{DEFAULT_DIR_PERMISSIONS, DEFAULT_FILE_PERMISSIONS};
use crate::errors::StoreError;

/// A saved journal note for one entry identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalRecord {
    /// The note text. Saving replaces it wholesale.
    #[serde(default)]
    pub text: String,
    /// RFC 3339 UTC timestamp of the last save, millisecond precision.
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}

/// The user-authored state attached to one entry identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationRecord {
    /// Whether the entry is currently favorited.
    pub favorite: bool,
    /// The journal note, if one has been saved.
    pub journal: Option<JournalRecord>,
}

/// The persisted document shape: two maps keyed by entry identifier.
///
/// A favorite toggled off is stored as `false` rather than removed, so the
/// key can persist; readers must filter on the value. Deleted journal notes
/// are removed outright.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct StoreState {
    #[serde(default)]
    favorites: BTreeMap<String, bool>,
    #[serde(default)]
    journal: BTreeMap<String, JournalRecord>,
}

/// Handle to the annotation state and its backing file.
///
/// The store owns the in-memory state exclusively; callers pass the handle
/// by reference. Reads are answered from memory, and every mutating
/// operation writes the full state back to the file before returning.
#[derive(Debug)]
pub struct AnnotationStore {
    path: PathBuf,
    state: StoreState,
}

impl AnnotationStore {
    /// Loads the annotation store backed by the given file.
    ///
    /// Never fails: a missing file yields an empty store, and an unreadable
    /// or malformed one is logged at warn level and replaced by an empty
    /// store on the next flush. There is no partial recovery of a corrupt
    /// document.
    pub fn load(path: PathBuf) -> AnnotationStore {
        let state = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<StoreState>(&raw) {
                Ok(state) => {
                    debug!(
                        path = %path.display(),
                        favorites = state.favorites.len(),
                        journal = state.journal.len(),
                        "Loaded annotation state"
                    );
                    state
                }
                Err(error) => {
                    warn!(
                        path = %path.display(),
                        %error,
                        "Annotation state is malformed; starting with an empty state"
                    );
                    StoreState::default()
                }
            },
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No annotation state file yet");
                StoreState::default()
            }
            Err(error) => {
                warn!(
                    path = %path.display(),
                    %error,
                    "Could not read annotation state; starting with an empty state"
                );
                StoreState::default()
            }
        };

        AnnotationStore { path, state }
    }

    /// Returns the path of the backing state file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the annotation record for an entry identifier, if the store
    /// holds any state for it.
    pub fn get(&self, id: &str) -> Option<AnnotationRecord> {
        let favorite = self.state.favorites.get(id).copied();
        let journal = self.state.journal.get(id).cloned();
        if favorite.is_none() && journal.is_none() {
            return None;
        }
        Some(AnnotationRecord {
            favorite: favorite.unwrap_or(false),
            journal,
        })
    }

    /// Returns whether an entry is currently favorited.
    pub fn is_favorite(&self, id: &str) -> bool {
        self.state.favorites.get(id).copied().unwrap_or(false)
    }

    /// Sets the favorite flag for an entry and flushes.
    ///
    /// Toggling off keeps the key with a `false` value; listing filters on
    /// the value, and the persisted shape stays compatible with documents
    /// written that way historically.
    pub fn set_favorite(&mut self, id: &str, favorite: bool) -> Result<(), StoreError> {
        self.state.favorites.insert(id.to_string(), favorite);
        self.flush()?;
        debug!(id, favorite, "Updated favorite flag");
        Ok(())
    }

    /// Flips the favorite flag for an entry and returns the new state.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool, StoreError> {
        let favorite = !self.is_favorite(id);
        self.set_favorite(id, favorite)?;
        Ok(favorite)
    }

    /// Returns the journal note for an entry, if one is saved.
    pub fn journal_record(&self, id: &str) -> Option<&JournalRecord> {
        self.state.journal.get(id)
    }

    /// Saves the journal note for an entry, stamping the update time, and
    /// flushes. The previous text, if any, is fully replaced.
    pub fn set_journal_text(&mut self, id: &str, text: &str) -> Result<(), StoreError> {
        self.state.journal.insert(
            id.to_string(),
            JournalRecord {
                text: text.to_string(),
                updated_at: now_timestamp(),
            },
        );
        self.flush()?;
        debug!(id, "Saved journal note");
        Ok(())
    }

    /// Deletes the journal note for an entry, flushing only if one existed.
    /// Returns whether a note was removed.
    pub fn delete_journal_entry(&mut self, id: &str) -> Result<bool, StoreError> {
        if self.state.journal.remove(id).is_none() {
            return Ok(false);
        }
        self.flush()?;
        debug!(id, "Deleted journal note");
        Ok(true)
    }

    /// Returns the identifiers currently favorited (value `true` only),
    /// in ascending identifier order.
    pub fn list_favorite_ids(&self) -> Vec<String> {
        self.state
            .favorites
            .iter()
            .filter(|(_, favorite)| **favorite)
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Returns the identifiers with a saved journal note, in ascending
    /// identifier order.
    pub fn list_journal_ids(&self) -> Vec<String> {
        self.state.journal.keys().cloned().collect()
    }

    /// Writes the full state document back to the backing file.
    ///
    /// The write happens under an exclusive advisory lock held for the
    /// critical section; a lock already held elsewhere surfaces as
    /// [`StoreError::FileBusy`] instead of risking interleaved writes. The
    /// file is truncated only after the lock is acquired.
    fn flush(&self) -> Result<(), StoreError> {
        let write_failed = |source: io::Error| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            ensure_data_directory_exists(parent).map_err(write_failed)?;
        }

        let encoded = serde_json::to_string(&self.state)?;

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(&self.path)
            .map_err(write_failed)?;

        file.try_lock_exclusive().map_err(|source| {
            if source.kind() == io::ErrorKind::WouldBlock {
                StoreError::FileBusy {
                    path: self.path.clone(),
                }
            } else {
                StoreError::WriteFailed {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        #[cfg(unix)]
        {
            let mut permissions = file.metadata().map_err(write_failed)?.permissions();
            permissions.set_mode(DEFAULT_FILE_PERMISSIONS);
            file.set_permissions(permissions).map_err(write_failed)?;
        }

        file.set_len(0).map_err(write_failed)?;
        file.write_all(encoded.as_bytes()).map_err(write_failed)?;

        debug!(
            path = %self.path.display(),
            bytes = encoded.len(),
            "Flushed annotation state"
        );
        Ok(())
    }
}

/// Creates the data directory if needed, restricting it to the owner.
fn ensure_data_directory_exists(dir: &Path) -> io::Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
        #[cfg(unix)]
        {
            fs::set_permissions(dir, fs::Permissions::from_mode(DEFAULT_DIR_PERMISSIONS))?;
        }
        debug!(path = %dir.display(), "Created data directory");
    }
    Ok(())
}

/// Current time as an RFC 3339 UTC string with millisecond precision,
/// e.g. `2024-01-26T21:14:03.512Z`.
fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

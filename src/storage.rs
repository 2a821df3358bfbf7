//! Persistence adapter for the note collection.
//!
//! One named slot (a JSON file) holds the entire serialized collection. It
//! is read once when the store opens and rewritten wholesale after every
//! state transition; there is no partial update path.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, error, info, warn};
use tempfile::NamedTempFile;

use crate::{note::seed_notes, Note, NoteError, Result};

/// A single named storage slot for the persisted note collection.
pub struct NotesSlot {
    path: PathBuf,
}

impl NotesSlot {
    /// Creates a slot handle for the given file path. Nothing is read or
    /// written until [`load`](Self::load) or [`save`](Self::save) is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying slot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted collection.
    ///
    /// A missing slot or one that fails to parse as a note array yields the
    /// built-in seed notes instead; this never surfaces an error.
    pub fn load(&self) -> Vec<Note> {
        match self.try_load() {
            Ok(Some(notes)) => {
                debug!("Loaded {} notes from {}", notes.len(), self.path.display());
                notes
            }
            Ok(None) => {
                info!(
                    "No persisted notes at {}, starting from seed data",
                    self.path.display()
                );
                seed_notes()
            }
            Err(e) => {
                warn!(
                    "Discarding unreadable notes data at {}: {}",
                    self.path.display(),
                    e
                );
                seed_notes()
            }
        }
    }

    fn try_load(&self) -> Result<Option<Vec<Note>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path)?;
        let notes: Vec<Note> = serde_json::from_str(&raw)?;
        Ok(Some(notes))
    }

    /// Serializes the full collection and atomically overwrites the slot.
    ///
    /// The write goes to a temporary file in the slot's directory first and
    /// is then renamed over the target; a failed write leaves the previous
    /// contents intact.
    pub fn save(&self, notes: &[Note]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    error!("Failed to create data directory {}: {}", parent.display(), e);
                    NoteError::DirectoryError {
                        path: parent.to_path_buf(),
                    }
                })?;
            }
        }

        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut temp_file = NamedTempFile::new_in(dir)?;

        let json = serde_json::to_string_pretty(notes)?;
        temp_file.write_all(json.as_bytes())?;
        temp_file.flush()?;

        temp_file
            .persist(&self.path)
            .map_err(|e| NoteError::Io(e.error))?;

        debug!("Persisted {} notes to {}", notes.len(), self.path.display());
        Ok(())
    }
}

//! Application configuration settings.

use std::{fs, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};
use which::which;

use crate::{NoteError, Result};

/// Application configuration settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// File holding the persisted note collection
    pub notes_file: PathBuf,

    /// Default editor command (for composing note content)
    pub editor_command: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));

        Self {
            notes_file: data_dir.join("swiftnote").join("notes.json"),
            editor_command: None,
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file, or the defaults when no path
    /// is given. An unreadable or unparseable config file is a hard error,
    /// never a silent fallback.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let raw = fs::read_to_string(path).map_err(|e| NoteError::ConfigError {
            message: format!("Failed to read config {}: {}", path.display(), e),
        })?;

        serde_json::from_str(&raw).map_err(|e| NoteError::ConfigError {
            message: format!("Failed to parse config {}: {}", path.display(), e),
        })
    }

    // This method provides smart fallbacks when no editor is configured
    pub fn get_editor_command(&self) -> String {
        // First try the configured editor
        if let Some(editor) = &self.editor_command {
            return editor.clone();
        }

        // Then try environment variable
        if let Ok(editor) = std::env::var("EDITOR") {
            return editor;
        }

        // Fall back to platform defaults
        if cfg!(windows) {
            "notepad".to_string()
        } else if cfg!(target_os = "macos") {
            "open -t".to_string()
        } else {
            // Try common Linux editors
            for editor in &["nano", "vim", "vi", "emacs"] {
                if which(editor).is_ok() {
                    return editor.to_string();
                }
            }
            "nano".to_string()
        }
    }
}

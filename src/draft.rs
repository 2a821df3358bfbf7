//! Draft notes as accepted by the store's create operation.
//!
//! Validation and dirty tracking live here, outside the store: the store
//! accepts any well-formed draft and performs no checks of its own.

use crate::{Note, NoteError, Result};

/// Longest accepted title, in characters.
pub const MAX_TITLE_LEN: usize = 100;

/// Longest accepted content, in characters.
pub const MAX_CONTENT_LEN: usize = 5000;

/// The subset of note fields supplied by the user when creating or editing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    /// Display title
    pub title: String,
    /// Free-text content, may be empty
    pub content: String,
    /// Distinct tag labels
    pub tags: Vec<String>,
    /// Explicit color, or None to take the default
    pub color: Option<String>,
}

impl NoteDraft {
    /// Baseline draft for an existing note, used for dirty comparison.
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
            tags: note.tags.clone(),
            color: Some(note.color.clone()),
        }
    }

    /// Form-level validation of title presence and field length bounds.
    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty() {
            return Err(NoteError::InvalidDraft {
                message: "Title is required".to_string(),
            });
        }

        if self.title.chars().count() > MAX_TITLE_LEN {
            return Err(NoteError::InvalidDraft {
                message: format!("Title cannot exceed {} characters", MAX_TITLE_LEN),
            });
        }

        if self.content.chars().count() > MAX_CONTENT_LEN {
            return Err(NoteError::InvalidDraft {
                message: format!("Content cannot exceed {} characters", MAX_CONTENT_LEN),
            });
        }

        Ok(())
    }

    /// Structural comparison against the baseline the editor opened with.
    /// Callers run this before permitting a save or discard action.
    pub fn is_dirty(&self, baseline: &NoteDraft) -> bool {
        self != baseline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, content: &str) -> NoteDraft {
        NoteDraft {
            title: title.to_string(),
            content: content.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_title_is_rejected() {
        assert!(draft("", "body").validate().is_err());
    }

    #[test]
    fn length_bounds_are_enforced() {
        assert!(draft(&"x".repeat(MAX_TITLE_LEN), "").validate().is_ok());
        assert!(draft(&"x".repeat(MAX_TITLE_LEN + 1), "").validate().is_err());
        assert!(draft("t", &"y".repeat(MAX_CONTENT_LEN)).validate().is_ok());
        assert!(draft("t", &"y".repeat(MAX_CONTENT_LEN + 1))
            .validate()
            .is_err());
    }

    #[test]
    fn dirty_comparison_is_structural() {
        let baseline = draft("title", "content");
        let mut current = baseline.clone();
        assert!(!current.is_dirty(&baseline));

        current.tags.push("work".to_string());
        assert!(current.is_dirty(&baseline));

        current.tags.clear();
        assert!(!current.is_dirty(&baseline));

        current.color = Some("#BBDEFB".to_string());
        assert!(current.is_dirty(&baseline));
    }
}

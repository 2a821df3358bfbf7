//! Core data structures for the swiftnote application.
//!
//! This module contains the Note entity and the built-in seed collection
//! used when no valid persisted data exists.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{color::DEFAULT_NOTE_COLOR, draft::NoteDraft};

/// Represents a single note in our system
///
/// Serialized field names keep the camelCase spelling of the persisted JSON
/// shape, so collections written by earlier versions of the app load as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier for the note, immutable after creation
    pub id: String,
    /// Note title
    pub title: String,
    /// Free-text note content, may be empty
    pub content: String,
    /// Tags for organization; distinct, insertion order preserved
    pub tags: Vec<String>,
    /// Whether the note is pinned to the top of the display order
    pub is_pinned: bool,
    /// Whether the note is bookmarked
    pub is_bookmarked: bool,
    /// Card color: a hex value or the default token
    pub color: String,
    /// When the note was created
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Creates a new note from a draft with a fresh unique ID.
    ///
    /// Flags default to false and a missing or empty color falls back to
    /// [`DEFAULT_NOTE_COLOR`]. Both timestamps are fixed to the same instant.
    pub fn new(draft: NoteDraft) -> Self {
        let now = Utc::now();
        let color = match draft.color {
            Some(color) if !color.is_empty() => color,
            _ => DEFAULT_NOTE_COLOR.to_string(),
        };

        Note {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            content: draft.content,
            tags: draft.tags,
            is_pinned: false,
            is_bookmarked: false,
            color,
            created_at: now,
            updated_at: now,
        }
    }
}

/// The fixed fallback collection used when no valid persisted data exists.
///
/// Ids are arbitrary but stable so repeated fallbacks produce the same
/// collection shape.
pub fn seed_notes() -> Vec<Note> {
    let now = Utc::now();

    vec![
        Note {
            id: "1".to_string(),
            title: "Grocery List".to_string(),
            content: "Milk, Eggs, Bread, Cheese".to_string(),
            tags: vec!["shopping".to_string(), "food".to_string()],
            is_pinned: true,
            is_bookmarked: false,
            color: "#FFF9C4".to_string(),
            created_at: now - Duration::days(2),
            updated_at: now - Duration::days(2),
        },
        Note {
            id: "2".to_string(),
            title: "Meeting Notes".to_string(),
            content: "Discuss Q3 roadmap. Project Alpha updates.".to_string(),
            tags: vec!["work".to_string(), "meeting".to_string()],
            is_pinned: false,
            is_bookmarked: true,
            color: "#BBDEFB".to_string(),
            created_at: now - Duration::days(1),
            updated_at: now,
        },
        Note {
            id: "3".to_string(),
            title: "Book Ideas".to_string(),
            content: "A sci-fi novel about time-traveling librarians.".to_string(),
            tags: vec!["creative".to_string(), "writing".to_string()],
            is_pinned: false,
            is_bookmarked: false,
            color: DEFAULT_NOTE_COLOR.to_string(),
            created_at: now,
            updated_at: now,
        },
    ]
}

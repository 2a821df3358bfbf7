//! The note store: sole owner and mutator of the live note collection and
//! of the transient selection/search session state.
//!
//! All reads and writes funnel through this type. Consumers receive
//! read-only snapshots and route every mutation back through the operation
//! set below; there is no shared mutable access. Every state-changing
//! operation mirrors the collection to the persistence slot as a
//! fire-and-forget side effect, so the in-memory state stays authoritative
//! for the session even when a write fails.

use std::collections::HashSet;

use chrono::Utc;
use log::{debug, info, warn};

use crate::{draft::NoteDraft, storage::NotesSlot, Note, NotePatch};

/// Exclusive owner of the note collection for one session.
pub struct NoteStore {
    slot: NotesSlot,
    notes: Vec<Note>,
    selected: HashSet<String>,
    search_term: String,
}

impl NoteStore {
    /// Opens the store, performing the one-time persistence read.
    ///
    /// A missing or unreadable slot falls back to the built-in seed notes.
    /// The returned store is ready; there is no separate loading state.
    pub fn open(slot: NotesSlot) -> Self {
        let notes = slot.load();
        info!("Note store ready with {} notes", notes.len());

        Self {
            slot,
            notes,
            selected: HashSet::new(),
            search_term: String::new(),
        }
    }

    /// Read-only snapshot of the collection, newest-created first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Number of live notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// True when the collection holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Returns the matching note, or None when the id is unknown.
    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Ids currently marked for bulk operations.
    pub fn selected_ids(&self) -> &HashSet<String> {
        &self.selected
    }

    /// Whether the given note is currently selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// The session search term; the store holds it but never filters.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Replaces the session search term. Not a note mutation: no timestamps
    /// move and nothing is persisted.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Creates a note from the draft and prepends it to the collection.
    ///
    /// The store assigns the id and timestamps, defaults both flags to
    /// false, and falls back to the default color when the draft carries
    /// none. Draft validation is the caller's concern, not the store's.
    pub fn create(&mut self, draft: NoteDraft) -> Note {
        let note = Note::new(draft);
        debug!("Created note {}", note.id);

        self.notes.insert(0, note.clone());
        self.persist();
        note
    }

    /// Merges the patch into the matching note and refreshes `updated_at`.
    ///
    /// Returns the updated note, or None without touching any state (and
    /// without a timestamp bump) when the id is unknown.
    pub fn update(&mut self, id: &str, patch: NotePatch) -> Option<Note> {
        let note = match self.notes.iter_mut().find(|note| note.id == id) {
            Some(note) => note,
            None => {
                debug!("Update for unknown note {} ignored", id);
                return None;
            }
        };

        if let Some(title) = patch.title {
            note.title = title;
        }
        if let Some(content) = patch.content {
            note.content = content;
        }
        if let Some(tags) = patch.tags {
            note.tags = tags;
        }
        if let Some(is_pinned) = patch.is_pinned {
            note.is_pinned = is_pinned;
        }
        if let Some(is_bookmarked) = patch.is_bookmarked {
            note.is_bookmarked = is_bookmarked;
        }
        if let Some(color) = patch.color {
            note.color = color;
        }
        note.updated_at = Utc::now();

        let updated = note.clone();
        self.persist();
        Some(updated)
    }

    /// Removes the note and purges its id from the selection set in the
    /// same step. Returns false (and changes nothing) when the id is
    /// unknown; a repeated delete is a no-op, not a fault.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);

        if self.notes.len() == before {
            debug!("Delete for unknown note {} ignored", id);
            return false;
        }

        self.selected.remove(id);
        self.persist();
        true
    }

    /// Removes every selected note and clears the selection entirely, as
    /// one atomic state transition. Returns the number of notes removed.
    pub fn delete_selected(&mut self) -> usize {
        let selected = std::mem::take(&mut self.selected);
        if selected.is_empty() {
            return 0;
        }

        let before = self.notes.len();
        self.notes.retain(|note| !selected.contains(&note.id));
        let removed = before - self.notes.len();

        if removed > 0 {
            debug!("Bulk-deleted {} selected notes", removed);
            self.persist();
        }
        removed
    }

    /// Negates the pinned flag through the update path.
    pub fn toggle_pin(&mut self, id: &str) -> Option<Note> {
        let is_pinned = self.get(id)?.is_pinned;
        self.update(
            id,
            NotePatch {
                is_pinned: Some(!is_pinned),
                ..Default::default()
            },
        )
    }

    /// Negates the bookmarked flag through the update path.
    pub fn toggle_bookmark(&mut self, id: &str) -> Option<Note> {
        let is_bookmarked = self.get(id)?.is_bookmarked;
        self.update(
            id,
            NotePatch {
                is_bookmarked: Some(!is_bookmarked),
                ..Default::default()
            },
        )
    }

    /// Sets only the note's color through the update path.
    pub fn set_color(&mut self, id: &str, color: impl Into<String>) -> Option<Note> {
        self.update(
            id,
            NotePatch {
                color: Some(color.into()),
                ..Default::default()
            },
        )
    }

    /// Appends a tag after trimming it.
    ///
    /// Returns None without mutating anything when the note is unknown,
    /// the tag is empty after trimming, or an exact (case-sensitive) match
    /// is already present.
    pub fn add_tag(&mut self, id: &str, tag: &str) -> Option<Note> {
        let tag = tag.trim();
        if tag.is_empty() {
            return None;
        }

        let note = self.get(id)?;
        if note.tags.iter().any(|existing| existing == tag) {
            debug!("Tag {:?} already present on note {}", tag, id);
            return None;
        }

        let mut tags = note.tags.clone();
        tags.push(tag.to_string());
        self.update(
            id,
            NotePatch {
                tags: Some(tags),
                ..Default::default()
            },
        )
    }

    /// Removes an exact-match tag.
    ///
    /// The update path is taken whenever the note exists, so `updated_at`
    /// bumps even when the tag was not present.
    pub fn remove_tag(&mut self, id: &str, tag: &str) -> Option<Note> {
        let note = self.get(id)?;
        let tags: Vec<String> = note
            .tags
            .iter()
            .filter(|existing| existing.as_str() != tag)
            .cloned()
            .collect();

        self.update(
            id,
            NotePatch {
                tags: Some(tags),
                ..Default::default()
            },
        )
    }

    /// Symmetric difference on the selection set: selects the note if it is
    /// not selected, deselects it otherwise. Ids that match no live note
    /// never enter the set.
    pub fn toggle_selection(&mut self, id: &str) {
        if self.selected.remove(id) {
            return;
        }
        if self.get(id).is_some() {
            self.selected.insert(id.to_string());
        }
    }

    /// Empties the selection set.
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Selects every note in the full collection, not the search-narrowed
    /// view; the "are all selected" toggle works against the same full set.
    pub fn select_all(&mut self) {
        self.selected = self.notes.iter().map(|note| note.id.clone()).collect();
    }

    /// Mirrors the collection to the slot. Failures are logged and
    /// swallowed; the session keeps operating on in-memory state.
    fn persist(&self) {
        if let Err(e) = self.slot.save(&self.notes) {
            warn!(
                "Failed to persist notes to {}: {}",
                self.slot.path().display(),
                e
            );
        }
    }
}

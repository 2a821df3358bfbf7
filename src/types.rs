//! Core shared types for the swiftnote application.
//!
//! This module contains the specialized Result alias, the partial-update
//! shape accepted by the note store, and the CLI command surface.

use std::path::PathBuf;

use clap::Subcommand;

use crate::NoteError;

/// A specialized Result type for swiftnote operations.
pub type Result<T> = std::result::Result<T, NoteError>;

/// A partial set of note fields applied through the store's update operation.
///
/// `id` and `created_at` are deliberately absent; both are immutable after
/// creation. Every applied patch refreshes the note's `updated_at`.
#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    /// New display title
    pub title: Option<String>,
    /// New free-text content
    pub content: Option<String>,
    /// Full replacement tag list
    pub tags: Option<Vec<String>>,
    /// Pinned flag
    pub is_pinned: Option<bool>,
    /// Bookmarked flag
    pub is_bookmarked: Option<bool>,
    /// Card color value or the default token
    pub color: Option<String>,
}

impl NotePatch {
    /// True when the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.tags.is_none()
            && self.is_pinned.is_none()
            && self.is_bookmarked.is_none()
            && self.color.is_none()
    }
}

/// Available subcommands for the swiftnote application
#[derive(Subcommand)]
pub enum Commands {
    /// Create a new note
    Create {
        /// Title of the note
        #[clap(short = 'T', long)]
        title: String,

        /// Content of the note
        #[clap(short, long)]
        content: Option<String>,

        /// Open content in editor before saving
        #[clap(short, long)]
        edit: bool,

        /// Tags to associate with the note (comma-separated)
        #[clap(short = 't', long)]
        tags: Option<String>,

        /// Card color (hex value, palette name, or "default")
        #[clap(long)]
        color: Option<String>,

        /// Path to a file containing the note's content
        #[clap(short, long)]
        file: Option<PathBuf>,
    },

    /// View a note by ID
    View {
        /// ID of the note to view
        id: String,

        /// Format output as raw JSON
        #[clap(short, long)]
        json: bool,
    },

    /// List notes with optional filtering
    List {
        /// Filter notes by tag
        #[clap(short, long)]
        tag: Option<String>,

        /// Narrow the list to notes matching a search term
        #[clap(short, long)]
        search: Option<String>,

        /// Limit the number of notes returned
        #[clap(short = 'n', long, default_value_t = 10)]
        limit: usize,

        /// Format output as JSON
        #[clap(short, long)]
        json: bool,

        /// Only show note IDs and titles
        #[clap(short, long)]
        brief: bool,
    },

    /// Search notes by title or content
    Search {
        /// Search query text
        query: String,

        /// Limit the number of search results
        #[clap(short = 'n', long, default_value_t = 10)]
        limit: usize,

        /// Format output as JSON
        #[clap(short, long)]
        json: bool,
    },

    /// Edit an existing note
    Edit {
        /// ID of the note to edit
        id: String,

        /// New title for the note
        #[clap(short = 'T', long)]
        title: Option<String>,

        /// New content for the note
        #[clap(short, long)]
        content: Option<String>,

        /// Open content in editor before saving
        #[clap(short, long)]
        edit: bool,

        /// Replacement tags for the note (comma-separated)
        #[clap(short = 't', long)]
        tags: Option<String>,

        /// New card color (hex value, palette name, or "default")
        #[clap(long)]
        color: Option<String>,

        /// Path to a file containing the new note content
        #[clap(short, long)]
        file: Option<PathBuf>,
    },

    /// Delete one or more notes by ID
    Delete {
        /// IDs of the notes to delete
        #[clap(required = true)]
        ids: Vec<String>,

        /// Skip confirmation prompt
        #[clap(short, long)]
        force: bool,
    },

    /// Tag operations (add, remove, list)
    Tag {
        /// ID of the note to modify
        id: String,

        /// Tags to add (comma-separated)
        #[clap(short, long)]
        add: Option<String>,

        /// Tags to remove (comma-separated)
        #[clap(short, long)]
        remove: Option<String>,

        /// List all tags for the note
        #[clap(short, long)]
        list: bool,
    },

    /// Pin or unpin a note
    Pin {
        /// ID of the note to toggle
        id: String,
    },

    /// Bookmark or unbookmark a note
    Bookmark {
        /// ID of the note to toggle
        id: String,
    },

    /// Set the card color of a note
    Color {
        /// ID of the note to recolor
        id: String,

        /// Hex value like "#BBDEFB", a palette name, or "default"
        color: String,
    },
}

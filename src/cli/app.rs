//! Command handlers for the swiftnote CLI.
//!
//! The CLI plays the role of the rendering and form layers: it validates
//! drafts, issues store operations, and displays read-only snapshots. The
//! store handle is passed in explicitly; there is no hidden lookup.

use std::{
    fs::{read_to_string, OpenOptions},
    io::{stdin, stdout, Write},
    path::{Path, PathBuf},
    process::Command,
};

use log::info;
use shell_words::split;
use tempfile::Builder;

use crate::{
    color::resolve_color, draft::NoteDraft, parse_tags, query, Commands, Config, Note, NoteError,
    NotePatch, NoteStore, Result,
};

/// CLI application handler - processes commands against the note store
pub struct App {
    /// The note store owned by this session
    store: NoteStore,

    /// Application configuration
    config: Config,

    /// Whether to display verbose output
    verbose: bool,
}

impl App {
    /// Create a new CLI application around the given store and config
    pub fn new(store: NoteStore, config: Config, verbose: bool) -> Self {
        Self {
            store,
            config,
            verbose,
        }
    }

    /// Run the CLI application with the given command
    pub fn run(&mut self, command: Commands) -> Result<()> {
        match command {
            Commands::Create {
                title,
                content,
                edit,
                tags,
                color,
                file,
            } => self.create_note(title, content, file, tags, color, edit)?,

            Commands::View { id, json } => self.view_note(&id, json)?,

            Commands::List {
                tag,
                search,
                limit,
                json,
                brief,
            } => self.list_notes(tag, search, limit, json, brief)?,

            Commands::Search { query, limit, json } => self.handle_search(query, limit, json)?,

            Commands::Edit {
                id,
                title,
                content,
                edit,
                tags,
                color,
                file,
            } => self.handle_edit(id, title, content, file, tags, color, edit)?,

            Commands::Delete { ids, force } => self.handle_delete(ids, force)?,

            Commands::Tag {
                id,
                add,
                remove,
                list,
            } => self.handle_tag(&id, add, remove, list)?,

            Commands::Pin { id } => self.handle_pin(&id)?,

            Commands::Bookmark { id } => self.handle_bookmark(&id)?,

            Commands::Color { id, color } => self.handle_color(&id, &color)?,
        }

        Ok(())
    }

    fn create_note(
        &mut self,
        title: String,
        content: Option<String>,
        file: Option<PathBuf>,
        tags: Option<String>,
        color: Option<String>,
        open_editor: bool,
    ) -> Result<()> {
        let parsed_tags = parse_tags(tags);

        // Get content based on the provided options
        let note_content = match (content, file) {
            (Some(c), _) => c,
            (_, Some(file_path)) => {
                if !file_path.exists() {
                    return Err(NoteError::FileNotFound {
                        file_path: file_path.display().to_string(),
                    });
                }
                read_to_string(file_path)?
            }
            (None, None) => {
                if open_editor {
                    self.open_editor_for_content(&title)?
                } else {
                    String::new()
                }
            }
        };

        let draft = NoteDraft {
            title,
            content: note_content,
            tags: parsed_tags,
            color: color.map(|c| resolve_color(&c)),
        };
        draft.validate()?;

        let note = self.store.create(draft);
        println!("Note created with ID: {}", note.id);
        Ok(())
    }

    fn view_note(&self, id: &str, json: bool) -> Result<()> {
        let note = self.store.get(id).ok_or_else(|| NoteError::NoteNotFound {
            id: id.to_string(),
        })?;

        if json {
            println!("{}", serde_json::to_string_pretty(note)?);
        } else {
            self.display_note_detail(note);
        }

        Ok(())
    }

    /// List notes according to provided filters and options
    fn list_notes(
        &mut self,
        tag: Option<String>,
        search: Option<String>,
        limit: usize,
        json: bool,
        brief: bool,
    ) -> Result<()> {
        // The search term is session state on the store; the store itself
        // never filters.
        if let Some(term) = search {
            self.store.set_search_term(term);
        }
        let term = self.store.search_term().to_string();

        // Step 1: Narrow the snapshot by search term, then by tag
        let mut view: Vec<&Note> = query::filter_notes(self.store.notes(), &term);
        if let Some(tag_value) = tag {
            let wanted = tag_value.trim().to_lowercase();
            view.retain(|note| note.tags.iter().any(|t| t.trim().to_lowercase() == wanted));
        }

        // Step 2: Display order is pinned-first, then most recently updated
        query::sort_for_display(&mut view);

        // Step 3: Apply limit
        if view.len() > limit {
            view.truncate(limit);
        }

        // Step 4: Display notes in requested format
        self.display_notes(&view, json, brief)?;
        Ok(())
    }

    fn handle_search(&self, query_text: String, limit: usize, json: bool) -> Result<()> {
        let mut results = query::search_ranked(self.store.notes(), &query_text);

        // Apply limit if specified (0 means no limit)
        if limit > 0 && results.len() > limit {
            results.truncate(limit);
        }

        let view: Vec<&Note> = results.iter().collect();
        self.display_notes(&view, json, false)?;

        if results.is_empty() {
            println!("No notes found matching query: \"{}\"", query_text);
        }

        Ok(())
    }

    fn handle_edit(
        &mut self,
        id: String,
        title: Option<String>,
        content: Option<String>,
        file: Option<PathBuf>,
        tags: Option<String>,
        color: Option<String>,
        open_editor: bool,
    ) -> Result<()> {
        // Validate input - check for conflicting options
        if content.is_some() && file.is_some() {
            return Err(NoteError::ApplicationError {
                message: "Cannot specify both --content and --file options".to_string(),
            });
        }

        if content.is_some() && open_editor {
            return Err(NoteError::ApplicationError {
                message: "Cannot specify both --content and --edit options".to_string(),
            });
        }

        if file.is_some() && open_editor {
            return Err(NoteError::ApplicationError {
                message: "Cannot specify both --file and --edit options".to_string(),
            });
        }

        let note = self
            .store
            .get(&id)
            .ok_or_else(|| NoteError::NoteNotFound { id: id.clone() })?
            .clone();

        // Build the prospective draft on top of the note's current state
        let baseline = NoteDraft::from_note(&note);
        let mut draft = baseline.clone();

        if let Some(new_title) = title {
            draft.title = new_title;
        }

        if let Some(new_content) = content {
            draft.content = new_content;
        } else if let Some(file_path) = file {
            draft.content = self.read_content_from_file(&file_path)?;
            println!("Content updated from file: {}", file_path.display());
        } else if open_editor {
            draft.content = self.open_editor_with_content(&note.title, &note.content)?;
        }

        if let Some(tag_list) = tags {
            draft.tags = parse_tags(Some(tag_list));
        }

        if let Some(new_color) = color {
            draft.color = Some(resolve_color(&new_color));
        }

        draft.validate()?;

        if !draft.is_dirty(&baseline) {
            println!("No changes to save.");
            return Ok(());
        }

        self.store.update(
            &id,
            NotePatch {
                title: Some(draft.title),
                content: Some(draft.content),
                tags: Some(draft.tags),
                color: draft.color,
                ..Default::default()
            },
        );

        println!("Note {} updated successfully", id);
        Ok(())
    }

    fn handle_delete(&mut self, ids: Vec<String>, force: bool) -> Result<()> {
        let known: Vec<String> = ids
            .iter()
            .filter(|id| self.store.get(id).is_some())
            .cloned()
            .collect();

        for id in &ids {
            if !known.contains(id) {
                println!("Note not found: {}", id);
            }
        }

        if known.is_empty() {
            println!("No matching notes to delete.");
            return Ok(());
        }

        if !force {
            let prompt = format!(
                "Permanently delete {} note{}? This cannot be undone. [y/N] ",
                known.len(),
                if known.len() == 1 { "" } else { "s" }
            );
            if !self.confirm(&prompt)? {
                println!("Aborted.");
                return Ok(());
            }
        }

        let removed = if let [id] = known.as_slice() {
            usize::from(self.store.delete(id))
        } else {
            // Bulk deletes route through the selection set so the removal
            // happens as one state transition.
            self.store.clear_selection();
            for id in &known {
                self.store.toggle_selection(id);
            }
            self.store.delete_selected()
        };

        println!(
            "Deleted {} note{}",
            removed,
            if removed == 1 { "" } else { "s" }
        );
        Ok(())
    }

    fn handle_tag(
        &mut self,
        id: &str,
        add: Option<String>,
        remove: Option<String>,
        list: bool,
    ) -> Result<()> {
        if self.store.get(id).is_none() {
            return Err(NoteError::NoteNotFound { id: id.to_string() });
        }

        if let Some(tags_to_add) = add {
            for tag in parse_tags(Some(tags_to_add)) {
                match self.store.add_tag(id, &tag) {
                    Some(_) => println!("Added tag: {}", tag),
                    None => println!("Tag already present: {}", tag),
                }
            }
        }

        if let Some(tags_to_remove) = remove {
            for tag in parse_tags(Some(tags_to_remove)) {
                self.store.remove_tag(id, &tag);
                println!("Removed tag: {}", tag);
            }
        }

        if list {
            // Re-read after any mutations above
            let note = self
                .store
                .get(id)
                .ok_or_else(|| NoteError::NoteNotFound { id: id.to_string() })?;
            if note.tags.is_empty() {
                println!("No tags on note {}", id);
            } else {
                for tag in &note.tags {
                    println!("#{}", tag);
                }
            }
        }

        Ok(())
    }

    fn handle_pin(&mut self, id: &str) -> Result<()> {
        let note = self
            .store
            .toggle_pin(id)
            .ok_or_else(|| NoteError::NoteNotFound { id: id.to_string() })?;

        if note.is_pinned {
            println!("Pinned note {}", note.id);
        } else {
            println!("Unpinned note {}", note.id);
        }
        Ok(())
    }

    fn handle_bookmark(&mut self, id: &str) -> Result<()> {
        let note = self
            .store
            .toggle_bookmark(id)
            .ok_or_else(|| NoteError::NoteNotFound { id: id.to_string() })?;

        if note.is_bookmarked {
            println!("Bookmarked note {}", note.id);
        } else {
            println!("Removed bookmark from note {}", note.id);
        }
        Ok(())
    }

    fn handle_color(&mut self, id: &str, color: &str) -> Result<()> {
        let resolved = resolve_color(color);
        let note = self
            .store
            .set_color(id, resolved)
            .ok_or_else(|| NoteError::NoteNotFound { id: id.to_string() })?;

        println!("Set color of note {} to {}", note.id, note.color);
        Ok(())
    }

    /// Ask the user a yes/no question on stdout, defaulting to no.
    fn confirm(&self, prompt: &str) -> Result<bool> {
        print!("{}", prompt);
        stdout().flush()?;

        let mut answer = String::new();
        stdin().read_line(&mut answer)?;
        let answer = answer.trim().to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }

    /// Display notes in the requested format
    fn display_notes(&self, notes: &[&Note], json: bool, brief: bool) -> Result<()> {
        if notes.is_empty() {
            println!("No notes found matching the criteria.");
            return Ok(());
        }

        if json {
            self.display_notes_json(notes, brief)?;
        } else {
            self.display_notes_text(notes, brief)?;
        }

        // Print count at the end
        println!(
            "\nFound {} note{}",
            notes.len(),
            if notes.len() == 1 { "" } else { "s" }
        );

        Ok(())
    }

    /// Display notes in JSON format
    fn display_notes_json(&self, notes: &[&Note], brief: bool) -> Result<()> {
        if brief {
            // Simplified notes with just id, title, flags, and tags
            let simplified: Vec<serde_json::Value> = notes
                .iter()
                .map(|note| {
                    serde_json::json!({
                        "id": note.id,
                        "title": note.title,
                        "isPinned": note.is_pinned,
                        "isBookmarked": note.is_bookmarked,
                        "tags": note.tags,
                        "updatedAt": note.updated_at.to_rfc3339(),
                    })
                })
                .collect();

            println!("{}", serde_json::to_string_pretty(&simplified)?);
        } else {
            // Full notes with all fields
            let full: Vec<&Note> = notes.to_vec();
            println!("{}", serde_json::to_string_pretty(&full)?);
        }

        Ok(())
    }

    /// Display notes in text format
    fn display_notes_text(&self, notes: &[&Note], brief: bool) -> Result<()> {
        // Use terminal width for formatting if available
        let term_width = terminal_size::terminal_size()
            .map(|(w, _)| w.0 as usize)
            .unwrap_or(80);

        for (i, note) in notes.iter().enumerate() {
            // Add separator between notes (except before the first)
            if i > 0 {
                println!("{}", "-".repeat(term_width.min(50)));
            }

            let updated_at = note.updated_at.format("%Y-%m-%d %H:%M");
            println!("ID: {} | Updated: {}{}", note.id, updated_at, flag_markers(note));
            println!("Title: {}", console::style(&note.title).bold());

            if !note.tags.is_empty() {
                let tags = note
                    .tags
                    .iter()
                    .map(|tag| format!("#{}", tag))
                    .collect::<Vec<_>>()
                    .join(" ");

                println!("Tags: {}", console::style(tags).cyan());
            }

            if self.verbose {
                if !note.content.is_empty() {
                    println!("\n{}", note.content);
                }
            } else if !brief {
                let preview = self.get_content_preview(&note.content, 100);
                if !preview.is_empty() {
                    println!("\n{}", preview);
                }
            }
        }

        Ok(())
    }

    /// Full single-note display used by the view command
    fn display_note_detail(&self, note: &Note) {
        println!("ID: {}{}", note.id, flag_markers(note));
        println!("Title: {}", console::style(&note.title).bold());

        if !note.tags.is_empty() {
            let tags = note
                .tags
                .iter()
                .map(|tag| format!("#{}", tag))
                .collect::<Vec<_>>()
                .join(" ");
            println!("Tags: {}", console::style(tags).cyan());
        }

        println!("Color: {}", note.color);
        println!("Created: {}", note.created_at.format("%Y-%m-%d %H:%M"));
        println!("Updated: {}", note.updated_at.format("%Y-%m-%d %H:%M"));

        if !note.content.is_empty() {
            println!("\n{}", note.content);
        }
    }

    /// Generate a content preview for displaying brief notes
    fn get_content_preview(&self, content: &str, max_len: usize) -> String {
        // Get first non-empty line
        let first_line = content
            .lines()
            .find(|line| !line.trim().is_empty())
            .unwrap_or("");

        if first_line.chars().count() <= max_len {
            first_line.to_string()
        } else {
            let truncated: String = first_line.chars().take(max_len).collect();
            format!("{}...", truncated)
        }
    }

    fn open_editor_for_content(&self, title: &str) -> Result<String> {
        // Create a temporary file the editor can work in
        let temp_file = Builder::new().suffix(".txt").tempfile()?;
        let temp_path = temp_file.path().to_path_buf();

        // Get editor from config or environment
        let editor_cmd = self.config.get_editor_command();

        // Write template to the temp file
        self.write_editor_template(&temp_path, title)?;

        // Open editor
        info!("Opening editor to write note content. Save and exit when done...");
        self.launch_editor(&editor_cmd, &temp_path)?;

        // Read and process the content
        let content = read_to_string(&temp_path)?;
        Ok(process_editor_content(&content))
    }

    fn open_editor_with_content(&self, title: &str, existing_content: &str) -> Result<String> {
        let temp_file = Builder::new().suffix(".txt").tempfile()?;
        let temp_path = temp_file.path().to_path_buf();

        let editor_cmd = self.config.get_editor_command();

        {
            let mut file = OpenOptions::new().write(true).open(&temp_path)?;
            writeln!(file, "<!--")?;
            writeln!(file, "Editing note: {}", title)?;
            writeln!(file, "Save and exit the editor when you're done.")?;
            writeln!(file, "-->")?;
            writeln!(file)?;
            write!(file, "{}", existing_content)?;
        }

        info!("Opening editor with existing note content...");
        self.launch_editor(&editor_cmd, &temp_path)?;

        let content = read_to_string(&temp_path)?;
        Ok(process_editor_content(&content))
    }

    fn write_editor_template(&self, path: &Path, title: &str) -> Result<()> {
        let mut file = OpenOptions::new().write(true).open(path)?;

        // Write template with helpful comments
        writeln!(file, "<!--")?;
        writeln!(file, "Write the content for \"{}\" below.", title)?;
        writeln!(
            file,
            "Lines between <!-- and --> are comments and will be ignored."
        )?;
        writeln!(file, "Save and exit the editor when you're done.")?;
        writeln!(file, "-->")?;
        writeln!(file)?;

        Ok(())
    }

    fn launch_editor(&self, editor_cmd: &str, file_path: &Path) -> Result<()> {
        // Convert file path to string once
        let path_str = file_path.to_string_lossy();

        // Handle shell-like command parsing
        let args = split(editor_cmd).map_err(|e| NoteError::EditorError {
            message: format!("Failed to parse editor command: {}", e),
        })?;

        if args.is_empty() {
            return Err(NoteError::EditorError {
                message: "Empty editor command".to_string(),
            });
        }

        // First word is the program name, rest are arguments
        let program = &args[0];

        let mut command = Command::new(program);
        if args.len() > 1 {
            command.args(&args[1..]);
        }
        command.arg(path_str.as_ref());

        let status = command.status()?;
        if !status.success() {
            return Err(NoteError::EditorError {
                message: "Editor exited with non-zero status".to_string(),
            });
        }

        Ok(())
    }

    // Helper function for reading content from file
    fn read_content_from_file(&self, file_path: &Path) -> Result<String> {
        if !file_path.exists() {
            return Err(NoteError::FileNotFound {
                file_path: file_path.display().to_string(),
            });
        }

        if !file_path.is_file() {
            return Err(NoteError::ApplicationError {
                message: format!("Not a file: {}", file_path.display()),
            });
        }

        read_to_string(file_path).map_err(NoteError::Io)
    }
}

/// Strips comment blocks from editor output and trims surrounding blank
/// lines. A line opening with `<!--` starts a comment that runs until a
/// line ending with `-->`.
fn process_editor_content(content: &str) -> String {
    let mut in_comment = false;

    let kept: Vec<&str> = content
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            if in_comment {
                if trimmed.ends_with("-->") {
                    in_comment = false;
                }
                return false;
            }
            if trimmed.starts_with("<!--") {
                in_comment = !trimmed.ends_with("-->");
                return false;
            }
            true
        })
        .collect();

    kept.join("\n").trim().to_string()
}

/// Short status suffix showing pin/bookmark flags in listings.
fn flag_markers(note: &Note) -> String {
    let mut markers = String::new();
    if note.is_pinned {
        markers.push_str(" [pinned]");
    }
    if note.is_bookmarked {
        markers.push_str(" [bookmarked]");
    }
    markers
}

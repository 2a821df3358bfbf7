use std::collections::HashSet;
use std::{fs, thread, time::Duration};

use swiftnote::{NoteDraft, NotePatch, NoteStore, NotesSlot, DEFAULT_NOTE_COLOR};
use tempfile::TempDir;

/// Opens a store over an empty persisted collection in the given directory.
fn empty_store(dir: &TempDir) -> NoteStore {
    let path = dir.path().join("notes.json");
    fs::write(&path, "[]").unwrap();
    NoteStore::open(NotesSlot::new(path))
}

fn draft(title: &str) -> NoteDraft {
    NoteDraft {
        title: title.to_string(),
        ..Default::default()
    }
}

// Utc::now has sub-millisecond resolution; spacing mutations keeps the
// updated_at ordering assertions deterministic.
fn tick() {
    thread::sleep(Duration::from_millis(5));
}

#[test]
fn create_assigns_pairwise_distinct_ids() {
    let dir = TempDir::new().unwrap();
    let mut store = empty_store(&dir);

    let mut ids = HashSet::new();
    for i in 0..50 {
        let note = store.create(draft(&format!("note {i}")));
        ids.insert(note.id);
    }

    assert_eq!(ids.len(), 50);
}

#[test]
fn create_sets_defaults_and_prepends() {
    let dir = TempDir::new().unwrap();
    let mut store = empty_store(&dir);

    let first = store.create(NoteDraft {
        title: "A".to_string(),
        content: String::new(),
        tags: vec![],
        color: Some("#FFF9C4".to_string()),
    });
    assert!(!first.is_pinned);
    assert!(!first.is_bookmarked);
    assert_eq!(first.created_at, first.updated_at);
    assert_eq!(first.color, "#FFF9C4");

    let second = store.create(draft("B"));
    assert_eq!(second.color, DEFAULT_NOTE_COLOR);

    // Newest-first creation convention
    assert_eq!(store.notes()[0].id, second.id);
    assert_eq!(store.notes()[1].id, first.id);
}

#[test]
fn update_merges_fields_and_bumps_timestamp() {
    let dir = TempDir::new().unwrap();
    let mut store = empty_store(&dir);

    let note = store.create(NoteDraft {
        title: "before".to_string(),
        content: "body".to_string(),
        ..Default::default()
    });
    tick();

    let updated = store
        .update(
            &note.id,
            NotePatch {
                title: Some("after".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.title, "after");
    assert_eq!(updated.content, "body");
    assert_eq!(updated.created_at, note.created_at);
    assert!(updated.updated_at > note.updated_at);
    assert!(updated.updated_at >= updated.created_at);
}

#[test]
fn update_unknown_id_is_a_noop() {
    let dir = TempDir::new().unwrap();
    let mut store = empty_store(&dir);
    let note = store.create(draft("only"));

    let result = store.update(
        "missing",
        NotePatch {
            title: Some("ghost".to_string()),
            ..Default::default()
        },
    );

    assert!(result.is_none());
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(&note.id).unwrap().updated_at, note.updated_at);
}

#[test]
fn delete_removes_note_and_purges_selection() {
    let dir = TempDir::new().unwrap();
    let mut store = empty_store(&dir);

    let note = store.create(draft("doomed"));
    store.toggle_selection(&note.id);
    assert!(store.is_selected(&note.id));

    assert!(store.delete(&note.id));
    assert!(store.get(&note.id).is_none());
    assert!(!store.is_selected(&note.id));
    assert!(store.selected_ids().is_empty());
}

#[test]
fn delete_unknown_id_is_a_noop() {
    let dir = TempDir::new().unwrap();
    let mut store = empty_store(&dir);
    store.create(draft("kept"));

    assert!(!store.delete("missing"));
    assert_eq!(store.len(), 1);
}

#[test]
fn toggle_selection_is_involutive() {
    let dir = TempDir::new().unwrap();
    let mut store = empty_store(&dir);
    let note = store.create(draft("n"));

    assert!(!store.is_selected(&note.id));
    store.toggle_selection(&note.id);
    assert!(store.is_selected(&note.id));
    store.toggle_selection(&note.id);
    assert!(!store.is_selected(&note.id));
}

#[test]
fn selection_ignores_unknown_ids() {
    let dir = TempDir::new().unwrap();
    let mut store = empty_store(&dir);
    store.create(draft("n"));

    store.toggle_selection("missing");
    assert!(store.selected_ids().is_empty());
}

#[test]
fn toggle_pin_restores_flag_with_strictly_increasing_timestamps() {
    let dir = TempDir::new().unwrap();
    let mut store = empty_store(&dir);
    let note = store.create(draft("n"));

    tick();
    let once = store.toggle_pin(&note.id).unwrap();
    assert!(once.is_pinned);
    assert!(once.updated_at > note.updated_at);

    tick();
    let twice = store.toggle_pin(&note.id).unwrap();
    assert!(!twice.is_pinned);
    assert!(twice.updated_at > once.updated_at);
}

#[test]
fn toggle_bookmark_flips_the_flag() {
    let dir = TempDir::new().unwrap();
    let mut store = empty_store(&dir);
    let note = store.create(draft("n"));

    assert!(store.toggle_bookmark(&note.id).unwrap().is_bookmarked);
    assert!(!store.toggle_bookmark(&note.id).unwrap().is_bookmarked);
    assert!(store.toggle_pin("missing").is_none());
    assert!(store.toggle_bookmark("missing").is_none());
}

#[test]
fn set_color_changes_only_the_color() {
    let dir = TempDir::new().unwrap();
    let mut store = empty_store(&dir);
    let note = store.create(draft("n"));

    let updated = store.set_color(&note.id, "#BBDEFB").unwrap();
    assert_eq!(updated.color, "#BBDEFB");
    assert_eq!(updated.title, note.title);
    assert_eq!(updated.tags, note.tags);
}

#[test]
fn add_tag_trims_and_is_idempotent_on_duplicates() {
    let dir = TempDir::new().unwrap();
    let mut store = empty_store(&dir);
    let note = store.create(draft("n"));

    let tagged = store.add_tag(&note.id, "  work  ").unwrap();
    assert_eq!(tagged.tags, vec!["work"]);

    // Exact duplicate: no mutation, no timestamp bump
    assert!(store.add_tag(&note.id, "work").is_none());
    let after = store.get(&note.id).unwrap();
    assert_eq!(after.tags, vec!["work"]);
    assert_eq!(after.updated_at, tagged.updated_at);

    // Case-sensitive matching: differently cased tags are distinct
    let recased = store.add_tag(&note.id, "Work").unwrap();
    assert_eq!(recased.tags, vec!["work", "Work"]);
}

#[test]
fn add_tag_rejects_empty_input() {
    let dir = TempDir::new().unwrap();
    let mut store = empty_store(&dir);
    let note = store.create(draft("n"));

    assert!(store.add_tag(&note.id, "   ").is_none());
    assert!(store.get(&note.id).unwrap().tags.is_empty());
}

#[test]
fn remove_tag_removes_exact_match() {
    let dir = TempDir::new().unwrap();
    let mut store = empty_store(&dir);
    let note = store.create(NoteDraft {
        title: "n".to_string(),
        tags: vec!["work".to_string(), "home".to_string()],
        ..Default::default()
    });

    let updated = store.remove_tag(&note.id, "work").unwrap();
    assert_eq!(updated.tags, vec!["home"]);
}

#[test]
fn remove_tag_bumps_timestamp_even_when_absent() {
    // Removal always routes through the update path on an existing note.
    let dir = TempDir::new().unwrap();
    let mut store = empty_store(&dir);
    let note = store.create(draft("n"));

    tick();
    let updated = store.remove_tag(&note.id, "never-there").unwrap();
    assert!(updated.tags.is_empty());
    assert!(updated.updated_at > note.updated_at);

    assert!(store.remove_tag("missing", "x").is_none());
}

#[test]
fn delete_selected_is_one_atomic_transition() {
    let dir = TempDir::new().unwrap();
    let mut store = empty_store(&dir);

    let c = store.create(draft("c"));
    let b = store.create(draft("b"));
    let a = store.create(draft("a"));

    store.toggle_selection(&a.id);
    store.toggle_selection(&c.id);

    let removed = store.delete_selected();
    assert_eq!(removed, 2);

    let remaining: Vec<&str> = store.notes().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(remaining, vec![b.id.as_str()]);
    assert!(store.selected_ids().is_empty());
}

#[test]
fn delete_selected_with_empty_selection_removes_nothing() {
    let dir = TempDir::new().unwrap();
    let mut store = empty_store(&dir);
    store.create(draft("n"));

    assert_eq!(store.delete_selected(), 0);
    assert_eq!(store.len(), 1);
}

#[test]
fn select_all_then_clear_selection_empties_the_set() {
    let dir = TempDir::new().unwrap();
    let mut store = empty_store(&dir);

    // Zero notes: both operations are harmless
    store.select_all();
    store.clear_selection();
    assert!(store.selected_ids().is_empty());

    for i in 0..4 {
        store.create(draft(&format!("note {i}")));
    }

    store.select_all();
    assert_eq!(store.selected_ids().len(), 4);

    store.clear_selection();
    assert!(store.selected_ids().is_empty());
}

#[test]
fn search_term_is_session_state_only() {
    let dir = TempDir::new().unwrap();
    let mut store = empty_store(&dir);
    let note = store.create(draft("n"));

    store.set_search_term("groceries");
    assert_eq!(store.search_term(), "groceries");

    // Holding a search term never counts as a note mutation
    assert_eq!(store.get(&note.id).unwrap().updated_at, note.updated_at);
}

#[test]
fn lifecycle_example_scenario() {
    let dir = TempDir::new().unwrap();
    let mut store = empty_store(&dir);
    assert!(store.is_empty());

    let note = store.create(NoteDraft {
        title: "A".to_string(),
        content: String::new(),
        tags: vec![],
        color: Some("#FFF9C4".to_string()),
    });
    assert!(!note.is_pinned);
    assert!(!note.is_bookmarked);
    assert_eq!(note.created_at, note.updated_at);

    tick();
    let pinned = store
        .update(
            &note.id,
            NotePatch {
                is_pinned: Some(true),
                ..Default::default()
            },
        )
        .unwrap();
    assert!(pinned.is_pinned);
    assert!(pinned.updated_at > note.updated_at);

    assert!(store.delete(&note.id));
    assert!(store.is_empty());
    assert!(store.get(&note.id).is_none());
}

//! Read-only filtering, sorting, and search over note snapshots.
//!
//! The store never filters; these helpers implement the presentation-side
//! semantics that consumers apply to the snapshots they read.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::Note;

/// Case-insensitive substring filter over title, content, and tags.
///
/// An empty term matches everything. Collection order is preserved.
pub fn filter_notes<'a>(notes: &'a [Note], term: &str) -> Vec<&'a Note> {
    if term.is_empty() {
        return notes.iter().collect();
    }

    let needle = term.to_lowercase();
    notes
        .iter()
        .filter(|note| {
            note.title.to_lowercase().contains(&needle)
                || note.content.to_lowercase().contains(&needle)
                || note.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Display order: pinned notes first, then most recently updated.
pub fn sort_for_display(notes: &mut [&Note]) {
    notes.sort_by(|a, b| {
        b.is_pinned
            .cmp(&a.is_pinned)
            .then(b.updated_at.cmp(&a.updated_at))
    });
}

/// Searches notes by title and content using fuzzy matching.
///
/// Title matches are weighted twice as heavily as content matches; results
/// come back sorted by relevance score, best first.
pub fn search_ranked(notes: &[Note], query: &str) -> Vec<Note> {
    let matcher = SkimMatcherV2::default();

    let mut matched: Vec<(i64, &Note)> = notes
        .iter()
        .filter_map(|note| {
            let title_score = matcher.fuzzy_match(&note.title, query).unwrap_or(0);
            let content_score = matcher.fuzzy_match(&note.content, query).unwrap_or(0);

            let score = title_score * 2 + content_score;
            (score > 0).then_some((score, note))
        })
        .collect();

    matched.sort_by(|a, b| b.0.cmp(&a.0));
    matched.into_iter().map(|(_, note)| note.clone()).collect()
}

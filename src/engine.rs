use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, info};

use crate::index::SearchIndex;
use crate::record::Bookmark;
use crate::synonyms::expand;
use crate::tokenizer::tokenize;

/// Which pass produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Semantic,
}

/// One ranked hit. `matches` and `highlights` are carried for the consuming
/// layer's result shape and are empty on both paths.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub bookmark: Bookmark,
    pub score: f32,
    pub kind: MatchKind,
    pub matches: Vec<String>,
    pub highlights: HashMap<String, String>,
}

// Display scaling for the semantic tier. The ceiling keeps every semantic
// hit strictly below the exact-match score of 1.0.
const SEMANTIC_SCALE: f32 = 10.0;
const SEMANTIC_CEILING: f32 = 0.99;

/// Search engine over one bookmark snapshot.
///
/// Holds the record set and the index derived from it. `update_bookmarks`
/// replaces both together, so a search always sees a single consistent
/// snapshot.
pub struct SearchEngine {
    bookmarks: Vec<Bookmark>,
    index: SearchIndex,
}

impl SearchEngine {
    pub fn new(bookmarks: Vec<Bookmark>) -> Self {
        let index = SearchIndex::build(&bookmarks);
        SearchEngine { bookmarks, index }
    }

    /// Replace the snapshot and rebuild the whole index from it.
    pub fn update_bookmarks(&mut self, bookmarks: Vec<Bookmark>) {
        self.index = SearchIndex::build(&bookmarks);
        self.bookmarks = bookmarks;
        info!(docs = self.bookmarks.len(), "bookmark index rebuilt");
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    /// Run the exact pass, then the semantic pass, and return the merged
    /// ranked list. Exact matches keep the snapshot order and score 1.0;
    /// semantic matches are TF-IDF ranked and clamped below 1.0, so every
    /// exact match outranks every semantic one.
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        let mut results = Vec::new();
        let mut exact_ids: HashSet<&str> = HashSet::new();

        for bookmark in &self.bookmarks {
            if contains_query(bookmark, &needle) {
                exact_ids.insert(bookmark.id.as_str());
                results.push(result(bookmark, 1.0, MatchKind::Exact));
            }
        }

        let query_terms = expand(&tokenize(query));
        let mut scored: Vec<(usize, &Bookmark, f32)> = Vec::new();
        for (pos, bookmark) in self.bookmarks.iter().enumerate() {
            if exact_ids.contains(bookmark.id.as_str()) {
                continue;
            }
            let raw = self.index.score(&bookmark.id, &query_terms);
            if raw > 0.0 {
                scored.push((pos, bookmark, raw));
            }
        }
        // descending score, snapshot position as tie-break
        scored.sort_by(|a, b| {
            b.2.partial_cmp(&a.2)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        for (_, bookmark, raw) in scored {
            let display = (raw * SEMANTIC_SCALE).min(SEMANTIC_CEILING);
            results.push(result(bookmark, display, MatchKind::Semantic));
        }

        debug!(query, hits = results.len(), "search completed");
        results
    }
}

fn result(bookmark: &Bookmark, score: f32, kind: MatchKind) -> SearchResult {
    SearchResult {
        bookmark: bookmark.clone(),
        score,
        kind,
        matches: Vec::new(),
        highlights: HashMap::new(),
    }
}

/// Case-insensitive substring check over the searchable fields.
fn contains_query(bookmark: &Bookmark, needle: &str) -> bool {
    if bookmark.title.to_lowercase().contains(needle)
        || bookmark.url.to_lowercase().contains(needle)
    {
        return true;
    }
    if bookmark
        .ai_summary
        .as_deref()
        .map_or(false, |s| s.to_lowercase().contains(needle))
    {
        return true;
    }
    if bookmark.ai_tags.as_ref().map_or(false, |tags| {
        tags.iter().any(|t| t.to_lowercase().contains(needle))
    }) {
        return true;
    }
    bookmark
        .ai_category
        .as_deref()
        .map_or(false, |c| c.to_lowercase().contains(needle))
}

/// Cloneable lazy handle around a `SearchEngine`, owned by the composing
/// application.
///
/// Searching before any records were supplied builds against an empty
/// corpus instead of failing. The lock covers the whole rebuild, so a
/// concurrent search observes either the old or the new snapshot in full.
#[derive(Clone, Default)]
pub struct SharedEngine {
    inner: Arc<Mutex<Option<SearchEngine>>>,
}

impl SharedEngine {
    pub fn new() -> Self {
        SharedEngine {
            inner: Arc::new(Mutex::new(None)),
        }
    }

    /// Build the engine on first call, rebuild it on later ones.
    pub fn update_bookmarks(&self, bookmarks: Vec<Bookmark>) {
        let mut guard = self.inner.lock();
        match guard.as_mut() {
            Some(engine) => engine.update_bookmarks(bookmarks),
            None => *guard = Some(SearchEngine::new(bookmarks)),
        }
    }

    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        let mut guard = self.inner.lock();
        guard
            .get_or_insert_with(|| SearchEngine::new(Vec::new()))
            .search(query)
    }

    /// Snapshot size; zero before any records arrive.
    pub fn len(&self) -> usize {
        self.inner.lock().as_ref().map_or(0, SearchEngine::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

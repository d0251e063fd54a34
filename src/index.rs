use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::extract::extract_terms;
use crate::record::Bookmark;

/// Inverted index over one bookmark snapshot.
///
/// Postings, per-document term weights and the IDF table are all derived
/// from the same record set in a single `build` call and replaced together
/// on rebuild; nothing here is updated incrementally, because IDF depends
/// on the final corpus-wide document frequencies.
#[derive(Debug, Default, Clone)]
pub struct SearchIndex {
    /// term -> ids of bookmarks containing it
    postings: HashMap<String, HashSet<String>>,
    /// bookmark id -> term -> normalized term frequency
    doc_weights: HashMap<String, HashMap<String, f32>>,
    /// term -> ln(N / df + 1)
    idf: HashMap<String, f32>,
    num_docs: usize,
}

impl SearchIndex {
    /// Two-pass build: term frequencies and postings first, then IDF from
    /// the final document frequencies. An empty record set yields an empty
    /// index, not an error.
    pub fn build(bookmarks: &[Bookmark]) -> Self {
        let mut postings: HashMap<String, HashSet<String>> = HashMap::new();
        let mut doc_weights: HashMap<String, HashMap<String, f32>> =
            HashMap::with_capacity(bookmarks.len());

        for bookmark in bookmarks {
            let terms = extract_terms(bookmark);
            // extraction deduplicates, so each term occurs once and TF
            // normalizes to 1 / |terms|
            let tf = if terms.is_empty() {
                0.0
            } else {
                1.0 / terms.len() as f32
            };
            let mut weights = HashMap::with_capacity(terms.len());
            for term in terms {
                postings
                    .entry(term.clone())
                    .or_default()
                    .insert(bookmark.id.clone());
                weights.insert(term, tf);
            }
            doc_weights.insert(bookmark.id.clone(), weights);
        }

        let n = bookmarks.len() as f32;
        let mut idf = HashMap::with_capacity(postings.len());
        for (term, ids) in &postings {
            idf.insert(term.clone(), (n / ids.len() as f32 + 1.0).ln());
        }

        debug!(
            docs = bookmarks.len(),
            vocabulary = postings.len(),
            "search index built"
        );

        SearchIndex {
            postings,
            doc_weights,
            idf,
            num_docs: bookmarks.len(),
        }
    }

    /// TF-IDF relevance of one bookmark for a set of query terms. Terms the
    /// document does not contain contribute zero; an id missing from the
    /// index scores zero.
    pub fn score(&self, id: &str, query_terms: &HashSet<String>) -> f32 {
        let weights = match self.doc_weights.get(id) {
            Some(weights) => weights,
            None => return 0.0,
        };
        query_terms
            .iter()
            .filter_map(|term| {
                let tf = weights.get(term)?;
                let idf = self.idf.get(term)?;
                Some(tf * idf)
            })
            .sum()
    }

    pub fn num_docs(&self) -> usize {
        self.num_docs
    }

    /// Number of distinct terms in the index.
    pub fn vocabulary_len(&self) -> usize {
        self.postings.len()
    }

    /// Number of bookmarks containing `term`.
    pub fn doc_freq(&self, term: &str) -> usize {
        self.postings.get(term).map_or(0, HashSet::len)
    }
}

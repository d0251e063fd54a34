//! Semantic search over a bookmark collection.
//!
//! Combines an exact substring pass with TF-IDF ranked fuzzy matching over
//! mixed Latin/CJK text. The index is rebuilt whole from each record
//! snapshot; there is no incremental update path.

pub mod engine;
pub mod extract;
pub mod index;
pub mod record;
pub mod synonyms;
pub mod tokenizer;

pub use engine::{MatchKind, SearchEngine, SearchResult, SharedEngine};
pub use index::SearchIndex;
pub use record::Bookmark;

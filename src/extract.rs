use std::collections::HashSet;
use url::Url;

use crate::record::Bookmark;
use crate::synonyms;
use crate::tokenizer::tokenize;

/// Collect the deduplicated term set for one bookmark.
///
/// Unions terms from the title, URL host labels, AI summary, AI tags, AI
/// category (plus its fixed keyword list) and folder-path segments (plus
/// their synonym associations). Missing optional fields and unparseable
/// URLs contribute nothing; extraction itself cannot fail.
pub fn extract_terms(bookmark: &Bookmark) -> HashSet<String> {
    let mut terms = tokenize(&bookmark.title);

    host_label_terms(&bookmark.url, &mut terms);

    if let Some(summary) = &bookmark.ai_summary {
        terms.extend(tokenize(summary));
    }
    if let Some(tags) = &bookmark.ai_tags {
        for tag in tags {
            terms.extend(tokenize(tag));
        }
    }
    if let Some(category) = &bookmark.ai_category {
        terms.extend(tokenize(category));
        if let Some(keywords) = synonyms::category_keywords(category) {
            terms.extend(keywords.iter().map(|k| (*k).to_string()));
        }
    }
    if let Some(path) = &bookmark.folder_path {
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            terms.extend(tokenize(segment));
            terms.extend(synonyms::segment_associations(segment));
        }
    }

    terms
}

/// Tokenize the host labels of `raw`, skipping short labels and "www".
/// A URL that fails to parse contributes nothing.
fn host_label_terms(raw: &str, terms: &mut HashSet<String>) {
    let parsed = match Url::parse(raw) {
        Ok(parsed) => parsed,
        Err(_) => return,
    };
    let host = match parsed.host_str() {
        Some(host) => host,
        None => return,
    };
    for label in host.split('.') {
        if label.len() <= 2 || label.eq_ignore_ascii_case("www") {
            continue;
        }
        terms.extend(tokenize(label));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_and_host_labels() {
        let b = Bookmark::new("b1", "React 官方文档", "https://react.dev");
        let terms = extract_terms(&b);
        assert!(terms.contains("react"));
        assert!(terms.contains("官方文档"));
        assert!(terms.contains("dev"));
    }

    #[test]
    fn short_and_www_labels_are_skipped() {
        let b = Bookmark::new("b1", "t", "https://www.example.co.uk");
        let terms = extract_terms(&b);
        assert!(terms.contains("example"));
        assert!(!terms.contains("www"));
        assert!(!terms.contains("co"));
        assert!(!terms.contains("uk"));
    }

    #[test]
    fn malformed_url_contributes_nothing() {
        let b = Bookmark::new("b1", "Broken link", "not a url");
        let terms = extract_terms(&b);
        assert!(terms.contains("broken"));
        assert!(terms.contains("link"));
        // nothing leaked from the unparseable url string
        assert!(!terms.contains("not"));
        assert!(!terms.contains("url"));
    }

    #[test]
    fn optional_fields_contribute_terms() {
        let mut b = Bookmark::new("b1", "t", "https://example.com");
        b.ai_summary = Some("MySQL 索引".into());
        b.ai_tags = Some(vec!["performance".into(), "数据库".into()]);
        b.ai_category = Some("Development".into());
        let terms = extract_terms(&b);
        assert!(terms.contains("mysql"));
        assert!(terms.contains("performance"));
        assert!(terms.contains("数据库"));
        assert!(terms.contains("development"));
        // verbatim category keywords
        assert!(terms.contains("开发"));
        assert!(terms.contains("dev"));
    }

    #[test]
    fn folder_segments_expand_through_synonyms() {
        let mut b = Bookmark::new("b1", "t", "https://example.com");
        b.folder_path = Some("资料/前端".into());
        let terms = extract_terms(&b);
        assert!(terms.contains("资料"));
        assert!(terms.contains("前端"));
        // segment matched the 前端 synonym entry, pulling in its values
        assert!(terms.contains("vue"));
        assert!(terms.contains("react"));
    }

    #[test]
    fn empty_folder_segments_are_dropped() {
        let mut b = Bookmark::new("b1", "t", "https://example.com");
        b.folder_path = Some("//tech//".into());
        let terms = extract_terms(&b);
        assert!(terms.contains("tech"));
    }
}

use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

lazy_static! {
    /// Static bidirectional association table. Keys and values are already
    /// normalized (lowercase); the table is built once and never mutated,
    /// so concurrent readers need no synchronization.
    static ref SYNONYMS: HashMap<&'static str, &'static [&'static str]> = {
        let entries: &[(&str, &[&str])] = &[
            ("数据库", &["mysql", "postgresql", "mongodb", "redis", "sql"]),
            ("前端", &["frontend", "javascript", "css", "html", "vue", "react"]),
            ("后端", &["backend", "server", "api"]),
            ("javascript", &["js", "node", "nodejs", "es6"]),
            ("人工智能", &["ai", "chatgpt", "llm", "机器学习"]),
            ("机器学习", &["ml", "pytorch", "tensorflow"]),
            ("容器", &["docker", "kubernetes", "k8s"]),
            ("开源", &["opensource", "github", "gitlab"]),
            ("教程", &["tutorial", "guide", "course", "入门"]),
            ("文档", &["docs", "documentation", "手册"]),
            ("设计", &["design", "ui", "ux", "figma"]),
            ("工具", &["tool", "tools", "utility", "效率"]),
            ("搜索", &["search", "google", "百度"]),
            ("笔记", &["note", "notes", "notion", "obsidian"]),
            ("视频", &["video", "youtube", "bilibili"]),
            ("音乐", &["music", "spotify", "歌曲"]),
            ("购物", &["shopping", "taobao", "电商"]),
            ("新闻", &["news", "资讯", "头条"]),
            ("阅读", &["reading", "rss", "read"]),
            ("游戏", &["game", "games", "steam"]),
            ("学习", &["study", "learning", "课程"]),
            ("编程", &["coding", "programming", "代码"]),
            ("安全", &["security", "加密", "隐私"]),
            ("测试", &["test", "testing", "qa"]),
        ];
        entries.iter().copied().collect()
    };

    /// Fixed category -> keyword associations, added verbatim to a record's
    /// term set when its AI category matches.
    static ref CATEGORY_KEYWORDS: HashMap<&'static str, &'static [&'static str]> = {
        let entries: &[(&str, &[&str])] = &[
            ("Development", &["开发", "编程", "代码", "dev", "code", "programming"]),
            ("Design", &["设计", "创意", "ui", "ux"]),
            ("Education", &["教育", "学习", "课程", "教程"]),
            ("Entertainment", &["娱乐", "视频", "音乐", "游戏"]),
            ("News", &["新闻", "资讯", "时事"]),
            ("Shopping", &["购物", "电商", "优惠"]),
            ("Social", &["社交", "社区", "论坛"]),
            ("Tools", &["工具", "效率", "实用"]),
            ("Reference", &["参考", "文档", "手册"]),
            ("Finance", &["金融", "财经", "投资", "理财"]),
        ];
        entries.iter().copied().collect()
    };
}

/// Expand a term set by exactly one hop through the synonym table.
///
/// For each input term: if it is a key, its values are added; any entry
/// whose value list contains it contributes that entry's key and all of its
/// values. Terms added here are not looked up again, so the relation stays
/// symmetric but non-transitive.
pub fn expand(terms: &HashSet<String>) -> HashSet<String> {
    let mut expanded = terms.clone();
    for term in terms {
        if let Some(values) = SYNONYMS.get(term.as_str()) {
            expanded.extend(values.iter().map(|v| (*v).to_string()));
        }
        for (key, values) in SYNONYMS.iter() {
            if values.contains(&term.as_str()) {
                expanded.insert((*key).to_string());
                expanded.extend(values.iter().map(|v| (*v).to_string()));
            }
        }
    }
    expanded
}

/// Keyword list for a known AI category, if any.
pub fn category_keywords(category: &str) -> Option<&'static [&'static str]> {
    CATEGORY_KEYWORDS.get(category).copied()
}

/// Index-time associations for a folder-path segment: every synonym entry
/// whose key or any value equals or contains the segment contributes its
/// key and full value list. One hop, same symmetry rule as `expand`.
pub fn segment_associations(segment: &str) -> HashSet<String> {
    let mut terms = HashSet::new();
    let segment = segment.to_lowercase();
    if segment.is_empty() {
        return terms;
    }
    for (key, values) in SYNONYMS.iter() {
        let hit = key.contains(segment.as_str())
            || values.iter().any(|v| v.contains(segment.as_str()));
        if hit {
            terms.insert((*key).to_string());
            terms.extend(values.iter().map(|v| (*v).to_string()));
        }
    }
    terms
}

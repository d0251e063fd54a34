use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref LATIN_RUN: Regex = Regex::new(r"[a-z]+").expect("valid regex");
    /// Known multi-character CJK terms for maximal-match segmentation.
    /// Entries are 2-4 characters; anything not covered falls back to
    /// single-character terms.
    static ref CJK_DICT: HashSet<&'static str> = {
        let words: &[&str] = &[
            // 4-character compounds, tried first by the greedy matcher
            "人工智能", "机器学习", "深度学习", "神经网络", "自然语言",
            "性能优化", "前端开发", "后端开发", "数据分析", "数据结构",
            "设计模式", "操作系统", "官方文档", "开源项目",
            // 3-character terms
            "数据库", "浏览器", "计算机", "服务器", "客户端",
            "互联网", "程序员", "开发者", "短视频",
            // general 2-character vocabulary
            "性能", "优化", "教程", "指南", "入门", "进阶", "实战",
            "前端", "后端", "开发", "编程", "代码", "脚本", "语言",
            "编译", "调试", "测试", "部署", "架构", "框架", "算法",
            "数据", "分析", "缓存", "队列", "消息", "接口", "服务",
            "容器", "集群", "网络", "安全", "加密", "隐私", "密码",
            "日志", "监控", "模型", "训练", "推理", "智能", "源码",
            "项目", "版本", "仓库", "提交", "合并", "分支", "发布",
            "文档", "手册", "参考", "百科", "知识", "问答", "论文",
            "学术", "期刊", "报告", "图表", "表格", "模板", "素材",
            "设计", "创意", "原型", "交互", "动画", "渲染", "引擎",
            "字体", "配色", "图标", "插画", "摄影", "剪辑", "视频",
            "音频", "音乐", "播客", "电台", "电影", "动漫", "漫画",
            "小说", "文章", "专栏", "博客", "论坛", "社区", "社交",
            "新闻", "资讯", "头条", "搜索", "翻译", "词典", "地图",
            "邮箱", "账号", "登录", "注册", "支付", "订单", "快递",
            "购物", "电商", "优惠", "折扣", "会员", "直播", "游戏",
            "娱乐", "阅读", "写作", "笔记", "效率", "办公", "工具",
            "插件", "扩展", "书签", "收藏", "整理", "分类", "标签",
            "摘要", "设置", "帮助", "下载", "图片", "存储", "云端",
            "学习", "课程", "教育", "考试", "面试", "简历", "招聘",
            "创业", "产品", "运营", "营销", "广告", "金融", "财经",
            "投资", "理财", "基金", "股票", "技术", "科技", "资料",
            "生活", "美食", "旅行", "健康", "运动", "汽车", "房产",
            "官方", "开源",
        ];
        words.iter().copied().collect()
    };
}

/// Longest dictionary entry, in characters, tried by the greedy matcher.
const MAX_TERM_CHARS: usize = 4;

/// Split text into a set of normalized terms.
///
/// Latin letters are grouped into maximal runs and kept whole (lowercased,
/// runs of a single letter dropped). The remaining non-Latin text is
/// stripped of whitespace, digits and punctuation, then segmented greedily
/// left-to-right against `CJK_DICT`, longest candidate first; characters not
/// covered by any entry are emitted as one-character fallback terms.
///
/// Empty or whitespace-only input yields an empty set.
pub fn tokenize(text: &str) -> HashSet<String> {
    let mut terms = HashSet::new();
    if text.trim().is_empty() {
        return terms;
    }
    let normalized = text.nfkc().collect::<String>().to_lowercase();

    for mat in LATIN_RUN.find_iter(&normalized) {
        if mat.as_str().len() >= 2 {
            terms.insert(mat.as_str().to_string());
        }
    }

    // Non-Latin residue: alphabetic filter drops whitespace, digits
    // (fullwidth forms already folded by NFKC) and punctuation of any script.
    let residue: Vec<char> = normalized
        .chars()
        .filter(|c| c.is_alphabetic() && !c.is_ascii())
        .collect();
    segment(&residue, &mut terms);

    terms
}

/// Greedy maximal-match segmentation over a run of non-Latin characters.
fn segment(run: &[char], terms: &mut HashSet<String>) {
    let mut pos = 0;
    while pos < run.len() {
        let mut advance = 0;
        for len in (2..=MAX_TERM_CHARS).rev() {
            if pos + len > run.len() {
                continue;
            }
            let candidate: String = run[pos..pos + len].iter().collect();
            if CJK_DICT.contains(candidate.as_str()) {
                terms.insert(candidate);
                advance = len;
                break;
            }
        }
        if advance == 0 {
            // single-character fallback
            terms.insert(run[pos].to_string());
            advance = 1;
        }
        pos += advance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_runs_are_lowercased_whole() {
        let terms = tokenize("PostgreSQL and MySQL");
        assert!(terms.contains("postgresql"));
        assert!(terms.contains("mysql"));
        assert!(terms.contains("and"));
    }

    #[test]
    fn single_letter_latin_runs_are_dropped() {
        let terms = tokenize("a B c rust");
        assert_eq!(terms.len(), 1);
        assert!(terms.contains("rust"));
    }

    #[test]
    fn greedy_match_prefers_longest_entry() {
        let terms = tokenize("性能优化");
        assert!(terms.contains("性能优化"));
        assert!(!terms.contains("性能"));
        assert!(!terms.contains("优化"));
    }

    #[test]
    fn unknown_cjk_falls_back_to_single_chars() {
        let terms = tokenize("魑魅");
        assert!(terms.contains("魑"));
        assert!(terms.contains("魅"));
    }

    #[test]
    fn mixed_script_title() {
        let terms = tokenize("MySQL性能优化教程");
        assert!(terms.contains("mysql"));
        assert!(terms.contains("性能优化"));
        assert!(terms.contains("教程"));
    }

    #[test]
    fn empty_and_whitespace_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n").is_empty());
    }

    #[test]
    fn digits_and_punctuation_are_stripped() {
        let terms = tokenize("2024年，数据库！123");
        assert!(terms.contains("数据库"));
        assert!(terms.contains("年"));
        assert_eq!(terms.len(), 2);
    }
}

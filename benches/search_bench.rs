use criterion::{criterion_group, criterion_main, Criterion};
use marksearch::{Bookmark, SearchEngine, SearchIndex};

fn synthetic_corpus(n: usize) -> Vec<Bookmark> {
    let titles = [
        "MySQL性能优化教程",
        "React 官方文档",
        "Docker 容器 部署 指南",
        "Rust async programming notes",
        "机器学习 入门 课程",
        "PostgreSQL replication deep dive",
        "前端 效率 工具 合集",
        "Kubernetes operator patterns",
    ];
    (0..n)
        .map(|i| {
            let mut b = Bookmark::new(
                format!("b{i}"),
                titles[i % titles.len()],
                format!("https://site{i}.example.com/page/{i}"),
            );
            if i % 3 == 0 {
                b.ai_tags = Some(vec!["tutorial".into(), "数据库".into()]);
            }
            if i % 4 == 0 {
                b.folder_path = Some("技术/后端".into());
            }
            b
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let corpus = synthetic_corpus(1_000);
    c.bench_function("index_build_1k", |b| b.iter(|| SearchIndex::build(&corpus)));
}

fn bench_search(c: &mut Criterion) {
    let engine = SearchEngine::new(synthetic_corpus(1_000));
    c.bench_function("search_cjk_synonym", |b| b.iter(|| engine.search("数据库")));
    c.bench_function("search_latin", |b| b.iter(|| engine.search("tutorial")));
    c.bench_function("search_mixed", |b| b.iter(|| engine.search("MySQL 优化")));
}

criterion_group!(benches, bench_build, bench_search);
criterion_main!(benches);

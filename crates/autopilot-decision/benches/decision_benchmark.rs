//! Benchmarks for task analysis and strategy selection.
//!
//! Both stages are pure string processing, so a full recommendation should
//! stay well under a millisecond even for long descriptions.

use autopilot_decision::{
    AutonomousDecisionEngine, ServerProfile, StrategySelector, TaskAnalyzer, ToolCapability,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const TASKS: &[(&str, &str)] = &[
    ("simple", "List the files in the current directory"),
    ("parallel", "Analyze this project from both technical and business perspectives"),
    ("iterative", "Write a professional project description and keep improving it until it's excellent"),
    (
        "long",
        "First search the web for recent articles about Rust async runtimes and summarize them, then \
         compare the results and write a report, then save it to a file and send it to the team",
    ),
];

fn servers(count: usize) -> Vec<ServerProfile> {
    let categories = ["file_management", "web_search", "content_creation", "communication", "database"];
    (0..count)
        .map(|i| {
            ServerProfile::new(format!("server-{}", i))
                .with_capability(ToolCapability::new(format!("tool-{}", i), categories[i % categories.len()]))
        })
        .collect()
}

fn bench_analyze_task(c: &mut Criterion) {
    let analyzer = TaskAnalyzer::new();
    let mut group = c.benchmark_group("analyze_task");
    for (name, task) in TASKS {
        group.bench_function(*name, |b| b.iter(|| analyzer.analyze_task(black_box(task))));
    }
    group.finish();
}

fn bench_select_strategy(c: &mut Criterion) {
    let analyzer = TaskAnalyzer::new();
    let selector = StrategySelector::new();
    let available = servers(50);
    let analysis = analyzer.analyze_task(TASKS[3].1);

    c.bench_function("select_strategy_50_servers", |b| {
        b.iter(|| selector.select_strategy(black_box(&analysis), black_box(&available)));
    });
}

fn bench_full_recommendation(c: &mut Criterion) {
    let engine = AutonomousDecisionEngine::new();
    let available = servers(10);

    c.bench_function("analyze_and_recommend", |b| {
        b.iter(|| engine.analyze_and_recommend(black_box(TASKS[1].1), black_box(&available)));
    });
}

criterion_group!(benches, bench_analyze_task, bench_select_strategy, bench_full_recommendation);
criterion_main!(benches);

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use folio::state::work_list::derive_list;
use folio::{Category, WorkItem, WorkListController};

const CATEGORIES: [&str; 4] = ["brand-identity", "web-design", "web-development", "media"];

/// Create N works spread over the four categories, half of them ordered
fn create_works(count: usize) -> Vec<WorkItem> {
    (0..count)
        .map(|i| WorkItem {
            id: format!("work-{i}"),
            title: format!("Work {}", count - i),
            order: (i % 2 == 0).then_some((i % 7) as i64),
            categories: vec![Category {
                title: CATEGORIES[i % 4].to_string(),
                slug: CATEGORIES[i % 4].to_string(),
            }],
            ..Default::default()
        })
        .collect()
}

fn create_categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|slug| Category {
            title: slug.to_string(),
            slug: slug.to_string(),
        })
        .collect()
}

/// Benchmark filtering and sorting the catalog
fn bench_derive_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive_list");

    for work_count in [10, 100, 1000].iter() {
        let works = create_works(*work_count);

        group.bench_with_input(
            BenchmarkId::new("all", work_count),
            work_count,
            |b, _| {
                b.iter(|| derive_list(black_box(&works), None).len());
            },
        );
        group.bench_with_input(
            BenchmarkId::new("filtered", work_count),
            work_count,
            |b, _| {
                b.iter(|| derive_list(black_box(&works), Some("web-design")).len());
            },
        );
    }

    group.finish();
}

/// Benchmark cycling the category filter on the controller
fn bench_cycle_categories(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_next_category");

    for work_count in [10, 100, 1000].iter() {
        let mut controller =
            WorkListController::new(create_works(*work_count), create_categories(), 3);

        group.bench_with_input(
            BenchmarkId::from_parameter(work_count),
            work_count,
            |b, _| {
                b.iter(|| {
                    controller.select_next_category();
                    black_box(controller.visible().len())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_derive_list, bench_cycle_categories);
criterion_main!(benches);

// Benchmark for page rearrangement
// Measures booklet imposition and the toggle round trip across plan sizes

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use plan_binder::models::page::DayPage;
use plan_binder::models::plan::PageOrder;
use plan_binder::services::imposition;

fn numbered_pages(count: usize) -> Vec<DayPage> {
    (1..=count)
        .map(|n| DayPage::new(format!("Day {n}")).unwrap())
        .collect()
}

fn bench_booklet_arrangement(c: &mut Criterion) {
    let mut group = c.benchmark_group("booklet_arrangement");

    for count in [8usize, 128, 1024].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            let pages = numbered_pages(count);
            b.iter(|| imposition::toggle(black_box(pages.clone()), PageOrder::Reading));
        });
    }

    group.finish();
}

fn bench_toggle_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("toggle_round_trip");

    for count in [8usize, 128, 1024].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            let pages = numbered_pages(count);
            b.iter(|| {
                let (arranged, order) =
                    imposition::toggle(black_box(pages.clone()), PageOrder::Reading);
                imposition::toggle(arranged, order)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_booklet_arrangement, bench_toggle_round_trip);
criterion_main!(benches);

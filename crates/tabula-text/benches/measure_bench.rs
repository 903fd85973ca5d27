//! Benchmarks for text measurement.
//!
//! Run with: cargo bench -p tabula-text

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tabula_text::{CachedMeasurer, FontStyle, MonospaceMeasurer, TextMeasurer};

fn cell_texts(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("{:.6}", i as f64 * 1.25))
        .collect()
}

fn bench_monospace(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure/monospace");
    let measurer = MonospaceMeasurer::new();
    let font = FontStyle::default();

    for text in ["Alice", "  padded  ", "你好世界", "1234.500000"] {
        group.bench_with_input(BenchmarkId::from_parameter(text), text, |b, text| {
            b.iter(|| black_box(measurer.measure(black_box(text), &font)))
        });
    }
    group.finish();
}

fn bench_cached_render_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure/render_pass");
    let font = FontStyle::default();
    let texts = cell_texts(1_000);

    group.bench_function("uncached", |b| {
        let measurer = MonospaceMeasurer::new();
        b.iter(|| {
            for text in &texts {
                black_box(measurer.measure(text, &font));
            }
        })
    });

    group.bench_function("cached_warm", |b| {
        let measurer = CachedMeasurer::new(MonospaceMeasurer::new(), 2_048);
        for text in &texts {
            measurer.measure(text, &font);
        }
        b.iter(|| {
            for text in &texts {
                black_box(measurer.measure(text, &font));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_monospace, bench_cached_render_pass);
criterion_main!(benches);

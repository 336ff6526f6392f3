use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scan_filters::{FilterChain, FilterConfig, TemporalMedianFilter};

// 360 channels at 1 degree resolution
const CHANNELS: usize = 360;

fn synthetic_scan(seq: usize) -> Vec<f64> {
    (0..CHANNELS)
        .map(|i| 1.0 + ((i * 7 + seq * 13) % 97) as f64 * 0.1)
        .collect()
}

fn bench_temporal_median(c: &mut Criterion) {
    let mut group = c.benchmark_group("temporal_median");
    for depth in [0usize, 3, 8, 16] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            let mut filter = TemporalMedianFilter::new(depth);
            let mut seq = 0;
            b.iter(|| {
                seq += 1;
                filter.update(black_box(&synthetic_scan(seq))).unwrap()
            });
        });
    }
    group.finish();
}

fn bench_chain(c: &mut Criterion) {
    let mut chain = FilterChain::from_config(&FilterConfig::default()).unwrap();
    let mut seq = 0;
    c.bench_function("filter_chain_default", |b| {
        b.iter(|| {
            seq += 1;
            chain.process(black_box(&synthetic_scan(seq))).unwrap()
        })
    });
}

criterion_group!(benches, bench_temporal_median, bench_chain);
criterion_main!(benches);

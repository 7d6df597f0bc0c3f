use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use outplot::downsample::{downsample_table, lttb, DEFAULT_THRESHOLD};
use outplot::table::parse_lines;

/// Noisy sine wave sampled at unit spacing
fn generate_series(n: usize) -> (Vec<f64>, Vec<f64>) {
    let xs: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let ys = xs
        .iter()
        .map(|x| (x / 250.0).sin() * 100.0 + ((x * 7.3).sin() * 3.0))
        .collect();
    (xs, ys)
}

/// Benchmark LTTB on a single series across input sizes
fn bench_lttb(c: &mut Criterion) {
    let mut group = c.benchmark_group("lttb");

    for n in [10_000, 100_000, 1_000_000] {
        let (xs, ys) = generate_series(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| lttb(black_box(&xs), black_box(&ys), DEFAULT_THRESHOLD))
        });
    }

    group.finish();
}

/// Benchmark per-column downsampling of a wide table
fn bench_downsample_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("downsample_table");
    let rows = 100_000;

    for columns in [4, 32] {
        let mut lines = Vec::with_capacity(rows + 2);
        let names: Vec<String> = (0..columns).map(|i| format!("Ch{i}")).collect();
        lines.push(format!("Time {}", names.join(" ")));
        lines.push(format!("s {}", vec!["-"; columns].join(" ")));
        for r in 0..rows {
            let values: Vec<String> = (0..columns)
                .map(|c| format!("{:.3}", ((r + c * 13) as f64 / 97.0).sin()))
                .collect();
            lines.push(format!("{} {}", r as f64 * 0.01, values.join(" ")));
        }
        let (table, _) = parse_lines(&lines, "bench").unwrap();

        group.throughput(Throughput::Elements((rows * columns) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}columns", columns)),
            &table,
            |b, table| b.iter(|| downsample_table(black_box(table), DEFAULT_THRESHOLD)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_lttb, bench_downsample_table);
criterion_main!(benches);

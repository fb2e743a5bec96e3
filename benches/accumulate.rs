/// Accumulator and reporter benchmarks
///
/// Measures line throughput of the single-pass accumulator and the cost of
/// ranking tables of increasing size.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use keygram::accumulator::Accumulator;
use keygram::report::{Report, ReportOptions};

const SYMBOLS: &[&str] = &[
    "space", "e", "t", "a", "o", "i", "n", "s", "h", "r", "BackSpace", "Return",
];

/// Build a keycount-style dump with `symbols` unigrams, each followed by
/// every digraph and trigraph under it
fn synthetic_log(symbols: usize) -> String {
    let mut log = String::new();
    for i in 0..symbols {
        let first = format!("{}{}", SYMBOLS[i % SYMBOLS.len()], i / SYMBOLS.len());
        log.push_str(&format!("{}:{}\n", first, 1000 + i));
        for (j, second) in SYMBOLS.iter().enumerate() {
            log.push_str(&format!("*   {}:{}\n", second, 100 + j));
            for (k, third) in SYMBOLS.iter().enumerate() {
                log.push_str(&format!("*   *   {}:{}\n", third, 10 + k));
            }
        }
    }
    log.push_str("##########################################\n");
    log
}

fn bench_accumulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("accumulate");
    group.measurement_time(Duration::from_secs(5));

    for symbols in [10usize, 100, 500].iter() {
        let log = synthetic_log(*symbols);
        let lines = log.lines().count() as u64;
        group.throughput(Throughput::Elements(lines));
        group.bench_with_input(BenchmarkId::from_parameter(symbols), &log, |b, log| {
            b.iter(|| {
                let mut acc = Accumulator::new();
                acc.consume(black_box(log.as_bytes())).unwrap();
                black_box(acc.grand_total())
            });
        });
    }

    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("report");
    group.measurement_time(Duration::from_secs(5));

    let options = ReportOptions {
        include_percentage: true,
        ..ReportOptions::default()
    };

    for symbols in [10usize, 100, 500].iter() {
        let mut acc = Accumulator::new();
        acc.consume(synthetic_log(*symbols).as_bytes()).unwrap();
        let tables = acc.finish();

        group.bench_with_input(BenchmarkId::from_parameter(symbols), &tables, |b, tables| {
            b.iter(|| black_box(Report::build(tables, &options).to_text()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_accumulate, bench_report);
criterion_main!(benches);

//! Benchmark – sequential vs. aligned vs. naive reduction
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use segcost::{Strategy, TallyOptions, tally};

/// Produce a *deterministic* newline-delimited payload of at least
/// `target_len` bytes whose records fall into every cost tier.
fn make_payload(target_len: usize) -> String {
    const LINES: [&str; 4] = [
        "short ascii line",
        "ñandú ñandú ñandú ñandú ñandú ñandú ñandú ñandú ñandú ñandú",
        "😊😊😊😊😊😊😊😊😊😊😊😊😊😊😊😊😊😊😊😊😊😊😊😊😊😊😊😊😊😊😊😊😊😊😊😊😊😊😊😊😊😊",
        "",
    ];
    let mut s = String::with_capacity(target_len + 256);
    let mut i = 0;
    while s.len() < target_len {
        s.push_str(LINES[i % LINES.len()]);
        if i % 5 == 0 {
            s.push_str(&"x".repeat(150));
        }
        s.push('\n');
        i += 1;
    }
    s
}

fn bench_strategies(c: &mut Criterion) {
    let payload = make_payload(8 << 20);

    let mut group = c.benchmark_group("tally");
    group.throughput(Throughput::Bytes(payload.len() as u64));

    for &workers in &[1usize, 4, 16] {
        for strategy in Strategy::ALL {
            if strategy == Strategy::Sequential && workers != 1 {
                continue;
            }
            let options = TallyOptions::with_workers(workers)
                .expect("non-zero workers")
                .strategy(strategy);
            group.bench_with_input(
                BenchmarkId::new(strategy.name(), workers),
                &options,
                |b, &options| {
                    b.iter(|| black_box(tally(black_box(&payload), options)));
                },
            );
        }
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(5))
            .measurement_time(Duration::from_secs(10));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_strategies }
criterion_main!(benches);

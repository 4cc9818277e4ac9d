use bencher::{EMPTY, PATCHED, TYPICAL};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use micro_helmet::{apply, ApplyHeaders, Policy, SecureHeaders};
use std::hint::black_box;

fn benchmark_apply(criterion: &mut Criterion) {
    let policy = Policy::default();
    let secure_headers = SecureHeaders::new(policy.clone());
    let mut group = criterion.benchmark_group("apply");

    for case in [EMPTY, TYPICAL, PATCHED] {
        group.throughput(Throughput::Elements(case.len() as u64));
        group.bench_with_input(BenchmarkId::new("composite", case.name()), &case, |b, case| {
            b.iter_batched_ref(
                || case.header_map(),
                |headers| {
                    apply(&policy, headers).expect("default policy should be valid");
                    black_box(headers);
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("secure_headers", case.name()), &case, |b, case| {
            b.iter_batched_ref(
                || case.header_map(),
                |headers| {
                    secure_headers.apply_headers(headers).expect("default policy should be valid");
                    black_box(headers);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(apply_headers, benchmark_apply);
criterion_main!(apply_headers);

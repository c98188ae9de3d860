use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sha2::{Digest, Sha256};

use urna_types::BlockHash;
use urna_work::{mine, validate_work, Difficulty};

fn digest_for(nonce: u64) -> BlockHash {
    BlockHash::new(hex::encode(Sha256::digest(format!("bench-block:{nonce}"))))
}

fn bench_pow_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("pow_generation");

    // Low difficulty levels that complete quickly enough for benchmarking.
    // Each additional hex zero multiplies the expected attempts by 16.
    for difficulty in [0u32, 1, 2, 3] {
        group.bench_with_input(
            BenchmarkId::new("mine", difficulty),
            &difficulty,
            |b, &diff| {
                b.iter(|| black_box(mine(Difficulty::new(diff), digest_for)));
            },
        );
    }

    group.finish();
}

fn bench_pow_validation(c: &mut Criterion) {
    let work = mine(Difficulty::new(2), digest_for);

    c.bench_function("pow_validate_valid", |b| {
        b.iter(|| black_box(validate_work(black_box(&work.hash), Difficulty::new(2))));
    });

    c.bench_function("pow_validate_invalid", |b| {
        let bad = BlockHash::new("f".repeat(64));
        b.iter(|| black_box(validate_work(black_box(&bad), Difficulty::new(4))));
    });
}

criterion_group!(benches, bench_pow_generation, bench_pow_validation);
criterion_main!(benches);

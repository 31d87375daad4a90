use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use fair_rps::proof::commitment::commit;
use fair_rps::{HmacSha256, KeyedDigest, MoveSet, OutcomeTable, Rules};

fn bench_commit(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    c.bench_function("commit", |b| {
        b.iter(|| commit(&mut rng, &HmacSha256, black_box("Scissors")))
    });

    let key = [7u8; 64];
    c.bench_function("hmac_sha256", |b| {
        b.iter(|| HmacSha256.compute(black_box(&key), black_box(b"Lizard")))
    });
}

fn bench_table(c: &mut Criterion) {
    let moves = MoveSet::new((0..101).map(|i| format!("move-{}", i))).unwrap();
    let rules = Rules::new(moves);
    c.bench_function("render_101", |b| {
        b.iter(|| OutcomeTable::new(black_box(&rules)).render())
    });
}

criterion_group!(benches, bench_commit, bench_table);
criterion_main!(benches);

//! Tick throughput benchmark.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use resdash_lib::core::{default_projects, Config};
use resdash_lib::engine::Engine;

fn bench_tick(c: &mut Criterion) {
    let config = Config::default();
    let mut rng = StdRng::seed_from_u64(42);
    let mut engine = Engine::with_rng(&config, default_projects(), &mut rng).unwrap();

    c.bench_function("engine_tick", |b| {
        b.iter(|| {
            engine.tick_with_rng(&mut rng);
        })
    });
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);

//! Benchmarks for walkv engine operations

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use tempfile::TempDir;
use walkv::Engine;

fn engine_benchmarks(c: &mut Criterion) {
    // Every put syncs the WAL, so this measures the durable-write path.
    c.bench_function("put_synced", |b| {
        let temp = TempDir::new().unwrap();
        let engine = Engine::open_dir(temp.path()).unwrap();
        let mut i = 0u64;
        b.iter(|| {
            engine.put(&format!("key{}", i), "value").unwrap();
            i += 1;
        });
    });

    c.bench_function("get_hit", |b| {
        let temp = TempDir::new().unwrap();
        let engine = Engine::open_dir(temp.path()).unwrap();
        for i in 0..1000 {
            engine.put(&format!("key{}", i), "value").unwrap();
        }
        let mut i = 0u64;
        b.iter(|| {
            let key = format!("key{}", i % 1000);
            assert!(engine.get(&key).is_some());
            i += 1;
        });
    });

    c.bench_function("checkpoint_1k_keys", |b| {
        b.iter_batched(
            || {
                let temp = TempDir::new().unwrap();
                let engine = Engine::open_dir(temp.path()).unwrap();
                for i in 0..1000 {
                    engine.put(&format!("key{}", i), "value").unwrap();
                }
                (temp, engine)
            },
            |(_temp, engine)| engine.checkpoint().unwrap(),
            BatchSize::SmallInput,
        );
    });

    c.bench_function("recovery_1k_wal_records", |b| {
        b.iter_batched(
            || {
                let temp = TempDir::new().unwrap();
                {
                    let engine = Engine::open_dir(temp.path()).unwrap();
                    for i in 0..1000 {
                        engine.put(&format!("key{}", i), "value").unwrap();
                    }
                }
                temp
            },
            |temp| Engine::open_dir(temp.path()).unwrap(),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, engine_benchmarks);
criterion_main!(benches);

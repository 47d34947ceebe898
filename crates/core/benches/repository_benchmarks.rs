use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use recordkeep_core::{Entity, Repository, SharedRepository, Stocked};

#[derive(Debug, Clone)]
struct Pallet {
    id: u32,
    quantity: i64,
}

impl Entity for Pallet {
    type Id = u32;
    const KIND: &'static str = "pallet";

    fn id(&self) -> u32 {
        self.id
    }
}

impl Stocked for Pallet {
    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

fn seeded(count: u32) -> Repository<Pallet> {
    let mut repo = Repository::new();
    for id in 0..count {
        repo.add(Pallet { id, quantity: 1 }).unwrap();
    }
    repo
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("repository_add");

    for count in [10u32, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            b.iter(|| black_box(seeded(count)));
        });
    }

    group.finish();
}

fn bench_get_all_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("repository_get_all");

    for count in [10u32, 100, 1000].iter() {
        let repo = seeded(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| black_box(repo.get_all()));
        });
    }

    group.finish();
}

fn bench_update_quantity_plain_vs_shared(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_quantity");

    group.bench_function("plain", |b| {
        let mut repo = seeded(100);
        b.iter(|| {
            let current = repo.get_by_id(black_box(50)).unwrap().quantity();
            repo.update_quantity(50, (current + 1) % 1000).unwrap();
        });
    });

    group.bench_function("shared", |b| {
        let shared = SharedRepository::new(seeded(100));
        b.iter(|| {
            let q = shared.adjust_quantity(black_box(50), 1).unwrap();
            if q > 1000 {
                shared.write(|r| r.update_quantity(50, 0)).unwrap().unwrap();
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_add,
    bench_get_all_snapshot,
    bench_update_quantity_plain_vs_shared
);
criterion_main!(benches);

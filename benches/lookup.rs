use criterion::{black_box, criterion_group, criterion_main, Criterion};

use arith_tutor::tutor::{DIVIDE_BY_ZERO, WRONG_OPERATION};
use arith_tutor::{explain_rule, hint_for, FactStore, InMemoryFactStore, Tutor};

fn bench_load(c: &mut Criterion) {
    c.bench_function("store/load_builtin", |b| {
        b.iter(|| InMemoryFactStore::load().unwrap());
    });
}

fn bench_resolvers(c: &mut Criterion) {
    let store = InMemoryFactStore::load().unwrap();
    let divide = store.operation_by_symbol("/").unwrap();

    c.bench_function("resolve/operation_by_symbol", |b| {
        b.iter(|| store.operation_by_symbol(black_box("*")).unwrap());
    });
    c.bench_function("resolve/explain_rule", |b| {
        b.iter(|| explain_rule(&store, black_box(divide)));
    });
    c.bench_function("resolve/hint_for_hit", |b| {
        b.iter(|| hint_for(&store, black_box(divide), black_box(DIVIDE_BY_ZERO)));
    });
    c.bench_function("resolve/hint_for_miss", |b| {
        b.iter(|| hint_for(&store, black_box(divide), black_box("Overflow")));
    });
    c.bench_function("resolve/wrong_operation_hint", |b| {
        b.iter(|| hint_for(&store, black_box(divide), black_box(WRONG_OPERATION)));
    });
}

fn bench_tutor(c: &mut Criterion) {
    let store = InMemoryFactStore::load().unwrap();
    let tutor = Tutor::new(&store);
    c.bench_function("tutor/answer", |b| {
        b.iter(|| tutor.tutor_raw(black_box("7"), black_box("5"), black_box("+")));
    });
}

criterion_group!(benches, bench_load, bench_resolvers, bench_tutor);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use trellis_router::{params, NaturalNumber, Router};

fn router_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("router-search");

    group.bench_function("static-route", |b| {
        let mut router = Router::new();
        router.get("/hello/world", params! {}).unwrap();
        b.iter_with_large_drop(|| router.search("GET", "/hello/world"))
    });

    group.bench_function("capture-route", |b| {
        let mut router = Router::new();
        router.get("/hello/{name}", params! {}).unwrap();
        b.iter_with_large_drop(|| router.search("GET", "/hello/world"))
    });

    group.bench_function("shortcut-route", |b| {
        let mut router = Router::new();
        router.register_shortcut("natural", NaturalNumber);
        router.get("/users/{uid:|natural}/", params! {}).unwrap();
        b.iter_with_large_drop(|| router.search("GET", "/users/123/"))
    });
}

fn router_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("router-insert");

    group.bench_function("single-route", |b| {
        b.iter_batched_ref(
            Router::new,
            |router: &mut Router| {
                router.get("/hello/{name}", params! {}).unwrap();
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, router_search, router_insert);
criterion_main!(benches);

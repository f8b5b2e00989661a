use criterion::{criterion_group, criterion_main, Criterion};
use reduce_engine::SearchDriver;
use reduce_graph::{Graph, Vertex};

fn build_base() -> (Graph, Vec<Vertex>, Vec<Vertex>) {
    let mut g = Graph::new(7);
    g.add_edge(Vertex::from_raw(0), Vertex::from_raw(1));
    g.add_edge(Vertex::from_raw(1), Vertex::from_raw(2));
    g.add_edge(Vertex::from_raw(2), Vertex::from_raw(3));
    g.add_edge(Vertex::from_raw(3), Vertex::from_raw(4));
    let var = (0..5).map(Vertex::from_raw).collect();
    let val = vec![Vertex::from_raw(5), Vertex::from_raw(6)];
    (g, var, val)
}

fn bench_exhaust_search(c: &mut Criterion) {
    c.bench_function("exhaust_path5_search", |b| {
        b.iter(|| {
            let (g, var, val) = build_base();
            let mut driver = SearchDriver::new(g, var, val, 5, 0);
            let mut count = 0;
            while driver.next().is_some() {
                count += 1;
            }
            count
        });
    });
}

criterion_group!(benches, bench_exhaust_search);
criterion_main!(benches);

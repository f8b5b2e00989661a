use criterion::{criterion_group, criterion_main, Criterion};
use reduce_graph::{Graph, GraphBag, Vertex};

fn cycle(order: u32) -> Graph {
    let mut g = Graph::new(order);
    for v in 0..order {
        g.add_edge(Vertex::from_raw(v), Vertex::from_raw((v + 1) % order));
    }
    g
}

fn bench_canonical_form(c: &mut Criterion) {
    c.bench_function("canonical_form_cycle_10", |b| {
        b.iter(|| {
            let mut g = cycle(10);
            g.canonical_form()
        });
    });
}

fn bench_bag_insert(c: &mut Criterion) {
    c.bench_function("bag_insert_100_cycles", |b| {
        b.iter(|| {
            let mut bag = GraphBag::new();
            for order in 2..102u32 {
                let mut g = cycle(order);
                bag.insert(g.canonical_form());
            }
        });
    });
}

criterion_group!(benches, bench_canonical_form, bench_bag_insert);
criterion_main!(benches);

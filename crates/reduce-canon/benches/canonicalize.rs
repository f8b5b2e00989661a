use criterion::{black_box, criterion_group, criterion_main, Criterion};
use reduce_canon::{canonicalize, ColoredGraph};

fn cycle(n: usize) -> ColoredGraph {
    let mut edges = Vec::new();
    for i in 0..n {
        edges.push((i as u32, ((i + 1) % n) as u32));
    }
    ColoredGraph {
        order: n,
        edges,
        lab: (0..n as u32).collect(),
        ptn: vec![1; n].into_iter().enumerate().map(|(i, v)| if i + 1 == n { 0 } else { v }).collect(),
    }
}

fn canonicalize_cycle(c: &mut Criterion) {
    c.bench_function("canonicalize_cycle_8", |b| {
        let graph = cycle(8);
        b.iter(|| black_box(canonicalize(&graph)));
    });
}

criterion_group!(benches, canonicalize_cycle);
criterion_main!(benches);

use reduce_canon::{canonicalize, ColoredGraph};

fn uncolored(order: usize, edges: Vec<(u32, u32)>) -> ColoredGraph {
    let mut ptn = vec![1u8; order];
    if order > 0 {
        ptn[order - 1] = 0;
    }
    ColoredGraph {
        order,
        edges,
        lab: (0..order as u32).collect(),
        ptn,
    }
}

fn relabel(graph: &ColoredGraph, p: &[u32]) -> ColoredGraph {
    let edges = graph
        .edges
        .iter()
        .map(|&(i, j)| (p[i as usize], p[j as usize]))
        .collect();
    let lab = graph.lab.iter().map(|&v| p[v as usize]).collect();
    ColoredGraph {
        order: graph.order,
        edges,
        lab,
        ptn: graph.ptn.clone(),
    }
}

#[test]
fn triangle_has_full_symmetry() {
    let triangle = uncolored(3, vec![(0, 1), (1, 2), (0, 2)]);
    let result = canonicalize(&triangle);
    assert_eq!(result.aut_idx[0], 6);
    assert_eq!(result.orbits, vec![0, 0, 0]);
}

#[test]
fn path_of_three_has_reflection_symmetry() {
    let path = uncolored(3, vec![(0, 1), (1, 2)]);
    let result = canonicalize(&path);
    assert_eq!(result.aut_idx[0], 2);
    assert_eq!(result.orbits[0], result.orbits[2]);
    assert_ne!(result.orbits[0], result.orbits[1]);
}

#[test]
fn canonical_form_is_invariant_under_relabeling() {
    let path = uncolored(4, vec![(0, 1), (1, 2), (2, 3)]);
    let permuted = relabel(&path, &[3, 2, 1, 0]);

    let a = canonicalize(&path);
    let b = canonicalize(&permuted);
    assert_eq!(a.canonical_edges, b.canonical_edges);
}

#[test]
fn colors_break_symmetry() {
    let mut colored = uncolored(3, vec![(0, 1), (1, 2), (0, 2)]);
    colored.ptn = vec![0, 1, 0];
    colored.lab = vec![0, 1, 2];
    let result = canonicalize(&colored);
    assert_eq!(result.aut_idx[0], 2);
}

#[test]
fn generators_are_automorphisms() {
    let triangle = uncolored(3, vec![(0, 1), (1, 2), (0, 2)]);
    let result = canonicalize(&triangle);
    for gen in &result.generators {
        let mut mapped: Vec<(u32, u32)> = triangle
            .edges
            .iter()
            .map(|&(i, j)| (gen[i as usize], gen[j as usize]))
            .collect();
        for pair in mapped.iter_mut() {
            if pair.0 > pair.1 {
                *pair = (pair.1, pair.0);
            }
        }
        mapped.sort();
        let mut original: Vec<(u32, u32)> = triangle.edges.clone();
        for pair in original.iter_mut() {
            if pair.0 > pair.1 {
                *pair = (pair.1, pair.0);
            }
        }
        original.sort();
        assert_eq!(mapped, original);
    }
}

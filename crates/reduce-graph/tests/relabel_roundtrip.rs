//! Round-trip and invariance properties of relabeling and canonicalization.

use proptest::prelude::*;
use reduce_graph::{Graph, Vertex};

fn build_graph(order: u32, edge_bits: &[bool]) -> Graph {
    let mut g = Graph::new(order);
    let mut idx = 0;
    for i in 0..order {
        for j in (i + 1)..order {
            if edge_bits[idx] {
                g.add_edge(Vertex::from_raw(i), Vertex::from_raw(j));
            }
            idx += 1;
        }
    }
    g
}

/// Turns an arbitrary key vector into a permutation of `0..keys.len()` by
/// ranking indices on `(key, index)`, so ties never break the bijection.
fn permutation_from_keys(keys: &[u32]) -> Vec<u32> {
    let n = keys.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&v| (keys[v], v));
    let mut p = vec![0u32; n];
    for (rank, &v) in order.iter().enumerate() {
        p[v] = rank as u32;
    }
    p
}

fn graphs_equal(a: &mut Graph, b: &mut Graph) -> bool {
    a.compare(b) == std::cmp::Ordering::Equal
}

proptest! {
    #[test]
    fn relabel_then_relabel_inv_is_identity(
        order in 2u32..7,
        edge_bits in prop::collection::vec(any::<bool>(), 0..21),
        keys in prop::collection::vec(any::<u32>(), 2..7),
    ) {
        let n = order as usize;
        let pair_count = n * (n - 1) / 2;
        prop_assume!(edge_bits.len() >= pair_count && keys.len() == n);
        let mut g = build_graph(order, &edge_bits[..pair_count]);
        let p = permutation_from_keys(&keys);

        let mut round_tripped = g.relabel(&p).relabel_inv(&p);
        prop_assert!(graphs_equal(&mut g, &mut round_tripped));
    }

    #[test]
    fn canonical_form_is_idempotent(
        order in 2u32..7,
        edge_bits in prop::collection::vec(any::<bool>(), 0..21),
    ) {
        let n = order as usize;
        let pair_count = n * (n - 1) / 2;
        prop_assume!(edge_bits.len() >= pair_count);
        let mut g = build_graph(order, &edge_bits[..pair_count]);

        let mut once = g.canonical_form();
        let mut twice = once.canonical_form();
        prop_assert!(graphs_equal(&mut once, &mut twice));
    }

    #[test]
    fn canonical_form_is_invariant_under_relabeling(
        order in 2u32..7,
        edge_bits in prop::collection::vec(any::<bool>(), 0..21),
        keys in prop::collection::vec(any::<u32>(), 2..7),
    ) {
        let n = order as usize;
        let pair_count = n * (n - 1) / 2;
        prop_assume!(edge_bits.len() >= pair_count && keys.len() == n);
        let mut g = build_graph(order, &edge_bits[..pair_count]);
        let p = permutation_from_keys(&keys);
        let mut relabeled = g.relabel(&p);

        let mut canon_g = g.canonical_form();
        let mut canon_relabeled = relabeled.canonical_form();
        prop_assert!(graphs_equal(&mut canon_g, &mut canon_relabeled));
    }
}

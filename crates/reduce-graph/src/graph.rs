//! `Graph`: a vertex-colored simple multigraph with a cached canonical
//! labeling, automorphism generators, orbits, and stabilizer-index sequence.

use reduce_canon::{canonicalize, CanonResult, ColoredGraph};

use crate::hash::hash_sorted_edges;
use crate::vertex::{edge_i, edge_j, edge_make, edge_relabel, Vertex};

/// Vertex-colored simple graph on vertices `{0, .., order-1}`.
///
/// Edges are kept in an unsorted buffer between mutations and sorted lazily
/// before any operation that needs a stable order (comparison, hashing,
/// canonicalization) — mirroring the reference `edgebuf_is_sorted` flag so a
/// run of `add_edge` calls costs one sort, not one per call.
#[derive(Debug, Clone)]
pub struct Graph {
    order: u32,
    edges: Vec<u64>,
    sorted: bool,
    lab: Vec<u32>,
    ptn: Vec<u8>,
    canon: Option<CanonCache>,
}

#[derive(Debug, Clone)]
struct CanonCache {
    canonical_edges: Vec<u64>,
    generators: Vec<Vec<u32>>,
    aut_idx: Vec<i64>,
    stab_seq: Vec<i64>,
    orbits: Vec<u32>,
    orbit_cells: Vec<u32>,
    gen_cursor: std::cell::Cell<usize>,
}

impl Graph {
    /// Creates an empty graph of the given order with a single trivial color
    /// cell covering every vertex.
    ///
    /// Panics if `order == 0` (an internal precondition: callers never build
    /// a zero-vertex graph).
    pub fn new(order: u32) -> Self {
        if order == 0 {
            panic!("Graph::new: nonpositive order");
        }
        let mut ptn = vec![1u8; order as usize];
        ptn[order as usize - 1] = 0;
        Self {
            order,
            edges: Vec::with_capacity(3 * order as usize),
            sorted: true,
            lab: (0..order).collect(),
            ptn,
            canon: None,
        }
    }

    /// Number of vertices.
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Drops all edges and cached data, keeping order and color partition.
    pub fn empty(&mut self) {
        self.edges.clear();
        self.sorted = true;
        self.canon = None;
    }

    /// Returns the color partition's vertex order.
    pub fn lab(&self) -> &[u32] {
        &self.lab
    }

    /// Returns the color partition's cell-end markers.
    pub fn ptn(&self) -> &[u8] {
        &self.ptn
    }

    /// Sets the color partition directly (used by parsers). `lab` must be a
    /// permutation of `0..order` and `ptn[order - 1]` must be `0`.
    pub fn set_partition(&mut self, lab: Vec<u32>, ptn: Vec<u8>) {
        if lab.len() != self.order as usize || ptn.len() != self.order as usize {
            panic!("Graph::set_partition: length mismatch with order");
        }
        if ptn[self.order as usize - 1] != 0 {
            panic!("Graph::set_partition: last ptn entry must be 0");
        }
        self.lab = lab;
        self.ptn = ptn;
        self.canon = None;
    }

    /// Adds an edge `{i, j}`. Panics on a loop or an out-of-range endpoint
    /// (an internal invariant — callers validate vertex bounds beforehand).
    pub fn add_edge(&mut self, i: Vertex, j: Vertex) {
        let (i, j) = (i.as_raw(), j.as_raw());
        if i >= self.order || j >= self.order || i == j {
            panic!("Graph::add_edge: bad edge (i = {i}, j = {j})");
        }
        self.canon = None;
        self.sorted = false;
        self.edges.push(edge_make(i, j));
    }

    /// Produces a new graph identical to this one (same order, edges and
    /// partition, fresh cache).
    pub fn dup(&self) -> Self {
        let identity: Vec<u32> = (0..self.order).collect();
        self.relabel(&identity)
    }

    /// Produces a new graph with vertex `v` renamed to `p[v]`.
    ///
    /// Panics if `p` is not a bijection on `0..order` (an internal
    /// precondition: relabeling permutations come from validated sources —
    /// the canonical oracle or an already-checked traversal, never raw
    /// user input).
    pub fn relabel(&self, p: &[u32]) -> Self {
        permcheck(self.order, p);
        let mut lab = vec![0u32; self.order as usize];
        for i in 0..self.order as usize {
            lab[i] = p[self.lab[i] as usize];
        }
        let edges: Vec<u64> = self.edges.iter().map(|&e| edge_relabel(p, e)).collect();
        Self {
            order: self.order,
            edges,
            sorted: false,
            lab,
            ptn: self.ptn.clone(),
            canon: None,
        }
    }

    /// Produces a new graph relabeled by the inverse of `p`.
    pub fn relabel_inv(&self, p: &[u32]) -> Self {
        permcheck(self.order, p);
        let mut inv = vec![0u32; self.order as usize];
        for (i, &pi) in p.iter().enumerate() {
            inv[pi as usize] = i as u32;
        }
        self.relabel(&inv)
    }

    fn ensure_sorted(&mut self) {
        if self.sorted {
            return;
        }
        self.edges.sort_unstable();
        for w in self.edges.windows(2) {
            if w[0] == w[1] {
                panic!(
                    "Graph: repeated edge ({}, {})",
                    edge_i(w[0]),
                    edge_j(w[0])
                );
            }
        }
        self.sorted = true;
    }

    /// Returns the sorted edge list, as the `(min << 32) | max` encoding.
    pub fn sorted_edges(&mut self) -> &[u64] {
        self.ensure_sorted();
        &self.edges
    }

    fn ensure_canon(&mut self) {
        if self.canon.is_some() {
            return;
        }
        self.ensure_sorted();
        let input = ColoredGraph {
            order: self.order as usize,
            edges: self.edges.iter().map(|&e| (edge_i(e), edge_j(e))).collect(),
            lab: self.lab.clone(),
            ptn: self.ptn.clone(),
        };
        let CanonResult {
            lab,
            canonical_edges,
            generators,
            aut_idx,
            stab_seq,
            orbits,
        } = canonicalize(&input);

        let orbit_cells = build_orbit_cells(&orbits);

        self.lab = lab;
        self.canon = Some(CanonCache {
            canonical_edges,
            generators,
            aut_idx,
            stab_seq,
            orbits,
            orbit_cells,
            gen_cursor: std::cell::Cell::new(0),
        });
    }

    /// Canonical labeling: a permutation of `0..order` such that
    /// relabeling by it yields [`Graph::canonical_form`].
    pub fn canonical_lab(&mut self) -> &[u32] {
        self.ensure_canon();
        &self.lab
    }

    /// The canonical form of this graph: a fresh graph built from the
    /// canonical edge list, ready to be used as a [`crate::GraphBag`] key.
    pub fn canonical_form(&mut self) -> Self {
        self.ensure_canon();
        let cache = self.canon.as_ref().unwrap();
        Self {
            order: self.order,
            edges: cache.canonical_edges.clone(),
            sorted: true,
            lab: (0..self.order).collect(),
            ptn: self.ptn.clone(),
            canon: None,
        }
    }

    /// The next automorphism-group generator, cycling back to the first
    /// after the last one is returned (the reference oracle's "rewind on
    /// exhaustion" iterator, realized as an internal cursor rather than a
    /// process-global pointer).
    pub fn aut_generators(&mut self) -> impl Iterator<Item = &[u32]> + '_ {
        self.ensure_canon();
        let cache = self.canon.as_ref().unwrap();
        GeneratorCursor { cache }
    }

    /// Stabilizer-index sequence, terminated by a trailing `0`.
    pub fn aut_idx(&mut self) -> &[i64] {
        self.ensure_canon();
        &self.canon.as_ref().unwrap().aut_idx
    }

    /// Target-vertex sequence, terminated by a trailing `-1`.
    pub fn stab_seq(&mut self) -> &[i64] {
        self.ensure_canon();
        &self.canon.as_ref().unwrap().stab_seq
    }

    /// For each vertex, the representative of its automorphism orbit.
    pub fn orbits(&mut self) -> &[u32] {
        self.ensure_canon();
        &self.canon.as_ref().unwrap().orbits
    }

    /// Whether `i` and `j` lie in the same automorphism orbit.
    ///
    /// Panics on an out-of-range vertex (internal precondition).
    pub fn same_orbit(&mut self, i: Vertex, j: Vertex) -> bool {
        let (i, j) = (i.as_raw(), j.as_raw());
        if i >= self.order || j >= self.order {
            panic!("Graph::same_orbit: vertex out of bounds (i = {i}, j = {j})");
        }
        if i == j {
            return true;
        }
        self.ensure_canon();
        let orb = &self.canon.as_ref().unwrap().orbits;
        orb[i as usize] == orb[j as usize]
    }

    /// Vertices sorted so equal-orbit vertices are contiguous; each cell is
    /// itself sorted ascending, and cells are ordered by representative.
    pub fn orbit_cells(&mut self) -> &[u32] {
        self.ensure_canon();
        &self.canon.as_ref().unwrap().orbit_cells
    }

    /// Total order used by [`crate::GraphBag`]: order, then edge count, then
    /// the sorted edge list, then `ptn`, then each color cell sorted
    /// ascending.
    pub fn compare(&mut self, other: &mut Graph) -> std::cmp::Ordering {
        use std::cmp::Ordering;
        if self.order != other.order {
            return self.order.cmp(&other.order);
        }
        if self.edges.len() != other.edges.len() {
            return self.edges.len().cmp(&other.edges.len());
        }
        self.ensure_sorted();
        other.ensure_sorted();
        let edge_order = self.edges.cmp(&other.edges);
        if edge_order != Ordering::Equal {
            return edge_order;
        }
        if self.ptn != other.ptn {
            return self.ptn.cmp(&other.ptn);
        }
        let n = self.order as usize;
        let mut start = 0;
        while start < n {
            let mut end = start;
            while self.ptn[end] != 0 && end != n - 1 {
                end += 1;
            }
            end += 1;
            let mut a_cell = self.lab[start..end].to_vec();
            let mut b_cell = other.lab[start..end].to_vec();
            a_cell.sort_unstable();
            b_cell.sort_unstable();
            let cell_order = a_cell.cmp(&b_cell);
            if cell_order != Ordering::Equal {
                return cell_order;
            }
            start = end;
        }
        Ordering::Equal
    }

    /// Content hash over the sorted edge buffer, via the bag's weak/fast
    /// mixer. Does not take color into account, matching the reference
    /// `graph_hash` (the bag's comparator is the correctness boundary).
    pub fn content_hash(&mut self) -> u64 {
        self.ensure_sorted();
        hash_sorted_edges(&self.edges)
    }
}

struct GeneratorCursor<'a> {
    cache: &'a CanonCache,
}

impl<'a> Iterator for GeneratorCursor<'a> {
    type Item = &'a [u32];

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cache.gen_cursor.get();
        if idx >= self.cache.generators.len() {
            self.cache.gen_cursor.set(0);
            None
        } else {
            self.cache.gen_cursor.set(idx + 1);
            Some(&self.cache.generators[idx])
        }
    }
}

fn permcheck(order: u32, p: &[u32]) {
    if p.len() != order as usize {
        panic!("permcheck: wrong length");
    }
    let mut seen = vec![false; order as usize];
    for &pi in p {
        if pi >= order || seen[pi as usize] {
            panic!("permcheck: invalid permutation");
        }
        seen[pi as usize] = true;
    }
}

fn build_orbit_cells(orbits: &[u32]) -> Vec<u32> {
    let mut p: Vec<u32> = (0..orbits.len() as u32).collect();
    p.sort_by_key(|&v| orbits[v as usize]);
    let mut out = Vec::with_capacity(p.len());
    let mut i = 0;
    while i < p.len() {
        let mut j = i + 1;
        while j < p.len() && orbits[p[i] as usize] == orbits[p[j] as usize] {
            j += 1;
        }
        let mut cell = p[i..j].to_vec();
        cell.sort_unstable();
        out.extend(cell);
        i = j;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path3() -> Graph {
        let mut g = Graph::new(3);
        g.add_edge(Vertex::from_raw(0), Vertex::from_raw(1));
        g.add_edge(Vertex::from_raw(1), Vertex::from_raw(2));
        g
    }

    #[test]
    fn add_edge_invalidates_cache() {
        let mut g = path3();
        let _ = g.canonical_lab();
        assert!(g.canon.is_some());
        g.add_edge(Vertex::from_raw(0), Vertex::from_raw(2));
        assert!(g.canon.is_none());
    }

    #[test]
    fn dup_preserves_edges_and_partition() {
        let mut original = path3();
        let mut copy = original.dup();
        assert_eq!(original.compare(&mut copy), std::cmp::Ordering::Equal);
    }

    #[test]
    #[should_panic(expected = "bad edge")]
    fn add_edge_rejects_loop() {
        let mut g = Graph::new(2);
        g.add_edge(Vertex::from_raw(0), Vertex::from_raw(0));
    }

    #[test]
    #[should_panic(expected = "repeated edge")]
    fn duplicate_edge_panics_on_sort() {
        let mut g = Graph::new(2);
        g.add_edge(Vertex::from_raw(0), Vertex::from_raw(1));
        g.add_edge(Vertex::from_raw(1), Vertex::from_raw(0));
        g.sorted_edges();
    }

    #[test]
    fn same_orbit_reflects_reflection_symmetry() {
        let mut g = path3();
        assert!(g.same_orbit(Vertex::from_raw(0), Vertex::from_raw(2)));
        assert!(!g.same_orbit(Vertex::from_raw(0), Vertex::from_raw(1)));
    }
}

//! The adaptive prefix and its expansion (component E).

use reduce_core::{ErrorInfo, ReduceError};
use reduce_graph::{Graph, Vertex};

use crate::traversal::build_traversal;

/// Per-reducer state: the base graph, its variable/value vertex sets, the
/// adaptive prefix built so far, and the per-level traversal data it needs.
pub struct PrefixState {
    base: Graph,
    var: Vec<Vertex>,
    val: Vec<Vertex>,
    prefix: Vec<Vertex>,
    orbits: Vec<Vec<bool>>,
    trav_ind: Vec<Vec<bool>>,
    traversals: Vec<Vec<Vec<u32>>>,
    trav_sizes: Vec<usize>,
}

impl PrefixState {
    /// Creates an empty prefix over `base`, with `var` the variable vertices
    /// and `val` the value vertices (`val[0]` is the "unassigned" marker).
    pub fn new(base: Graph, var: Vec<Vertex>, val: Vec<Vertex>) -> Self {
        Self {
            base,
            var,
            val,
            prefix: Vec::new(),
            orbits: Vec::new(),
            trav_ind: Vec::new(),
            traversals: Vec::new(),
            trav_sizes: Vec::new(),
        }
    }

    /// The base graph.
    pub fn base(&self) -> &Graph {
        &self.base
    }

    /// The variable vertex set.
    pub fn vars(&self) -> &[Vertex] {
        &self.var
    }

    /// The value vertex set.
    pub fn vals(&self) -> &[Vertex] {
        &self.val
    }

    /// The prefix built so far.
    pub fn prefix(&self) -> &[Vertex] {
        &self.prefix
    }

    /// Current prefix length.
    pub fn len(&self) -> usize {
        self.prefix.len()
    }

    /// Whether the prefix is still empty.
    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty()
    }

    /// Traversal built at `level`.
    pub fn traversal(&self, level: usize) -> &[Vec<u32>] {
        &self.traversals[level]
    }

    /// Traversal size at `level`.
    pub fn trav_size(&self, level: usize) -> usize {
        self.trav_sizes[level]
    }

    /// Traversal-reachability indicator at `level`.
    pub fn trav_ind(&self, level: usize) -> &[bool] {
        &self.trav_ind[level]
    }

    /// Orbit indicator (of `prefix[level]` in the level's augmented graph)
    /// at `level`.
    pub fn orbits(&self, level: usize) -> &[bool] {
        &self.orbits[level]
    }

    /// Extends the prefix to cover `level`, choosing `p` as the new prefix
    /// variable if `level` is the current prefix length.
    ///
    /// Returns the augmented graph at `level` (base duplicated with edges
    /// `{(prefix[j], val[0]) : 0 <= j <= level}`).
    ///
    /// Structural preconditions (variable set is a union of base orbits,
    /// value vertices are fixed points) are checked only at `level == 0` and
    /// reported as [`ReduceError::Input`] — a malformed input, not an engine
    /// bug. Any other precondition violation panics.
    pub fn expand(
        &mut self,
        level: usize,
        p: Vertex,
        prev: Option<Graph>,
    ) -> Result<Graph, ReduceError> {
        if level > self.prefix.len() {
            panic!("PrefixState::expand: unsupported expansion");
        }
        if level == self.prefix.len() {
            self.prefix.push(p);
        } else if self.prefix[level] != p {
            panic!("PrefixState::expand: level does not match existing prefix");
        }

        let mut g = match prev {
            Some(g) => g,
            None => {
                let mut g = self.base.dup();
                for j in 0..level {
                    g.add_edge(self.prefix[j], self.val[0]);
                }
                g
            }
        };

        if level == 0 {
            self.check_structural_preconditions()?;
        }

        let t = build_traversal(&mut g, p);
        let trav_size = t.len();
        let n = self.base.order() as usize;
        let mut trav_ind = vec![false; n];
        for perm in &t {
            trav_ind[perm[p.as_usize()] as usize] = true;
        }

        let mut g_new = self.base.dup();
        for j in 0..=level {
            g_new.add_edge(self.prefix[j], self.val[0]);
        }
        let mut orbit_ind = vec![false; n];
        for i in 0..n as u32 {
            orbit_ind[i as usize] = g_new.same_orbit(p, Vertex::from_raw(i));
        }

        if self.traversals.len() == level {
            self.traversals.push(t);
            self.trav_sizes.push(trav_size);
            self.trav_ind.push(trav_ind);
            self.orbits.push(orbit_ind);
        } else {
            self.traversals[level] = t;
            self.trav_sizes[level] = trav_size;
            self.trav_ind[level] = trav_ind;
            self.orbits[level] = orbit_ind;
        }

        Ok(g_new)
    }

    fn check_structural_preconditions(&self) -> Result<(), ReduceError> {
        let mut base = self.base.dup();
        let n = base.order() as usize;
        let cells = base.orbit_cells().to_vec();
        let orbits = base.orbits().to_vec();

        let mut is_var = vec![false; n];
        for &v in &self.var {
            is_var[v.as_usize()] = true;
        }
        let mut is_val = vec![false; n];
        for &v in &self.val {
            is_val[v.as_usize()] = true;
        }

        let mut i = 0;
        while i < n {
            let mut j = i + 1;
            while j < n && orbits[cells[i] as usize] == orbits[cells[j] as usize] {
                j += 1;
            }
            let cell_len = j - i;
            for u in i..j {
                if is_var[cells[u] as usize] != is_var[cells[i] as usize] {
                    return Err(ReduceError::Input(ErrorInfo::new(
                        "INP001",
                        format!(
                            "variable list is not a union of orbits of the base graph \
                             ({} and {} have different orbits)",
                            cells[u] + 1,
                            cells[i] + 1
                        ),
                    )));
                }
                if is_val[cells[u] as usize] && cell_len > 1 {
                    return Err(ReduceError::Input(ErrorInfo::new(
                        "INP002",
                        format!(
                            "value vertex ({}) is not fixed by the automorphism group \
                             of the base graph",
                            cells[u] + 1
                        ),
                    )));
                }
            }
            i = j;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_graph() -> Graph {
        let mut g = Graph::new(5);
        g.add_edge(Vertex::from_raw(0), Vertex::from_raw(1));
        g.add_edge(Vertex::from_raw(1), Vertex::from_raw(2));
        g
    }

    #[test]
    fn expand_level_zero_builds_a_single_edge_augmentation() {
        let var = vec![Vertex::from_raw(0), Vertex::from_raw(1), Vertex::from_raw(2)];
        let val = vec![Vertex::from_raw(3), Vertex::from_raw(4)];
        let mut state = PrefixState::new(base_graph(), var, val);
        let g = state.expand(0, Vertex::from_raw(0), None).unwrap();
        assert_eq!(g.num_edges(), base_graph().num_edges() + 1);
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn non_fixed_value_vertex_is_a_user_error() {
        // Vertices 3 and 4 are in the same orbit here (neither touches an
        // edge), so declaring either one a value vertex violates the fixed-
        // point precondition.
        let var = vec![Vertex::from_raw(0), Vertex::from_raw(1), Vertex::from_raw(2)];
        let val = vec![Vertex::from_raw(3)];
        let mut state = PrefixState::new(base_graph(), var, val);
        let err = state.expand(0, Vertex::from_raw(0), None).unwrap_err();
        assert!(matches!(err, ReduceError::Input(_)));
    }
}

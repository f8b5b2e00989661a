//! The isomorph-rejecting search driver (component F).

use num_bigint::BigUint;
use reduce_graph::{Graph, Vertex};

use crate::prefix::PrefixState;
use crate::select::select_next_variable;

const AUT_TRUNC_CAP: i64 = 999_999_999;

/// One accepted, normalized partial assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Variable vertices, in the order they were assigned.
    pub vars: Vec<Vertex>,
    /// The value vertex assigned to each entry of `vars`.
    pub vals: Vec<Vertex>,
    /// The automorphism-group order of the extended graph, saturating at
    /// 999,999,999.
    pub aut_trunc: i64,
}

/// Lazily enumerates accepted, canonical-form-rejected partial assignments
/// over an adaptive prefix.
pub struct SearchDriver {
    prefix: PrefixState,
    target_length: usize,
    threshold: i64,
    stack: Vec<u32>,
    last_prefix_graph: Option<Graph>,
    seed_min: Vec<Vec<bool>>,
    stat_gen: Vec<u64>,
    stat_can: Vec<u64>,
    stat_out: Vec<u64>,
    initialized: bool,
}

impl SearchDriver {
    /// Creates a driver over `base`, with `var`/`val` the variable and value
    /// vertex sets. `target_length` is the prefix length at which an
    /// assignment is always emitted; `threshold` emits earlier once the
    /// extended graph's truncated automorphism order drops to or below it.
    pub fn new(
        base: Graph,
        var: Vec<Vertex>,
        val: Vec<Vertex>,
        target_length: usize,
        threshold: i64,
    ) -> Self {
        Self {
            prefix: PrefixState::new(base, var, val),
            target_length,
            threshold,
            stack: Vec::new(),
            last_prefix_graph: None,
            seed_min: Vec::new(),
            stat_gen: Vec::new(),
            stat_can: Vec::new(),
            stat_out: Vec::new(),
            initialized: false,
        }
    }

    /// Frames processed, survived canonical-form rejection, and emitted to
    /// the caller, indexed by depth.
    pub fn stats(&self) -> (&[u64], &[u64], &[u64]) {
        (&self.stat_gen, &self.stat_can, &self.stat_out)
    }

    fn push_frame(&mut self, vars: &[u32], vals: &[u32]) {
        self.stack.extend_from_slice(vars);
        self.stack.extend_from_slice(vals);
        self.stack.push(vars.len() as u32);
    }

    fn record_level(&mut self, level: usize) {
        if self.stat_gen.len() == level {
            self.stat_gen.push(0);
            self.stat_can.push(0);
            self.stat_out.push(0);
        }
    }

    fn initialize(&mut self) {
        if self.prefix.is_empty() {
            let p = select_next_variable(&mut self.prefix.base().dup(), self.prefix.vars(), &[], None);
            let g = self
                .prefix
                .expand(0, p, None)
                .expect("SearchDriver: base graph fails its own structural preconditions");
            self.last_prefix_graph = Some(g);
        }

        let seed0 = orbit_min_ind(&mut self.prefix.base().dup(), None);
        self.seed_min.push(seed0.clone());

        let prefix0 = self.prefix.prefix()[0];
        let mut chosen = None;
        for j in 0..self.prefix.trav_size(0) {
            let cand = self.prefix.traversal(0)[j][prefix0.as_usize()];
            if seed0[cand as usize] {
                chosen = Some(cand);
                break;
            }
        }
        let p = chosen.expect("SearchDriver: no minimum found for base orbit");
        self.push_frame(&[p], &[0]);
        self.record_level(0);
        self.initialized = true;
    }

    /// Produces the next accepted assignment, or `None` once the search is
    /// exhausted.
    pub fn next(&mut self) -> Option<Assignment> {
        if self.target_length == 0 {
            return None;
        }
        if !self.initialized {
            self.initialize();
        }

        while let Some(&top_size) = self.stack.last() {
            let size = top_size as usize;
            let frame_len = 2 * size + 1;
            let frame_start = self.stack.len() - frame_len;
            let vars: Vec<u32> = self.stack[frame_start..frame_start + size].to_vec();
            let mut vals: Vec<u32> = self.stack[frame_start + size..frame_start + 2 * size].to_vec();
            self.stack.truncate(frame_start);

            let lvl = size - 1;
            self.record_level(lvl);
            // The level's active variable is always the one most recently pushed.
            let current_idx = size - 1;
            let target_vertex = vars[current_idx];
            let prefix_lvl = self.prefix.prefix()[lvl];
            let current = self.prefix.traversal(lvl)[..self.prefix.trav_size(lvl)]
                .iter()
                .position(|perm| perm[prefix_lvl.as_usize()] == target_vertex)
                .expect("SearchDriver: no current variable");
            let current_val = vals[current_idx];

            if (current_val as usize) < self.prefix.vals().len() {
                self.stat_gen[lvl] += 1;

                let mut continuation_vals = vals.clone();
                continuation_vals[current_idx] += 1;
                self.push_frame(&vars, &continuation_vals);

                let mut g = self.prefix.base().dup();
                for i in 0..size {
                    let v = if i == current_idx { current_val } else { vals[i] };
                    g.add_edge(Vertex::from_raw(vars[i]), self.prefix.vals()[v as usize]);
                }

                let n = self.prefix.base().order() as usize;
                let perm = &self.prefix.traversal(lvl)[current];
                let mut nu = vec![0u32; n];
                for i in 0..n {
                    nu[perm[i] as usize] = i as u32;
                }

                let lab = g.canonical_lab().to_vec();
                let orbit_ind = self.prefix.orbits(lvl);
                let qlab = lab
                    .iter()
                    .copied()
                    .find(|&l| orbit_ind[nu[l as usize] as usize])
                    .expect("SearchDriver: bad qlab");

                if g.same_orbit(Vertex::from_raw(qlab), Vertex::from_raw(target_vertex)) {
                    self.stat_can[lvl] += 1;

                    let norm_vars: Vec<u32> = vars.iter().map(|&v| nu[v as usize]).collect();
                    let mut norm_vals = vals.clone();
                    norm_vals[current_idx] = current_val;

                    let aut_trunc = aut_order_trunc(&mut g);

                    if size == self.target_length || aut_trunc <= self.threshold {
                        let out_vars: Vec<Vertex> =
                            norm_vars.iter().map(|&v| Vertex::from_raw(v)).collect();
                        let out_vals: Vec<Vertex> = norm_vals
                            .iter()
                            .map(|&v| self.prefix.vals()[v as usize])
                            .collect();
                        self.stat_out[lvl] += 1;
                        return Some(Assignment {
                            vars: out_vars,
                            vals: out_vals,
                            aut_trunc,
                        });
                    }

                    if size + 1 > self.prefix.len() {
                        // size + 1 > prefix.len() with size <= prefix.len() always holding
                        // means size == prefix.len(), so lvl == prefix.len() - 1: this is the
                        // expansion onto the prefix's new last level, and the continuity
                        // indicator to hand the selector is the level just built, trav_ind(lvl).
                        let p = select_next_variable(
                            self.last_prefix_graph.as_mut().unwrap(),
                            self.prefix.vars(),
                            self.prefix.prefix(),
                            Some(self.prefix.trav_ind(lvl)),
                        );
                        let prev = self.last_prefix_graph.take();
                        let new_g = self
                            .prefix
                            .expand(self.prefix.len(), p, prev)
                            .expect("SearchDriver: prefix expansion invariant violated");
                        self.last_prefix_graph = Some(new_g);
                    }

                    let seed_min = orbit_min_ind(&mut g, Some(&nu));
                    let next_prefix = self.prefix.prefix()[lvl + 1];
                    let mut chosen = None;
                    for j in 0..self.prefix.trav_size(lvl + 1) {
                        let cand = self.prefix.traversal(lvl + 1)[j][next_prefix.as_usize()];
                        if seed_min[cand as usize] {
                            chosen = Some(cand);
                            break;
                        }
                    }
                    let new_var =
                        chosen.expect("SearchDriver: no minimum found in extending orbit");

                    if self.seed_min.len() == lvl + 1 {
                        self.seed_min.push(seed_min);
                    } else {
                        self.seed_min[lvl + 1] = seed_min;
                    }

                    let mut exp_vars = norm_vars;
                    let mut exp_vals = norm_vals;
                    exp_vars.push(new_var);
                    exp_vals.push(0);
                    self.push_frame(&exp_vars, &exp_vals);
                }
            } else {
                let mut advanced = false;
                for j in (current + 1)..self.prefix.trav_size(lvl) {
                    let cand = self.prefix.traversal(lvl)[j][prefix_lvl.as_usize()];
                    if self.seed_min[lvl][cand as usize] {
                        let mut new_vars = vars.clone();
                        new_vars[current_idx] = cand;
                        vals[current_idx] = 0;
                        self.push_frame(&new_vars, &vals);
                        advanced = true;
                        break;
                    }
                }
                let _ = advanced;
            }
        }

        None
    }
}

impl Iterator for SearchDriver {
    type Item = Assignment;

    fn next(&mut self) -> Option<Assignment> {
        SearchDriver::next(self)
    }
}

fn orbit_min_ind(g: &mut Graph, relabel: Option<&[u32]>) -> Vec<bool> {
    let n = g.order() as usize;
    let cells = g.orbit_cells().to_vec();
    let orbits = g.orbits().to_vec();
    let mut ind = vec![false; n];
    let mut i = 0;
    while i < n {
        let mut j = i + 1;
        while j < n && orbits[cells[i] as usize] == orbits[cells[j] as usize] {
            j += 1;
        }
        let rep = cells[i];
        let marked = match relabel {
            Some(r) => r[rep as usize],
            None => rep,
        };
        ind[marked as usize] = true;
        i = j;
    }
    ind
}

fn aut_order_trunc(g: &mut Graph) -> i64 {
    let mut order = BigUint::from(1u32);
    for &factor in g.aut_idx() {
        if factor == 0 {
            break;
        }
        order *= BigUint::from(factor as u64);
    }
    let cap = BigUint::from(AUT_TRUNC_CAP as u64);
    if order < cap {
        order.to_string().parse::<i64>().expect("aut order below cap always fits i64")
    } else {
        AUT_TRUNC_CAP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_with_value() -> (Graph, Vec<Vertex>, Vec<Vertex>) {
        let mut g = Graph::new(5);
        g.add_edge(Vertex::from_raw(0), Vertex::from_raw(1));
        g.add_edge(Vertex::from_raw(1), Vertex::from_raw(2));
        g.add_edge(Vertex::from_raw(0), Vertex::from_raw(2));
        let var = vec![Vertex::from_raw(0), Vertex::from_raw(1), Vertex::from_raw(2)];
        let val = vec![Vertex::from_raw(3), Vertex::from_raw(4)];
        (g, var, val)
    }

    #[test]
    fn driver_emits_at_least_one_assignment() {
        let (g, var, val) = triangle_with_value();
        let mut driver = SearchDriver::new(g, var, val, 3, 0);
        let first = driver.next();
        assert!(first.is_some());
    }

    #[test]
    fn driver_terminates() {
        let (g, var, val) = triangle_with_value();
        let mut driver = SearchDriver::new(g, var, val, 3, 0);
        let mut count = 0;
        while driver.next().is_some() {
            count += 1;
            assert!(count < 10_000, "search did not terminate");
        }
    }
}

//! Adaptive orbit selection (component D).

use reduce_graph::{Graph, Vertex};

/// Picks the next prefix variable, in priority order: continuity with the
/// previous level's traversal, then the largest orbit that admits a
/// generator moving some of its points while fixing others, then the first
/// eligible orbit as a fallback.
///
/// `prev_trav_ind[v]` is whether `v` is reachable by the previous level's
/// traversal. Panics if every variable is already in `prefix` (an internal
/// invariant: callers only ask for a next variable when one remains).
pub fn select_next_variable(
    g: &mut Graph,
    vars: &[Vertex],
    prefix: &[Vertex],
    prev_trav_ind: Option<&[bool]>,
) -> Vertex {
    let n = g.order() as usize;
    let mut eligible = vec![false; n];
    for &v in vars {
        eligible[v.as_usize()] = true;
    }
    for &p in prefix {
        eligible[p.as_usize()] = false;
    }

    if let Some(t) = prev_trav_ind {
        for i in 0..n {
            if eligible[i] && t[i] {
                return Vertex::from_raw(i as u32);
            }
        }
    }

    let cells = g.orbit_cells().to_vec();
    let orbits = g.orbits().to_vec();

    let mut max_length: i64 = -1;
    let mut max_rep = 0u32;
    let mut have_good = false;
    let mut have_first_eligible = false;
    let mut first_eligible = 0u32;

    let mut i = 0;
    while i < n {
        let mut j = i + 1;
        while j < n && orbits[cells[i] as usize] == orbits[cells[j] as usize] {
            j += 1;
        }
        if eligible[cells[i] as usize] {
            if !have_first_eligible {
                have_first_eligible = true;
                first_eligible = cells[i];
            }
            let mut in_orbit = vec![false; n];
            for u in i..j {
                in_orbit[cells[u] as usize] = true;
            }

            let length = (j - i) as i64;
            for gen in g.aut_generators() {
                let mut visited = vec![false; n];
                let mut num_fixed = 0i64;
                let mut num_moved = 0i64;
                for &var in vars {
                    let z = var.as_usize();
                    if in_orbit[z] && !visited[z] {
                        let mut w = z;
                        let mut len = 0i64;
                        loop {
                            visited[w] = true;
                            w = gen[w] as usize;
                            len += 1;
                            if w == z {
                                break;
                            }
                        }
                        if len == 1 {
                            num_fixed += len;
                        }
                        if len >= 2 {
                            num_moved += len;
                        }
                    }
                }
                if !have_good && length >= max_length {
                    max_length = length;
                    max_rep = cells[i];
                }
                if num_fixed > 0 && num_moved > 0 && (!have_good || length > max_length) {
                    max_length = length;
                    max_rep = cells[i];
                    have_good = true;
                }
            }
        }
        i = j;
    }

    if !have_first_eligible {
        panic!("select_next_variable: no eligible orbit");
    }
    if max_length >= 2 {
        Vertex::from_raw(max_rep)
    } else {
        Vertex::from_raw(first_eligible)
    }
}

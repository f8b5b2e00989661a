//! Coset traversal construction (component C).

use reduce_graph::{Graph, Vertex};

/// Builds a coset traversal of `root`'s automorphism orbit in `g`: an array
/// `t[0..len)` of permutations of `0..order` such that `t[j](root)` enumerates
/// the orbit exactly once, and one `t[j]` is the identity.
///
/// Panics if `root` is out of range or the traversal fails its own
/// postcondition check (an internal invariant — the generators come from a
/// freshly canonicalized graph).
pub fn build_traversal(g: &mut Graph, root: Vertex) -> Vec<Vec<u32>> {
    let n = g.order() as usize;
    let root_raw = root.as_raw();
    if root_raw as usize >= n {
        panic!("build_traversal: root out of range");
    }

    let mut list: Vec<u32> = Vec::new();
    let mut ind = vec![-(n as i64 + 1); n];
    let mut root_pos = None;
    for i in 0..n as u32 {
        if g.same_orbit(Vertex::from_raw(i), root) {
            ind[i as usize] = list.len() as i64;
            if i == root_raw {
                root_pos = Some(list.len());
            }
            list.push(i);
        }
    }
    let len = list.len();
    let root_pos = root_pos.expect("build_traversal: root missing from its own orbit");

    let mut t: Vec<Vec<u32>> = vec![vec![0u32; n]; len];
    for i in 0..n {
        t[root_pos][i] = i as u32;
    }
    ind[root_raw as usize] = -1;

    loop {
        if (0..len).all(|j| ind[list[j] as usize] < 0) {
            break;
        }
        for gen in g.aut_generators() {
            for j in 0..len {
                let u = list[j];
                let v = gen[u as usize];
                let q = ind[v as usize];
                if q >= 0 && ind[u as usize] < 0 {
                    for i in 0..n {
                        t[q as usize][i] = gen[t[j][i] as usize];
                    }
                    ind[v as usize] = -1;
                }
            }
        }
    }

    for (j, &target) in list.iter().enumerate() {
        if t[j][root_raw as usize] != target {
            panic!("build_traversal: bad traversal");
        }
    }
    t
}

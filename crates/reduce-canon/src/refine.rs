//! Equitable partition refinement (1-WL color refinement).

/// A plain, owned snapshot of a vertex-colored simple graph, independent of
/// `reduce-graph::Graph` so this crate has no dependency back onto it.
#[derive(Debug, Clone)]
pub struct ColoredGraph {
    /// Number of vertices, indexed `0..order`.
    pub order: usize,
    /// Undirected edges, each `(i, j)` with `i != j`.
    pub edges: Vec<(u32, u32)>,
    /// Vertices in color order (a permutation of `0..order`), as in `spec.md`'s `lab`.
    pub lab: Vec<u32>,
    /// Cell-end markers aligned with `lab`: `ptn[i] == 0` means a color cell
    /// ends at position `i`.
    pub ptn: Vec<u8>,
}

impl ColoredGraph {
    pub(crate) fn adjacency(&self) -> Vec<Vec<u32>> {
        let mut adj = vec![Vec::new(); self.order];
        for &(i, j) in &self.edges {
            adj[i as usize].push(j);
            adj[j as usize].push(i);
        }
        adj
    }

    /// The initial ordered partition cells, read off `lab`/`ptn`.
    pub(crate) fn initial_cells(&self) -> Vec<Vec<u32>> {
        let mut cells = Vec::new();
        let mut current = Vec::new();
        for (pos, &v) in self.lab.iter().enumerate() {
            current.push(v);
            if self.ptn[pos] == 0 {
                cells.push(std::mem::take(&mut current));
            }
        }
        cells
    }
}

/// Refines an ordered partition to equitable form: repeatedly split each cell
/// by the multiset of neighbor-cell-indices each vertex sees, until no cell
/// splits any further. Never merges across an existing cell boundary, so the
/// input coloring is always respected.
pub(crate) fn refine(adj: &[Vec<u32>], cells: &[Vec<u32>]) -> Vec<Vec<u32>> {
    let mut cells: Vec<Vec<u32>> = cells.to_vec();
    loop {
        let mut cell_of = vec![0u32; adj.len()];
        for (idx, cell) in cells.iter().enumerate() {
            for &v in cell {
                cell_of[v as usize] = idx as u32;
            }
        }

        let mut next: Vec<Vec<u32>> = Vec::with_capacity(cells.len());
        let mut changed = false;
        for cell in &cells {
            if cell.len() == 1 {
                next.push(cell.clone());
                continue;
            }
            let mut signature: Vec<(Vec<u32>, u32)> = cell
                .iter()
                .map(|&v| {
                    let mut sig: Vec<u32> = adj[v as usize].iter().map(|&u| cell_of[u as usize]).collect();
                    sig.sort_unstable();
                    (sig, v)
                })
                .collect();
            signature.sort();
            let mut sub_cells: Vec<(Vec<u32>, Vec<u32>)> = Vec::new();
            for (sig, v) in signature {
                match sub_cells.last_mut() {
                    Some((last_sig, members)) if *last_sig == sig => members.push(v),
                    _ => sub_cells.push((sig, vec![v])),
                }
            }
            if sub_cells.len() > 1 {
                changed = true;
            }
            next.extend(sub_cells.into_iter().map(|(_, members)| members));
        }
        cells = next;
        if !changed {
            return cells;
        }
    }
}

//! Output formatters: incremental CNF (ICNF) and CNF-with-conjuncts.

pub mod conjuncts;
pub mod icnf;

use reduce_engine::Assignment;
use reduce_graph::Vertex;

/// Translates an assignment's variable/value pairs into signed DIMACS
/// literals, given the variable ordering (vertex position fixes the 1-based
/// variable number) and the vertex standing for the `false` value.
fn assignment_literals(vars: &[Vertex], false_vertex: Vertex, assignment: &Assignment) -> Vec<i64> {
    assignment
        .vars
        .iter()
        .zip(assignment.vals.iter())
        .map(|(v, val)| {
            let pos = vars
                .iter()
                .position(|w| w == v)
                .expect("assignment variable not in variable ordering") as i64
                + 1;
            if *val == false_vertex {
                -pos
            } else {
                pos
            }
        })
        .collect()
}

//! Non-incremental CNF-with-conjuncts output: one fresh "conjunct" variable
//! per emitted assignment, an implication clause per literal tying the
//! conjunct to the assignment, and a final clause disjoining the conjuncts.

use std::fmt::Write as _;

use reduce_engine::Assignment;
use reduce_graph::Vertex;

use crate::format::assignment_literals;
use crate::parse::cnf::Cnf;

/// Renders the full CNF-with-conjuncts output for a completed batch of
/// assignments: the header (with variable/clause counts adjusted for the
/// conjunct machinery), the original clauses, the per-assignment implication
/// clauses, and the final disjunction-of-conjuncts clause.
pub fn format_conjuncts(
    cnf: &Cnf,
    vars: &[Vertex],
    false_vertex: Vertex,
    assignments: &[Assignment],
) -> String {
    let nv_base = cnf.num_vars as i64;
    let count = assignments.len() as i64;
    let total_literals: i64 = assignments.iter().map(|a| a.vars.len() as i64).sum();
    let clause_adjust = total_literals + 1;

    let mut out = format!(
        "p cnf {} {}\n",
        nv_base + count,
        cnf.clauses.len() as i64 + clause_adjust
    );
    for clause in &cnf.clauses {
        for lit in clause {
            let _ = write!(out, "{lit} ");
        }
        out.push_str("0\n");
    }

    for (u, assignment) in assignments.iter().enumerate() {
        let conjunct = 1 + nv_base + u as i64;
        for lit in assignment_literals(vars, false_vertex, assignment) {
            let _ = writeln!(out, "{lit} {} 0", -conjunct);
        }
    }

    for i in 0..count {
        let conjunct = 1 + nv_base + i;
        if i == count - 1 {
            let _ = writeln!(out, "{conjunct} 0");
        } else {
            let _ = write!(out, "{conjunct} ");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_counts_are_adjusted_for_conjuncts() {
        let cnf = Cnf {
            num_vars: 2,
            clauses: vec![vec![1, -2]],
        };
        let vars = vec![Vertex::from_raw(0), Vertex::from_raw(1)];
        let false_vertex = Vertex::from_raw(9);
        let assignment = Assignment {
            vars: vec![Vertex::from_raw(0)],
            vals: vec![Vertex::from_raw(10)],
            aut_trunc: 1,
        };
        let out = format_conjuncts(&cnf, &vars, false_vertex, std::slice::from_ref(&assignment));
        assert!(out.starts_with("p cnf 3 3\n"));
        assert!(out.contains("3 0\n"));
    }
}

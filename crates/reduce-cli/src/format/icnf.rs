//! Incremental CNF output: the original CNF verbatim under a `p inccnf`
//! header, followed by one `a <literals> 0` line per emitted assignment.

use std::fmt::Write as _;

use reduce_engine::Assignment;
use reduce_graph::Vertex;

use crate::format::assignment_literals;
use crate::parse::cnf::Cnf;

/// Renders the `p inccnf` header and the original clauses verbatim.
pub fn format_header(cnf: &Cnf) -> String {
    let mut out = format!("p inccnf\n");
    for clause in &cnf.clauses {
        for lit in clause {
            let _ = write!(out, "{lit} ");
        }
        out.push_str("0\n");
    }
    out
}

/// Renders one `a <literals> 0` line for an emitted assignment.
pub fn format_assignment(vars: &[Vertex], false_vertex: Vertex, assignment: &Assignment) -> String {
    let literals = assignment_literals(vars, false_vertex, assignment);
    let mut out = String::from("a");
    for lit in literals {
        let _ = write!(out, " {lit}");
    }
    out.push_str(" 0\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use reduce_engine::Assignment;

    #[test]
    fn header_includes_original_clauses() {
        let cnf = Cnf {
            num_vars: 2,
            clauses: vec![vec![1, -2]],
        };
        let header = format_header(&cnf);
        assert!(header.starts_with("p inccnf\n"));
        assert!(header.contains("1 -2 0"));
    }

    #[test]
    fn assignment_line_maps_false_to_negative_literal() {
        let vars = vec![Vertex::from_raw(0), Vertex::from_raw(1)];
        let false_vertex = Vertex::from_raw(9);
        let true_vertex = Vertex::from_raw(10);
        let assignment = Assignment {
            vars: vec![Vertex::from_raw(0), Vertex::from_raw(1)],
            vals: vec![false_vertex, true_vertex],
            aut_trunc: 1,
        };
        let line = format_assignment(&vars, false_vertex, &assignment);
        assert_eq!(line, "a -1 2 0\n");
    }
}

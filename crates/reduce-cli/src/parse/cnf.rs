//! DIMACS CNF parsing and the synthesized symmetry graph.

use std::collections::VecDeque;

use reduce_core::{ErrorInfo, ReduceError};
use reduce_graph::{Graph, Vertex};

/// A parsed DIMACS CNF instance: `num_vars` variables (1-based in the
/// source), each clause a list of signed literals terminated implicitly by
/// `0` in the source (not stored).
#[derive(Debug, Clone)]
pub struct Cnf {
    /// Number of declared variables.
    pub num_vars: u32,
    /// Each clause as a list of signed 1-based literals.
    pub clauses: Vec<Vec<i64>>,
}

fn parse_error(message: impl Into<String>) -> ReduceError {
    ReduceError::Parse(ErrorInfo::new("PAR002", message.into()))
}

/// Pulls whitespace-separated tokens from the line cursor on demand,
/// skipping `c` comment lines and blank lines, so a clause's literals may
/// span more than one physical line.
struct TokenCursor<'a, 'b> {
    lines: &'b mut std::iter::Enumerate<std::str::Lines<'a>>,
    pending: VecDeque<String>,
}

impl<'a, 'b> TokenCursor<'a, 'b> {
    fn new(lines: &'b mut std::iter::Enumerate<std::str::Lines<'a>>) -> Self {
        Self {
            lines,
            pending: VecDeque::new(),
        }
    }

    fn next(&mut self) -> Option<String> {
        while self.pending.is_empty() {
            let (_, line) = self.lines.next()?;
            if line.trim_start().starts_with('c') || line.trim().is_empty() {
                continue;
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        self.pending.pop_front()
    }
}

/// Parses `p cnf n c` followed by `c` zero-terminated clauses, skipping `c`
/// comment lines anywhere a literal or header is expected. Consumes exactly
/// the lines that make up the CNF from the cursor.
pub fn parse_cnf(
    lines: &mut std::iter::Enumerate<std::str::Lines<'_>>,
) -> Result<Cnf, ReduceError> {
    let mut tokens = TokenCursor::new(lines);

    if tokens.next().as_deref() != Some("p") || tokens.next().as_deref() != Some("cnf") {
        return Err(parse_error("CNF format line expected"));
    }
    let num_vars: u32 = tokens
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| parse_error("bad number-of-variables parameter in CNF"))?;
    let num_clauses: usize = tokens
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| parse_error("bad number-of-clauses parameter in CNF"))?;
    if num_vars < 1 {
        return Err(parse_error(format!(
            "bad number-of-variables parameter (n = {num_vars}) in CNF"
        )));
    }

    let mut clauses = Vec::with_capacity(num_clauses);
    for _ in 0..num_clauses {
        let mut clause = Vec::new();
        loop {
            let lit: i64 = tokens
                .next()
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| parse_error("CNF literal expected"))?;
            if lit.unsigned_abs() > num_vars as u64 {
                return Err(parse_error(format!(
                    "bad literal {lit} in CNF input (n = {num_vars})"
                )));
            }
            if lit == 0 {
                break;
            }
            clause.push(lit);
        }
        clauses.push(clause);
    }

    Ok(Cnf { num_vars, clauses })
}

/// Synthesizes the symmetry graph for a CNF instance: variable, positive-
/// literal, negative-literal, false/true constant and clause vertex classes,
/// each its own color, wired by variable-literal and literal-clause edges.
///
/// Returns the graph together with its variable-vertex set (the `n`
/// variable vertices, in order) and value-vertex set (`false` then `true`).
pub fn synthesize_graph(cnf: &Cnf) -> (Graph, Vec<Vertex>, Vec<Vertex>) {
    let nv = cnf.num_vars as usize;
    let nc = cnf.clauses.len();
    let n = 3 * nv + 2 + nc;
    let mut g = Graph::new(n as u32);

    for i in 0..nv {
        g.add_edge(Vertex::from_raw(i as u32), Vertex::from_raw((nv + i) as u32));
        g.add_edge(Vertex::from_raw(i as u32), Vertex::from_raw((2 * nv + i) as u32));
    }

    let false_vertex = (3 * nv) as u32;
    let true_vertex = (3 * nv + 1) as u32;

    for (c, clause) in cnf.clauses.iter().enumerate() {
        let clause_vertex = (3 * nv + 2 + c) as u32;
        for &lit in clause {
            let literal_vertex = if lit > 0 {
                nv + (lit as usize - 1)
            } else {
                2 * nv + (lit.unsigned_abs() as usize - 1)
            };
            g.add_edge(Vertex::from_raw(literal_vertex as u32), Vertex::from_raw(clause_vertex));
        }
    }

    let mut lab: Vec<u32> = (0..n as u32).collect();
    let color_of = |v: u32| -> u32 {
        if (v as usize) < nv {
            0
        } else if (v as usize) < 2 * nv {
            1
        } else if (v as usize) < 3 * nv {
            2
        } else if v == false_vertex {
            3
        } else if v == true_vertex {
            4
        } else {
            5
        }
    };
    lab.sort_by_key(|&v| color_of(v));
    let mut ptn = vec![1u8; n];
    for i in 0..n {
        if i == n - 1 || color_of(lab[i]) != color_of(lab[i + 1]) {
            ptn[i] = 0;
        }
    }
    g.set_partition(lab, ptn);

    let var_vertices: Vec<Vertex> = (0..nv as u32).map(Vertex::from_raw).collect();
    let val_vertices = vec![Vertex::from_raw(false_vertex), Vertex::from_raw(true_vertex)];
    (g, var_vertices, val_vertices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_small_cnf() {
        let text = "p cnf 3 2\n1 -2 0\n-1 2 3 0\n";
        let mut lines = text.lines().enumerate();
        let cnf = parse_cnf(&mut lines).unwrap();
        assert_eq!(cnf.num_vars, 3);
        assert_eq!(cnf.clauses.len(), 2);
        assert_eq!(cnf.clauses[0], vec![1, -2]);
    }

    #[test]
    fn synthesized_graph_has_the_expected_order() {
        let cnf = Cnf {
            num_vars: 2,
            clauses: vec![vec![1, -2]],
        };
        let (g, var, val) = synthesize_graph(&cnf);
        assert_eq!(g.order(), 3 * 2 + 2 + 1);
        assert_eq!(var.len(), 2);
        assert_eq!(val.len(), 2);
    }

    #[test]
    fn rejects_an_out_of_range_literal() {
        let text = "p cnf 1 1\n5 0\n";
        let mut lines = text.lines().enumerate();
        let err = parse_cnf(&mut lines).unwrap_err();
        assert!(matches!(err, ReduceError::Parse(_)));
    }
}

//! The colored-graph text format: `p edge n m`, `m` edge lines, `n` color
//! lines.

use reduce_core::{ErrorInfo, ReduceError};
use reduce_graph::{Graph, Vertex};

fn parse_error(line_no: usize, message: impl Into<String>) -> ReduceError {
    ReduceError::Parse(
        ErrorInfo::new("PAR001", message.into()).with_context("line", line_no.to_string()),
    )
}

/// Parses a colored graph from its text form, starting at the cursor. 1-based
/// vertex indices in the source become 0-based [`Vertex`] indices.
pub fn parse_colored_graph(
    lines: &mut std::iter::Enumerate<std::str::Lines<'_>>,
) -> Result<Graph, ReduceError> {
    let (line_no, header) = lines
        .next()
        .ok_or_else(|| parse_error(1, "expected a graph format line"))?;
    let mut header_fields = header.split_whitespace();
    if header_fields.next() != Some("p") || header_fields.next() != Some("edge") {
        return Err(parse_error(line_no + 1, "graph format line expected"));
    }
    let n: u32 = header_fields
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| parse_error(line_no + 1, "bad graph order"))?;
    let m: usize = header_fields
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| parse_error(line_no + 1, "bad edge count"))?;
    if n <= 1 {
        return Err(parse_error(line_no + 1, format!("bad graph order n = {n}")));
    }

    let mut g = Graph::new(n);
    for _ in 0..m {
        let (line_no, line) = lines
            .next()
            .ok_or_else(|| parse_error(line_no + 2, "edge line expected"))?;
        let mut fields = line.split_whitespace();
        if fields.next() != Some("e") {
            return Err(parse_error(line_no + 1, "edge line expected"));
        }
        let u: u32 = fields
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| parse_error(line_no + 1, "bad edge endpoint"))?;
        let v: u32 = fields
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| parse_error(line_no + 1, "bad edge endpoint"))?;
        if u < 1 || v < 1 || u == v || u > n || v > n {
            return Err(parse_error(line_no + 1, format!("bad edge u = {u}, v = {v}")));
        }
        g.add_edge(Vertex::from_raw(u - 1), Vertex::from_raw(v - 1));
    }

    let mut colors = vec![-1i64; n as usize];
    for _ in 0..n {
        let (line_no, line) = lines
            .next()
            .ok_or_else(|| parse_error(line_no + 2, "color line expected"))?;
        let mut fields = line.split_whitespace();
        if fields.next() != Some("c") {
            return Err(parse_error(line_no + 1, "color line expected"));
        }
        let u: u32 = fields
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| parse_error(line_no + 1, "bad color vertex"))?;
        let c: i64 = fields
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| parse_error(line_no + 1, "bad color"))?;
        if u < 1 || c < 0 || u > n {
            return Err(parse_error(line_no + 1, format!("bad color u = {u}, c = {c}")));
        }
        colors[(u - 1) as usize] = c;
    }
    if let Some(pos) = colors.iter().position(|&c| c < 0) {
        return Err(parse_error(
            0,
            format!("vertex u = {} did not receive a color", pos + 1),
        ));
    }

    let mut lab: Vec<u32> = (0..n).collect();
    lab.sort_by_key(|&v| colors[v as usize]);
    let mut ptn = vec![1u8; n as usize];
    for i in 0..n as usize {
        if i == n as usize - 1 || colors[lab[i] as usize] != colors[lab[i + 1] as usize] {
            ptn[i] = 0;
        }
    }
    g.set_partition(lab, ptn);
    Ok(g)
}

/// Renders a colored graph in the text form `parse_colored_graph` accepts.
pub fn print_colored_graph(g: &mut Graph) -> String {
    let n = g.order();
    let edges = g.sorted_edges().to_vec();
    let mut out = format!("p edge {n} {}\n", edges.len());
    for e in &edges {
        let i = (e >> 32) as u32;
        let j = (e & 0xFFFF_FFFF) as u32;
        out.push_str(&format!("e {} {}\n", i + 1, j + 1));
    }
    let lab = g.lab().to_vec();
    let ptn = g.ptn().to_vec();
    let mut color = 0u32;
    for i in 0..lab.len() {
        out.push_str(&format!("c {} {}\n", lab[i] + 1, color));
        if ptn[i] == 0 {
            color += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_small_colored_graph() {
        let text = "p edge 3 2\ne 1 2\ne 2 3\nc 1 0\nc 2 0\nc 3 1\n";
        let mut lines = text.lines().enumerate();
        let mut g = parse_colored_graph(&mut lines).unwrap();
        assert_eq!(g.order(), 3);
        assert_eq!(g.num_edges(), 2);
        let printed = print_colored_graph(&mut g);
        assert!(printed.starts_with("p edge 3 2"));
    }

    #[test]
    fn rejects_a_missing_color() {
        let text = "p edge 3 1\ne 1 2\nc 1 0\nc 2 0\n";
        let mut lines = text.lines().enumerate();
        let err = parse_colored_graph(&mut lines).unwrap_err();
        assert!(matches!(err, ReduceError::Parse(_)));
    }
}

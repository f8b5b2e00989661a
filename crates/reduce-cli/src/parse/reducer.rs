//! The reducer header format layered on top of a graph: `p variable v` / `v`
//! lines naming the variable vertices, `p value r` / `r` lines naming the
//! value vertices, and an optional `p prefix k a t` / `a` / `f` section
//! giving a starting prefix read from the input rather than the command
//! line.

use reduce_core::{ErrorInfo, ReduceError};
use reduce_graph::Vertex;

fn parse_error(message: impl Into<String>) -> ReduceError {
    ReduceError::Parse(ErrorInfo::new("PAR003", message.into()))
}

/// A named variable or value vertex.
#[derive(Debug, Clone)]
pub struct Named {
    /// The vertex in the base graph.
    pub vertex: Vertex,
    /// Its legend, as given in the input (defaults to its 1-based index
    /// when synthesized rather than parsed).
    pub legend: String,
}

/// A prefix read from the input: `k` total entries, of which the first `a`
/// already carry an assigned value, plus the truncation threshold `t`.
#[derive(Debug, Clone)]
pub struct PrefixSpec {
    /// Truncation threshold for automorphism-order pruning.
    pub threshold: i64,
    /// Prefix variables, in order.
    pub vars: Vec<Vertex>,
    /// Values already assigned to the leading `vars` entries (length `a`).
    pub assigned: Vec<Vertex>,
}

fn parse_named_list(
    lines: &mut std::iter::Enumerate<std::str::Lines<'_>>,
    header_tag: &str,
    item_tag: &str,
    order: u32,
) -> Result<Vec<Named>, ReduceError> {
    let (_, header) = lines
        .next()
        .ok_or_else(|| parse_error(format!("{header_tag} format line expected")))?;
    let mut fields = header.split_whitespace();
    if fields.next() != Some("p") || fields.next() != Some(header_tag) {
        return Err(parse_error(format!("{header_tag} format line expected")));
    }
    let count: u32 = fields
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| parse_error(format!("bad {header_tag} parameter")))?;
    if count < 1 {
        return Err(parse_error(format!("bad {header_tag} parameter = {count}")));
    }

    let mut out = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let (_, line) = lines
            .next()
            .ok_or_else(|| parse_error(format!("{item_tag} line expected")))?;
        let mut fields = line.split_whitespace();
        if fields.next() != Some(item_tag) {
            return Err(parse_error(format!("{item_tag} line expected")));
        }
        let u: u32 = fields
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| parse_error(format!("bad {item_tag} identifier")))?;
        let legend = fields
            .next()
            .ok_or_else(|| parse_error(format!("{item_tag} legend expected")))?
            .to_string();
        if u < 1 || u > order {
            return Err(parse_error(format!("bad identifier u = {u}")));
        }
        out.push(Named {
            vertex: Vertex::from_raw(u - 1),
            legend,
        });
    }
    reject_repeats(&out)?;
    Ok(out)
}

fn reject_repeats(items: &[Named]) -> Result<(), ReduceError> {
    let mut raws: Vec<u32> = items.iter().map(|n| n.vertex.as_raw()).collect();
    raws.sort_unstable();
    if raws.windows(2).any(|w| w[0] == w[1]) {
        return Err(parse_error("list repeats an element"));
    }
    Ok(())
}

/// Parses the `p variable` section.
pub fn parse_variables(
    lines: &mut std::iter::Enumerate<std::str::Lines<'_>>,
    order: u32,
) -> Result<Vec<Named>, ReduceError> {
    parse_named_list(lines, "variable", "v", order)
}

/// Parses the `p value` section.
pub fn parse_values(
    lines: &mut std::iter::Enumerate<std::str::Lines<'_>>,
    order: u32,
) -> Result<Vec<Named>, ReduceError> {
    parse_named_list(lines, "value", "r", order)
}

/// Parses the `p prefix k a t` section followed by `a` assignment lines and
/// `k - a` free prefix lines.
pub fn parse_prefix(
    lines: &mut std::iter::Enumerate<std::str::Lines<'_>>,
    order: u32,
) -> Result<PrefixSpec, ReduceError> {
    let (_, header) = lines
        .next()
        .ok_or_else(|| parse_error("prefix format line expected"))?;
    let mut fields = header.split_whitespace();
    if fields.next() != Some("p") || fields.next() != Some("prefix") {
        return Err(parse_error("prefix format line expected"));
    }
    let k: i64 = fields
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| parse_error("bad prefix parameter k"))?;
    let a: i64 = fields
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| parse_error("bad prefix parameter a"))?;
    let t: i64 = fields
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| parse_error("bad prefix parameter t"))?;
    if k < 0 || a < 0 || a > k || t < 0 {
        return Err(parse_error(format!(
            "bad prefix parameters k = {k}, a = {a}, t = {t}"
        )));
    }

    let mut vars = Vec::with_capacity(k as usize);
    let mut assigned = Vec::with_capacity(a as usize);
    for _ in 0..a {
        let (_, line) = lines
            .next()
            .ok_or_else(|| parse_error("assignment line expected"))?;
        let mut fields = line.split_whitespace();
        if fields.next() != Some("a") {
            return Err(parse_error("assignment line expected"));
        }
        let u: u32 = fields
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| parse_error("bad assignment vertex"))?;
        let w: u32 = fields
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| parse_error("bad assignment value"))?;
        if u < 1 || u > order || w < 1 || w > order {
            return Err(parse_error(format!("bad assignment u = {u}, w = {w}")));
        }
        vars.push(Vertex::from_raw(u - 1));
        assigned.push(Vertex::from_raw(w - 1));
    }
    for _ in a..k {
        let (_, line) = lines
            .next()
            .ok_or_else(|| parse_error("prefix line expected"))?;
        let mut fields = line.split_whitespace();
        if fields.next() != Some("f") {
            return Err(parse_error("prefix line expected"));
        }
        let u: u32 = fields
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| parse_error("bad prefix vertex"))?;
        if u < 1 || u > order {
            return Err(parse_error(format!("bad prefix vertex u = {u}")));
        }
        vars.push(Vertex::from_raw(u - 1));
    }

    let mut raws: Vec<u32> = vars.iter().map(|v| v.as_raw()).collect();
    raws.sort_unstable();
    if raws.windows(2).any(|w| w[0] == w[1]) {
        return Err(parse_error("prefix repeats an element"));
    }

    Ok(PrefixSpec {
        threshold: t,
        vars,
        assigned,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_variables_and_values() {
        let text = "p variable 2\nv 1 x1\nv 2 x2\np value 2\nr 3 false\nr 4 true\n";
        let mut lines = text.lines().enumerate();
        let vars = parse_variables(&mut lines, 4).unwrap();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars[0].legend, "x1");
        let vals = parse_values(&mut lines, 4).unwrap();
        assert_eq!(vals.len(), 2);
        assert_eq!(vals[1].legend, "true");
    }

    #[test]
    fn parses_a_prefix_with_assignments() {
        let text = "p prefix 3 1 1000\na 1 3\nf 2\nf 4\n";
        let mut lines = text.lines().enumerate();
        let spec = parse_prefix(&mut lines, 4).unwrap();
        assert_eq!(spec.threshold, 1000);
        assert_eq!(spec.vars.len(), 3);
        assert_eq!(spec.assigned.len(), 1);
    }

    #[test]
    fn rejects_a_repeated_variable() {
        let text = "p variable 2\nv 1 x1\nv 1 x2\n";
        let mut lines = text.lines().enumerate();
        let err = parse_variables(&mut lines, 4).unwrap_err();
        assert!(matches!(err, ReduceError::Parse(_)));
    }
}

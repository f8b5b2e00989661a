//! End-to-end parse-then-format checks across the CNF and colored-graph
//! surfaces, and CLI flag parsing.

use clap::Parser;
use reduce_cli::cli::Cli;
use reduce_cli::format::{conjuncts, icnf};
use reduce_cli::parse::cnf;
use reduce_cli::parse::colored_graph;
use reduce_engine::Assignment;
use reduce_graph::Vertex;

#[test]
fn cnf_parses_and_synthesizes_a_colorable_graph() {
    let text = "p cnf 3 2\n1 -2 0\n-1 2 3 0\n";
    let mut lines = text.lines().enumerate();
    let parsed = cnf::parse_cnf(&mut lines).unwrap();
    let (g, vars, vals) = cnf::synthesize_graph(&parsed);
    assert_eq!(g.order(), 3 * 3 + 2 + 2);
    assert_eq!(vars.len(), 3);
    assert_eq!(vals.len(), 2);
}

#[test]
fn colored_graph_round_trips_through_print() {
    let text = "p edge 4 3\ne 1 2\ne 2 3\ne 3 4\nc 1 0\nc 2 0\nc 3 0\nc 4 1\n";
    let mut lines = text.lines().enumerate();
    let mut g = colored_graph::parse_colored_graph(&mut lines).unwrap();
    let printed = colored_graph::print_colored_graph(&mut g);
    let mut reparsed_lines = printed.lines().enumerate();
    let mut g2 = colored_graph::parse_colored_graph(&mut reparsed_lines).unwrap();
    assert_eq!(g.order(), g2.order());
    assert_eq!(g.canonical_lab(), g2.canonical_lab());
}

#[test]
fn icnf_and_conjuncts_agree_on_assignment_polarity() {
    let cnf_instance = cnf::Cnf {
        num_vars: 2,
        clauses: vec![vec![1, -2]],
    };
    let vars = vec![Vertex::from_raw(0), Vertex::from_raw(1)];
    let false_vertex = Vertex::from_raw(10);
    let true_vertex = Vertex::from_raw(11);
    let assignment = Assignment {
        vars: vec![Vertex::from_raw(0), Vertex::from_raw(1)],
        vals: vec![true_vertex, false_vertex],
        aut_trunc: 1,
    };

    let icnf_line = icnf::format_assignment(&vars, false_vertex, &assignment);
    assert_eq!(icnf_line, "a 1 -2 0\n");

    let conjuncts_out =
        conjuncts::format_conjuncts(&cnf_instance, &vars, false_vertex, std::slice::from_ref(&assignment));
    assert!(conjuncts_out.contains("1 -3 0"));
    assert!(conjuncts_out.contains("-2 -3 0"));
}

#[test]
fn cli_parses_the_minimal_flag_set() {
    let cli = Cli::parse_from(["reduce", "--length", "3", "--threshold", "10"]);
    assert_eq!(cli.length, Some(3));
    assert_eq!(cli.threshold, Some(10));
    assert!(!cli.graph);
    assert!(!cli.incremental);
}

#[test]
fn cli_parses_the_prefix_flag_as_an_integer_list() {
    let cli = Cli::parse_from(["reduce", "-p", "3", "1", "2"]);
    assert_eq!(cli.prefix, Some(vec![3, 1, 2]));
}

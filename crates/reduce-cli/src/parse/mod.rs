//! Input parsers: the colored-graph text format, DIMACS CNF, and the
//! reducer header layered on either.

pub mod cnf;
pub mod colored_graph;
pub mod reducer;

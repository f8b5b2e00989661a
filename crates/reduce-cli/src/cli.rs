//! Command-line flags for the `reduce` binary.

use std::path::PathBuf;

use clap::Parser;

/// Compute a canonical prefix assignment for a colored graph or CNF
/// instance, rejecting isomorphic branches as it goes.
#[derive(Parser, Debug)]
#[command(name = "reduce", about = "Adaptive prefix-assignment symmetry reduction")]
pub struct Cli {
    /// Print a one-line usage summary and exit.
    #[arg(short = 'u', long = "usage")]
    pub usage: bool,

    /// Emit per-level diagnostics and the final statistics table.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Read input from this file instead of stdin.
    #[arg(short = 'f', long = "file")]
    pub file: Option<PathBuf>,

    /// Write output to this file instead of stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// The input carries no CNF; only the symmetry graph (and, unless
    /// `--graph` is also given, nothing to synthesize from).
    #[arg(short = 'n', long = "no-cnf")]
    pub no_cnf: bool,

    /// The input carries an explicit colored graph of symmetries rather
    /// than one synthesized from a CNF.
    #[arg(short = 'g', long = "graph")]
    pub graph: bool,

    /// Build the prefix from the command line instead of the input: the
    /// first value is the prefix length `k`, the rest (if any) are 1-based
    /// prefix vertex identifiers.
    #[arg(short = 'p', long = "prefix", num_args = 1.., value_delimiter = ' ')]
    pub prefix: Option<Vec<i64>>,

    /// Target prefix length at which an assignment is always emitted.
    #[arg(short = 'l', long = "length")]
    pub length: Option<i64>,

    /// Emit an assignment early once the extended graph's truncated
    /// automorphism-group order drops to or below this value.
    #[arg(short = 't', long = "threshold")]
    pub threshold: Option<i64>,

    /// Stop after computing the base graph's symmetry structure; do not
    /// search for prefix assignments.
    #[arg(short = 's', long = "symmetry-only")]
    pub symmetry_only: bool,

    /// Emit incremental CNF (`p inccnf`, `a ... 0` lines) instead of the
    /// default CNF-with-conjuncts output.
    #[arg(short = 'i', long = "incremental")]
    pub incremental: bool,
}

//! Entry point for the `reduce` binary: reads a colored graph or CNF
//! instance, drives the adaptive prefix search, and emits either a plain
//! assignment listing, incremental CNF, or CNF-with-conjuncts.

use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use reduce_cli::cli::Cli;
use reduce_cli::format::{conjuncts, icnf};
use reduce_cli::parse::cnf::{self, Cnf};
use reduce_cli::parse::{colored_graph, reducer};
use reduce_core::{ErrorInfo, ReduceError};
use reduce_engine::{Assignment, SearchDriver};
use reduce_graph::{Graph, Vertex};

/// Everything read from the input stream: the base symmetry graph, its
/// variable/value vertex sets and legends, the original CNF (if any), and an
/// optional prefix read from the input rather than the command line.
struct ReducerInput {
    base: Graph,
    vars: Vec<Vertex>,
    var_legends: Vec<String>,
    vals: Vec<Vertex>,
    val_legends: Vec<String>,
    cnf: Option<Cnf>,
    file_prefix: Option<reducer::PrefixSpec>,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(io::stderr)
        .try_init();
}

fn read_input(cli: &Cli) -> Result<String, ReduceError> {
    match &cli.file {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            ReduceError::Io(
                ErrorInfo::new("IO002", e.to_string())
                    .with_context("path", path.display().to_string()),
            )
        }),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn load_input(cli: &Cli, input: &str) -> Result<ReducerInput, ReduceError> {
    let mut lines = input.lines().enumerate();

    let cnf = if cli.no_cnf {
        None
    } else {
        Some(cnf::parse_cnf(&mut lines)?)
    };

    if cli.graph {
        let base = colored_graph::parse_colored_graph(&mut lines)?;
        let order = base.order();
        let vars = reducer::parse_variables(&mut lines, order)?;
        let vals = reducer::parse_values(&mut lines, order)?;
        let file_prefix = if cli.prefix.is_none() && cli.length.is_none() {
            Some(reducer::parse_prefix(&mut lines, order)?)
        } else {
            None
        };
        Ok(ReducerInput {
            base,
            vars: vars.iter().map(|n| n.vertex).collect(),
            var_legends: vars.into_iter().map(|n| n.legend).collect(),
            vals: vals.iter().map(|n| n.vertex).collect(),
            val_legends: vals.into_iter().map(|n| n.legend).collect(),
            cnf,
            file_prefix,
        })
    } else {
        let instance = cnf.ok_or_else(|| {
            ReduceError::Input(ErrorInfo::new(
                "INP003",
                "cannot build the symmetry graph since no CNF was given",
            ))
        })?;
        let (base, vars, vals) = cnf::synthesize_graph(&instance);
        let var_legends = (1..=vars.len()).map(|i| i.to_string()).collect();
        let val_legends = vec!["false".to_string(), "true".to_string()];
        Ok(ReducerInput {
            base,
            vars,
            var_legends,
            vals,
            val_legends,
            cnf: Some(instance),
            file_prefix: None,
        })
    }
}

fn target_length(cli: &Cli, input: &ReducerInput) -> Result<i64, ReduceError> {
    if let Some(length) = cli.length {
        return Ok(length);
    }
    if let Some(prefix) = &cli.prefix {
        return Ok(*prefix.first().unwrap_or(&0));
    }
    if let Some(file_prefix) = &input.file_prefix {
        return Ok(file_prefix.vars.len() as i64);
    }
    Err(ReduceError::Input(ErrorInfo::new(
        "INP004",
        "no prefix given and no target length for prefix -- nothing to do",
    )))
}

fn print_plain_assignment(
    out: &mut impl Write,
    input: &ReducerInput,
    count: usize,
    assignment: &Assignment,
) -> io::Result<()> {
    write!(out, "{count}: [{}] ", assignment.aut_trunc)?;
    for (i, (v, val)) in assignment.vars.iter().zip(assignment.vals.iter()).enumerate() {
        let var_pos = input.vars.iter().position(|w| w == v).unwrap();
        let val_pos = input.vals.iter().position(|w| w == val).unwrap();
        if i > 0 {
            write!(out, " ")?;
        }
        write!(
            out,
            "{}={}",
            input.var_legends[var_pos], input.val_legends[val_pos]
        )?;
    }
    writeln!(out)
}

fn run(cli: Cli) -> Result<(), ReduceError> {
    init_tracing(cli.verbose);

    let raw = read_input(&cli)?;
    let input = load_input(&cli, &raw)?;
    tracing::info!(
        n = input.base.order(),
        m = input.base.num_edges(),
        v = input.vars.len(),
        r = input.vals.len(),
        "input loaded"
    );

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(fs::File::create(path).map_err(|e| {
            ReduceError::Io(
                ErrorInfo::new("IO003", e.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?),
        None => Box::new(io::stdout()),
    };

    if cli.symmetry_only {
        let mut base = input.base.dup();
        let canon = base.canonical_form();
        tracing::info!(
            order = canon.order(),
            generators = base.aut_idx().len(),
            "symmetry structure computed"
        );
        return Ok(());
    }

    let threshold = cli.threshold.unwrap_or(0);
    let length = target_length(&cli, &input)?;
    if length <= 0 {
        return Err(ReduceError::Input(ErrorInfo::new(
            "INP005",
            "nonpositive target length for prefix -- nothing to do",
        )));
    }

    let mut driver = SearchDriver::new(
        input.base.dup(),
        input.vars.clone(),
        input.vals.clone(),
        length as usize,
        threshold,
    );

    if cli.incremental {
        let cnf = input.cnf.as_ref().ok_or_else(|| {
            ReduceError::Input(ErrorInfo::new(
                "INP006",
                "incremental output requires a CNF instance",
            ))
        })?;
        out.write_all(icnf::format_header(cnf).as_bytes())?;
        let false_vertex = input.vals[0];
        let mut count = 0usize;
        while let Some(assignment) = driver.next() {
            count += 1;
            tracing::debug!(branch = count, aut_trunc = assignment.aut_trunc, "branch");
            out.write_all(
                icnf::format_assignment(&input.vars, false_vertex, &assignment).as_bytes(),
            )?;
        }
    } else if let Some(cnf) = &input.cnf {
        let false_vertex = input.vals[0];
        let mut assignments = Vec::new();
        while let Some(assignment) = driver.next() {
            tracing::debug!(
                branch = assignments.len() + 1,
                aut_trunc = assignment.aut_trunc,
                "branch"
            );
            assignments.push(assignment);
        }
        out.write_all(
            conjuncts::format_conjuncts(cnf, &input.vars, false_vertex, &assignments).as_bytes(),
        )?;
    } else {
        let mut count = 0usize;
        while let Some(assignment) = driver.next() {
            count += 1;
            print_plain_assignment(&mut out, &input, count, &assignment)?;
        }
    }

    let (gen, can, outc) = driver.stats();
    for l in 0..gen.len() {
        tracing::info!(level = l + 1, generated = gen[l], canonical = can[l], output = outc[l], "level stats");
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.usage {
        println!("{}", Cli::command().render_usage());
        return ExitCode::SUCCESS;
    }
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("reduce: {err}");
            ExitCode::FAILURE
        }
    }
}

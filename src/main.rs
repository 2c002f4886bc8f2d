use std::path::PathBuf;

use anyhow::Result;
use clap::{arg, value_parser, Command};
use tracing::Level;

use load_dispatch::parse;
use load_dispatch::solver::{NearestNeighborSolver, Solver, SolverConfig};

fn cli() -> Command {
    Command::new("load-dispatch")
        .about("Plans driver routes for pickup/dropoff loads")
        .arg(
            arg!(<LOAD_FILE> "Path to the load file")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(arg!(--debug "Enable verbose solver tracing"))
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    let level = if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();

    let path = matches
        .get_one::<PathBuf>("LOAD_FILE")
        .expect("LOAD_FILE is required");
    let loads = parse::parse_loads(path)?;

    let solver = NearestNeighborSolver::new(loads, SolverConfig::default());
    let solution = solver.solve()?;

    for route in solution.routes() {
        println!("{}", serde_json::to_string(&route.load_numbers())?);
    }
    Ok(())
}

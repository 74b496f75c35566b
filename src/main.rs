#![warn(clippy::all)]

use anyhow::{bail, Context, Result};
use clap::Parser;
use gol_sparse::{iterate, parse_rle, patterns, print_cells, Generation};
use std::path::Path;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "gol-sparse")]
#[command(version)]
#[command(about = "Sparse Game of Life simulator on the unbounded lattice")]
struct Cli {
    /// Seed pattern: a catalog name or a path to an .rle file
    pattern: String,

    /// Number of generations to simulate
    iterations: u32,
}

fn resolve_pattern(arg: &str) -> Result<Generation> {
    if let Some(seed) = patterns::lookup(arg) {
        return Ok(seed);
    }
    let path = Path::new(arg);
    if path.extension().is_some_and(|ext| ext == "rle") {
        let data = std::fs::read(path)
            .with_context(|| format!("reading pattern file {}", path.display()))?;
        return parse_rle(&data);
    }
    bail!("unknown pattern {:?}", arg);
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let seed = match resolve_pattern(&cli.pattern) {
        Ok(seed) => seed,
        Err(err) => {
            log::error!("{:#}", err);
            eprintln!(
                "Usage: gol-sparse <{}|FILE.rle> <iterations>",
                patterns::NAMES.join("|")
            );
            return ExitCode::from(2);
        }
    };

    log::info!(
        "simulating {} generations of {:?} (population {})",
        cli.iterations,
        cli.pattern,
        seed.population()
    );
    for generation in iterate(seed, cli.iterations) {
        println!("{}", print_cells(&generation));
    }
    ExitCode::SUCCESS
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `push_swap`: print a move list that sorts the given integers.
//!
//! Moves go to stdout, one per line. Any invalid argument prints `Error` to
//! stderr and exits with status 1. Logging goes to stderr and is controlled
//! by `RUST_LOG`, e.g. `RUST_LOG=pushswap_search=debug`.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use pushswap_search::input::parse_args;
use pushswap_search::ChunkSorter;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    name = "push_swap",
    version,
    about = "Print push_swap moves that sort the given integers"
)]
struct Cli {
    /// Log search statistics at info level when done.
    #[arg(long)]
    stats: bool,

    /// Integers to sort; the first one is the top of stack A.
    #[arg(allow_negative_numbers = true)]
    values: Vec<String>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => return error_exit(),
    };
    tracing_subscriber::fmt::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("{:#}", e);
            error_exit()
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let values = parse_args(&cli.values)?;
    let mut sorter = ChunkSorter::new();
    let moves = sorter.sort(&values);

    let mut out = BufWriter::new(io::stdout().lock());
    for m in &moves {
        writeln!(out, "{}", m)?;
    }
    out.flush()?;

    if cli.stats {
        for (counter, n) in sorter.context().statistics.iter() {
            info!(%counter, n, "statistic");
        }
        info!(moves = moves.len(), "total moves");
    }
    Ok(())
}

fn error_exit() -> ExitCode {
    eprintln!("Error");
    ExitCode::FAILURE
}

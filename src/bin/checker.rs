// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `checker`: read moves from stdin and report whether they sort the given
//! integers.
//!
//! Prints `OK` or `KO` on stdout. Invalid integers or an unknown move print
//! `Error` on stderr and exit with status 1. With no integers, prints
//! nothing.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use pushswap_search::input::parse_args;
use pushswap_search::verifier::verify_tokens;
use std::io::{self, BufRead};
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "checker",
    version,
    about = "Check that the moves on stdin sort the given integers"
)]
struct Cli {
    /// Integers on stack A; the first one is the top.
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
    if values.is_empty() {
        return Ok(());
    }
    let mut tokens = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let token = line.trim();
        if !token.is_empty() {
            tokens.push(token.to_string());
        }
    }
    let mut expected = values.clone();
    expected.sort_unstable();
    let verdict = verify_tokens(&tokens, &values, &expected)?;
    debug!(moves = tokens.len(), %verdict, "replayed");
    println!("{}", verdict);
    Ok(())
}

fn error_exit() -> ExitCode {
    eprintln!("Error");
    ExitCode::FAILURE
}

//! Costeo - Trip cost and profitability calculator for freight trucking
//!
//! A CLI tool that computes per-trip operating costs for a small
//! Colombian freight fleet and keeps a trace of completed trips.

use clap::Parser;
use costeo::cli::Cli;
use costeo::commands;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

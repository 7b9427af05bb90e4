//! Binary entry point for the machim CLI

use clap::Parser;
use machim_cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = cli.execute() {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}

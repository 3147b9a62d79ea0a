//! concat-code - Concatenate every code file under a directory into one file
//!
//! concat-code provides:
//! - Recursive walk of a source directory (default `src`)
//! - Extension allow-list filtering
//! - UTF-8 reading with a Latin-1 fallback
//! - A single path-annotated output file (default `all-code.txt`)

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

mod backends;
mod cli;
mod core;
mod flows;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

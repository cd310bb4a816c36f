//! CLI binary for `tarefas`.
//!
//! This binary is a thin wrapper that parses arguments and delegates to the
//! library.

use std::process::ExitCode;

use clap::Parser;
use tarefas::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match tarefas::cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

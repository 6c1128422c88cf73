//! gridlab: run and compare grid search strategies from the terminal.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use gridlab::{Cli, RunConfig, run_with};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = RunConfig::try_from(cli).and_then(|config| run_with(&config, &mut io::stdout()));
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gridlab: {e}");
            ExitCode::FAILURE
        }
    }
}

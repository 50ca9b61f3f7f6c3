//! `spacelog [OPTIONS] <LEVEL> <MESSAGE>...` - one-shot logging from shell scripts.

use clap::Parser;
use spacelog::cli::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("spacelog: {e}");
            ExitCode::FAILURE
        }
    }
}

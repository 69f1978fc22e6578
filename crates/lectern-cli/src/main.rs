use std::process::ExitCode;

use clap::Parser;
use lectern_cli::{CliArgs, LecternCli};

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match LecternCli::from_args("lectern", &args).and_then(|cli| cli.run(args)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

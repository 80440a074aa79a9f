use std::process::ExitCode;

use clap::Parser;
use vocab_voice::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();
    vocab_voice::logging::init(args.verbose());

    match vocab_voice::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}

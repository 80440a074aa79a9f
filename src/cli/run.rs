//! Dispatch a parsed command line to its handler.

use anyhow::Result;

use super::{
    args::Command,
    commands::{CommandResult, generate::generate, init::init},
};

pub fn run(command: Command) -> Result<CommandResult> {
    match command {
        Command::Generate(args) => generate(args),
        Command::Init(args) => init(args),
    }
}

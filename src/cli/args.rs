//! CLI argument definitions using clap.
//!
//! Running the binary with no arguments generates audio for the project in
//! the current directory, exactly like `vocab-voice generate`.
//!
//! ## Commands
//!
//! - `generate`: Extract texts, fetch missing audio, write the registry (default)
//! - `init`: Write a default configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

impl Arguments {
    /// The command to run; no subcommand means `generate`.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Generate(self.generate))
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Generate(args)) => args.common.verbose,
            Some(Command::Init(args)) => args.common.verbose,
            None => self.generate.common.verbose,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root containing the word lists (defaults to the current directory)
    #[arg(long, env = "VOCAB_VOICE_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    pub fn root_dir(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// List what would be fetched without calling the TTS service or writing files
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Default, Args)]
pub struct InitArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate audio files and the asset registry (default)
    Generate(GenerateArgs),
    /// Initialize a new .vocabvoicerc.json configuration file
    Init(InitArgs),
}

use std::path::PathBuf;

use crate::cli::exit_status::ExitStatus;
use crate::core::GenerationOutcome;

#[derive(Debug)]
pub enum CommandSummary {
    Generate(GenerateSummary),
    /// The synthesis client is not part of this build; nothing was processed.
    Unavailable(UnavailableSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct GenerateSummary {
    pub root: PathBuf,
    pub dry_run: bool,
    pub outcome: GenerationOutcome,
}

#[derive(Debug)]
pub struct UnavailableSummary {
    pub reason: String,
}

#[derive(Debug)]
pub struct InitSummary {
    /// `None` when a config file already existed.
    pub created: Option<PathBuf>,
    pub existing: Option<PathBuf>,
}

/// Result of running a vocab-voice command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub exit_status: ExitStatus,
}

impl CommandResult {
    pub fn generate(summary: GenerateSummary) -> Self {
        let exit_status = if summary.outcome.failures.is_empty() {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        };
        Self {
            summary: CommandSummary::Generate(summary),
            exit_status,
        }
    }

    pub fn unavailable(reason: String) -> Self {
        Self {
            summary: CommandSummary::Unavailable(UnavailableSummary { reason }),
            exit_status: ExitStatus::Error,
        }
    }

    pub fn init(summary: InitSummary) -> Self {
        let exit_status = if summary.created.is_some() {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        };
        Self {
            summary: CommandSummary::Init(summary),
            exit_status,
        }
    }
}

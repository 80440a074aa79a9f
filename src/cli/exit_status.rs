use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Everything resolved (missing word files are only warnings)
/// - `Failure` (1): Some texts could not be synthesized, or `init` found an existing config
/// - `Error` (2): The run could not proceed (no TTS client, config error, I/O error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command completed, but some items failed.
    Failure,
    /// Command failed before or during processing.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

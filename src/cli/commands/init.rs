use std::fs;

use anyhow::{Context, Result};

use super::{CommandResult, InitSummary};
use crate::cli::args::InitArgs;
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init(args: InitArgs) -> Result<CommandResult> {
    let config_path = args.common.root_dir().join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Ok(CommandResult::init(InitSummary {
            created: None,
            existing: Some(config_path),
        }));
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    Ok(CommandResult::init(InitSummary {
        created: Some(config_path),
        existing: None,
    }))
}

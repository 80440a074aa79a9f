use anyhow::Result;
use tracing::debug;

use super::{CommandResult, GenerateSummary};
use crate::cli::{args::GenerateArgs, report::ProgressPrinter};
use crate::config::{CONFIG_FILE_NAME, load_config};
use crate::core::{GenerationEvent, Generator};
use crate::tts;

pub fn generate(args: GenerateArgs) -> Result<CommandResult> {
    let root = args.common.root_dir();
    let loaded = load_config(&root)?;

    if args.common.verbose && !loaded.from_file {
        eprintln!(
            "Note: No {} found, using default configuration",
            CONFIG_FILE_NAME
        );
    }
    let config = loaded.config;
    let printer = ProgressPrinter::new(&root);
    let mut on_event = |event: &GenerationEvent| printer.event(event);

    let outcome = if args.dry_run {
        Generator::dry_run(&config, &root).run(&mut on_event)?
    } else {
        // Capability check: nothing is read or written without a client.
        let synthesizer = match tts::default_synthesizer(&config) {
            Ok(synthesizer) => synthesizer,
            Err(err) => return Ok(CommandResult::unavailable(err.to_string())),
        };
        debug!(synthesizer = synthesizer.name(), "synthesis client ready");
        Generator::new(&config, &root, synthesizer.as_ref()).run(&mut on_event)?
    };

    Ok(CommandResult::generate(GenerateSummary {
        root,
        dry_run: args.dry_run,
        outcome,
    }))
}

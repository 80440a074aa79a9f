//! The generation pipeline.
//!
//! Load → Extract → Deduplicate → (per item: Check → Fetch-or-Skip) →
//! Serialize → Write. Every accumulator is local to [`Generator::run`] and
//! handed back in the [`GenerationOutcome`].

use std::{
    fs,
    path::{Path, PathBuf},
    thread,
    time::Duration,
};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use super::{
    extract::{collect_unique_texts, key_pattern},
    naming::asset_file_name,
    registry::{RegistryEntry, RegistryOptions, render_registry, write_registry},
};
use crate::{
    config::Config,
    tts::{SpeechOptions, Synthesizer},
};

/// Per-item state reported while the run progresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemStatus {
    /// Audio already on disk.
    Skipped,
    /// About to call the synthesizer.
    Fetching,
    /// Would be fetched, but this is a dry run.
    Planned,
    /// Synthesis or write failed; the item is left out of the registry.
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct ItemProgress<'a> {
    /// 1-based position in the unique-text sequence.
    pub index: usize,
    pub total: usize,
    pub file_name: &'a str,
    pub text: &'a str,
    pub status: ItemStatus,
}

/// Everything the pipeline reports while it runs, in order.
#[derive(Debug, Clone)]
pub enum GenerationEvent<'a> {
    /// A word file did not exist and was skipped.
    MissingFile(&'a Path),
    /// All word files were read.
    Collected { unique_count: usize },
    Item(ItemProgress<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationFailure {
    pub text: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct GenerationOutcome {
    pub unique_count: usize,
    /// Resolved entries in sequence order; exactly what the registry lists.
    pub entries: Vec<RegistryEntry>,
    pub failures: Vec<GenerationFailure>,
    pub missing_files: Vec<PathBuf>,
    pub fetched_count: usize,
    pub skipped_count: usize,
    pub planned_count: usize,
    pub audio_dir: PathBuf,
    pub registry_path: PathBuf,
    pub registry_written: bool,
}

pub struct Generator<'a> {
    config: &'a Config,
    root: PathBuf,
    /// `None` plans the run without fetching or writing anything.
    synthesizer: Option<&'a dyn Synthesizer>,
    delay: Duration,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a Config, root: &Path, synthesizer: &'a dyn Synthesizer) -> Self {
        Self {
            config,
            root: root.to_path_buf(),
            synthesizer: Some(synthesizer),
            delay: Duration::from_millis(config.request_delay_ms),
        }
    }

    pub fn dry_run(config: &'a Config, root: &Path) -> Self {
        Self {
            config,
            root: root.to_path_buf(),
            synthesizer: None,
            delay: Duration::ZERO,
        }
    }

    pub fn run(
        &self,
        on_event: &mut dyn FnMut(&GenerationEvent<'_>),
    ) -> Result<GenerationOutcome> {
        let pattern = key_pattern(&self.config.key)?;
        let unique = collect_unique_texts(&self.config.word_file_paths(&self.root), &pattern)?;
        info!(count = unique.texts.len(), "collected unique texts");

        for path in &unique.missing_files {
            on_event(&GenerationEvent::MissingFile(path));
        }
        on_event(&GenerationEvent::Collected {
            unique_count: unique.texts.len(),
        });

        let audio_dir = self.config.resolve(&self.root, &self.config.audio_dir);
        let registry_path = self.config.resolve(&self.root, &self.config.registry_file);

        if self.synthesizer.is_some() {
            fs::create_dir_all(&audio_dir).with_context(|| {
                format!("Failed to create audio directory: {}", audio_dir.display())
            })?;
        }

        let mut outcome = GenerationOutcome {
            unique_count: unique.texts.len(),
            missing_files: unique.missing_files,
            ..Default::default()
        };
        let options = SpeechOptions::from_config(self.config);
        let total = unique.texts.len();

        for (i, text) in unique.texts.into_iter().enumerate() {
            let index = i + 1;
            let file_name = asset_file_name(&self.config.file_prefix, index);
            let path = audio_dir.join(&file_name);
            let progress = |status| {
                GenerationEvent::Item(ItemProgress {
                    index,
                    total,
                    file_name: &file_name,
                    text: &text,
                    status,
                })
            };

            if path.exists() {
                on_event(&progress(ItemStatus::Skipped));
                outcome.skipped_count += 1;
            } else {
                let Some(synthesizer) = self.synthesizer else {
                    on_event(&progress(ItemStatus::Planned));
                    outcome.planned_count += 1;
                    continue;
                };

                on_event(&progress(ItemStatus::Fetching));
                if let Err(message) = fetch_to(synthesizer, &text, &options, &path) {
                    warn!(text = %text, error = %message, "synthesis failed");
                    on_event(&progress(ItemStatus::Failed(message.clone())));
                    outcome.failures.push(GenerationFailure {
                        text: text.clone(),
                        message,
                    });
                    continue;
                }
                outcome.fetched_count += 1;
                if !self.delay.is_zero() {
                    thread::sleep(self.delay);
                }
            }

            outcome.entries.push(RegistryEntry { text, file_name });
        }

        if self.synthesizer.is_some() {
            let content = render_registry(&outcome.entries, &self.registry_options());
            write_registry(&registry_path, &content)?;
            outcome.registry_written = true;
        }

        outcome.audio_dir = audio_dir;
        outcome.registry_path = registry_path;
        Ok(outcome)
    }

    fn registry_options(&self) -> RegistryOptions {
        RegistryOptions {
            export_name: self.config.export_name.clone(),
            asset_path_prefix: self.config.asset_path_prefix.clone(),
            regenerate_command: self.config.regenerate_command.clone(),
        }
    }
}

/// Synthesize `text` and save it; any failure is reduced to its message.
fn fetch_to(
    synthesizer: &dyn Synthesizer,
    text: &str,
    options: &SpeechOptions,
    path: &Path,
) -> std::result::Result<(), String> {
    let audio = synthesizer
        .synthesize(text, options)
        .map_err(|e| e.to_string())?;
    fs::write(path, &audio).map_err(|e| format!("failed to write {}: {}", path.display(), e))?;
    debug!(file = %path.display(), bytes = audio.len(), "saved audio");
    Ok(())
}

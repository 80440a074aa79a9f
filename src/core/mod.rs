//! Extraction, naming, registry rendering and the generation pipeline.

pub mod extract;
pub mod generate;
pub mod naming;
pub mod registry;

pub use extract::{UniqueTexts, collect_unique_texts, dedup_in_order, extract_values, key_pattern};
pub use generate::{
    GenerationEvent, GenerationFailure, GenerationOutcome, Generator, ItemProgress, ItemStatus,
};
pub use naming::asset_file_name;
pub use registry::{RegistryEntry, RegistryOptions, escape_ts_string, render_registry};

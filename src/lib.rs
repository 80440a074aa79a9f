//! vocab-voice - text-to-speech asset generator for word-list apps
//!
//! vocab-voice scans TypeScript word lists for `ua: '...'` entries, fetches one
//! MP3 per unique text from Google's TTS service, and writes an Expo
//! `require()` registry mapping each text to its audio file.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, progress output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction, naming, registry rendering and the generation pipeline
//! - `logging`: Diagnostic `tracing` setup
//! - `tts`: Speech synthesis seam and the Google client

pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod tts;

//! Speech synthesis.
//!
//! [`Synthesizer`] is the seam between the generation pipeline and the
//! network. The Google client lives behind the `google-tts` feature; builds
//! without it fail the startup capability check in [`default_synthesizer`].

pub mod chunk;
#[cfg(feature = "google-tts")]
pub mod google;

use thiserror::Error;

use crate::config::Config;

/// Language and pacing of a synthesis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechOptions {
    pub language: String,
    pub slow: bool,
}

impl SpeechOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            language: config.language.clone(),
            slow: config.slow,
        }
    }
}

#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("{0}")]
    Unavailable(String),
    #[error("request failed: {0}")]
    Http(String),
    #[error("{status} ({reason}) from TTS API")]
    Status { status: u16, reason: String },
    #[error("no audio data in TTS response")]
    MissingAudio,
    #[error("invalid audio payload: {0}")]
    Decode(String),
}

/// Converts text into encoded (MP3) audio.
pub trait Synthesizer {
    fn name(&self) -> &str;
    fn synthesize(&self, text: &str, options: &SpeechOptions) -> Result<Vec<u8>, SynthesisError>;
}

/// Remediation shown when no synthesis client is compiled in.
pub const INSTALL_HINT: &str = "Install it with:  cargo install vocab-voice --features google-tts";

/// Build the synthesis client for this build, or report why it is unavailable.
#[cfg(feature = "google-tts")]
pub fn default_synthesizer(config: &Config) -> Result<Box<dyn Synthesizer>, SynthesisError> {
    let client = google::GoogleTts::new(&config.tld, config.request_timeout_secs)?;
    Ok(Box::new(client))
}

/// Build the synthesis client for this build, or report why it is unavailable.
#[cfg(not(feature = "google-tts"))]
pub fn default_synthesizer(_config: &Config) -> Result<Box<dyn Synthesizer>, SynthesisError> {
    Err(SynthesisError::Unavailable(
        "the Google TTS client is not available in this build.".to_string(),
    ))
}

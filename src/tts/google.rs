//! Google Translate text-to-speech client.
//!
//! Talks to the same `batchexecute` RPC the Translate web UI uses. Each
//! request carries at most [`chunk::MAX_CHARS`] characters; longer text is
//! split and the returned MP3 segments are concatenated.

use std::time::Duration;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use regex::Regex;
use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, REFERER, USER_AGENT};
use serde_json::{Value, json};
use tracing::debug;

use super::{SpeechOptions, SynthesisError, Synthesizer, chunk};

const RPC_ID: &str = "jQ1olc";

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; WOW64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/47.0.2526.106 Safari/537.36";

pub struct GoogleTts {
    client: Client,
    endpoint: String,
    referer: String,
    audio_pattern: Regex,
}

impl GoogleTts {
    pub fn new(tld: &str, timeout_secs: u64) -> Result<Self, SynthesisError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| {
                SynthesisError::Unavailable(format!("failed to initialize HTTP client: {}", e))
            })?;

        let audio_pattern = Regex::new(&format!(r#"{}","\[\\"(.*?)\\"\]"#, RPC_ID))
            .map_err(|e| SynthesisError::Unavailable(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: format!(
                "https://translate.google.{}/_/TranslateWebserverUi/data/batchexecute",
                tld
            ),
            referer: format!("https://translate.google.{}/", tld),
            audio_pattern,
        })
    }

    fn fetch_chunk(&self, text: &str, options: &SpeechOptions) -> Result<Vec<u8>, SynthesisError> {
        let body = request_payload(text, options);

        let response = self
            .client
            .post(&self.endpoint)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .header(REFERER, &self.referer)
            .header(
                CONTENT_TYPE,
                "application/x-www-form-urlencoded;charset=utf-8",
            )
            .body(form_body(&body))
            .send()
            .map_err(|e| SynthesisError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SynthesisError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let text = response
            .text()
            .map_err(|e| SynthesisError::Http(e.to_string()))?;
        decode_audio(&text, &self.audio_pattern)
    }
}

impl Synthesizer for GoogleTts {
    fn name(&self) -> &str {
        "google"
    }

    fn synthesize(&self, text: &str, options: &SpeechOptions) -> Result<Vec<u8>, SynthesisError> {
        let chunks = chunk::split_text(text, chunk::MAX_CHARS);
        if chunks.is_empty() {
            return Err(SynthesisError::MissingAudio);
        }
        debug!(chunks = chunks.len(), lang = %options.language, "synthesizing");

        let mut audio = Vec::new();
        for part in &chunks {
            let bytes = self.fetch_chunk(part, options)?;
            debug!(bytes = bytes.len(), "received audio chunk");
            audio.extend(bytes);
        }
        Ok(audio)
    }
}

/// The `f.req` value: the RPC envelope wrapping a JSON-encoded argument list.
fn request_payload(text: &str, options: &SpeechOptions) -> String {
    let speed = if options.slow {
        Value::Bool(true)
    } else {
        Value::Null
    };
    let args = json!([text, options.language, speed, "null"]).to_string();
    json!([[[RPC_ID, args, null, "generic"]]]).to_string()
}

fn form_body(payload: &str) -> String {
    format!("f.req={}", urlencoding::encode(payload))
}

/// Pull the base64 audio out of a `batchexecute` response body.
fn decode_audio(body: &str, pattern: &Regex) -> Result<Vec<u8>, SynthesisError> {
    let encoded = body
        .lines()
        .filter(|line| line.contains(RPC_ID))
        .find_map(|line| pattern.captures(line))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or(SynthesisError::MissingAudio)?;

    STANDARD
        .decode(encoded)
        .map_err(|e| SynthesisError::Decode(e.to_string()))
}

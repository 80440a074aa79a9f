use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".vocabvoicerc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Word-list files, scanned in this order.
    #[serde(default = "default_word_files")]
    pub word_files: Vec<String>,
    #[serde(default = "default_audio_dir")]
    pub audio_dir: String,
    #[serde(default = "default_registry_file")]
    pub registry_file: String,
    /// Object key whose quoted value is extracted, e.g. `ua: 'бути'`.
    #[serde(default = "default_key")]
    pub key: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub slow: bool,
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
    /// Pause after every fetch attempt.
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
    #[serde(default = "default_export_name")]
    pub export_name: String,
    /// Asset directory as seen from the registry file.
    #[serde(default = "default_asset_path_prefix")]
    pub asset_path_prefix: String,
    #[serde(default = "default_regenerate_command")]
    pub regenerate_command: String,
    #[serde(default = "default_tld")]
    pub tld: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_word_files() -> Vec<String> {
    [
        "constants/words.ts",
        "constants/words-es.ts",
        "constants/words-de.ts",
    ]
    .map(String::from)
    .to_vec()
}

fn default_audio_dir() -> String {
    "assets/audio/uk".to_string()
}

fn default_registry_file() -> String {
    "constants/audio-uk.ts".to_string()
}

fn default_key() -> String {
    "ua".to_string()
}

fn default_language() -> String {
    "uk".to_string()
}

fn default_file_prefix() -> String {
    "uk".to_string()
}

fn default_request_delay_ms() -> u64 {
    350
}

fn default_export_name() -> String {
    "UK_AUDIO".to_string()
}

fn default_asset_path_prefix() -> String {
    "../assets/audio/uk".to_string()
}

fn default_regenerate_command() -> String {
    "vocab-voice".to_string()
}

fn default_tld() -> String {
    "com".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_files: default_word_files(),
            audio_dir: default_audio_dir(),
            registry_file: default_registry_file(),
            key: default_key(),
            language: default_language(),
            slow: false,
            file_prefix: default_file_prefix(),
            request_delay_ms: default_request_delay_ms(),
            export_name: default_export_name(),
            asset_path_prefix: default_asset_path_prefix(),
            regenerate_command: default_regenerate_command(),
            tld: default_tld(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.word_files.is_empty() {
            bail!("'wordFiles' must list at least one file");
        }
        if self.key.trim().is_empty() {
            bail!("'key' must not be empty");
        }
        if self.language.trim().is_empty() {
            bail!("'language' must not be empty");
        }

        let identifier = Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$")
            .context("Failed to compile identifier pattern")?;
        if !identifier.is_match(&self.export_name) {
            bail!(
                "Invalid 'exportName': \"{}\" is not a valid TypeScript identifier",
                self.export_name
            );
        }

        Ok(())
    }

    /// Resolve a configured path against the project root.
    pub fn resolve(&self, root: &Path, configured: &str) -> PathBuf {
        let p = Path::new(configured);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
            root.join(rel)
        }
    }

    pub fn word_file_paths(&self, root: &Path) -> Vec<PathBuf> {
        self.word_files
            .iter()
            .map(|f| self.resolve(root, f))
            .collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

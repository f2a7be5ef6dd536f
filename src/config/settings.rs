//! Application settings structs, defaults and TOML loading.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be read from TOML files.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// LlmConfig
// ---------------------------------------------------------------------------

/// Settings for the text-generation service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Base URL of the OpenAI-compatible endpoint (without `/v1/...`).
    ///
    /// - Groq default: `https://api.groq.com/openai`
    /// - Ollama: `http://localhost:11434`
    pub base_url: String,
    /// Explicit API key.  When `None`, the key is read from the environment
    /// variable named by `api_key_env` at request time.
    pub api_key: Option<String>,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    /// Model identifier sent to the API (e.g. `"llama3-8b-8192"`).
    pub model: String,
    /// Sampling temperature (0.0 – 2.0).
    pub temperature: f32,
    /// Output budget for a single per-number phrase request.
    pub phrase_max_tokens: u32,
    /// Output budget for the whole-text rewrite request.
    pub rewrite_max_tokens: u32,
    /// Maximum seconds to wait for a response before timing out.
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.groq.com/openai".into(),
            api_key: None,
            api_key_env: "GROQ_API_KEY".into(),
            model: "llama3-8b-8192".into(),
            temperature: 0.7,
            phrase_max_tokens: 300,
            rewrite_max_tokens: 1024,
            timeout_secs: 30,
        }
    }
}

// ---------------------------------------------------------------------------
// ExtractConfig
// ---------------------------------------------------------------------------

/// Settings for numeric-context extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Tokens taken on each side of a number: the window is
    /// `[i - window_radius, i + window_radius)`.
    pub window_radius: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self { window_radius: 3 }
    }
}

// ---------------------------------------------------------------------------
// OutputConfig
// ---------------------------------------------------------------------------

/// Where the answer log and final rewritten text are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Append-only log of `Number: …, Context: …, Answer: …` records.
    pub answer_log: PathBuf,
    /// Final rewritten passage; overwritten on each run.
    pub final_text: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            answer_log: PathBuf::from("answer.txt"),
            final_text: PathBuf::from("final_text.txt"),
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level configuration, read from `settings.toml`.
///
/// ```rust,no_run
/// use speech_numbers::config::AppConfig;
///
/// // Returns Default when the file is missing
/// let config = AppConfig::load().unwrap();
/// assert!(config.extract.window_radius > 0);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Text-generation service settings.
    pub llm: LlmConfig,
    /// Extraction settings.
    pub extract: ExtractConfig,
    /// Output file locations.
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Write to an explicit path, creating parent directories as needed.
    #[cfg(test)]
    fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

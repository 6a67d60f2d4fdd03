use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::normalizer::default_stop_words;
use crate::models::MatchConfig;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub dispatch: DispatchSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    #[serde(default = "default_skill_weight")]
    pub skill_weight: f64,
    #[serde(default = "default_inferred_skill_discount")]
    pub inferred_skill_discount: f64,
    /// Stop words added on top of the built-in English set.
    #[serde(default)]
    pub extra_stop_words: Vec<String>,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            skill_weight: default_skill_weight(),
            inferred_skill_discount: default_inferred_skill_discount(),
            extra_stop_words: Vec::new(),
        }
    }
}

fn default_top_k() -> usize { 3 }
fn default_skill_weight() -> f64 { 0.7 }
fn default_inferred_skill_discount() -> f64 { 0.5 }

impl MatchingSettings {
    /// Build the engine-facing session configuration. Validation happens
    /// when the session runs.
    pub fn to_match_config(&self) -> MatchConfig {
        let mut stop_words = default_stop_words();
        stop_words.extend(self.extra_stop_words.iter().map(|w| w.to_lowercase()));

        MatchConfig {
            top_k: self.top_k,
            skill_weight: self.skill_weight,
            inferred_skill_discount: self.inferred_skill_discount,
            stop_words,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DispatchSettings {
    #[serde(default = "default_queue_depth")]
    pub queue_depth: usize,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            queue_depth: default_queue_depth(),
        }
    }
}

fn default_queue_depth() -> usize { 64 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "pretty".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with RANKITECH_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with RANKITECH_)
            // e.g., RANKITECH_MATCHING__TOP_K -> matching.top_k
            .add_source(
                Environment::with_prefix("RANKITECH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("RANKITECH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

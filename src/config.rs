use crate::core::topics::TopicPool;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub topics: TopicSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_values_weight")]
    pub values: f64,
    #[serde(default = "default_lifestyle_weight")]
    pub lifestyle: f64,
    #[serde(default = "default_communication_weight")]
    pub communication: f64,
    #[serde(default = "default_chemistry_weight")]
    pub chemistry: f64,
    #[serde(default = "default_goal_bonus")]
    pub goal_bonus: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            values: default_values_weight(),
            lifestyle: default_lifestyle_weight(),
            communication: default_communication_weight(),
            chemistry: default_chemistry_weight(),
            goal_bonus: default_goal_bonus(),
        }
    }
}

fn default_values_weight() -> f64 { 0.30 }
fn default_lifestyle_weight() -> f64 { 0.20 }
fn default_communication_weight() -> f64 { 0.25 }
fn default_chemistry_weight() -> f64 { 0.25 }
fn default_goal_bonus() -> f64 { 10.0 }

/// Overrides for the built-in conversation vocabularies
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopicSettings {
    #[serde(default)]
    pub pool: Vec<String>,
    #[serde(default)]
    pub icebreakers: Vec<String>,
}

impl TopicSettings {
    /// Build the topic pool, falling back to defaults for empty lists
    pub fn to_pool(&self) -> TopicPool {
        TopicPool::new(self.pool.clone(), self.icebreakers.clone())
    }
}

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
    /// 3. Environment variables (prefixed with MINGLE_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with MINGLE_)
            // e.g., MINGLE_SCORING__WEIGHTS__VALUES -> scoring.weights.values
            .add_source(
                Environment::with_prefix("MINGLE")
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
                Environment::with_prefix("MINGLE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

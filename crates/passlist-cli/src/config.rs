use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use passlist_core::ComplexityTier;
use passlist_generate::{GenerateOptions, WorkerLimits};

const ENV_PREFIX: &str = "PASSLIST_";
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Application settings, layered defaults < config file < environment < flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tier: ComplexityTier,
    pub workers: usize,
    pub output_dir: PathBuf,
    pub log_dir: PathBuf,
    pub min_workers: usize,
    pub max_workers: usize,
    pub enable_logging: bool,
    pub log_level: String,
    pub enable_progress: bool,
    pub channel_capacity: usize,
    pub progress_interval: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tier: ComplexityTier::Normal,
            workers: 4,
            output_dir: PathBuf::from("./output"),
            log_dir: PathBuf::from("./logs"),
            min_workers: 1,
            max_workers: 16,
            enable_logging: true,
            log_level: "info".to_string(),
            enable_progress: true,
            channel_capacity: 1000,
            progress_interval: 1000,
        }
    }
}

impl AppConfig {
    /// Defaults, then the optional TOML file, then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::from_toml_str(&content)?
            }
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Overrides fields from `PASSLIST_*` variables. Values that do not
    /// parse, or a worker count outside the bounds, leave the field as is.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(&format!("{ENV_PREFIX}{name}"))
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(tier) = var("TIER").and_then(|value| value.parse().ok()) {
            self.tier = tier;
        }
        if let Some(max) = var("MAX_WORKERS")
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|max| *max >= self.min_workers)
        {
            self.max_workers = max;
        }
        if let Some(workers) = var("WORKERS")
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|workers| (self.min_workers..=self.max_workers).contains(workers))
        {
            self.workers = workers;
        }
        if let Some(dir) = var("OUTPUT_DIR") {
            self.output_dir = PathBuf::from(dir);
        }
        if let Some(dir) = var("LOG_DIR") {
            self.log_dir = PathBuf::from(dir);
        }
        if let Some(enabled) = var("ENABLE_LOGGING").and_then(|value| parse_bool(&value)) {
            self.enable_logging = enabled;
        }
        if let Some(level) = var("LOG_LEVEL")
            .map(|value| value.to_ascii_lowercase())
            .filter(|level| LOG_LEVELS.contains(&level.as_str()))
        {
            self.log_level = level;
        }
        if let Some(enabled) = var("ENABLE_PROGRESS").and_then(|value| parse_bool(&value)) {
            self.enable_progress = enabled;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_workers == 0 || self.min_workers > self.max_workers {
            return Err(ConfigError::Invalid(format!(
                "worker bounds {}..={} are not usable",
                self.min_workers, self.max_workers
            )));
        }
        if self.channel_capacity == 0 {
            return Err(ConfigError::Invalid(
                "channel_capacity must be positive".to_string(),
            ));
        }
        if self.progress_interval == 0 {
            return Err(ConfigError::Invalid(
                "progress_interval must be positive".to_string(),
            ));
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "unknown log level '{}'",
                self.log_level
            )));
        }
        Ok(())
    }

    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            tier: self.tier,
            workers: self.workers,
            limits: WorkerLimits {
                min: self.min_workers,
                max: self.max_workers,
            },
            channel_capacity: self.channel_capacity,
            progress_every: self.progress_interval,
        }
    }
}

/// Accepts the usual spellings: 1/0, t/f, true/false in any case.
fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Some(true),
        "0" | "f" | "false" => Some(false),
        _ => None,
    }
}

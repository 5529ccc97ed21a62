//! Configuration file and flag resolution
//!
//! `triplex.json`:
//!
//! ```json
//! { "triples_path": "data/people.txt", "branching_factor": 3, "log_level": "warn" }
//! ```
//!
//! Flags override file values. Without `--config`, `./triplex.json` is used
//! if it exists; with `--triples` no file is needed at all.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::index::{DEFAULT_BRANCHING_FACTOR, MIN_BRANCHING_FACTOR};
use crate::observability::{log_event_with_fields, Event, Severity};

use super::args::SourceArgs;
use super::errors::{CliError, CliResult};

/// Configuration file looked up when no `--config` is given
pub const DEFAULT_CONFIG_PATH: &str = "./triplex.json";

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Triple file (required)
    pub triples_path: PathBuf,

    /// Tree branching factor (optional, default 3)
    #[serde(default = "default_branching_factor")]
    pub branching_factor: usize,

    /// Minimum log severity (optional, default "warn")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_branching_factor() -> usize {
    DEFAULT_BRANCHING_FACTOR
}

// stdout carries command output; keep INFO lines off it unless asked
fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Config for a triple file with every other value defaulted
    pub fn for_triples(path: impl Into<PathBuf>) -> Self {
        Self {
            triples_path: path.into(),
            branching_factor: default_branching_factor(),
            log_level: default_log_level(),
        }
    }

    /// Load and validate configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let config = Self::read(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config file without validating its values
    fn read(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
    }

    /// Combine the config file (if any) with command line overrides.
    ///
    /// Values are validated once, after the flags are applied.
    pub fn resolve(source: &SourceArgs) -> CliResult<Self> {
        let mut config = match (&source.config, &source.triples) {
            (Some(path), _) => Self::read(path)?,
            (None, Some(triples)) => Self::for_triples(triples),
            (None, None) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::read(Path::new(DEFAULT_CONFIG_PATH))?
            }
            (None, None) => {
                return Err(CliError::config_error(
                    "No triple source: pass --triples or --config",
                ))
            }
        };

        if let Some(triples) = &source.triples {
            config.triples_path = triples.clone();
        }
        if let Some(t) = source.branching_factor {
            config.branching_factor = t;
        }
        if let Some(level) = &source.log_level {
            config.log_level = level.clone();
        }

        config.validate()?;
        Ok(config)
    }

    /// Log the resolved values. Call after the logger threshold is applied.
    pub fn log_loaded(&self) {
        let t = self.branching_factor.to_string();
        log_event_with_fields(
            Event::ConfigLoaded,
            &[("branching_factor", t.as_str()), ("log_level", self.log_level.as_str())],
        );
    }

    fn validate(&self) -> CliResult<()> {
        if self.branching_factor < MIN_BRANCHING_FACTOR {
            return Err(CliError::config_error(format!(
                "branching_factor must be >= {}, got {}",
                MIN_BRANCHING_FACTOR, self.branching_factor
            )));
        }

        if Severity::parse(&self.log_level).is_none() {
            return Err(CliError::config_error(format!(
                "Invalid log_level: '{}'. Must be one of trace, info, warn, error, fatal.",
                self.log_level
            )));
        }

        Ok(())
    }

    /// Parsed log level; validated by `load` and `resolve`
    pub fn severity(&self) -> Severity {
        Severity::parse(&self.log_level).unwrap_or(Severity::Warn)
    }
}

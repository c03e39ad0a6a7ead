//! CLI configuration management
//!
//! Handles loading configuration from TOML files with environment variable
//! overrides. Command-line flags are applied last by the commands.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::ValueEnum;
use pricer_models::scenario::{PresetScenario, Scenario};
use pricer_risk::sweep::{
    StepGrid, SweepError, DEFAULT_LOG10_MAX, DEFAULT_LOG10_MIN, DEFAULT_POINTS,
};
use serde::Deserialize;
use thiserror::Error;

/// Default configuration file, read when present in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "csgreeks.toml";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: csv, json, table")]
    InvalidFormat(String),

    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Log levels accepted in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Sweep table output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
    Table,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "table" | "txt" => Ok(OutputFormat::Table),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl OutputFormat {
    /// File extension for tables written in this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Table => "txt",
        }
    }
}

/// Step grid section (`[grid]`)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub points: usize,
    pub log10_min: f64,
    pub log10_max: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            points: DEFAULT_POINTS,
            log10_min: DEFAULT_LOG10_MIN,
            log10_max: DEFAULT_LOG10_MAX,
        }
    }
}

impl GridConfig {
    /// Build the validated step grid
    pub fn to_step_grid(&self) -> Result<StepGrid, SweepError> {
        StepGrid::new(self.points, self.log10_min, self.log10_max)
    }
}

/// One `[[scenarios]]` entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScenarioConfig {
    pub name: String,
    /// Output file stem; defaults to `name`
    #[serde(default)]
    pub file_stem: Option<String>,
    pub spot: f64,
    pub strike: f64,
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub dividend_yield: f64,
    pub volatility: f64,
    pub expiry: f64,
}

impl ScenarioConfig {
    /// Entry for a preset scenario
    pub fn from_preset(preset: PresetScenario) -> Self {
        let s = preset.scenario();
        Self {
            name: preset.name().to_string(),
            file_stem: Some(preset.file_stem().to_string()),
            spot: s.spot(),
            strike: s.strike(),
            rate: s.rate(),
            dividend_yield: s.dividend_yield(),
            volatility: s.volatility(),
            expiry: s.expiry(),
        }
    }

    /// Market scenario described by this entry
    pub fn scenario(&self) -> Scenario {
        Scenario::new(
            self.spot,
            self.strike,
            self.rate,
            self.dividend_yield,
            self.volatility,
            self.expiry,
        )
    }

    /// Output file stem
    pub fn file_stem(&self) -> &str {
        self.file_stem.as_deref().unwrap_or(&self.name)
    }
}

/// Top-level CLI configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: LogLevel,
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    pub grid: GridConfig,
    pub scenarios: Vec<ScenarioConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            output_dir: PathBuf::from("results"),
            format: OutputFormat::Csv,
            grid: GridConfig::default(),
            scenarios: PresetScenario::all()
                .into_iter()
                .map(ScenarioConfig::from_preset)
                .collect(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Resolve the configuration source.
    ///
    /// An explicit path must exist. Without one, `csgreeks.toml` is used if
    /// present, otherwise defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Apply `CSGREEKS_*` environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("CSGREEKS_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }

        if let Some(dir) = lookup("CSGREEKS_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(dir);
        }

        if let Some(format) = lookup("CSGREEKS_FORMAT") {
            self.format = <OutputFormat as FromStr>::from_str(&format)?;
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if let Err(err) = self.grid.to_step_grid() {
            errors.push(err.to_string());
        }

        if self.output_dir.as_os_str().is_empty() {
            errors.push("output_dir cannot be empty".to_string());
        }

        if self.scenarios.is_empty() {
            errors.push("at least one scenario is required".to_string());
        }

        let mut seen = std::collections::HashSet::new();
        for entry in &self.scenarios {
            if entry.name.trim().is_empty() {
                errors.push("scenario name cannot be empty".to_string());
            }
            if !seen.insert(entry.name.as_str()) {
                errors.push(format!("duplicate scenario name '{}'", entry.name));
            }
            if entry.file_stem().trim().is_empty() {
                errors.push(format!("scenario '{}': file_stem cannot be empty", entry.name));
            }
            if let Err(err) = entry.scenario().validate() {
                errors.push(format!("scenario '{}': {}", entry.name, err));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Look up a scenario by name, falling back to the preset table
    pub fn find_scenario(&self, name: &str) -> Option<ScenarioConfig> {
        self.scenarios
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
            .cloned()
            .or_else(|| name.parse().ok().map(ScenarioConfig::from_preset))
    }
}

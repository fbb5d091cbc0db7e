//! Configuration management with TOML, environment variables, and CLI overrides.

use crate::filters::{FilterState, SortOrder};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Annual interest rate used when none is given, in percent
    #[serde(default = "default_interest_rate_percent")]
    pub interest_rate_percent: f64,

    /// Amortization period used when none is given, in years
    #[serde(default = "default_amortization_years")]
    pub amortization_years: u32,

    /// Listings per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Ordering for filtered listings
    #[serde(default)]
    pub sort: SortOrder,

    /// Default filter controls
    #[serde(default)]
    pub filters: FilterState,
}

fn default_interest_rate_percent() -> f64 {
    4.84
}

fn default_amortization_years() -> u32 {
    25
}

fn default_page_size() -> usize {
    20
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            interest_rate_percent: default_interest_rate_percent(),
            amortization_years: default_amortization_years(),
            page_size: default_page_size(),
            sort: SortOrder::Default,
            filters: FilterState::default(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Candidate config locations, in lookup order.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("homescope.toml")];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("homescope").join("config.toml"));
        }
        paths
    }

    /// Loads the explicit path if given, else the first existing search
    /// path, else defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        match Self::search_paths().into_iter().find(|p| p.exists()) {
            Some(path) => {
                debug!("Found config at {}", path.display());
                Self::from_file(path)
            }
            None => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies environment variable overrides. Unparseable values are ignored.
    pub fn with_env(mut self) -> Self {
        if let Ok(rate) = std::env::var("HOMESCOPE_RATE") {
            if let Ok(r) = rate.parse() {
                self.interest_rate_percent = r;
            }
        }

        if let Ok(years) = std::env::var("HOMESCOPE_YEARS") {
            if let Ok(y) = years.parse() {
                self.amortization_years = y;
            }
        }

        if let Ok(size) = std::env::var("HOMESCOPE_PAGE_SIZE") {
            if let Ok(s) = size.parse() {
                self.page_size = s;
            }
        }

        if let Ok(format) = std::env::var("HOMESCOPE_FORMAT") {
            if let Ok(f) = format.parse() {
                self.format = f;
            }
        }

        self
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Markdown,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use: table, json, markdown, csv", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

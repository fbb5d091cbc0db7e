//! Loading already-fetched listing payloads.

use super::models::Listing;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Anything that can hand the filter engine a batch of listings.
pub trait ListingSource {
    /// Loads all listings.
    fn load(&self) -> Result<Vec<Listing>>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}

/// Accepts a bare array or an object wrapping one under `listings`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListingPayload {
    Bare(Vec<Listing>),
    Wrapped { listings: Vec<Listing> },
}

/// Parses a listings JSON document.
pub fn parse_listings(json: &str) -> Result<Vec<Listing>> {
    let payload: ListingPayload =
        serde_json::from_str(json).context("Failed to parse listings JSON")?;

    Ok(match payload {
        ListingPayload::Bare(listings) => listings,
        ListingPayload::Wrapped { listings } => listings,
    })
}

/// Reads listings JSON from a file, or from stdin when the path is `-`.
pub struct JsonListingSource {
    path: Option<PathBuf>,
}

impl JsonListingSource {
    /// Creates a source reading from `path`. `-` means stdin.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if path == Path::new("-") {
            Self::stdin()
        } else {
            Self { path: Some(path.to_path_buf()) }
        }
    }

    pub fn stdin() -> Self {
        Self { path: None }
    }
}

impl ListingSource for JsonListingSource {
    fn load(&self) -> Result<Vec<Listing>> {
        let content = match &self.path {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read listings file: {}", path.display()))?,
            None => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read listings from stdin")?;
                buffer
            }
        };

        let listings = parse_listings(&content)?;
        debug!("Loaded {} listings from {}", listings.len(), self.describe());
        Ok(listings)
    }

    fn describe(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => "stdin".to_string(),
        }
    }
}

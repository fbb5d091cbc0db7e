//! Filter command implementation.

use crate::config::{Config, OutputFormat};
use crate::filters::{sort_listings, FilterChain};
use crate::format::Formatter;
use crate::listings::{JsonListingSource, Listing, ListingSource};
use crate::pagination::Paginator;
use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::{debug, info};

/// Narrows a batch of listings with the configured filters.
pub struct FilterCommand {
    config: Config,
}

impl FilterCommand {
    /// Creates a new filter command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Loads listings from `path` (`-` for stdin) and returns formatted output.
    pub fn execute(&self, path: &Path, page: Option<usize>) -> Result<String> {
        let source = JsonListingSource::new(path);
        self.execute_with_source(&source, page)
    }

    /// Executes the filter against a provided source (for testing).
    pub fn execute_with_source(
        &self,
        source: &impl ListingSource,
        page: Option<usize>,
    ) -> Result<String> {
        let listings = source
            .load()
            .with_context(|| format!("Failed to load listings from {}", source.describe()))?;

        let filters = FilterChain::from_state(&self.config.filters);
        if !filters.is_empty() {
            debug!("Active filters: {}", filters.descriptions().join(", "));
        }

        let mut matched: Vec<Listing> = filters.apply(&listings).into_iter().cloned().collect();
        sort_listings(&mut matched, self.config.sort);

        info!("{} of {} listings match", matched.len(), listings.len());

        let formatter = Formatter::new(self.config.format);

        let Some(page_number) = page else {
            return Ok(formatter.format_listings(&matched));
        };

        let paginator = Paginator::new(self.config.page_size).context("Invalid page size")?;
        let total_pages = paginator.total_pages(matched.len());
        if total_pages > 0 && page_number > total_pages {
            bail!("Page {} is past the last page ({})", page_number, total_pages);
        }

        let page = paginator.page(&matched, page_number);
        debug!(
            "Serving page {} of {} ({} per page)",
            page.page,
            page.total_pages,
            paginator.page_size()
        );

        let mut output = formatter.format_listings(page.items);
        if matches!(self.config.format, OutputFormat::Table | OutputFormat::Markdown)
            && !page.items.is_empty()
        {
            output.push_str(&format!(
                "\nPage {} of {}{}",
                page.page,
                page.total_pages,
                if page.has_more { " (more available)" } else { "" }
            ));
        }

        Ok(output)
    }
}

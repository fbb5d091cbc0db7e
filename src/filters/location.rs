//! Free-text location filter.

use super::Filter;
use crate::listings::ListingView;

/// Matches a search term against neighborhood, area, and city.
///
/// Containment is checked in both directions, so `"Toronto"` matches a
/// listing in `"Toronto"` and `"Downtown Toronto, ON"` matches a listing
/// whose area is `"Downtown Toronto"`.
pub struct LocationFilter {
    query: String,
}

impl LocationFilter {
    /// Creates a new location filter. The query is trimmed and lowercased.
    pub fn new(query: impl AsRef<str>) -> Self {
        Self { query: query.as_ref().trim().to_lowercase() }
    }
}

impl Filter for LocationFilter {
    fn matches(&self, listing: &ListingView<'_>) -> bool {
        listing.location_fields.iter().any(|field| {
            let field = field.trim().to_lowercase();
            field.contains(&self.query) || self.query.contains(&field)
        })
    }

    fn description(&self) -> String {
        format!("Location: {}", self.query)
    }
}

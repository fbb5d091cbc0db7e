//! Property type and sub-type filter.

use super::Filter;
use crate::listings::ListingView;

/// Case-insensitive equality that also accepts a trailing plural `s`
/// on either side, so `"house"` matches `"Houses"`.
pub fn types_match(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();

    a == b || a.strip_suffix('s') == Some(b.as_str()) || b.strip_suffix('s') == Some(a.as_str())
}

/// Keeps listings of a property type, optionally narrowed to a sub-type.
pub struct PropertyTypeFilter {
    property_type: String,
    sub_type: Option<String>,
}

impl PropertyTypeFilter {
    pub fn new(property_type: impl Into<String>) -> Self {
        Self { property_type: property_type.into(), sub_type: None }
    }

    /// Sub-types are only checked once the main type has matched.
    pub fn with_sub_type(mut self, sub_type: impl Into<String>) -> Self {
        self.sub_type = Some(sub_type.into());
        self
    }
}

impl Filter for PropertyTypeFilter {
    fn matches(&self, listing: &ListingView<'_>) -> bool {
        let Some(property_type) = listing.property_type else {
            return false;
        };

        if !types_match(&self.property_type, property_type) {
            return false;
        }

        match &self.sub_type {
            Some(wanted) => listing.sub_property_type.is_some_and(|sub| types_match(wanted, sub)),
            None => true,
        }
    }

    fn description(&self) -> String {
        match &self.sub_type {
            Some(sub) => format!("Type: {} ({})", self.property_type, sub),
            None => format!("Type: {}", self.property_type),
        }
    }
}

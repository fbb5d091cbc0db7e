//! Bedroom and bathroom count filters.
//!
//! Both read the listing's range text first and fall back to its units.
//! With range text, bedrooms use full containment while bathrooms only
//! compare the lower bound, so `"2-3"` fails a 3-bathroom request but
//! passes a 3-bedroom one. Without range text, a listing passes when any
//! unit has at least the requested count, and a listing with neither is
//! excluded.

use super::range::{parse_numeric_range, range_satisfies};
use super::Filter;
use crate::listings::ListingView;

/// At least one unit with `count >= requested`. Empty means no match.
fn any_unit_has(counts: &[f64], requested: u32) -> bool {
    counts.iter().any(|&count| count >= f64::from(requested))
}

/// Keeps listings whose bedroom range contains the requested count.
pub struct BedroomFilter {
    requested: u32,
}

impl BedroomFilter {
    pub fn new(requested: u32) -> Self {
        Self { requested }
    }
}

impl Filter for BedroomFilter {
    fn matches(&self, listing: &ListingView<'_>) -> bool {
        match &listing.bedroom_range {
            Some(text) => range_satisfies(&parse_numeric_range(text), self.requested),
            None => any_unit_has(&listing.unit_bedrooms, self.requested),
        }
    }

    fn description(&self) -> String {
        format!("Bedrooms: {}", self.requested)
    }
}

/// Keeps listings whose bathroom range starts at or above the requested count.
pub struct BathroomFilter {
    requested: u32,
}

impl BathroomFilter {
    pub fn new(requested: u32) -> Self {
        Self { requested }
    }
}

impl Filter for BathroomFilter {
    fn matches(&self, listing: &ListingView<'_>) -> bool {
        match &listing.bathroom_range {
            Some(text) => parse_numeric_range(text).min >= self.requested,
            None => any_unit_has(&listing.unit_bathrooms, self.requested),
        }
    }

    fn description(&self) -> String {
        format!("Bathrooms: {}+", self.requested)
    }
}

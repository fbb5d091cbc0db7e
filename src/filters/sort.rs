//! Result ordering.

use crate::listings::Listing;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Order applied to filtered listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Keep the order the backend returned.
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" | "none" => Ok(SortOrder::Default),
            "price-asc" | "price" | "low" => Ok(SortOrder::PriceAsc),
            "price-desc" | "high" => Ok(SortOrder::PriceDesc),
            _ => Err(format!("Unknown sort order: {}. Use: default, price-asc, price-desc", s)),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Default => write!(f, "default"),
            SortOrder::PriceAsc => write!(f, "price-asc"),
            SortOrder::PriceDesc => write!(f, "price-desc"),
        }
    }
}

/// Stable sort by effective price; ties keep their input order.
pub fn sort_listings(listings: &mut [Listing], order: SortOrder) {
    let by_price = |a: &Listing, b: &Listing| {
        a.effective_price().partial_cmp(&b.effective_price()).unwrap_or(Ordering::Equal)
    };

    match order {
        SortOrder::Default => {}
        SortOrder::PriceAsc => listings.sort_by(by_price),
        SortOrder::PriceDesc => listings.sort_by(|a, b| by_price(b, a)),
    }
}

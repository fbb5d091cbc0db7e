//! Listing filtering system with composable filters.

pub mod location;
pub mod price;
pub mod property_type;
pub mod range;
pub mod rooms;
pub mod sort;

use crate::listings::{Listing, ListingView};
use serde::{Deserialize, Serialize};
use tracing::trace;

pub use location::LocationFilter;
pub use price::PriceFilter;
pub use property_type::PropertyTypeFilter;
pub use range::{parse_numeric_range, range_satisfies, RangeSpec};
pub use rooms::{BathroomFilter, BedroomFilter};
pub use sort::{sort_listings, SortOrder};

/// Sentinel meaning "no constraint" for text dimensions.
pub const ALL: &str = "all";

/// Trait for filtering listings.
pub trait Filter: Send + Sync {
    /// Returns true if the listing passes the filter.
    fn matches(&self, listing: &ListingView<'_>) -> bool;

    /// Returns a description of this filter.
    fn description(&self) -> String;
}

/// A chain of filters that must all pass.
pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterChain {
    /// Creates an empty filter chain.
    pub fn new() -> Self {
        Self { filters: Vec::new() }
    }

    /// Builds the chain for every active dimension of `state`.
    pub fn from_state(state: &FilterState) -> Self {
        FilterChainBuilder::new()
            .property_type(state.active_property_type(), state.active_sub_property_type())
            .price_range(state.active_min_price(), state.active_max_price())
            .location(state.active_location())
            .bedrooms(state.active_bedrooms())
            .bathrooms(state.active_bathrooms())
            .build()
    }

    /// Adds a filter to the chain.
    pub fn add(&mut self, filter: impl Filter + 'static) -> &mut Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Checks if a listing passes all filters.
    pub fn matches(&self, listing: &Listing) -> bool {
        let view = ListingView::new(listing);
        self.filters.iter().all(|f| f.matches(&view))
    }

    /// Returns the listings that pass, in input order. The input is untouched.
    pub fn apply<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        let kept: Vec<&Listing> = listings.iter().filter(|l| self.matches(l)).collect();
        trace!("Filter chain kept {} of {} listings", kept.len(), listings.len());
        kept
    }

    /// Returns true if no filters are configured.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Returns the number of filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns descriptions of all filters.
    pub fn descriptions(&self) -> Vec<String> {
        self.filters.iter().map(|f| f.description()).collect()
    }
}

impl Default for FilterChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder that only adds filters for dimensions that carry a constraint.
pub struct FilterChainBuilder {
    chain: FilterChain,
}

impl FilterChainBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self { chain: FilterChain::new() }
    }

    /// Adds a property type filter, narrowed by sub-type when given.
    pub fn property_type(mut self, property_type: Option<&str>, sub_type: Option<&str>) -> Self {
        if let Some(property_type) = property_type {
            let mut filter = PropertyTypeFilter::new(property_type);
            if let Some(sub_type) = sub_type {
                filter = filter.with_sub_type(sub_type);
            }
            self.chain.add(filter);
        }
        self
    }

    /// Adds a price range filter.
    pub fn price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        match (min, max) {
            (Some(min), Some(max)) => {
                self.chain.add(PriceFilter::range(min, max));
            }
            (Some(min), None) => {
                self.chain.add(PriceFilter::min(min));
            }
            (None, Some(max)) => {
                self.chain.add(PriceFilter::max(max));
            }
            (None, None) => {}
        }
        self
    }

    /// Adds a free-text location filter.
    pub fn location(mut self, query: Option<&str>) -> Self {
        if let Some(query) = query {
            self.chain.add(LocationFilter::new(query));
        }
        self
    }

    /// Adds a bedroom filter.
    pub fn bedrooms(mut self, requested: Option<u32>) -> Self {
        if let Some(requested) = requested {
            self.chain.add(BedroomFilter::new(requested));
        }
        self
    }

    /// Adds a bathroom filter.
    pub fn bathrooms(mut self, requested: Option<u32>) -> Self {
        if let Some(requested) = requested {
            self.chain.add(BathroomFilter::new(requested));
        }
        self
    }

    /// Builds the filter chain.
    pub fn build(self) -> FilterChain {
        self.chain
    }
}

impl Default for FilterChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Filter controls as the browsing page holds them. Each dimension uses a
/// sentinel (`0` or `"all"`) for "no constraint".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub property_type: String,
    pub sub_property_type: String,
    pub min_price: f64,
    pub max_price: f64,
    pub location: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            property_type: ALL.to_string(),
            sub_property_type: ALL.to_string(),
            min_price: 0.0,
            max_price: 0.0,
            location: String::new(),
            bedrooms: 0,
            bathrooms: 0,
        }
    }
}

fn active_text(value: &str) -> Option<&str> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case(ALL) {
        None
    } else {
        Some(value)
    }
}

fn active_amount(value: f64) -> Option<f64> {
    (value > 0.0).then_some(value)
}

fn active_count(value: u32) -> Option<u32> {
    (value > 0).then_some(value)
}

impl FilterState {
    pub fn active_property_type(&self) -> Option<&str> {
        active_text(&self.property_type)
    }

    /// Only meaningful alongside an active property type.
    pub fn active_sub_property_type(&self) -> Option<&str> {
        self.active_property_type().and(active_text(&self.sub_property_type))
    }

    pub fn active_min_price(&self) -> Option<f64> {
        active_amount(self.min_price)
    }

    pub fn active_max_price(&self) -> Option<f64> {
        active_amount(self.max_price)
    }

    pub fn active_location(&self) -> Option<&str> {
        active_text(&self.location)
    }

    pub fn active_bedrooms(&self) -> Option<u32> {
        active_count(self.bedrooms)
    }

    pub fn active_bathrooms(&self) -> Option<u32> {
        active_count(self.bathrooms)
    }

    /// True when every dimension is at its sentinel.
    pub fn is_unconstrained(&self) -> bool {
        FilterChain::from_state(self).is_empty()
    }
}

/// Narrows `listings` to those passing every active dimension of `filters`.
/// Returns a new collection in input order.
pub fn filter_listings(listings: &[Listing], filters: &FilterState) -> Vec<Listing> {
    FilterChain::from_state(filters).apply(listings).into_iter().cloned().collect()
}

//! Listing models, the flattening view adapter, and JSON sources.

pub mod models;
pub mod source;
pub mod view;

pub use models::{Address, Details, Listing, NumericField, PreCon, PreConDetails, Unit};
pub use source::{parse_listings, JsonListingSource, ListingSource};
pub use view::ListingView;

//! homescope - Mortgage affordability and listing filter toolkit
//!
//! Pure calculators for amortized payments and affordability, plus a
//! filter engine over already-fetched residential and pre-construction
//! listings.

pub mod commands;
pub mod config;
pub mod error;
pub mod filters;
pub mod format;
pub mod listings;
pub mod mortgage;
pub mod pagination;

pub use config::Config;
pub use error::CalcError;
pub use filters::{filter_listings, parse_numeric_range, range_satisfies, FilterState, RangeSpec};
pub use listings::Listing;
pub use mortgage::{
    build_guidance, compute_amortized_payment, compute_max_loan_for_payment,
    evaluate_affordability, AffordabilityInput, AffordabilityResult, GuidanceItem,
};

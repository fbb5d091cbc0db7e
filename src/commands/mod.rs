//! CLI command implementations.

pub mod afford;
pub mod filter;
pub mod payment;
pub mod range;

pub use afford::AffordCommand;
pub use filter::FilterCommand;
pub use payment::PaymentCommand;
pub use range::RangeCommand;

//! Mortgage payment and affordability calculations.

pub mod affordability;
pub mod amortization;
pub mod guidance;

pub use affordability::{
    evaluate_affordability, AffordabilityInput, AffordabilityResult, HOUSING_COST_RATIO,
};
pub use amortization::{
    amortization_schedule, compute_amortized_payment, compute_max_loan_for_payment,
    PaymentSummary, ScheduleYear,
};
pub use guidance::{build_guidance, AffordabilityReport, GuidanceItem};

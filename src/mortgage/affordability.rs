//! Affordability evaluation based on the gross-income housing ratio.

use super::amortization::{compute_amortized_payment, compute_max_loan_for_payment};
use crate::error::{ensure_amount, CalcError};
use serde::{Deserialize, Serialize};

/// Share of gross monthly income that may go to housing costs.
pub const HOUSING_COST_RATIO: f64 = 0.28;

/// Inputs from the affordability form. Empty fields arrive as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityInput {
    pub annual_income: f64,
    pub monthly_debts: f64,
    pub down_payment: f64,
    /// Annual rate as a percentage: 4.84 means 4.84%.
    pub interest_rate_percent: f64,
    pub amortization_years: u32,
    pub property_price: f64,
}

impl Default for AffordabilityInput {
    fn default() -> Self {
        Self {
            annual_income: 0.0,
            monthly_debts: 0.0,
            down_payment: 0.0,
            interest_rate_percent: 4.84,
            amortization_years: 25,
            property_price: 0.0,
        }
    }
}

impl AffordabilityInput {
    /// Checks the preconditions of [`evaluate_affordability`].
    pub fn validate(&self) -> Result<(), CalcError> {
        ensure_amount("annual_income", self.annual_income)?;
        ensure_amount("monthly_debts", self.monthly_debts)?;
        ensure_amount("down_payment", self.down_payment)?;
        ensure_amount("interest_rate_percent", self.interest_rate_percent)?;
        ensure_amount("property_price", self.property_price)?;

        if self.amortization_years == 0 {
            return Err(CalcError::invalid("amortization_years", "must be greater than zero"));
        }

        Ok(())
    }

    /// Validates, then evaluates.
    pub fn evaluate(&self) -> Result<AffordabilityResult, CalcError> {
        self.validate()?;
        Ok(evaluate_affordability(self))
    }

    pub fn monthly_income(&self) -> f64 {
        self.annual_income / 12.0
    }

    /// Amount that has to be financed. Negative when the down payment
    /// exceeds the price.
    pub fn loan_amount(&self) -> f64 {
        self.property_price - self.down_payment
    }
}

/// Derived affordability metrics. Recomputed on every input change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityResult {
    pub max_affordable_price: f64,
    pub max_monthly_payment: f64,
    pub monthly_payment_for_given_price: f64,
    /// 0 to 100.
    pub affordability_score: f64,
    pub is_affordable: bool,
}

/// Evaluates how well the buyer's income covers the property price.
///
/// `max_monthly_payment` is not clamped: heavy debts drive it negative,
/// which pushes the maximum affordable price below the down payment.
pub fn evaluate_affordability(input: &AffordabilityInput) -> AffordabilityResult {
    let max_monthly_payment = input.monthly_income() * HOUSING_COST_RATIO - input.monthly_debts;

    let monthly_payment_for_given_price = compute_amortized_payment(
        input.loan_amount(),
        input.interest_rate_percent,
        input.amortization_years,
    );

    let max_loan = compute_max_loan_for_payment(
        max_monthly_payment,
        input.interest_rate_percent,
        input.amortization_years,
    );
    let max_affordable_price = max_loan + input.down_payment;

    AffordabilityResult {
        max_affordable_price,
        max_monthly_payment,
        monthly_payment_for_given_price,
        affordability_score: affordability_score(max_affordable_price, input.property_price),
        is_affordable: monthly_payment_for_given_price <= max_monthly_payment,
    }
}

fn affordability_score(max_affordable_price: f64, property_price: f64) -> f64 {
    if property_price <= 0.0 {
        return 0.0;
    }

    (100.0 * max_affordable_price / property_price).clamp(0.0, 100.0)
}

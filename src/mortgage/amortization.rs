//! Fixed-rate amortization formulas.

use crate::error::{ensure_amount, CalcError};
use serde::{Deserialize, Serialize};

/// Converts an annual percentage rate into a monthly fraction.
fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / 12.0
}

fn num_payments(years: u32) -> f64 {
    f64::from(years) * 12.0
}

/// Monthly payment that fully repays `principal` over `years`.
///
/// Callers validate `principal >= 0` and `years > 0` first; this function
/// does no checking and simply lets the arithmetic run, so a negative
/// principal yields a negative payment.
pub fn compute_amortized_payment(principal: f64, annual_rate_percent: f64, years: u32) -> f64 {
    let rate = monthly_rate(annual_rate_percent);
    let n = num_payments(years);

    if rate == 0.0 {
        return principal / n;
    }

    // Discount form stays finite for long terms where (1 + r)^n overflows
    principal * rate / (1.0 - (1.0 + rate).powf(-n))
}

/// Largest loan a given monthly payment can carry. Inverse of
/// [`compute_amortized_payment`].
pub fn compute_max_loan_for_payment(
    max_monthly_payment: f64,
    annual_rate_percent: f64,
    years: u32,
) -> f64 {
    let rate = monthly_rate(annual_rate_percent);
    let n = num_payments(years);

    if rate == 0.0 {
        return max_monthly_payment * n;
    }

    max_monthly_payment * (1.0 - (1.0 + rate).powf(-n)) / rate
}

/// Validates arguments shared by the payment calculators.
pub fn validate_loan_terms(
    principal: f64,
    annual_rate_percent: f64,
    years: u32,
) -> Result<(), CalcError> {
    ensure_amount("principal", principal)?;
    ensure_amount("interest_rate_percent", annual_rate_percent)?;
    if years == 0 {
        return Err(CalcError::invalid("amortization_years", "must be greater than zero"));
    }
    Ok(())
}

/// Totals for a mortgage over its full amortization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentSummary {
    pub principal: f64,
    pub interest_rate_percent: f64,
    pub amortization_years: u32,
    pub monthly_payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
}

impl PaymentSummary {
    pub fn new(principal: f64, annual_rate_percent: f64, years: u32) -> Self {
        let monthly_payment = compute_amortized_payment(principal, annual_rate_percent, years);
        let total_paid = monthly_payment * num_payments(years);

        Self {
            principal,
            interest_rate_percent: annual_rate_percent,
            amortization_years: years,
            monthly_payment,
            total_paid,
            total_interest: total_paid - principal,
        }
    }

    /// Validates the loan terms before computing.
    pub fn checked(
        principal: f64,
        annual_rate_percent: f64,
        years: u32,
    ) -> Result<Self, CalcError> {
        validate_loan_terms(principal, annual_rate_percent, years)?;
        Ok(Self::new(principal, annual_rate_percent, years))
    }
}

/// One year of an amortization schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleYear {
    pub year: u32,
    pub principal_paid: f64,
    pub interest_paid: f64,
    pub ending_balance: f64,
}

/// Year-by-year breakdown of a loan, simulated month by month.
pub fn amortization_schedule(
    principal: f64,
    annual_rate_percent: f64,
    years: u32,
) -> Vec<ScheduleYear> {
    let rate = monthly_rate(annual_rate_percent);
    let payment = compute_amortized_payment(principal, annual_rate_percent, years);
    let mut balance = principal;
    let mut schedule = Vec::with_capacity(years as usize);

    for year in 1..=years {
        let mut principal_paid = 0.0;
        let mut interest_paid = 0.0;

        for _ in 0..12 {
            let interest = balance * rate;
            let reduction = (payment - interest).min(balance);
            interest_paid += interest;
            principal_paid += reduction;
            balance -= reduction;
        }

        // Absorb floating point drift on the final row
        if year == years || balance.abs() < 1e-6 {
            principal_paid += balance;
            balance = 0.0;
        }

        schedule.push(ScheduleYear {
            year,
            principal_paid,
            interest_paid,
            ending_balance: balance,
        });
    }

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {} to be within {} of {}",
            actual,
            tolerance,
            expected
        );
    }

    #[test]
    fn test_known_payment() {
        // 100k at 6% over 30 years is the textbook 599.55
        let payment = compute_amortized_payment(100_000.0, 6.0, 30);
        assert_close(payment, 599.55, 0.01);
    }

    #[test]
    fn test_zero_rate_payment() {
        let payment = compute_amortized_payment(120_000.0, 0.0, 10);
        assert_eq!(payment, 1000.0);
    }

    #[test]
    fn test_zero_principal() {
        assert_eq!(compute_amortized_payment(0.0, 5.0, 25), 0.0);
        assert_eq!(compute_max_loan_for_payment(0.0, 5.0, 25), 0.0);
    }

    #[test]
    fn test_negative_principal_passes_through() {
        let payment = compute_amortized_payment(-10_000.0, 5.0, 25);
        assert!(payment < 0.0);
    }

    #[test]
    fn test_zero_rate_max_loan() {
        assert_eq!(compute_max_loan_for_payment(1000.0, 0.0, 10), 120_000.0);
    }

    #[test]
    fn test_round_trip() {
        for &principal in &[1.0, 50_000.0, 425_000.0, 1_949_000.0] {
            for &rate in &[0.5, 2.25, 4.84, 12.0, 30.0] {
                for &years in &[1, 5, 15, 25, 30, 50] {
                    let payment = compute_amortized_payment(principal, rate, years);
                    let back = compute_max_loan_for_payment(payment, rate, years);
                    let relative = ((back - principal) / principal).abs();
                    assert!(
                        relative < 1e-6,
                        "round trip drifted for {} at {}% over {}y: {}",
                        principal,
                        rate,
                        years,
                        back
                    );
                }
            }
        }
    }

    #[test]
    fn test_payment_non_negative() {
        for years in 1..=50 {
            for rate in 0..=30 {
                let payment = compute_amortized_payment(250_000.0, rate as f64, years);
                assert!(payment.is_finite());
                assert!(payment >= 0.0);
            }
        }
    }

    #[test]
    fn test_validate_loan_terms() {
        assert!(validate_loan_terms(100_000.0, 5.0, 25).is_ok());
        assert!(validate_loan_terms(0.0, 0.0, 1).is_ok());

        let err = validate_loan_terms(-1.0, 5.0, 25).unwrap_err();
        assert!(matches!(err, CalcError::InvalidArgument { param: "principal", .. }));

        let err = validate_loan_terms(100_000.0, 5.0, 0).unwrap_err();
        assert!(matches!(err, CalcError::InvalidArgument { param: "amortization_years", .. }));

        let err = validate_loan_terms(100_000.0, -0.5, 25).unwrap_err();
        assert!(matches!(err, CalcError::InvalidArgument { param: "interest_rate_percent", .. }));
    }

    #[test]
    fn test_payment_summary() {
        let summary = PaymentSummary::new(100_000.0, 6.0, 30);
        assert_close(summary.monthly_payment, 599.55, 0.01);
        assert_close(summary.total_paid, summary.monthly_payment * 360.0, 1e-6);
        assert_close(summary.total_interest, summary.total_paid - 100_000.0, 1e-6);
        assert!(summary.total_interest > 115_000.0);
    }

    #[test]
    fn test_payment_summary_zero_rate_has_no_interest() {
        let summary = PaymentSummary::new(60_000.0, 0.0, 5);
        assert_close(summary.total_interest, 0.0, 1e-9);
    }

    #[test]
    fn test_payment_summary_checked() {
        assert!(PaymentSummary::checked(100_000.0, 4.0, 25).is_ok());
        assert!(PaymentSummary::checked(100_000.0, 4.0, 0).is_err());
        assert!(PaymentSummary::checked(-5.0, 4.0, 25).is_err());
    }

    #[test]
    fn test_schedule_pays_off_loan() {
        let schedule = amortization_schedule(300_000.0, 5.0, 25);
        assert_eq!(schedule.len(), 25);
        assert_eq!(schedule[0].year, 1);
        assert_eq!(schedule.last().unwrap().ending_balance, 0.0);

        let principal: f64 = schedule.iter().map(|y| y.principal_paid).sum();
        assert_close(principal, 300_000.0, 0.01);

        let summary = PaymentSummary::new(300_000.0, 5.0, 25);
        let interest: f64 = schedule.iter().map(|y| y.interest_paid).sum();
        assert_close(interest, summary.total_interest, 0.01);
    }

    #[test]
    fn test_schedule_interest_declines() {
        let schedule = amortization_schedule(300_000.0, 5.0, 25);
        assert!(schedule[0].interest_paid > schedule[24].interest_paid);
        assert!(schedule[0].principal_paid < schedule[24].principal_paid);
    }

    #[test]
    fn test_schedule_zero_rate() {
        let schedule = amortization_schedule(12_000.0, 0.0, 2);
        assert_eq!(schedule.len(), 2);
        assert_close(schedule[0].principal_paid, 6000.0, 1e-9);
        assert_eq!(schedule[0].interest_paid, 0.0);
        assert_close(schedule[0].ending_balance, 6000.0, 1e-9);
        assert_eq!(schedule[1].ending_balance, 0.0);
    }

    #[test]
    fn test_long_terms_stay_finite() {
        // (1 + r)^n overflows f64 for these terms
        let payment = compute_amortized_payment(300_000.0, 4.84, 20_000);
        assert!(payment.is_finite());
        assert_close(payment, 300_000.0 * 0.0484 / 12.0, 1e-6);

        let max_loan = compute_max_loan_for_payment(2000.0, 4.84, 20_000);
        assert!(max_loan.is_finite());
        assert_close(max_loan, 2000.0 / (0.0484 / 12.0), 1e-3);

        let payment = compute_amortized_payment(50_000.0, 1000.0, 100);
        assert!(payment.is_finite());
        assert!(payment > 0.0);
    }

    #[test]
    fn test_long_term_schedule_is_finite() {
        let schedule = amortization_schedule(100_000.0, 1000.0, 100);
        assert!(schedule
            .iter()
            .all(|y| y.interest_paid.is_finite() && y.ending_balance.is_finite()));
        assert_eq!(schedule.last().unwrap().ending_balance, 0.0);
    }
}

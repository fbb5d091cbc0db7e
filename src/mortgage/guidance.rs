//! Advisory messages derived from an affordability result.

use super::affordability::{
    evaluate_affordability, AffordabilityInput, AffordabilityResult, HOUSING_COST_RATIO,
};
use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything the calculator panel displays for one set of inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityReport {
    pub input: AffordabilityInput,
    pub monthly_income: f64,
    pub loan_amount: f64,
    pub result: AffordabilityResult,
    pub guidance: Vec<GuidanceItem>,
}

impl AffordabilityReport {
    /// Validates the inputs, evaluates them, and attaches guidance.
    pub fn new(input: AffordabilityInput) -> Result<Self, CalcError> {
        input.validate()?;
        let result = evaluate_affordability(&input);
        let guidance = build_guidance(&input, &result);

        Ok(Self {
            monthly_income: input.monthly_income(),
            loan_amount: input.loan_amount(),
            input,
            result,
            guidance,
        })
    }
}

/// A single piece of advice shown next to the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GuidanceItem {
    /// The payment fits the housing budget.
    Affordable,
    /// Down payment that would bring the price within reach.
    IncreaseDownPayment { current: f64, target: f64 },
    /// Annual income that would cover the monthly payment.
    IncreaseIncome { current: f64, target: f64 },
}

impl GuidanceItem {
    pub fn message(&self) -> String {
        match self {
            GuidanceItem::Affordable => {
                "This home fits within your budget at the current rate and term.".to_string()
            }
            GuidanceItem::IncreaseDownPayment { current, target } => format!(
                "Increase your down payment from ${:.0} to ${:.0} to afford this home.",
                current, target
            ),
            GuidanceItem::IncreaseIncome { current, target } => format!(
                "An annual income of ${:.0} (currently ${:.0}) would cover the monthly payment.",
                target, current
            ),
        }
    }
}

impl fmt::Display for GuidanceItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Builds guidance for the current inputs.
///
/// The two shortfall checks are independent; either, both, or neither may
/// fire when the home is not affordable.
pub fn build_guidance(
    input: &AffordabilityInput,
    result: &AffordabilityResult,
) -> Vec<GuidanceItem> {
    if result.is_affordable {
        return vec![GuidanceItem::Affordable];
    }

    let mut items = Vec::new();

    if result.max_affordable_price < input.property_price {
        items.push(GuidanceItem::IncreaseDownPayment {
            current: input.down_payment,
            target: input.down_payment + (input.property_price - result.max_affordable_price),
        });
    }

    let housing_budget = input.annual_income * HOUSING_COST_RATIO / 12.0;
    if housing_budget < result.monthly_payment_for_given_price {
        items.push(GuidanceItem::IncreaseIncome {
            current: input.annual_income,
            target: result.monthly_payment_for_given_price * 12.0 / HOUSING_COST_RATIO,
        });
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mortgage::evaluate_affordability;

    fn make_input(
        annual_income: f64,
        monthly_debts: f64,
        down_payment: f64,
        price: f64,
    ) -> AffordabilityInput {
        AffordabilityInput {
            annual_income,
            monthly_debts,
            down_payment,
            interest_rate_percent: 4.84,
            amortization_years: 25,
            property_price: price,
        }
    }

    #[test]
    fn test_affordable_single_confirmation() {
        let input = make_input(150_000.0, 0.0, 100_000.0, 400_000.0);
        let result = evaluate_affordability(&input);
        let guidance = build_guidance(&input, &result);

        assert_eq!(guidance, vec![GuidanceItem::Affordable]);
        assert!(guidance[0].message().contains("fits within your budget"));
    }

    #[test]
    fn test_unaffordable_gets_both_targets() {
        let input = make_input(100_000.0, 0.0, 50_000.0, 1_999_000.0);
        let result = evaluate_affordability(&input);
        let guidance = build_guidance(&input, &result);

        assert_eq!(guidance.len(), 2);

        match &guidance[0] {
            GuidanceItem::IncreaseDownPayment { current, target } => {
                assert_eq!(*current, 50_000.0);
                let expected = 50_000.0 + (1_999_000.0 - result.max_affordable_price);
                assert!((target - expected).abs() < 1e-6);
            }
            other => panic!("expected down payment guidance, got {:?}", other),
        }

        match &guidance[1] {
            GuidanceItem::IncreaseIncome { current, target } => {
                assert_eq!(*current, 100_000.0);
                let expected = result.monthly_payment_for_given_price * 12.0 / 0.28;
                assert!((target - expected).abs() < 1e-6);
            }
            other => panic!("expected income guidance, got {:?}", other),
        }
    }

    #[test]
    fn test_debts_only_shortfall_skips_income_target() {
        // Income alone covers the payment but debts eat the budget
        let input = make_input(120_000.0, 2000.0, 60_000.0, 500_000.0);
        let result = evaluate_affordability(&input);
        assert!(!result.is_affordable);

        let guidance = build_guidance(&input, &result);
        assert_eq!(guidance.len(), 1);
        assert!(matches!(guidance[0], GuidanceItem::IncreaseDownPayment { .. }));
    }

    #[test]
    fn test_message_formatting() {
        let item = GuidanceItem::IncreaseDownPayment { current: 50_000.0, target: 1_593_418.7 };
        assert_eq!(
            item.message(),
            "Increase your down payment from $50000 to $1593419 to afford this home."
        );

        let item = GuidanceItem::IncreaseIncome { current: 100_000.0, target: 480_545.2 };
        assert_eq!(item.to_string(), item.message());
        assert!(item.message().contains("$480545"));
    }

    #[test]
    fn test_report_end_to_end() {
        let report =
            AffordabilityReport::new(make_input(100_000.0, 0.0, 50_000.0, 1_999_000.0)).unwrap();

        assert!((report.monthly_income - 8333.33).abs() < 0.01);
        assert_eq!(report.loan_amount, 1_949_000.0);
        assert!(!report.result.is_affordable);
        assert!(report
            .guidance
            .iter()
            .any(|g| matches!(g, GuidanceItem::IncreaseDownPayment { .. })));
    }

    #[test]
    fn test_report_rejects_invalid_input() {
        let mut input = make_input(100_000.0, 0.0, 50_000.0, 500_000.0);
        input.annual_income = -1.0;
        assert!(AffordabilityReport::new(input).is_err());
    }

    #[test]
    fn test_guidance_serde_tagged() {
        let json = serde_json::to_string(&GuidanceItem::Affordable).unwrap();
        assert_eq!(json, r#"{"kind":"affordable"}"#);

        let item = GuidanceItem::IncreaseIncome { current: 1.0, target: 2.0 };
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains(r#""kind":"increase_income""#));
    }
}

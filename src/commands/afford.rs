//! Affordability command implementation.

use crate::config::Config;
use crate::format::Formatter;
use crate::mortgage::{AffordabilityInput, AffordabilityReport};
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Evaluates whether a home price fits a buyer's budget.
pub struct AffordCommand {
    config: Config,
}

impl AffordCommand {
    /// Creates a new affordability command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Builds the calculator input, taking rate and term from the config.
    pub fn input(
        &self,
        annual_income: f64,
        monthly_debts: f64,
        down_payment: f64,
        property_price: f64,
    ) -> AffordabilityInput {
        AffordabilityInput {
            annual_income,
            monthly_debts,
            down_payment,
            interest_rate_percent: self.config.interest_rate_percent,
            amortization_years: self.config.amortization_years,
            property_price,
        }
    }

    /// Evaluates the input and returns formatted output.
    pub fn execute(&self, input: AffordabilityInput) -> Result<String> {
        debug!(
            "Evaluating price {} at {}% over {} years",
            input.property_price, input.interest_rate_percent, input.amortization_years
        );

        let report = AffordabilityReport::new(input).context("Invalid affordability input")?;

        info!(
            "Affordability score {:.0} (affordable: {})",
            report.result.affordability_score, report.result.is_affordable
        );

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_report(&report))
    }
}

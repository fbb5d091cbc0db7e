//! Mortgage payment command implementation.

use crate::config::Config;
use crate::format::Formatter;
use crate::mortgage::{amortization_schedule, PaymentSummary};
use anyhow::{Context, Result};
use tracing::debug;

/// Computes the monthly payment for a loan.
pub struct PaymentCommand {
    config: Config,
}

impl PaymentCommand {
    /// Creates a new payment command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Computes the payment and, when asked, the yearly schedule.
    pub fn execute(&self, principal: f64, with_schedule: bool) -> Result<String> {
        let rate = self.config.interest_rate_percent;
        let years = self.config.amortization_years;

        let summary =
            PaymentSummary::checked(principal, rate, years).context("Invalid loan terms")?;
        debug!("Monthly payment {:.2} on {}", summary.monthly_payment, principal);

        let schedule = with_schedule.then(|| amortization_schedule(principal, rate, years));

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_payment(&summary, schedule.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    fn make_test_config(rate: f64, years: u32) -> Config {
        Config {
            interest_rate_percent: rate,
            amortization_years: years,
            format: OutputFormat::Table,
            ..Config::default()
        }
    }

    #[test]
    fn test_payment_command_basic() {
        let cmd = PaymentCommand::new(make_test_config(6.0, 30));
        let output = cmd.execute(100_000.0, false).unwrap();

        assert!(output.contains("Monthly payment: $599.55"));
        assert!(!output.contains("Balance"));
    }

    #[test]
    fn test_payment_command_schedule() {
        let cmd = PaymentCommand::new(make_test_config(5.0, 5));
        let output = cmd.execute(50_000.0, true).unwrap();

        assert!(output.contains("Balance"));
        let rows = output.lines().filter(|l| l.starts_with(char::is_numeric)).count();
        assert_eq!(rows, 5);
    }

    #[test]
    fn test_payment_command_zero_rate() {
        let mut config = make_test_config(0.0, 10);
        config.format = OutputFormat::Json;

        let output = PaymentCommand::new(config).execute(120_000.0, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["summary"]["monthly_payment"], 1000.0);
        assert_eq!(value["summary"]["total_interest"], 0.0);
    }

    #[test]
    fn test_payment_command_rejects_zero_years() {
        let cmd = PaymentCommand::new(make_test_config(5.0, 0));
        let err = cmd.execute(100_000.0, false).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid loan terms"));
    }
}

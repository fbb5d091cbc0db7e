//! Error types for calculator and pagination boundaries.

use thiserror::Error;

/// Precondition violations detected before a pure calculation runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// A parameter is outside the range the formulas accept.
    #[error("Invalid argument '{param}': {message}")]
    InvalidArgument { param: &'static str, message: String },
}

impl CalcError {
    pub fn invalid(param: &'static str, message: impl Into<String>) -> Self {
        CalcError::InvalidArgument { param, message: message.into() }
    }
}

/// Rejects negative or non-finite money amounts.
pub(crate) fn ensure_amount(param: &'static str, value: f64) -> Result<(), CalcError> {
    if !value.is_finite() {
        return Err(CalcError::invalid(param, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(CalcError::invalid(param, format!("must not be negative (got {})", value)));
    }
    Ok(())
}

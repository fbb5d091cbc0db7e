//! Parsing of textual count ranges such as `"1-3"`, `"2+"`, and `"2"`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive count range. `max == None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSpec {
    pub min: u32,
    pub max: Option<u32>,
}

impl RangeSpec {
    pub fn exact(n: u32) -> Self {
        Self { min: n, max: Some(n) }
    }

    pub fn bounded(min: u32, max: u32) -> Self {
        Self { min, max: Some(max) }
    }

    pub fn at_least(min: u32) -> Self {
        Self { min, max: None }
    }

    /// The range that accepts every count.
    pub fn any() -> Self {
        Self::at_least(0)
    }

    pub fn is_open_ended(&self) -> bool {
        self.max.is_none()
    }
}

impl fmt::Display for RangeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) if max == self.min => write!(f, "{}", self.min),
            Some(max) => write!(f, "{}-{}", self.min, max),
            None => write!(f, "{}+", self.min),
        }
    }
}

/// Parses the leading run of ASCII digits, the way listing text like
/// `"3+1"` or `"2 beds"` is read. Returns `None` when there is no digit.
fn leading_integer(text: &str) -> Option<u32> {
    let text = text.trim_start();
    let end = text.find(|c: char| !c.is_ascii_digit()).unwrap_or(text.len());
    text[..end].parse().ok()
}

/// Parses range text. Never fails: unreadable parts fall back to the most
/// permissive bound (0 for the minimum, unbounded for the maximum).
pub fn parse_numeric_range(text: &str) -> RangeSpec {
    let text = text.trim();

    if let Some((left, right)) = text.split_once('-') {
        return RangeSpec { min: leading_integer(left).unwrap_or(0), max: leading_integer(right) };
    }

    if let Some(prefix) = text.strip_suffix('+') {
        return RangeSpec::at_least(leading_integer(prefix).unwrap_or(0));
    }

    match leading_integer(text) {
        Some(n) => RangeSpec::exact(n),
        None => RangeSpec::any(),
    }
}

/// True when `requested` lies within the range, bounds included.
pub fn range_satisfies(spec: &RangeSpec, requested: u32) -> bool {
    requested >= spec.min && spec.max.map_or(true, |max| requested <= max)
}

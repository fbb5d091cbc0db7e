//! Data models for resale listings and pre-construction projects.
//!
//! These mirror the JSON returned by the listings backend. Every nested
//! field is optional because resale and pre-construction payloads only
//! share part of their shape.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A number that may arrive as a JSON number or as display text such as
/// `"1,234"` or `"$899,000"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Number(f64),
    Text(String),
}

impl NumericField {
    /// Parses the value, stripping thousands separators and currency marks.
    /// Range text yields its first number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NumericField::Number(n) => Some(*n),
            NumericField::Text(text) => {
                let cleaned: String = text
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                    .collect();

                if cleaned.is_empty() {
                    return None;
                }

                // Ranges like "$649,900 - $899,900" read as their lower side
                let first = match cleaned[1..].find('-') {
                    Some(i) => &cleaned[..=i],
                    None => cleaned.as_str(),
                };

                first.parse().ok()
            }
        }
    }

    /// Text form used for range parsing. Whole numbers render without a
    /// fractional part.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            NumericField::Number(n) if n.fract() == 0.0 => Cow::Owned(format!("{:.0}", n)),
            NumericField::Number(n) => Cow::Owned(n.to_string()),
            NumericField::Text(text) => Cow::Borrowed(text.as_str()),
        }
    }
}

impl From<f64> for NumericField {
    fn from(value: f64) -> Self {
        NumericField::Number(value)
    }
}

impl From<&str> for NumericField {
    fn from(value: &str) -> Self {
        NumericField::Text(value.to_string())
    }
}

/// A resale property or pre-construction project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Listing {
    pub id: Option<String>,
    pub name: Option<String>,
    pub address: Option<Address>,
    pub details: Option<Details>,
    pub list_price: Option<NumericField>,
    pub pre_con: Option<PreCon>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    pub street: Option<String>,
    pub neighborhood: Option<String>,
    pub area: Option<String>,
    pub city: Option<String>,
}

/// Resale details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Details {
    pub property_type: Option<String>,
    pub sub_property_type: Option<String>,
    pub num_bedrooms: Option<NumericField>,
    pub num_bathrooms: Option<NumericField>,
}

/// Pre-construction project data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreCon {
    pub details: Option<PreConDetails>,
    pub units: Vec<Unit>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreConDetails {
    pub property_type: Option<String>,
    pub sub_property_type: Option<String>,
    /// Text such as `"1-3"` or `"2+"`.
    pub bedroom_range: Option<String>,
    pub bathroom_range: Option<String>,
    pub starting_price: Option<NumericField>,
}

/// A floor plan within a pre-construction project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Unit {
    pub name: Option<String>,
    pub bedrooms: Option<NumericField>,
    pub bathrooms: Option<NumericField>,
    pub price: Option<NumericField>,
}

impl Listing {
    /// Starting price for projects, else list price, else 0.
    pub fn effective_price(&self) -> f64 {
        self.pre_con_details()
            .and_then(|d| d.starting_price.as_ref())
            .and_then(NumericField::as_f64)
            .filter(|p| *p > 0.0)
            .or_else(|| self.list_price.as_ref().and_then(NumericField::as_f64))
            .unwrap_or(0.0)
    }

    pub fn pre_con_details(&self) -> Option<&PreConDetails> {
        self.pre_con.as_ref().and_then(|p| p.details.as_ref())
    }

    pub fn units(&self) -> &[Unit] {
        self.pre_con.as_ref().map(|p| p.units.as_slice()).unwrap_or(&[])
    }

    /// Name, then street, then id, for display.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or_else(|| self.address.as_ref().and_then(|a| a.street.as_deref()))
            .or(self.id.as_deref())
            .unwrap_or("Unnamed listing")
    }

    pub fn city(&self) -> Option<&str> {
        self.address.as_ref().and_then(|a| a.city.as_deref())
    }
}

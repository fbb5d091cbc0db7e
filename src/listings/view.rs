//! Flattened, read-only view of a listing used by the filters.

use super::models::{Listing, NumericField};
use std::borrow::Cow;

/// Normalizes the nested optional fields of a [`Listing`] once so each
/// filter reads a flat shape instead of walking the raw payload.
#[derive(Debug, Clone)]
pub struct ListingView<'a> {
    pub listing: &'a Listing,
    pub property_type: Option<&'a str>,
    pub sub_property_type: Option<&'a str>,
    pub price: f64,
    /// Neighborhood, area, and city, skipping blanks.
    pub location_fields: Vec<&'a str>,
    pub bedroom_range: Option<Cow<'a, str>>,
    pub bathroom_range: Option<Cow<'a, str>>,
    pub unit_bedrooms: Vec<f64>,
    pub unit_bathrooms: Vec<f64>,
}

impl<'a> ListingView<'a> {
    pub fn new(listing: &'a Listing) -> Self {
        let details = listing.details.as_ref();
        let pre_con = listing.pre_con_details();

        let property_type = non_blank(details.and_then(|d| d.property_type.as_deref()))
            .or_else(|| non_blank(pre_con.and_then(|d| d.property_type.as_deref())));

        let sub_property_type = non_blank(details.and_then(|d| d.sub_property_type.as_deref()))
            .or_else(|| non_blank(pre_con.and_then(|d| d.sub_property_type.as_deref())));

        let location_fields = listing
            .address
            .as_ref()
            .map(|a| {
                [a.neighborhood.as_deref(), a.area.as_deref(), a.city.as_deref()]
                    .into_iter()
                    .filter_map(non_blank)
                    .collect()
            })
            .unwrap_or_default();

        let bedroom_range = non_blank(pre_con.and_then(|d| d.bedroom_range.as_deref()))
            .map(Cow::Borrowed)
            .or_else(|| details.and_then(|d| d.num_bedrooms.as_ref()).and_then(count_text));

        let bathroom_range = non_blank(pre_con.and_then(|d| d.bathroom_range.as_deref()))
            .map(Cow::Borrowed)
            .or_else(|| details.and_then(|d| d.num_bathrooms.as_ref()).and_then(count_text));

        let units = listing.units();

        Self {
            listing,
            property_type,
            sub_property_type,
            price: listing.effective_price(),
            location_fields,
            bedroom_range,
            bathroom_range,
            unit_bedrooms: units
                .iter()
                .filter_map(|u| u.bedrooms.as_ref().and_then(NumericField::as_f64))
                .collect(),
            unit_bathrooms: units
                .iter()
                .filter_map(|u| u.bathrooms.as_ref().and_then(NumericField::as_f64))
                .collect(),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn count_text(field: &NumericField) -> Option<Cow<'_, str>> {
    let text = field.as_text();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::models::{Address, Details, PreCon, PreConDetails, Unit};

    fn make_pre_con(bedroom_range: Option<&str>, units: Vec<Unit>) -> Listing {
        Listing {
            id: Some("PC-1".to_string()),
            pre_con: Some(PreCon {
                details: Some(PreConDetails {
                    property_type: Some("Condos".to_string()),
                    bedroom_range: bedroom_range.map(String::from),
                    bathroom_range: Some("1-2".to_string()),
                    starting_price: Some(NumericField::from("$599,000")),
                    ..Default::default()
                }),
                units,
            }),
            ..Default::default()
        }
    }

    fn make_unit(bedrooms: f64, bathrooms: &str) -> Unit {
        Unit {
            bedrooms: Some(NumericField::Number(bedrooms)),
            bathrooms: Some(NumericField::from(bathrooms)),
            ..Default::default()
        }
    }

    #[test]
    fn test_pre_con_view() {
        let listing = make_pre_con(Some("1-3"), vec![make_unit(1.0, "1"), make_unit(2.0, "2")]);
        let view = ListingView::new(&listing);

        assert_eq!(view.property_type, Some("Condos"));
        assert_eq!(view.price, 599_000.0);
        assert_eq!(view.bedroom_range.as_deref(), Some("1-3"));
        assert_eq!(view.bathroom_range.as_deref(), Some("1-2"));
        assert_eq!(view.unit_bedrooms, vec![1.0, 2.0]);
        assert_eq!(view.unit_bathrooms, vec![1.0, 2.0]);
        assert!(view.location_fields.is_empty());
    }

    #[test]
    fn test_blank_range_is_absent() {
        let listing = make_pre_con(Some("  "), Vec::new());
        let view = ListingView::new(&listing);
        assert!(view.bedroom_range.is_none());
    }

    #[test]
    fn test_resale_counts_become_range_text() {
        let listing = Listing {
            details: Some(Details {
                property_type: Some("Detached".to_string()),
                sub_property_type: Some("Link".to_string()),
                num_bedrooms: Some(NumericField::Number(3.0)),
                num_bathrooms: Some(NumericField::from("2+1")),
            }),
            list_price: Some(NumericField::from("1,250,000")),
            ..Default::default()
        };
        let view = ListingView::new(&listing);

        assert_eq!(view.property_type, Some("Detached"));
        assert_eq!(view.sub_property_type, Some("Link"));
        assert_eq!(view.bedroom_range.as_deref(), Some("3"));
        assert_eq!(view.bathroom_range.as_deref(), Some("2+1"));
        assert_eq!(view.price, 1_250_000.0);
        assert!(view.unit_bedrooms.is_empty());
    }

    #[test]
    fn test_location_fields_skip_blanks() {
        let listing = Listing {
            address: Some(Address {
                street: Some("1 Main St".to_string()),
                neighborhood: Some("".to_string()),
                area: Some("York".to_string()),
                city: Some("Toronto".to_string()),
            }),
            ..Default::default()
        };
        let view = ListingView::new(&listing);
        assert_eq!(view.location_fields, vec!["York", "Toronto"]);
    }

    #[test]
    fn test_units_without_counts_are_skipped() {
        let listing = make_pre_con(
            None,
            vec![
                Unit { name: Some("Penthouse".to_string()), ..Default::default() },
                make_unit(2.0, "n/a"),
            ],
        );
        let view = ListingView::new(&listing);
        assert_eq!(view.unit_bedrooms, vec![2.0]);
        assert!(view.unit_bathrooms.is_empty());
    }

    #[test]
    fn test_empty_listing_view() {
        let listing = Listing::default();
        let view = ListingView::new(&listing);

        assert!(view.property_type.is_none());
        assert!(view.sub_property_type.is_none());
        assert_eq!(view.price, 0.0);
        assert!(view.bedroom_range.is_none());
        assert!(view.bathroom_range.is_none());
        assert!(view.unit_bedrooms.is_empty());
    }
}

//! Output formatting for listings and calculator results (table, JSON, markdown, CSV).

use crate::config::OutputFormat;
use crate::filters::RangeSpec;
use crate::listings::{Listing, ListingView};
use crate::mortgage::{AffordabilityReport, PaymentSummary, ScheduleYear};
use serde::Serialize;

/// Formats results for output.
pub struct Formatter {
    format: OutputFormat,
}

/// Renders a dollar amount with thousands separators, rounded to whole dollars.
pub fn money(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Bedroom or bathroom text for display: the range text, else the span of
/// unit counts, else N/A.
fn rooms_text(range: Option<&str>, unit_counts: &[f64]) -> String {
    if let Some(range) = range {
        return range.to_string();
    }

    let min = unit_counts.iter().copied().fold(f64::INFINITY, f64::min);
    let max = unit_counts.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if unit_counts.is_empty() {
        "N/A".to_string()
    } else if min == max {
        format!("{}", min)
    } else {
        format!("{}-{}", min, max)
    }
}

/// Flattened row used by every listing format.
#[derive(Serialize)]
struct ListingRow {
    id: String,
    name: String,
    property_type: String,
    price: f64,
    beds: String,
    baths: String,
    location: String,
}

impl ListingRow {
    fn from_listing(listing: &Listing) -> Self {
        let view = ListingView::new(listing);

        Self {
            id: listing.id.clone().unwrap_or_default(),
            name: listing.display_name().to_string(),
            property_type: view.property_type.unwrap_or("N/A").to_string(),
            price: view.price,
            beds: rooms_text(view.bedroom_range.as_deref(), &view.unit_bedrooms),
            baths: rooms_text(view.bathroom_range.as_deref(), &view.unit_bathrooms),
            location: view.location_fields.join(", "),
        }
    }

    fn price_text(&self) -> String {
        if self.price > 0.0 {
            money(self.price)
        } else {
            "N/A".to_string()
        }
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let kept: String = text.chars().take(width - 3).collect();
        format!("{}...", kept)
    } else {
        text.to_string()
    }
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a list of listings.
    pub fn format_listings(&self, listings: &[Listing]) -> String {
        if listings.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => self.csv_header(),
                _ => "No listings found.".to_string(),
            };
        }

        let rows: Vec<ListingRow> = listings.iter().map(ListingRow::from_listing).collect();

        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(listings).unwrap_or_else(|_| "[]".to_string())
            }
            OutputFormat::Table => self.table_listings(&rows),
            OutputFormat::Markdown => self.markdown_listings(&rows),
            OutputFormat::Csv => self.csv_listings(&rows),
        }
    }

    /// Formats an affordability report.
    pub fn format_report(&self, report: &AffordabilityReport) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
            }
            OutputFormat::Csv => {
                let mut lines = vec!["metric,value".to_string()];
                for (label, value) in Self::report_metrics(report) {
                    lines.push(format!("{},{}", label, value));
                }
                for item in &report.guidance {
                    lines.push(format!("guidance,{}", Self::csv_escape(&item.message())));
                }
                lines.join("\n")
            }
            OutputFormat::Markdown => {
                let mut lines = vec!["## Affordability".to_string(), String::new()];
                for (label, value) in Self::report_metrics(report) {
                    lines.push(format!("- **{}:** {}", label, value));
                }
                lines.push(String::new());
                lines.push("### Guidance".to_string());
                lines.push(String::new());
                for item in &report.guidance {
                    lines.push(format!("- {}", item));
                }
                lines.join("\n")
            }
            OutputFormat::Table => {
                let mut lines: Vec<String> = Self::report_metrics(report)
                    .into_iter()
                    .map(|(label, value)| format!("{:<22} {}", format!("{}:", label), value))
                    .collect();
                lines.push(String::new());
                for item in &report.guidance {
                    lines.push(format!("* {}", item));
                }
                lines.join("\n")
            }
        }
    }

    fn report_metrics(report: &AffordabilityReport) -> Vec<(&'static str, String)> {
        let result = &report.result;
        vec![
            ("Property price", money(report.input.property_price)),
            ("Down payment", money(report.input.down_payment)),
            ("Loan amount", money(report.loan_amount)),
            ("Monthly income", money(report.monthly_income)),
            ("Max monthly payment", money(result.max_monthly_payment)),
            ("Monthly payment", money(result.monthly_payment_for_given_price)),
            ("Max affordable price", money(result.max_affordable_price)),
            ("Affordability score", format!("{:.0}/100", result.affordability_score)),
            ("Affordable", if result.is_affordable { "Yes" } else { "No" }.to_string()),
        ]
    }

    /// Formats a payment summary with an optional yearly schedule.
    pub fn format_payment(
        &self,
        summary: &PaymentSummary,
        schedule: Option<&[ScheduleYear]>,
    ) -> String {
        match self.format {
            OutputFormat::Json => {
                #[derive(Serialize)]
                struct PaymentOutput<'a> {
                    summary: &'a PaymentSummary,
                    #[serde(skip_serializing_if = "Option::is_none")]
                    schedule: Option<&'a [ScheduleYear]>,
                }

                serde_json::to_string_pretty(&PaymentOutput { summary, schedule })
                    .unwrap_or_else(|_| "{}".to_string())
            }
            OutputFormat::Csv => {
                let mut lines =
                    vec!["year,principal_paid,interest_paid,ending_balance".to_string()];
                for year in schedule.unwrap_or_default() {
                    lines.push(format!(
                        "{},{:.2},{:.2},{:.2}",
                        year.year, year.principal_paid, year.interest_paid, year.ending_balance
                    ));
                }
                if schedule.is_none() {
                    lines = vec![
                        "monthly_payment,total_paid,total_interest".to_string(),
                        format!(
                            "{:.2},{:.2},{:.2}",
                            summary.monthly_payment, summary.total_paid, summary.total_interest
                        ),
                    ];
                }
                lines.join("\n")
            }
            OutputFormat::Markdown => {
                let mut lines = vec![
                    format!(
                        "- **Loan:** {} at {}% over {} years",
                        money(summary.principal),
                        summary.interest_rate_percent,
                        summary.amortization_years
                    ),
                    format!("- **Monthly payment:** ${:.2}", summary.monthly_payment),
                    format!("- **Total paid:** {}", money(summary.total_paid)),
                    format!("- **Total interest:** {}", money(summary.total_interest)),
                ];
                if let Some(schedule) = schedule {
                    lines.push(String::new());
                    lines.push("| Year | Principal | Interest | Balance |".to_string());
                    lines.push("|------|-----------|----------|---------|".to_string());
                    for year in schedule {
                        lines.push(format!(
                            "| {} | {} | {} | {} |",
                            year.year,
                            money(year.principal_paid),
                            money(year.interest_paid),
                            money(year.ending_balance)
                        ));
                    }
                }
                lines.join("\n")
            }
            OutputFormat::Table => {
                let mut lines = vec![
                    format!("Loan:            {}", money(summary.principal)),
                    format!(
                        "Terms:           {}% over {} years",
                        summary.interest_rate_percent, summary.amortization_years
                    ),
                    format!("Monthly payment: ${:.2}", summary.monthly_payment),
                    format!("Total paid:      {}", money(summary.total_paid)),
                    format!("Total interest:  {}", money(summary.total_interest)),
                ];
                if let Some(schedule) = schedule {
                    lines.push(String::new());
                    lines.push(format!(
                        "{:<6}  {:>14}  {:>14}  {:>14}",
                        "Year", "Principal", "Interest", "Balance"
                    ));
                    lines.push(format!("{:-<6}  {:-<14}  {:-<14}  {:-<14}", "", "", "", ""));
                    for year in schedule {
                        lines.push(format!(
                            "{:<6}  {:>14}  {:>14}  {:>14}",
                            year.year,
                            money(year.principal_paid),
                            money(year.interest_paid),
                            money(year.ending_balance)
                        ));
                    }
                }
                lines.join("\n")
            }
        }
    }

    /// Formats a parsed range and, when a count was given, whether it fits.
    pub fn format_range(&self, text: &str, spec: &RangeSpec, check: Option<(u32, bool)>) -> String {
        let max = spec.max.map(|m| m.to_string()).unwrap_or_else(|| "unbounded".to_string());

        match self.format {
            OutputFormat::Json => {
                let mut value =
                    serde_json::json!({ "input": text, "min": spec.min, "max": spec.max });
                if let Some((requested, satisfied)) = check {
                    value["requested"] = requested.into();
                    value["satisfied"] = satisfied.into();
                }
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
            }
            OutputFormat::Csv => {
                let mut header = "input,min,max".to_string();
                let mut row = format!("{},{},{}", Self::csv_escape(text), spec.min, max);
                if let Some((requested, satisfied)) = check {
                    header.push_str(",requested,satisfied");
                    row.push_str(&format!(",{},{}", requested, satisfied));
                }
                format!("{}\n{}", header, row)
            }
            _ => {
                let mut lines = vec![
                    format!("Input: {:?}", text),
                    format!("Range: {} (min {}, max {})", spec, spec.min, max),
                ];
                if let Some((requested, satisfied)) = check {
                    lines.push(format!(
                        "{} {} this range",
                        requested,
                        if satisfied { "satisfies" } else { "does not satisfy" }
                    ));
                }
                lines.join("\n")
            }
        }
    }

    // Listing formats

    fn table_listings(&self, rows: &[ListingRow]) -> String {
        let id_width = 10;
        let price_width = 12;
        let type_width = 12;
        let rooms_width = 5;
        let location_width = 24;

        let mut lines = Vec::new();

        lines.push(format!(
            "{:<id_width$}  {:<price_width$}  {:<type_width$}  {:<rooms_width$}  {:<rooms_width$}  {:<location_width$}  {}",
            "ID", "Price", "Type", "Beds", "Baths", "Location", "Name"
        ));
        lines.push(format!(
            "{:-<id_width$}  {:-<price_width$}  {:-<type_width$}  {:-<rooms_width$}  {:-<rooms_width$}  {:-<location_width$}  {:-<30}",
            "", "", "", "", "", "", ""
        ));

        for row in rows {
            lines.push(format!(
                "{:<id_width$}  {:>price_width$}  {:<type_width$}  {:<rooms_width$}  {:<rooms_width$}  {:<location_width$}  {}",
                truncate(&row.id, id_width),
                row.price_text(),
                truncate(&row.property_type, type_width),
                row.beds,
                row.baths,
                truncate(&row.location, location_width),
                row.name
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} listings", rows.len()));

        lines.join("\n")
    }

    fn markdown_listings(&self, rows: &[ListingRow]) -> String {
        let mut lines = Vec::new();

        lines.push("| ID | Price | Type | Beds | Baths | Location | Name |".to_string());
        lines.push("|----|-------|------|------|-------|----------|------|".to_string());

        for row in rows {
            lines.push(format!(
                "| {} | {} | {} | {} | {} | {} | {} |",
                row.id,
                row.price_text(),
                row.property_type,
                row.beds,
                row.baths,
                row.location,
                truncate(&row.name, 40)
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} listings found*", rows.len()));

        lines.join("\n")
    }

    fn csv_header(&self) -> String {
        "id,name,property_type,price,beds,baths,location".to_string()
    }

    fn csv_listings(&self, rows: &[ListingRow]) -> String {
        let mut lines = vec![self.csv_header()];

        for row in rows {
            lines.push(format!(
                "{},{},{},{},{},{},{}",
                Self::csv_escape(&row.id),
                Self::csv_escape(&row.name),
                Self::csv_escape(&row.property_type),
                row.price,
                Self::csv_escape(&row.beds),
                Self::csv_escape(&row.baths),
                Self::csv_escape(&row.location)
            ));
        }

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}

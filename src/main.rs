//! homescope - Mortgage affordability and listing filter CLI

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use homescope::commands::{AffordCommand, FilterCommand, PaymentCommand, RangeCommand};
use homescope::config::{Config, OutputFormat};
use homescope::filters::SortOrder;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "homescope",
    version,
    about = "Mortgage affordability and listing filter CLI",
    long_about = "Evaluate home affordability, compute mortgage payments, and filter listings."
)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, env = "HOMESCOPE_CONFIG")]
    config: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a home price fits your budget
    #[command(alias = "a")]
    Afford {
        /// Gross annual income
        #[arg(long)]
        income: f64,

        /// Monthly debt payments
        #[arg(long, default_value = "0")]
        debts: f64,

        /// Down payment
        #[arg(long, default_value = "0")]
        down_payment: f64,

        /// Property price
        #[arg(long)]
        price: f64,

        /// Annual interest rate in percent
        #[arg(long)]
        rate: Option<f64>,

        /// Amortization period in years
        #[arg(long)]
        years: Option<u32>,
    },

    /// Compute the monthly payment for a loan
    #[command(alias = "p")]
    Payment {
        /// Loan principal
        #[arg(long)]
        principal: f64,

        /// Annual interest rate in percent
        #[arg(long)]
        rate: Option<f64>,

        /// Amortization period in years
        #[arg(long)]
        years: Option<u32>,

        /// Include a year-by-year schedule
        #[arg(long)]
        schedule: bool,
    },

    /// Filter listings from a JSON file (use - for stdin)
    #[command(alias = "f")]
    Filter {
        /// Listings JSON file
        file: PathBuf,

        /// Property type (e.g. house, condos)
        #[arg(long)]
        property_type: Option<String>,

        /// Sub property type, applied with --property-type
        #[arg(long)]
        sub_type: Option<String>,

        /// Minimum price
        #[arg(long)]
        min_price: Option<f64>,

        /// Maximum price
        #[arg(long)]
        max_price: Option<f64>,

        /// Neighborhood, area, or city
        #[arg(long)]
        location: Option<String>,

        /// Bedrooms
        #[arg(long)]
        beds: Option<u32>,

        /// Minimum bathrooms
        #[arg(long)]
        baths: Option<u32>,

        /// Sort order (default, price-asc, price-desc)
        #[arg(long)]
        sort: Option<SortOrder>,

        /// Page to show, using the configured page size
        #[arg(long)]
        page: Option<usize>,
    },

    /// Parse bedroom/bathroom range text like "1-3" or "2+"
    Range {
        /// Range text
        text: String,

        /// Count to check against the range
        #[arg(long)]
        value: Option<u32>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(format) = cli.format {
        config.format = format;
    }

    let output = match cli.command {
        Commands::Afford { income, debts, down_payment, price, rate, years } => {
            if let Some(rate) = rate {
                config.interest_rate_percent = rate;
            }
            if let Some(years) = years {
                config.amortization_years = years;
            }

            let cmd = AffordCommand::new(config);
            let input = cmd.input(income, debts, down_payment, price);
            cmd.execute(input)?
        }

        Commands::Payment { principal, rate, years, schedule } => {
            if let Some(rate) = rate {
                config.interest_rate_percent = rate;
            }
            if let Some(years) = years {
                config.amortization_years = years;
            }

            PaymentCommand::new(config).execute(principal, schedule)?
        }

        Commands::Filter {
            file,
            property_type,
            sub_type,
            min_price,
            max_price,
            location,
            beds,
            baths,
            sort,
            page,
        } => {
            if page == Some(0) {
                bail!("Page numbers start at 1");
            }

            // Apply filter-specific config
            let filters = &mut config.filters;
            if let Some(property_type) = property_type {
                filters.property_type = property_type;
            }
            if let Some(sub_type) = sub_type {
                filters.sub_property_type = sub_type;
            }
            if let Some(min_price) = min_price {
                filters.min_price = min_price;
            }
            if let Some(max_price) = max_price {
                filters.max_price = max_price;
            }
            if let Some(location) = location {
                filters.location = location;
            }
            if let Some(beds) = beds {
                filters.bedrooms = beds;
            }
            if let Some(baths) = baths {
                filters.bathrooms = baths;
            }
            if let Some(sort) = sort {
                config.sort = sort;
            }

            FilterCommand::new(config).execute(&file, page)?
        }

        Commands::Range { text, value } => RangeCommand::new(config).execute(&text, value),
    };

    println!("{}", output);

    Ok(())
}

//! Command-line front end
//!
//! Turns an [`AgencyConfig`](domain_agency::AgencyConfig) into a stocked
//! agency and a listing of the vehicles that match the configured filters.
//!
//! # Example
//!
//! ```rust
//! use domain_agency::AgencyConfig;
//! use interface_cli::run;
//!
//! let config = AgencyConfig { current_year: Some(2024), ..Default::default() };
//! let mut out = Vec::new();
//! run(&config, &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("Car Ferrari Roma 2022"));
//! ```

pub mod catalog;
pub mod error;
pub mod listing;

use std::io::Write;

use tracing::info;

use domain_agency::{AgencyConfig, RentalAgency};

pub use error::CliError;

/// Builds the agency described by `config` and writes the matching vehicles to `out`
pub fn run<W: Write>(config: &AgencyConfig, out: &mut W) -> Result<(), CliError> {
    let clock = config.clock()?;
    let vehicles = catalog::demo_catalog(&clock)?;
    let agency = RentalAgency::with_vehicles(vehicles, clock).with_removal_policy(config.removal_policy);

    info!(
        agency = %config.name,
        vehicles = agency.len(),
        brand = ?config.brand,
        max_price = ?config.max_price,
        "Listing vehicles"
    );

    agency.print_selected_vehicles(listing::selection(config), out)?;
    Ok(())
}

//! Rental Agency - command-line listing
//!
//! Stocks an agency with the demonstration catalog and prints the vehicles
//! that match the configured filters, one per line.
//!
//! # Usage
//!
//! ```bash
//! AGENCY_MAX_PRICE=120 cargo run --bin agency
//! ```
//!
//! # Environment Variables
//!
//! * `AGENCY_NAME` - Display name (default: Rental Agency)
//! * `AGENCY_REMOVAL_POLICY` - `end_rentals` or `keep_rentals` (default: end_rentals)
//! * `AGENCY_CURRENT_YEAR` - Freeze the clock on this year (default: system clock)
//! * `AGENCY_BRAND` - Only list this brand
//! * `AGENCY_MAX_PRICE` - Only list vehicles at or below this daily price
//! * `AGENCY_LOG_LEVEL` - trace, debug, info, warn, error (default: info)

use domain_agency::AgencyConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AgencyConfig::from_env()?;
    init_tracing(&config.log_level);

    tracing::info!(agency = %config.name, policy = ?config.removal_policy, "Starting");

    let stdout = std::io::stdout();
    interface_cli::run(&config, &mut stdout.lock())?;
    Ok(())
}

/// Installs a stderr subscriber so log lines never mix with the listing
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}

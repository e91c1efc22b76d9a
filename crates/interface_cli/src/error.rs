//! Command-line errors

use thiserror::Error;

use core_kernel::TemporalError;
use domain_fleet::VehicleError;

/// Errors surfaced by the command-line front end
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Clock error: {0}")]
    Clock(#[from] TemporalError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] VehicleError),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

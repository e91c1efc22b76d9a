//! Agency configuration

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Deserialize;

use core_kernel::{Clock, FixedClock, SystemClock, TemporalError};

/// What happens to an active rental when its vehicle leaves the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalPolicy {
    /// Removing a vehicle also ends its rental
    #[default]
    EndRentals,
    /// The rental stays in the ledger after its vehicle is removed
    KeepRentals,
}

/// Agency configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AgencyConfig {
    /// Display name of the agency
    pub name: String,
    /// Policy applied by `RentalAgency::remove`
    pub removal_policy: RemovalPolicy,
    /// Freezes the clock on January 1st of this year when set
    pub current_year: Option<i32>,
    /// Log level
    pub log_level: String,
    /// Only list vehicles of this brand
    pub brand: Option<String>,
    /// Only list vehicles at or below this daily price
    pub max_price: Option<Decimal>,
}

impl Default for AgencyConfig {
    fn default() -> Self {
        Self {
            name: "Rental Agency".to_string(),
            removal_policy: RemovalPolicy::default(),
            current_year: None,
            log_level: "info".to_string(),
            brand: None,
            max_price: None,
        }
    }
}

impl AgencyConfig {
    /// Loads configuration from `AGENCY_*` environment variables
    pub fn from_env() -> Result<Self, ::config::ConfigError> {
        Self::from_source(::config::Environment::with_prefix("AGENCY").try_parsing(true))
    }

    /// Loads configuration from any `config` source, falling back to defaults
    /// for missing keys
    pub fn from_source<S>(source: S) -> Result<Self, ::config::ConfigError>
    where
        S: ::config::Source + Send + Sync + 'static,
    {
        ::config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()
    }

    /// Builds the clock described by this configuration
    pub fn clock(&self) -> Result<Arc<dyn Clock>, TemporalError> {
        match self.current_year {
            Some(year) => Ok(Arc::new(FixedClock::at_year(year)?)),
            None => Ok(Arc::new(SystemClock)),
        }
    }
}

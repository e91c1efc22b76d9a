//! Fleet domain errors

use std::fmt;
use thiserror::Error;

/// The vehicle attribute that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleAttribute {
    Brand,
    ProductionYear,
    SeatCount,
    CylinderCapacity,
}

impl fmt::Display for VehicleAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VehicleAttribute::Brand => "brand",
            VehicleAttribute::ProductionYear => "production year",
            VehicleAttribute::SeatCount => "number of seats",
            VehicleAttribute::CylinderCapacity => "cylinder capacity",
        };
        f.write_str(name)
    }
}

/// Errors that can occur in the fleet domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VehicleError {
    /// A constructor argument is outside its allowed range
    #[error("Invalid {attribute}: {reason}")]
    InvalidAttribute {
        attribute: VehicleAttribute,
        reason: String,
    },
}

impl VehicleError {
    /// Creates an invalid attribute error
    pub fn invalid(attribute: VehicleAttribute, reason: impl Into<String>) -> Self {
        VehicleError::InvalidAttribute {
            attribute,
            reason: reason.into(),
        }
    }

    /// Returns the attribute that was rejected
    pub fn attribute(&self) -> VehicleAttribute {
        match self {
            VehicleError::InvalidAttribute { attribute, .. } => *attribute,
        }
    }
}

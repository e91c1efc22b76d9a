//! Agency domain errors

use domain_fleet::Vehicle;
use thiserror::Error;

use crate::client::Client;

/// Errors that can occur in the agency domain
#[derive(Debug, Error)]
pub enum AgencyError {
    /// The vehicle is not part of the catalog
    #[error("Unknown vehicle: {0}")]
    UnknownVehicle(Vehicle),

    /// The client already holds a vehicle
    #[error("Client already has a rented vehicle: {client}")]
    AlreadyRenting { client: Client },

    /// The vehicle is already held by some client
    #[error("Vehicle already rented: {vehicle}")]
    AlreadyRented { vehicle: Vehicle },

    /// The client has nothing to return
    #[error("Client has no rented vehicle: {client}")]
    NoActiveRental { client: Client },
}

impl AgencyError {
    pub fn unknown_vehicle(vehicle: &Vehicle) -> Self {
        AgencyError::UnknownVehicle(vehicle.clone())
    }

    pub fn already_renting(client: &Client) -> Self {
        AgencyError::AlreadyRenting {
            client: client.clone(),
        }
    }

    pub fn already_rented(vehicle: &Vehicle) -> Self {
        AgencyError::AlreadyRented {
            vehicle: vehicle.clone(),
        }
    }

    pub fn no_active_rental(client: &Client) -> Self {
        AgencyError::NoActiveRental {
            client: client.clone(),
        }
    }
}

//! Test Data Builders
//!
//! Provides builder patterns for constructing agencies in a known state.
//! Tests specify only what matters to them and take defaults for the rest.

use std::sync::Arc;

use core_kernel::Clock;
use domain_agency::{Client, RemovalPolicy, RentalAgency};
use domain_fleet::Vehicle;

use crate::fixtures::{ClockFixtures, VehicleFixtures};

/// Builder for an agency with a given catalog and ledger
pub struct AgencyBuilder {
    clock: Arc<dyn Clock>,
    removal_policy: RemovalPolicy,
    vehicles: Vec<Vehicle>,
    rentals: Vec<(Client, Vehicle)>,
}

impl Default for AgencyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AgencyBuilder {
    /// Creates a builder for an empty agency on the fixture clock
    pub fn new() -> Self {
        Self {
            clock: ClockFixtures::fixed(),
            removal_policy: RemovalPolicy::default(),
            vehicles: Vec::new(),
            rentals: Vec::new(),
        }
    }

    /// Sets the clock
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Sets the removal policy
    pub fn with_removal_policy(mut self, policy: RemovalPolicy) -> Self {
        self.removal_policy = policy;
        self
    }

    /// Adds a vehicle to the catalog
    pub fn with_vehicle(mut self, vehicle: Vehicle) -> Self {
        self.vehicles.push(vehicle);
        self
    }

    /// Stocks the Roma, Multipla and BMW reference vehicles
    pub fn with_reference_catalog(mut self) -> Self {
        self.vehicles.extend(VehicleFixtures::reference_catalog());
        self
    }

    /// Rents `vehicle` to `client` once the catalog is built
    pub fn with_rental(mut self, client: Client, vehicle: Vehicle) -> Self {
        self.rentals.push((client, vehicle));
        self
    }

    /// Builds the agency
    ///
    /// # Panics
    ///
    /// Panics if a requested rental is rejected by the agency.
    pub fn build(self) -> RentalAgency {
        let mut agency = RentalAgency::with_vehicles(self.vehicles, self.clock)
            .with_removal_policy(self.removal_policy);
        for (client, vehicle) in &self.rentals {
            if let Err(e) = agency.rent_vehicle(client, vehicle) {
                panic!("Builder rental rejected for {}: {}", client, e);
            }
        }
        agency
    }
}

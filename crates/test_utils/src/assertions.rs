//! Custom Test Assertions
//!
//! Provides assertion helpers that check agency invariants and give more
//! meaningful failure messages than standard assertions.

use std::collections::HashSet;
use std::sync::Arc;

use domain_agency::{RemovalPolicy, RentalAgency};
use domain_fleet::Vehicle;

/// Asserts that the catalog holds no two equal vehicles
pub fn assert_catalog_unique(agency: &RentalAgency) {
    let vehicles = agency.vehicles();
    let distinct: HashSet<&Vehicle> = vehicles.iter().map(|v| v.as_ref()).collect();
    assert_eq!(
        distinct.len(),
        vehicles.len(),
        "Catalog contains duplicate vehicles: {:?}",
        rendered(&vehicles)
    );
}

/// Asserts that the ledger pairs clients and vehicles one to one
///
/// Under [`RemovalPolicy::EndRentals`] also asserts that every rented vehicle
/// is still in the catalog.
pub fn assert_ledger_consistent(agency: &RentalAgency) {
    let rented = agency.all_rented_vehicles();
    let distinct: HashSet<&Vehicle> = rented.iter().map(|v| v.as_ref()).collect();
    assert_eq!(
        distinct.len(),
        rented.len(),
        "A vehicle is rented more than once: {:?}",
        rendered(&rented)
    );

    for rental in agency.rentals() {
        assert!(
            agency.is_rented_by(&rental.client),
            "Rental {} is not keyed by its client {}",
            rental.id,
            rental.client
        );
        if agency.removal_policy() == RemovalPolicy::EndRentals {
            assert!(
                agency.contains(&rental.vehicle),
                "Rented vehicle {} is missing from the catalog",
                rental.vehicle
            );
        }
    }
}

/// Asserts that `vehicles` render exactly to `expected`, in order
pub fn assert_rendered(vehicles: &[Arc<Vehicle>], expected: &[&str]) {
    assert_eq!(rendered(vehicles), expected);
}

fn rendered(vehicles: &[Arc<Vehicle>]) -> Vec<String> {
    vehicles.iter().map(|v| v.to_string()).collect()
}

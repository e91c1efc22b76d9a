//! Thread-safe handle to an agency
//!
//! Catalog and ledger sit behind one mutex, so the check-then-act sequence in
//! `rent_vehicle` can never interleave with another mutation.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use core_kernel::Money;
use domain_fleet::Vehicle;

use crate::agency::RentalAgency;
use crate::client::Client;
use crate::error::AgencyError;
use crate::rental::Rental;

/// Cloneable, lock-guarded [`RentalAgency`]
#[derive(Debug, Clone)]
pub struct SharedRentalAgency {
    inner: Arc<Mutex<RentalAgency>>,
}

impl SharedRentalAgency {
    pub fn new(agency: RentalAgency) -> Self {
        Self {
            inner: Arc::new(Mutex::new(agency)),
        }
    }

    /// Runs `f` with exclusive access to the agency
    pub fn with<R>(&self, f: impl FnOnce(&mut RentalAgency) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn add(&self, vehicle: Vehicle) -> bool {
        self.lock().add(vehicle)
    }

    pub fn remove(&self, vehicle: &Vehicle) -> Result<Arc<Vehicle>, AgencyError> {
        self.lock().remove(vehicle)
    }

    pub fn rent_vehicle(&self, client: &Client, vehicle: &Vehicle) -> Result<Money, AgencyError> {
        self.lock().rent_vehicle(client, vehicle)
    }

    pub fn return_vehicle(&self, client: &Client) -> Result<Rental, AgencyError> {
        self.lock().return_vehicle(client)
    }

    pub fn is_rented_by(&self, client: &Client) -> bool {
        self.lock().is_rented_by(client)
    }

    pub fn all_rented_vehicles(&self) -> Vec<Arc<Vehicle>> {
        self.lock().all_rented_vehicles()
    }

    fn lock(&self) -> MutexGuard<'_, RentalAgency> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{Clock, FixedClock};
    use domain_fleet::VehicleFactory;
    use std::thread;

    #[test]
    fn test_concurrent_rentals_of_one_vehicle() {
        let clock: Arc<dyn Clock> = Arc::new(FixedClock::at_year(2024).unwrap());
        let roma = VehicleFactory::new(Arc::clone(&clock))
            .car("Ferrari", "Roma", 2022, 4)
            .unwrap();

        let shared = SharedRentalAgency::new(RentalAgency::new(clock));
        shared.add(roma.clone());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let shared = shared.clone();
                let roma = roma.clone();
                thread::spawn(move || {
                    let client = Client::new(format!("Client{}", i), "Test", 1990);
                    shared.rent_vehicle(&client, &roma).is_ok()
                })
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(successes, 1);
        assert_eq!(shared.all_rented_vehicles().len(), 1);
    }

    #[test]
    fn test_with_gives_exclusive_access() {
        let clock: Arc<dyn Clock> = Arc::new(FixedClock::at_year(2024).unwrap());
        let shared = SharedRentalAgency::new(RentalAgency::new(clock));

        let len = shared.with(|agency| agency.len());
        assert_eq!(len, 0);
    }
}

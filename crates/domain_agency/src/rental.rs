//! Rental ledger entries

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use core_kernel::{Money, RentalId};
use domain_fleet::Vehicle;

use crate::client::Client;

/// An active rental: one client holding one catalog vehicle
///
/// The vehicle is shared with the catalog, not copied.
#[derive(Debug, Clone, Serialize)]
pub struct Rental {
    /// Unique identifier
    pub id: RentalId,
    /// The renting client
    pub client: Client,
    /// The rented vehicle
    pub vehicle: Arc<Vehicle>,
    /// Daily price at the moment the rental started
    pub daily_price: Money,
    /// Day the rental started
    pub started_on: NaiveDate,
}

impl Rental {
    pub(crate) fn start(client: Client, vehicle: Arc<Vehicle>, started_on: NaiveDate) -> Self {
        let daily_price = vehicle.daily_rental_price();
        Self {
            id: RentalId::new(),
            client,
            vehicle,
            daily_price,
            started_on,
        }
    }
}

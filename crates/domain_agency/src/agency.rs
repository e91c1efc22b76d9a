//! Rental Agency Registry
//!
//! The [`RentalAgency`] owns the vehicle catalog and the rental ledger and is
//! the only place either can change. Every mutating operation validates all
//! of its preconditions before touching state, so a failed call leaves the
//! agency exactly as it was.
//!
//! # Lifecycle
//!
//! ```text
//!   add ──► in catalog ──rent_vehicle──► rented ──return_vehicle──► in catalog
//!              │                            │
//!            remove                  remove (EndRentals)
//!              ▼                            ▼
//!           removed                      removed
//! ```

use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use core_kernel::{Clock, Money};
use domain_fleet::Vehicle;

use crate::client::Client;
use crate::config::{AgencyConfig, RemovalPolicy};
use crate::error::AgencyError;
use crate::rental::Rental;

/// Vehicle catalog plus rental ledger
#[derive(Debug)]
pub struct RentalAgency {
    vehicles: Vec<Arc<Vehicle>>,
    rentals: HashMap<Client, Rental>,
    removal_policy: RemovalPolicy,
    clock: Arc<dyn Clock>,
}

impl RentalAgency {
    /// Creates an empty agency with the default removal policy
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            vehicles: Vec::new(),
            rentals: HashMap::new(),
            removal_policy: RemovalPolicy::default(),
            clock,
        }
    }

    /// Creates an empty agency configured from `config`
    pub fn from_config(config: &AgencyConfig, clock: Arc<dyn Clock>) -> Self {
        Self::new(clock).with_removal_policy(config.removal_policy)
    }

    /// Creates an agency stocked with `vehicles`; duplicates are dropped
    pub fn with_vehicles(vehicles: impl IntoIterator<Item = Vehicle>, clock: Arc<dyn Clock>) -> Self {
        let mut agency = Self::new(clock);
        for vehicle in vehicles {
            agency.add(vehicle);
        }
        agency
    }

    /// Sets the policy applied when a rented vehicle is removed
    pub fn with_removal_policy(mut self, policy: RemovalPolicy) -> Self {
        self.removal_policy = policy;
        self
    }

    pub fn removal_policy(&self) -> RemovalPolicy {
        self.removal_policy
    }

    // ------------------------------------------------------------------
    // Catalog
    // ------------------------------------------------------------------

    /// Adds a vehicle unless an equal one is already in the catalog
    ///
    /// Returns `true` if the vehicle was appended.
    pub fn add(&mut self, vehicle: Vehicle) -> bool {
        if self.contains(&vehicle) {
            debug!(%vehicle, "Vehicle already in catalog");
            return false;
        }
        debug!(%vehicle, "Adding vehicle to catalog");
        self.vehicles.push(Arc::new(vehicle));
        true
    }

    /// Removes the catalog entry equal to `vehicle` and returns it
    ///
    /// Under [`RemovalPolicy::EndRentals`] any rental of the vehicle is ended
    /// as well.
    ///
    /// # Errors
    ///
    /// [`AgencyError::UnknownVehicle`] if no equal vehicle is in the catalog.
    pub fn remove(&mut self, vehicle: &Vehicle) -> Result<Arc<Vehicle>, AgencyError> {
        let position = self
            .position_of(vehicle)
            .ok_or_else(|| AgencyError::unknown_vehicle(vehicle))?;
        let removed = self.vehicles.remove(position);

        match self.removal_policy {
            RemovalPolicy::EndRentals => {
                let before = self.rentals.len();
                self.rentals.retain(|_, rental| *rental.vehicle != *vehicle);
                if self.rentals.len() != before {
                    info!(%vehicle, "Ended rental of removed vehicle");
                }
            }
            RemovalPolicy::KeepRentals => {
                if self.is_rented(vehicle) {
                    warn!(%vehicle, "Removed vehicle is still rented");
                }
            }
        }

        debug!(%vehicle, "Removed vehicle from catalog");
        Ok(removed)
    }

    /// Returns true if an equal vehicle is in the catalog
    pub fn contains(&self, vehicle: &Vehicle) -> bool {
        self.position_of(vehicle).is_some()
    }

    /// Snapshot of the catalog in insertion order
    pub fn vehicles(&self) -> Vec<Arc<Vehicle>> {
        self.vehicles.clone()
    }

    /// Number of vehicles in the catalog
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Catalog vehicles matching `criterion`, in catalog order
    pub fn select<P>(&self, criterion: P) -> Vec<Arc<Vehicle>>
    where
        P: Fn(&Vehicle) -> bool,
    {
        self.vehicles
            .iter()
            .filter(|&vehicle| criterion(vehicle))
            .cloned()
            .collect()
    }

    /// Writes every vehicle matching `criterion` to `out`, one per line
    pub fn print_selected_vehicles<P, W>(&self, criterion: P, out: &mut W) -> io::Result<()>
    where
        P: Fn(&Vehicle) -> bool,
        W: Write,
    {
        for vehicle in self.select(criterion) {
            writeln!(out, "{}", vehicle)?;
        }
        Ok(())
    }

    fn position_of(&self, vehicle: &Vehicle) -> Option<usize> {
        self.vehicles.iter().position(|v| **v == *vehicle)
    }

    // ------------------------------------------------------------------
    // Rentals
    // ------------------------------------------------------------------

    /// Rents `vehicle` to `client` and returns its current daily price
    ///
    /// The ledger records the catalog entry equal to `vehicle`, not the
    /// argument itself. Since equality ignores seats and cylinder capacity,
    /// the returned price is the catalog entry's price.
    ///
    /// # Errors
    ///
    /// Checked in this order, before any change is made:
    /// - [`AgencyError::UnknownVehicle`] if the vehicle is not in the catalog
    /// - [`AgencyError::AlreadyRenting`] if the client already holds a vehicle
    /// - [`AgencyError::AlreadyRented`] if another client holds the vehicle
    #[instrument(skip_all, fields(client = %client, vehicle = %vehicle))]
    pub fn rent_vehicle(&mut self, client: &Client, vehicle: &Vehicle) -> Result<Money, AgencyError> {
        let Some(position) = self.position_of(vehicle) else {
            warn!("Rental refused: unknown vehicle");
            return Err(AgencyError::unknown_vehicle(vehicle));
        };
        if self.is_rented_by(client) {
            warn!("Rental refused: client already renting");
            return Err(AgencyError::already_renting(client));
        }
        if self.is_rented(vehicle) {
            warn!("Rental refused: vehicle already rented");
            return Err(AgencyError::already_rented(vehicle));
        }

        let shared = Arc::clone(&self.vehicles[position]);
        let rental = Rental::start(client.clone(), shared, self.clock.today());
        let price = rental.daily_price;

        info!(rental_id = %rental.id, price = %price, "Vehicle rented");
        self.rentals.insert(client.clone(), rental);
        Ok(price)
    }

    /// Returns true if `client` currently holds a vehicle
    pub fn is_rented_by(&self, client: &Client) -> bool {
        self.rentals.contains_key(client)
    }

    /// Returns true if some client currently holds `vehicle`
    pub fn is_rented(&self, vehicle: &Vehicle) -> bool {
        self.rentals
            .values()
            .any(|rental| *rental.vehicle == *vehicle)
    }

    /// The active rental held by `client`, if any
    pub fn rental_of(&self, client: &Client) -> Option<&Rental> {
        self.rentals.get(client)
    }

    /// Ends the rental held by `client` and returns it
    ///
    /// # Errors
    ///
    /// [`AgencyError::NoActiveRental`] if the client holds nothing.
    #[instrument(skip_all, fields(client = %client))]
    pub fn return_vehicle(&mut self, client: &Client) -> Result<Rental, AgencyError> {
        match self.rentals.remove(client) {
            Some(rental) => {
                info!(rental_id = %rental.id, vehicle = %rental.vehicle, "Vehicle returned");
                Ok(rental)
            }
            None => {
                warn!("Return refused: no active rental");
                Err(AgencyError::no_active_rental(client))
            }
        }
    }

    /// Every vehicle currently rented, in no particular order
    pub fn all_rented_vehicles(&self) -> Vec<Arc<Vehicle>> {
        self.rentals
            .values()
            .map(|rental| Arc::clone(&rental.vehicle))
            .collect()
    }

    /// Every active rental, in no particular order
    pub fn rentals(&self) -> impl Iterator<Item = &Rental> {
        self.rentals.values()
    }
}

//! Vehicle entity and its variants
//!
//! A [`Vehicle`] is immutable once built. Construction validates every
//! attribute up front, so a value of this type always satisfies:
//!
//! - the brand is not blank
//! - `1900 <= production_year <= current year` (as seen by the clock)
//! - a car has at least one seat, a motorbike at least 50 cm³
//!
//! # Identity
//!
//! Two vehicles are equal when they are the same variant with the same brand,
//! model and production year. Seat count and cylinder capacity are not part of
//! the identity.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{Clock, Money};

use crate::error::{VehicleAttribute, VehicleError};
use crate::pricing::{self, MIN_CYLINDER_CAPACITY, MIN_PRODUCTION_YEAR, MIN_SEATS};

/// The closed set of vehicle variants with their variant-specific attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VehicleKind {
    /// Passenger car
    Car {
        /// Number of seats
        seats: u32,
    },
    /// Motorbike
    Motorbike {
        /// Cylinder capacity in cm³
        cylinder_capacity: u32,
    },
}

impl VehicleKind {
    /// Returns the variant name used in rendered descriptions
    pub fn label(&self) -> &'static str {
        match self {
            VehicleKind::Car { .. } => "Car",
            VehicleKind::Motorbike { .. } => "Motorbike",
        }
    }

    /// Returns the parenthesised variant details, e.g. `(4 seats)` or `(500cm³)`
    pub fn details(&self) -> String {
        match self {
            VehicleKind::Car { seats: 1 } => "(1 seat)".to_string(),
            VehicleKind::Car { seats } => format!("({} seats)", seats),
            VehicleKind::Motorbike { cylinder_capacity } => format!("({}cm³)", cylinder_capacity),
        }
    }

    /// Checks the variant attribute against its lower bound
    pub fn validate(&self) -> Result<(), VehicleError> {
        match *self {
            VehicleKind::Car { seats } if seats < MIN_SEATS => Err(VehicleError::invalid(
                VehicleAttribute::SeatCount,
                format!("{} (a car needs at least {} seat)", seats, MIN_SEATS),
            )),
            VehicleKind::Motorbike { cylinder_capacity } if cylinder_capacity < MIN_CYLINDER_CAPACITY => {
                Err(VehicleError::invalid(
                    VehicleAttribute::CylinderCapacity,
                    format!(
                        "{} (a motorbike needs at least {}cm³)",
                        cylinder_capacity, MIN_CYLINDER_CAPACITY
                    ),
                ))
            }
            _ => Ok(()),
        }
    }

    /// Daily rental price for this variant at the given age in years
    pub fn daily_price(&self, age: i32) -> Money {
        match *self {
            VehicleKind::Car { seats } => pricing::car_daily_price(seats, age),
            VehicleKind::Motorbike { cylinder_capacity } => {
                pricing::motorbike_daily_price(cylinder_capacity)
            }
        }
    }
}

/// A rentable vehicle
#[derive(Debug, Clone, Serialize)]
pub struct Vehicle {
    brand: String,
    model: String,
    production_year: i32,
    #[serde(flatten)]
    kind: VehicleKind,
    #[serde(skip)]
    clock: Arc<dyn Clock>,
}

impl Vehicle {
    /// Builds a vehicle, validating every attribute against the clock's current year
    ///
    /// # Errors
    ///
    /// Returns [`VehicleError::InvalidAttribute`] naming the first attribute
    /// that is out of range. No vehicle is produced in that case.
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        production_year: i32,
        kind: VehicleKind,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, VehicleError> {
        let brand = brand.into();
        let model = model.into();

        if let Err(error) = validate(&brand, production_year, &kind, clock.as_ref()) {
            debug!(%brand, %model, production_year, %error, "Rejected vehicle");
            return Err(error);
        }

        Ok(Self {
            brand,
            model,
            production_year,
            kind,
            clock,
        })
    }

    /// Builds a car with the given number of seats
    pub fn car(
        brand: impl Into<String>,
        model: impl Into<String>,
        production_year: i32,
        seats: u32,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, VehicleError> {
        Self::new(brand, model, production_year, VehicleKind::Car { seats }, clock)
    }

    /// Builds a motorbike with the given cylinder capacity in cm³
    pub fn motorbike(
        brand: impl Into<String>,
        model: impl Into<String>,
        production_year: i32,
        cylinder_capacity: u32,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, VehicleError> {
        Self::new(
            brand,
            model,
            production_year,
            VehicleKind::Motorbike { cylinder_capacity },
            clock,
        )
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn production_year(&self) -> i32 {
        self.production_year
    }

    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    /// Number of seats, for cars
    pub fn seats(&self) -> Option<u32> {
        match self.kind {
            VehicleKind::Car { seats } => Some(seats),
            VehicleKind::Motorbike { .. } => None,
        }
    }

    /// Cylinder capacity in cm³, for motorbikes
    pub fn cylinder_capacity(&self) -> Option<u32> {
        match self.kind {
            VehicleKind::Motorbike { cylinder_capacity } => Some(cylinder_capacity),
            VehicleKind::Car { .. } => None,
        }
    }

    /// Age in whole calendar years according to the vehicle's clock
    pub fn age(&self) -> i32 {
        self.clock.current_year() - self.production_year
    }

    /// Returns true if the vehicle is at most five years old
    pub fn is_new(&self) -> bool {
        pricing::is_new(self.age())
    }

    /// Current daily rental price
    pub fn daily_rental_price(&self) -> Money {
        self.kind.daily_price(self.age())
    }

    /// Variant details, e.g. `(4 seats)`
    pub fn details(&self) -> String {
        self.kind.details()
    }
}

fn validate(
    brand: &str,
    production_year: i32,
    kind: &VehicleKind,
    clock: &dyn Clock,
) -> Result<(), VehicleError> {
    if brand.trim().is_empty() {
        return Err(VehicleError::invalid(
            VehicleAttribute::Brand,
            "must not be empty",
        ));
    }

    let current_year = clock.current_year();
    if !(MIN_PRODUCTION_YEAR..=current_year).contains(&production_year) {
        return Err(VehicleError::invalid(
            VehicleAttribute::ProductionYear,
            format!(
                "{} (expected {}..={})",
                production_year, MIN_PRODUCTION_YEAR, current_year
            ),
        ));
    }

    kind.validate()
}

impl PartialEq for Vehicle {
    fn eq(&self, other: &Self) -> bool {
        mem::discriminant(&self.kind) == mem::discriminant(&other.kind)
            && self.brand == other.brand
            && self.model == other.model
            && self.production_year == other.production_year
    }
}

impl Eq for Vehicle {}

impl Hash for Vehicle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(&self.kind).hash(state);
        self.brand.hash(state);
        self.model.hash(state);
        self.production_year.hash(state);
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let price = self.daily_rental_price();
        write!(
            f,
            "{} {} {} {} {}: {}{}",
            self.kind.label(),
            self.brand,
            self.model,
            self.production_year,
            self.details(),
            price.plain_amount(),
            price.currency().symbol()
        )
    }
}

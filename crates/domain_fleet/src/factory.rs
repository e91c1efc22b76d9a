//! Vehicle construction bound to a single clock

use std::sync::Arc;

use core_kernel::Clock;

use crate::error::VehicleError;
use crate::vehicle::{Vehicle, VehicleKind};

/// Builds vehicles that all share one clock
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use core_kernel::FixedClock;
/// use domain_fleet::VehicleFactory;
///
/// let factory = VehicleFactory::new(Arc::new(FixedClock::at_year(2024).unwrap()));
/// let roma = factory.car("Ferrari", "Roma", 2022, 4).unwrap();
/// assert_eq!(roma.to_string(), "Car Ferrari Roma 2022 (4 seats): 160.0€");
/// ```
#[derive(Debug, Clone)]
pub struct VehicleFactory {
    clock: Arc<dyn Clock>,
}

impl VehicleFactory {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Returns the clock handed to every vehicle built by this factory
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    pub fn build(
        &self,
        brand: impl Into<String>,
        model: impl Into<String>,
        production_year: i32,
        kind: VehicleKind,
    ) -> Result<Vehicle, VehicleError> {
        Vehicle::new(brand, model, production_year, kind, Arc::clone(&self.clock))
    }

    pub fn car(
        &self,
        brand: impl Into<String>,
        model: impl Into<String>,
        production_year: i32,
        seats: u32,
    ) -> Result<Vehicle, VehicleError> {
        self.build(brand, model, production_year, VehicleKind::Car { seats })
    }

    pub fn motorbike(
        &self,
        brand: impl Into<String>,
        model: impl Into<String>,
        production_year: i32,
        cylinder_capacity: u32,
    ) -> Result<Vehicle, VehicleError> {
        self.build(
            brand,
            model,
            production_year,
            VehicleKind::Motorbike { cylinder_capacity },
        )
    }
}

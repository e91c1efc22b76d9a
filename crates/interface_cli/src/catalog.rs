//! Demonstration catalog

use std::sync::Arc;

use core_kernel::Clock;
use domain_fleet::{Vehicle, VehicleError, VehicleFactory};

/// Builds the vehicles the command-line agency is stocked with
pub fn demo_catalog(clock: &Arc<dyn Clock>) -> Result<Vec<Vehicle>, VehicleError> {
    let factory = VehicleFactory::new(Arc::clone(clock));
    Ok(vec![
        factory.car("Ferrari", "Roma", 2022, 4)?,
        factory.car("Fiat", "Multipla", 2005, 6)?,
        factory.car("Peel", "P50", 1963, 1)?,
        factory.motorbike("BMW", "Test", 2022, 500)?,
        factory.motorbike("Piaggio", "Zip", 2020, 50)?,
    ])
}

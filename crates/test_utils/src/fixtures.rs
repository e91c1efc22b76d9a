//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data. Every fixture vehicle is priced against a
//! clock frozen on January 1st, 2024 so prices are predictable.

use std::sync::Arc;

use core_kernel::{Clock, FixedClock};
use domain_agency::Client;
use domain_fleet::{Vehicle, VehicleFactory};

/// Year every fixture clock is frozen on
pub const FIXTURE_YEAR: i32 = 2024;

/// Fixture for clocks
pub struct ClockFixtures;

impl ClockFixtures {
    /// Clock frozen on January 1st, 2024
    pub fn fixed() -> Arc<dyn Clock> {
        Self::at_year(FIXTURE_YEAR)
    }

    /// Clock frozen on January 1st of `year`
    pub fn at_year(year: i32) -> Arc<dyn Clock> {
        Arc::new(FixedClock::at_year(year).expect("fixture year must be representable"))
    }

    /// Factory bound to the fixture clock
    pub fn factory() -> VehicleFactory {
        VehicleFactory::new(Self::fixed())
    }
}

/// Fixture for vehicles
pub struct VehicleFixtures;

impl VehicleFixtures {
    /// Car Ferrari Roma 2022 (4 seats): 160.0€
    pub fn roma() -> Vehicle {
        ClockFixtures::factory()
            .car("Ferrari", "Roma", 2022, 4)
            .expect("valid fixture")
    }

    /// Car Fiat Multipla 2005 (6 seats): 120.0€
    pub fn multipla() -> Vehicle {
        ClockFixtures::factory()
            .car("Fiat", "Multipla", 2005, 6)
            .expect("valid fixture")
    }

    /// Motorbike BMW Test 2022 (500cm³): 125.0€
    pub fn bmw_bike() -> Vehicle {
        ClockFixtures::factory()
            .motorbike("BMW", "Test", 2022, 500)
            .expect("valid fixture")
    }

    /// Motorbike Piaggio Zip 2020 (50cm³): 12.5€
    pub fn scooter() -> Vehicle {
        ClockFixtures::factory()
            .motorbike("Piaggio", "Zip", 2020, 50)
            .expect("valid fixture")
    }

    /// The three reference vehicles in catalog order: Roma, Multipla, BMW
    pub fn reference_catalog() -> Vec<Vehicle> {
        vec![Self::roma(), Self::multipla(), Self::bmw_bike()]
    }
}

/// Fixture for clients
pub struct ClientFixtures;

impl ClientFixtures {
    pub fn arthur() -> Client {
        Client::new("Arthur", "BRATIGNY", 21)
    }

    pub fn ada() -> Client {
        Client::new("Ada", "Lovelace", 1815)
    }

    pub fn grace() -> Client {
        Client::new("Grace", "Hopper", 1906)
    }
}

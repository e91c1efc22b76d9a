//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating vehicles, clients and agency
//! operations. All vehicles are built on the fixture clock.

use domain_agency::Client;
use domain_fleet::{Vehicle, VehicleKind};
use proptest::prelude::*;

use crate::fixtures::ClockFixtures;

/// An operation applied to an agency in property tests
#[derive(Debug, Clone)]
pub enum AgencyOp {
    Add(Vehicle),
    Remove(Vehicle),
    Rent(Client, Vehicle),
    Return(Client),
}

/// Strategy for brands drawn from a small pool so collisions are common
pub fn brand_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Ferrari".to_string()),
        Just("Fiat".to_string()),
        Just("BMW".to_string()),
    ]
}

/// Strategy for valid vehicle variants
pub fn vehicle_kind_strategy() -> impl Strategy<Value = VehicleKind> {
    prop_oneof![
        (1u32..10u32).prop_map(|seats| VehicleKind::Car { seats }),
        (50u32..1500u32).prop_map(|cylinder_capacity| VehicleKind::Motorbike { cylinder_capacity }),
    ]
}

/// Strategy for valid vehicles
pub fn vehicle_strategy() -> impl Strategy<Value = Vehicle> {
    (
        brand_strategy(),
        prop_oneof![Just("A"), Just("B")],
        prop_oneof![Just(2010i32), Just(2022i32)],
        vehicle_kind_strategy(),
    )
        .prop_map(|(brand, model, year, kind)| {
            ClockFixtures::factory()
                .build(brand, model, year, kind)
                .expect("generated attributes are in range")
        })
}

/// Strategy for clients drawn from a small pool
pub fn client_strategy() -> impl Strategy<Value = Client> {
    (prop_oneof![Just("Ada"), Just("Alan"), Just("Grace")], 1900i32..1903i32)
        .prop_map(|(name, year)| Client::new(name, "Test", year))
}

/// Strategy for a single agency operation
pub fn agency_op_strategy() -> impl Strategy<Value = AgencyOp> {
    prop_oneof![
        3 => vehicle_strategy().prop_map(AgencyOp::Add),
        1 => vehicle_strategy().prop_map(AgencyOp::Remove),
        3 => (client_strategy(), vehicle_strategy()).prop_map(|(c, v)| AgencyOp::Rent(c, v)),
        2 => client_strategy().prop_map(AgencyOp::Return),
    ]
}

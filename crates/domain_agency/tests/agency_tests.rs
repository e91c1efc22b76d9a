//! Comprehensive tests for domain_agency

use std::sync::Arc;

use rust_decimal_macros::dec;

use domain_agency::criteria::{and, any, by_brand, max_price, not, or};
use domain_agency::{AgencyError, Client, RemovalPolicy, RentalAgency};
use test_utils::{
    assert_catalog_unique, assert_ledger_consistent, assert_rendered, AgencyBuilder,
    ClientFixtures, ClockFixtures, VehicleFixtures,
};

// ============================================================================
// Catalog Tests
// ============================================================================

mod catalog_tests {
    use super::*;

    #[test]
    fn test_add_rentable_vehicle() {
        let mut agency = RentalAgency::new(ClockFixtures::fixed());

        assert!(agency.add(VehicleFixtures::roma()));
        assert!(agency.contains(&VehicleFixtures::roma()));
        assert!(!agency.add(VehicleFixtures::roma()));
        assert_eq!(agency.len(), 1);
    }

    #[test]
    fn test_add_equal_vehicle_with_other_seat_count_is_rejected() {
        let mut agency = RentalAgency::new(ClockFixtures::fixed());
        agency.add(VehicleFixtures::roma());

        let two_seater = ClockFixtures::factory()
            .car("Ferrari", "Roma", 2022, 2)
            .unwrap();
        assert!(!agency.add(two_seater));
        assert_eq!(agency.vehicles()[0].seats(), Some(4));
    }

    #[test]
    fn test_remove_vehicle_from_agency() {
        let mut agency = AgencyBuilder::new().with_vehicle(VehicleFixtures::roma()).build();

        let removed = agency.remove(&VehicleFixtures::roma()).unwrap();

        assert_eq!(*removed, VehicleFixtures::roma());
        assert!(!agency.contains(&VehicleFixtures::roma()));
        assert!(agency.is_empty());
    }

    #[test]
    fn test_remove_when_vehicle_not_in_agency() {
        let mut agency = RentalAgency::new(ClockFixtures::fixed());

        let result = agency.remove(&VehicleFixtures::roma());

        assert!(matches!(result, Err(AgencyError::UnknownVehicle(_))));
    }

    #[test]
    fn test_agency_contains() {
        let agency = AgencyBuilder::new().with_vehicle(VehicleFixtures::roma()).build();

        assert!(agency.contains(&VehicleFixtures::roma()));
        assert!(!agency.contains(&VehicleFixtures::multipla()));
    }

    #[test]
    fn test_vehicles_preserve_insertion_order() {
        let agency = AgencyBuilder::new()
            .with_vehicle(VehicleFixtures::bmw_bike())
            .with_vehicle(VehicleFixtures::roma())
            .build();

        let vehicles = agency.vehicles();
        assert_eq!(*vehicles[0], VehicleFixtures::bmw_bike());
        assert_eq!(*vehicles[1], VehicleFixtures::roma());
    }

    #[test]
    fn test_vehicles_snapshot_is_detached() {
        let agency = AgencyBuilder::new().with_reference_catalog().build();

        let mut snapshot = agency.vehicles();
        snapshot.clear();

        assert_eq!(agency.len(), 3);
    }

    #[test]
    fn test_with_vehicles_drops_duplicates() {
        let agency = RentalAgency::with_vehicles(
            vec![VehicleFixtures::roma(), VehicleFixtures::roma(), VehicleFixtures::multipla()],
            ClockFixtures::fixed(),
        );

        assert_eq!(agency.len(), 2);
        assert_catalog_unique(&agency);
    }

    #[test]
    fn test_remove_then_add_appends_at_end() {
        let mut agency = AgencyBuilder::new().with_reference_catalog().build();

        agency.remove(&VehicleFixtures::roma()).unwrap();
        assert!(agency.add(VehicleFixtures::roma()));

        assert_rendered(
            &agency.vehicles(),
            &[
                "Car Fiat Multipla 2005 (6 seats): 120.0€",
                "Motorbike BMW Test 2022 (500cm³): 125.0€",
                "Car Ferrari Roma 2022 (4 seats): 160.0€",
            ],
        );
    }
}

// ============================================================================
// Selection Tests
// ============================================================================

mod selection_tests {
    use super::*;

    #[test]
    fn test_select_with_max_price() {
        let agency = AgencyBuilder::new().with_reference_catalog().build();

        let result = agency.select(max_price(dec!(120)));
        let result2 = agency.select(max_price(dec!(400)));

        assert_rendered(&result, &["Car Fiat Multipla 2005 (6 seats): 120.0€"]);
        assert_eq!(result2.len(), 3);
        assert_eq!(*result2[0], VehicleFixtures::roma());
        assert_eq!(*result2[1], VehicleFixtures::multipla());
        assert_eq!(*result2[2], VehicleFixtures::bmw_bike());
    }

    #[test]
    fn test_select_with_brand() {
        let agency = AgencyBuilder::new()
            .with_vehicle(VehicleFixtures::roma())
            .with_vehicle(VehicleFixtures::multipla())
            .build();

        let ferraris = agency.select(by_brand("Ferrari"));
        let fiats = agency.select(by_brand("Fiat"));

        assert_eq!(ferraris.len(), 1);
        assert_eq!(*ferraris[0], VehicleFixtures::roma());
        assert_eq!(fiats.len(), 1);
        assert_eq!(*fiats[0], VehicleFixtures::multipla());
    }

    #[test]
    fn test_select_with_combined_criteria() {
        let agency = AgencyBuilder::new().with_reference_catalog().build();

        let not_fiat_under_150 = agency.select(and(max_price(dec!(150)), not(by_brand("Fiat"))));
        assert_rendered(&not_fiat_under_150, &["Motorbike BMW Test 2022 (500cm³): 125.0€"]);

        let fiat_or_bmw = agency.select(or(by_brand("Fiat"), by_brand("BMW")));
        assert_eq!(fiat_or_bmw.len(), 2);

        assert_eq!(agency.select(any()).len(), 3);
    }

    #[test]
    fn test_select_with_closure() {
        let agency = AgencyBuilder::new().with_reference_catalog().build();

        let bikes = agency.select(|v| v.cylinder_capacity().is_some());
        assert_eq!(bikes.len(), 1);
    }

    #[test]
    fn test_select_on_empty_agency() {
        let agency = RentalAgency::new(ClockFixtures::fixed());
        assert!(agency.select(any()).is_empty());
    }

    #[test]
    fn test_print_selected_vehicles_with_criterion() {
        let agency = AgencyBuilder::new().with_reference_catalog().build();
        let mut out = Vec::new();

        agency.print_selected_vehicles(max_price(dec!(120)), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap().trim(),
            "Car Fiat Multipla 2005 (6 seats): 120.0€"
        );
    }
}

// ============================================================================
// Rental Tests
// ============================================================================

mod rental_tests {
    use super::*;

    #[test]
    fn test_rent_vehicle_with_existing_vehicle() {
        let mut agency = AgencyBuilder::new().with_reference_catalog().build();

        let price = agency
            .rent_vehicle(&ClientFixtures::arthur(), &VehicleFixtures::roma())
            .unwrap();

        assert_eq!(price.amount(), dec!(160));
        assert_eq!(price, VehicleFixtures::roma().daily_rental_price());
    }

    #[test]
    fn test_rent_vehicle_with_non_existing_vehicle() {
        let mut agency = RentalAgency::new(ClockFixtures::fixed());

        let result = agency.rent_vehicle(&ClientFixtures::arthur(), &VehicleFixtures::roma());

        assert!(matches!(result, Err(AgencyError::UnknownVehicle(_))));
        assert!(!agency.is_rented_by(&ClientFixtures::arthur()));
    }

    #[test]
    fn test_rent_vehicle_with_already_rented_vehicle() {
        let mut agency = AgencyBuilder::new()
            .with_reference_catalog()
            .with_rental(ClientFixtures::arthur(), VehicleFixtures::roma())
            .build();

        let result = agency.rent_vehicle(&ClientFixtures::ada(), &VehicleFixtures::roma());

        assert!(matches!(result, Err(AgencyError::AlreadyRented { .. })));
        assert!(!agency.is_rented_by(&ClientFixtures::ada()));
    }

    #[test]
    fn test_rent_vehicle_with_client_already_renting() {
        let mut agency = AgencyBuilder::new()
            .with_reference_catalog()
            .with_rental(ClientFixtures::arthur(), VehicleFixtures::roma())
            .build();

        let result = agency.rent_vehicle(&ClientFixtures::arthur(), &VehicleFixtures::multipla());

        assert!(matches!(result, Err(AgencyError::AlreadyRenting { .. })));
        assert!(!agency.is_rented(&VehicleFixtures::multipla()));
    }

    #[test]
    fn test_client_check_precedes_vehicle_check() {
        let mut agency = AgencyBuilder::new()
            .with_reference_catalog()
            .with_rental(ClientFixtures::arthur(), VehicleFixtures::roma())
            .build();

        let result = agency.rent_vehicle(&ClientFixtures::arthur(), &VehicleFixtures::roma());

        assert!(matches!(result, Err(AgencyError::AlreadyRenting { .. })));
    }

    #[test]
    fn test_a_vehicle_is_rented_by() {
        let agency = AgencyBuilder::new()
            .with_reference_catalog()
            .with_rental(ClientFixtures::arthur(), VehicleFixtures::roma())
            .build();

        assert!(agency.is_rented_by(&ClientFixtures::arthur()));
        assert!(!agency.is_rented_by(&ClientFixtures::ada()));
    }

    #[test]
    fn test_client_identity_is_by_value() {
        let agency = AgencyBuilder::new()
            .with_reference_catalog()
            .with_rental(ClientFixtures::arthur(), VehicleFixtures::roma())
            .build();

        assert!(agency.is_rented_by(&Client::new("Arthur", "BRATIGNY", 21)));
    }

    #[test]
    fn test_vehicle_is_rented() {
        let agency = AgencyBuilder::new()
            .with_reference_catalog()
            .with_rental(ClientFixtures::arthur(), VehicleFixtures::roma())
            .build();

        assert!(agency.is_rented(&VehicleFixtures::roma()));
        assert!(!agency.is_rented(&VehicleFixtures::multipla()));
    }

    #[test]
    fn test_return_vehicle() {
        let mut agency = AgencyBuilder::new()
            .with_reference_catalog()
            .with_rental(ClientFixtures::arthur(), VehicleFixtures::roma())
            .build();

        let rental = agency.return_vehicle(&ClientFixtures::arthur()).unwrap();

        assert_eq!(rental.client, ClientFixtures::arthur());
        assert_eq!(*rental.vehicle, VehicleFixtures::roma());
        assert_eq!(rental.daily_price.amount(), dec!(160));
        assert!(!agency.is_rented_by(&ClientFixtures::arthur()));
        assert!(agency.all_rented_vehicles().is_empty());
        assert!(agency.contains(&VehicleFixtures::roma()));
    }

    #[test]
    fn test_return_vehicle_with_no_vehicle_rented() {
        let mut agency = RentalAgency::new(ClockFixtures::fixed());

        let result = agency.return_vehicle(&ClientFixtures::arthur());

        assert!(matches!(result, Err(AgencyError::NoActiveRental { .. })));
    }

    #[test]
    fn test_vehicle_can_be_rented_again_after_return() {
        let mut agency = AgencyBuilder::new()
            .with_reference_catalog()
            .with_rental(ClientFixtures::arthur(), VehicleFixtures::roma())
            .build();

        agency.return_vehicle(&ClientFixtures::arthur()).unwrap();

        assert!(agency
            .rent_vehicle(&ClientFixtures::ada(), &VehicleFixtures::roma())
            .is_ok());
        assert!(agency
            .rent_vehicle(&ClientFixtures::arthur(), &VehicleFixtures::multipla())
            .is_ok());
        assert_ledger_consistent(&agency);
    }

    #[test]
    fn test_all_rented_vehicles() {
        let agency = AgencyBuilder::new()
            .with_reference_catalog()
            .with_rental(ClientFixtures::arthur(), VehicleFixtures::roma())
            .with_rental(ClientFixtures::ada(), VehicleFixtures::bmw_bike())
            .build();

        let mut rented: Vec<String> = agency
            .all_rented_vehicles()
            .iter()
            .map(|v| v.to_string())
            .collect();
        rented.sort();

        assert_eq!(
            rented,
            vec![
                "Car Ferrari Roma 2022 (4 seats): 160.0€",
                "Motorbike BMW Test 2022 (500cm³): 125.0€",
            ]
        );
    }

    #[test]
    fn test_rental_keeps_price_at_rental_time() {
        let mut agency = AgencyBuilder::new().with_vehicle(VehicleFixtures::scooter()).build();

        agency
            .rent_vehicle(&ClientFixtures::grace(), &VehicleFixtures::scooter())
            .unwrap();

        let rental = agency.rental_of(&ClientFixtures::grace()).unwrap();
        assert_eq!(rental.daily_price.amount(), dec!(12.5));
        assert!(agency.rental_of(&ClientFixtures::ada()).is_none());
    }

    #[test]
    fn test_rent_equal_vehicle_uses_catalog_entry() {
        let mut agency = AgencyBuilder::new().with_vehicle(VehicleFixtures::roma()).build();
        let two_seat_roma = ClockFixtures::factory()
            .car("Ferrari", "Roma", 2022, 2)
            .unwrap();
        assert_eq!(two_seat_roma, VehicleFixtures::roma());

        let price = agency
            .rent_vehicle(&ClientFixtures::arthur(), &two_seat_roma)
            .unwrap();

        assert_eq!(price.amount(), dec!(160));
        let rental = agency.rental_of(&ClientFixtures::arthur()).unwrap();
        assert_eq!(rental.vehicle.seats(), Some(4));
        assert!(Arc::ptr_eq(&rental.vehicle, &agency.vehicles()[0]));
    }
}

// ============================================================================
// Removal Policy Tests
// ============================================================================

mod removal_policy_tests {
    use super::*;

    #[test]
    fn test_remove_rented_vehicle_ends_rental_by_default() {
        let mut agency = AgencyBuilder::new()
            .with_reference_catalog()
            .with_rental(ClientFixtures::arthur(), VehicleFixtures::roma())
            .build();

        agency.remove(&VehicleFixtures::roma()).unwrap();

        assert!(!agency.is_rented_by(&ClientFixtures::arthur()));
        assert!(!agency.is_rented(&VehicleFixtures::roma()));
        assert_ledger_consistent(&agency);
    }

    #[test]
    fn test_remove_rented_vehicle_keeps_rental_when_configured() {
        let mut agency = AgencyBuilder::new()
            .with_removal_policy(RemovalPolicy::KeepRentals)
            .with_reference_catalog()
            .with_rental(ClientFixtures::arthur(), VehicleFixtures::roma())
            .build();

        agency.remove(&VehicleFixtures::roma()).unwrap();

        assert!(!agency.contains(&VehicleFixtures::roma()));
        assert!(agency.is_rented_by(&ClientFixtures::arthur()));
        assert!(agency.is_rented(&VehicleFixtures::roma()));
        assert!(agency.return_vehicle(&ClientFixtures::arthur()).is_ok());
    }

    #[test]
    fn test_remove_leaves_other_rentals_alone() {
        let mut agency = AgencyBuilder::new()
            .with_reference_catalog()
            .with_rental(ClientFixtures::arthur(), VehicleFixtures::roma())
            .with_rental(ClientFixtures::ada(), VehicleFixtures::multipla())
            .build();

        agency.remove(&VehicleFixtures::roma()).unwrap();

        assert!(agency.is_rented_by(&ClientFixtures::ada()));
        assert_eq!(agency.all_rented_vehicles().len(), 1);
    }
}

// ============================================================================
// Error Tests
// ============================================================================

mod error_tests {
    use super::*;

    #[test]
    fn test_print_unknown_vehicle_error() {
        let error = AgencyError::unknown_vehicle(&VehicleFixtures::roma());

        assert_eq!(
            error.to_string(),
            "Unknown vehicle: Car Ferrari Roma 2022 (4 seats): 160.0€"
        );
    }

    #[test]
    fn test_unknown_vehicle_carries_the_vehicle() {
        let mut agency = RentalAgency::new(ClockFixtures::fixed());

        match agency.remove(&VehicleFixtures::bmw_bike()) {
            Err(AgencyError::UnknownVehicle(vehicle)) => {
                assert_eq!(vehicle, VehicleFixtures::bmw_bike())
            }
            other => panic!("Expected UnknownVehicle, got {:?}", other),
        }
    }

    #[test]
    fn test_rental_error_messages() {
        let arthur = ClientFixtures::arthur();

        assert_eq!(
            AgencyError::already_renting(&arthur).to_string(),
            "Client already has a rented vehicle: Arthur BRATIGNY (21)"
        );
        assert_eq!(
            AgencyError::no_active_rental(&arthur).to_string(),
            "Client has no rented vehicle: Arthur BRATIGNY (21)"
        );
        assert_eq!(
            AgencyError::already_rented(&VehicleFixtures::bmw_bike()).to_string(),
            "Vehicle already rented: Motorbike BMW Test 2022 (500cm³): 125.0€"
        );
    }
}

// ============================================================================
// Configuration Tests
// ============================================================================

mod configuration_tests {
    use super::*;
    use domain_agency::AgencyConfig;

    #[test]
    fn test_from_config_applies_removal_policy() {
        let config = AgencyConfig {
            removal_policy: RemovalPolicy::KeepRentals,
            current_year: Some(2024),
            ..Default::default()
        };

        let agency = RentalAgency::from_config(&config, config.clock().unwrap());

        assert_eq!(agency.removal_policy(), RemovalPolicy::KeepRentals);
    }

    #[test]
    fn test_rental_start_date_uses_agency_clock() {
        let mut agency = AgencyBuilder::new()
            .with_clock(ClockFixtures::at_year(2030))
            .with_vehicle(VehicleFixtures::roma())
            .build();

        agency
            .rent_vehicle(&ClientFixtures::arthur(), &VehicleFixtures::roma())
            .unwrap();

        let rental = agency.rental_of(&ClientFixtures::arthur()).unwrap();
        assert_eq!(rental.started_on.to_string(), "2030-01-01");
    }

    #[test]
    fn test_rental_serializes() {
        let mut agency = AgencyBuilder::new().with_vehicle(VehicleFixtures::roma()).build();
        agency
            .rent_vehicle(&ClientFixtures::arthur(), &VehicleFixtures::roma())
            .unwrap();

        let rental = agency.rental_of(&ClientFixtures::arthur()).unwrap();
        let json = serde_json::to_value(rental).unwrap();

        assert_eq!(json["client"]["name"], "Arthur");
        assert_eq!(json["vehicle"]["model"], "Roma");
        assert_eq!(json["daily_price"]["currency"], "EUR");
    }
}

// ============================================================================
// Property Tests
// ============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use test_utils::generators::{agency_op_strategy, vehicle_strategy, AgencyOp};

    fn apply(agency: &mut RentalAgency, op: AgencyOp) {
        match op {
            AgencyOp::Add(vehicle) => {
                agency.add(vehicle);
            }
            AgencyOp::Remove(vehicle) => {
                let _ = agency.remove(&vehicle);
            }
            AgencyOp::Rent(client, vehicle) => {
                let _ = agency.rent_vehicle(&client, &vehicle);
            }
            AgencyOp::Return(client) => {
                let _ = agency.return_vehicle(&client);
            }
        }
    }

    proptest! {
        #[test]
        fn catalog_never_holds_duplicates(vehicles in prop::collection::vec(vehicle_strategy(), 0..30)) {
            let mut agency = RentalAgency::new(ClockFixtures::fixed());
            for vehicle in vehicles {
                let was_present = agency.contains(&vehicle);
                prop_assert_eq!(agency.add(vehicle), !was_present);
            }
            assert_catalog_unique(&agency);
        }

        #[test]
        fn ledger_stays_one_to_one(ops in prop::collection::vec(agency_op_strategy(), 0..60)) {
            let mut agency = RentalAgency::new(ClockFixtures::fixed());
            for op in ops {
                apply(&mut agency, op);
                assert_catalog_unique(&agency);
                assert_ledger_consistent(&agency);
            }
        }

        #[test]
        fn rent_then_return_restores_state(vehicle in vehicle_strategy()) {
            let mut agency = RentalAgency::new(ClockFixtures::fixed());
            agency.add(vehicle.clone());
            let client = ClientFixtures::grace();

            let price = agency.rent_vehicle(&client, &vehicle).unwrap();
            prop_assert_eq!(price, vehicle.daily_rental_price());
            agency.return_vehicle(&client).unwrap();

            prop_assert!(!agency.is_rented_by(&client));
            prop_assert!(agency.all_rented_vehicles().is_empty());
            prop_assert!(agency.contains(&vehicle));
        }
    }

    #[test]
    fn test_shared_vehicle_handles() {
        let agency = AgencyBuilder::new()
            .with_reference_catalog()
            .with_rental(ClientFixtures::ada(), VehicleFixtures::multipla())
            .build();

        let catalog = agency.vehicles();
        let rented = agency.all_rented_vehicles();
        assert!(Arc::ptr_eq(&catalog[1], &rented[0]));
    }
}

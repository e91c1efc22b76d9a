//! Daily rental pricing rules
//!
//! Prices are expressed in euros and depend only on the vehicle variant, its
//! variant attribute, and (for cars) its age in whole years.

use core_kernel::Money;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Oldest production year a vehicle may have
pub const MIN_PRODUCTION_YEAR: i32 = 1900;

/// A vehicle at most this many years old counts as new
pub const NEW_VEHICLE_MAX_AGE: i32 = 5;

/// Fewest seats a car may have
pub const MIN_SEATS: u32 = 1;

/// Smallest cylinder capacity (cm³) a motorbike may have
pub const MIN_CYLINDER_CAPACITY: u32 = 50;

/// Per-seat daily rate for a new car
pub const NEW_CAR_SEAT_RATE: Decimal = dec!(40);

/// Per-seat daily rate for a car older than [`NEW_VEHICLE_MAX_AGE`]
pub const USED_CAR_SEAT_RATE: Decimal = dec!(20);

/// Daily rate per cm³ of motorbike cylinder capacity
pub const MOTORBIKE_CC_RATE: Decimal = dec!(0.25);

/// Returns true if a vehicle of the given age counts as new
pub fn is_new(age: i32) -> bool {
    age <= NEW_VEHICLE_MAX_AGE
}

/// Daily price of a car with `seats` seats that is `age` years old
pub fn car_daily_price(seats: u32, age: i32) -> Money {
    let rate = if is_new(age) {
        NEW_CAR_SEAT_RATE
    } else {
        USED_CAR_SEAT_RATE
    };
    Money::eur(rate).multiply(Decimal::from(seats))
}

/// Daily price of a motorbike with the given cylinder capacity
pub fn motorbike_daily_price(cylinder_capacity: u32) -> Money {
    Money::eur(MOTORBIKE_CC_RATE).multiply(Decimal::from(cylinder_capacity))
}

//! Selection criteria over vehicles
//!
//! A criterion is any `Fn(&Vehicle) -> bool`. The constructors here build
//! the common ones and the combinators compose them:
//!
//! ```rust
//! use domain_agency::criteria::{and, by_brand, max_price, not};
//! use rust_decimal_macros::dec;
//!
//! let cheap_non_ferrari = and(max_price(dec!(120)), not(by_brand("Ferrari")));
//! # let _ = cheap_non_ferrari;
//! ```

use rust_decimal::Decimal;

use domain_fleet::Vehicle;

/// Matches vehicles whose brand is exactly `brand` (case-sensitive)
pub fn by_brand(brand: impl Into<String>) -> impl Fn(&Vehicle) -> bool {
    let brand = brand.into();
    move |vehicle| vehicle.brand() == brand
}

/// Matches vehicles whose daily price is at most `max` (inclusive)
pub fn max_price(max: Decimal) -> impl Fn(&Vehicle) -> bool {
    move |vehicle| vehicle.daily_rental_price().amount() <= max
}

/// Matches every vehicle
pub fn any() -> impl Fn(&Vehicle) -> bool {
    |_| true
}

pub fn and<A, B>(first: A, second: B) -> impl Fn(&Vehicle) -> bool
where
    A: Fn(&Vehicle) -> bool,
    B: Fn(&Vehicle) -> bool,
{
    move |vehicle| first(vehicle) && second(vehicle)
}

pub fn or<A, B>(first: A, second: B) -> impl Fn(&Vehicle) -> bool
where
    A: Fn(&Vehicle) -> bool,
    B: Fn(&Vehicle) -> bool,
{
    move |vehicle| first(vehicle) || second(vehicle)
}

pub fn not<A>(criterion: A) -> impl Fn(&Vehicle) -> bool
where
    A: Fn(&Vehicle) -> bool,
{
    move |vehicle| !criterion(vehicle)
}

//! Fleet Domain
//!
//! This crate defines the vehicles an agency can rent out and the rules that
//! price them.
//!
//! # Key Concepts
//!
//! - **Vehicle**: brand, model and production year plus a variant
//! - **Variant**: a closed set of vehicle kinds (car, motorbike), each with its
//!   own validated attribute and pricing rule
//! - **Daily rental price**: derived on demand from the variant and the age of
//!   the vehicle as seen by an injected clock
//!
//! # Pricing
//!
//! - Car: 40 per seat when at most 5 years old, 20 per seat otherwise
//! - Motorbike: 0.25 per cubic centimetre of cylinder capacity

pub mod error;
pub mod factory;
pub mod pricing;
pub mod vehicle;

pub use error::{VehicleAttribute, VehicleError};
pub use factory::VehicleFactory;
pub use vehicle::{Vehicle, VehicleKind};

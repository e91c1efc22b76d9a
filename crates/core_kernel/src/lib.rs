//! Core Kernel - Foundational types shared by the rental agency crates
//!
//! This crate provides the building blocks used by every domain crate:
//! - Money types with precise decimal arithmetic
//! - A clock capability for current-date lookups
//! - Strongly-typed identifiers

pub mod money;
pub mod temporal;
pub mod identifiers;

pub use money::{Money, Currency};
pub use temporal::{Clock, SystemClock, FixedClock, TemporalError};
pub use identifiers::RentalId;

//! Rental Agency Domain
//!
//! This crate implements the agency registry: a catalog of vehicles and a
//! ledger of active rentals, together with the rules that keep both
//! consistent.
//!
//! # Key Concepts
//!
//! - **Catalog**: the ordered, duplicate-free collection of vehicles
//! - **Ledger**: the mapping from client to the rental they currently hold
//! - **Criterion**: a plain closure used to select vehicles from the catalog
//!
//! # Invariants
//!
//! - The catalog never holds two equal vehicles
//! - A client holds at most one vehicle at a time
//! - A vehicle is rented by at most one client at a time
//! - Only catalog vehicles can be rented

pub mod agency;
pub mod client;
pub mod config;
pub mod criteria;
pub mod error;
pub mod rental;
pub mod shared;

pub use agency::RentalAgency;
pub use client::Client;
pub use self::config::{AgencyConfig, RemovalPolicy};
pub use error::AgencyError;
pub use rental::Rental;
pub use shared::SharedRentalAgency;

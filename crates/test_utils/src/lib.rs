//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! rental agency test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built clocks, vehicles and clients
//! - `builders`: Builder patterns for agencies in a given state
//! - `assertions`: Assertion helpers that check agency invariants
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;

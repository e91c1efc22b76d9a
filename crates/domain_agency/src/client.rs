//! Agency clients

use serde::{Deserialize, Serialize};
use std::fmt;

/// A person who can rent a vehicle
///
/// Clients are compared by value: two records with the same name, surname and
/// birth year are the same client as far as the rental ledger is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Client {
    name: String,
    surname: String,
    birth_year: i32,
}

impl Client {
    pub fn new(name: impl Into<String>, surname: impl Into<String>, birth_year: i32) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            birth_year,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn birth_year(&self) -> i32 {
        self.birth_year
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.name, self.surname, self.birth_year)
    }
}

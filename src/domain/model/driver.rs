//! Driver (conductor) type definitions

use serde::{Deserialize, Serialize};

/// A driver on the roster, identified by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    /// Full name, unique within the roster
    pub name: String,
    /// Identity document number (cédula)
    pub document: String,
}

impl Driver {
    pub fn new(name: String, document: String) -> Self {
        Self { name, document }
    }
}

//! Vehicle (tractomula) type definitions

use serde::{Deserialize, Serialize};

/// A truck in the fleet, identified by its license plate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// License plate (e.g. "SOP148"), unique within the fleet
    pub plate: String,
    /// Fuel efficiency in km per gallon
    pub efficiency_km_per_gallon: f64,
    /// Category label (e.g. "Sencilla", "Dobletroque", "Minimula")
    pub category: String,
    /// Name of the driver usually assigned to this truck
    #[serde(default)]
    pub assigned_driver: Option<String>,
}

impl Vehicle {
    pub fn new(plate: String, efficiency_km_per_gallon: f64, category: String) -> Self {
        Self {
            plate,
            efficiency_km_per_gallon,
            category,
            assigned_driver: None,
        }
    }

    pub fn with_assigned_driver(mut self, driver: String) -> Self {
        self.assigned_driver = Some(driver);
        self
    }
}

//! Persistent stores for fleet data and completed trips
//!
//! Each store is a JSON file under the data directory, loaded on open
//! and rewritten on every mutation.

pub mod drivers;
pub mod routes;
pub mod trips;
pub mod vehicles;

pub use drivers::DriverStore;
pub use routes::RouteStore;
pub use trips::{TripFilter, TripStore};
pub use vehicles::VehicleStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::model::{CostBreakdown, TripRequest};

/// Durable trace of a completed trip: the inputs, the computed
/// breakdown, a timestamp and free-text notes. Never mutated after
/// creation; deleted explicitly by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    /// Unique identifier
    pub id: String,
    /// When the trip was saved
    pub created_at: DateTime<Utc>,
    pub plate: String,
    pub driver: String,
    pub origin: String,
    pub destination: String,
    pub distance_km: f64,
    pub days: u32,
    pub border: bool,
    pub parking_used: bool,
    pub company_advance_taken: bool,
    pub toll_pass: f64,
    pub tolls: f64,
    pub hotel: f64,
    pub meals: f64,
    pub loading_unloading: f64,
    pub misc: f64,
    pub freight_price: f64,
    pub cash_advance: f64,
    /// Engine output for the inputs above
    pub breakdown: CostBreakdown,
    #[serde(default)]
    pub notes: Option<String>,
}

impl TripRecord {
    /// Build a record from a calculated trip
    pub fn from_request(
        trip: &TripRequest,
        breakdown: CostBreakdown,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            plate: trip.vehicle.plate.clone(),
            driver: trip.driver.name.clone(),
            origin: trip.route.origin.clone(),
            destination: trip.route.destination.clone(),
            distance_km: trip.route.distance_km,
            days: trip.days,
            border: trip.border,
            parking_used: trip.parking_used,
            company_advance_taken: trip.company_advance,
            toll_pass: trip.expenses.toll_pass,
            tolls: trip.expenses.tolls,
            hotel: trip.expenses.hotel,
            meals: trip.expenses.meals,
            loading_unloading: trip.expenses.loading_unloading,
            misc: trip.expenses.misc,
            freight_price: trip.freight_price,
            cash_advance: trip.cash_advance,
            breakdown,
            notes,
        }
    }
}

//! Trip request: everything the cost engine needs for one trip

use serde::{Deserialize, Serialize};

use crate::domain::model::{Driver, Route, Vehicle};
use crate::error::{Error, Result};

/// Itemized expenses entered per trip, all in COP
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripExpenses {
    /// Electronic toll pass (Flypass)
    pub toll_pass: f64,
    /// Cash tolls
    pub tolls: f64,
    pub hotel: f64,
    pub meals: f64,
    pub loading_unloading: f64,
    /// Other expenses (grease jobs, etc.)
    pub misc: f64,
}

/// Parameters for a single trip calculation.
///
/// Transient: built per calculation, validated once at the boundary,
/// then handed to the cost engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub vehicle: Vehicle,
    pub driver: Driver,
    pub route: Route,
    /// Trip duration in days, at least 1
    pub days: u32,
    /// Trip crosses the border
    pub border: bool,
    /// Paid parking was used
    pub parking_used: bool,
    /// The company took an advance on the freight
    pub company_advance: bool,
    pub expenses: TripExpenses,
    /// Agreed freight price (COP)
    pub freight_price: f64,
    /// Cash advance given to the driver (COP)
    pub cash_advance: f64,
}

impl TripRequest {
    /// Check the caller contract: positive day count, non-negative
    /// distance and amounts. Zero freight and zero efficiency are valid
    /// inputs with defined zero-yield conventions, so they pass.
    pub fn validate(&self) -> Result<()> {
        if self.days < 1 {
            return Err(Error::Validation("day count must be at least 1".to_string()));
        }
        if self.route.distance_km < 0.0 {
            return Err(Error::Validation("distance must be non-negative".to_string()));
        }
        let amounts = [
            ("toll pass", self.expenses.toll_pass),
            ("tolls", self.expenses.tolls),
            ("hotel", self.expenses.hotel),
            ("meals", self.expenses.meals),
            ("loading/unloading", self.expenses.loading_unloading),
            ("misc", self.expenses.misc),
            ("freight price", self.freight_price),
            ("cash advance", self.cash_advance),
        ];
        for (name, amount) in amounts {
            if amount < 0.0 {
                return Err(Error::Validation(format!("{} must be non-negative", name)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trip() -> TripRequest {
        TripRequest {
            vehicle: Vehicle::new("SOP148".to_string(), 2.5, "Sencilla".to_string()),
            driver: Driver::new("RAMON TAFUR HERNANDEZ".to_string(), "123456789".to_string()),
            route: Route::new("Bogotá".to_string(), "Medellín".to_string(), 420.0),
            days: 2,
            border: false,
            parking_used: false,
            company_advance: false,
            expenses: TripExpenses::default(),
            freight_price: 3_000_000.0,
            cash_advance: 500_000.0,
        }
    }

    #[test]
    fn test_valid_trip_passes() {
        assert!(sample_trip().validate().is_ok());
    }

    #[test]
    fn test_zero_days_rejected() {
        let mut trip = sample_trip();
        trip.days = 0;
        assert!(trip.validate().is_err());
    }

    #[test]
    fn test_negative_distance_rejected() {
        let mut trip = sample_trip();
        trip.route.distance_km = -1.0;
        assert!(trip.validate().is_err());
    }

    #[test]
    fn test_negative_expense_rejected() {
        let mut trip = sample_trip();
        trip.expenses.hotel = -50_000.0;
        assert!(trip.validate().is_err());
    }

    #[test]
    fn test_zero_freight_is_valid() {
        let mut trip = sample_trip();
        trip.freight_price = 0.0;
        assert!(trip.validate().is_ok());
    }
}

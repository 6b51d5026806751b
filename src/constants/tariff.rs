//! Tariff table: the named cost constants behind every trip calculation
//!
//! Values are COP unless noted. The table is read-only during a
//! calculation; only the fuel price is user-configurable.

use serde::{Deserialize, Serialize};

/// Immutable set of named tariff constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TariffTable {
    /// Diesel price per gallon
    pub fuel_price_per_gallon: f64,
    /// Administrative payroll base, amortized per trip
    pub admin_payroll_base: f64,
    /// Divisor applied to the admin payroll base
    pub admin_payroll_divisor: f64,
    /// Driver payroll per travel day
    pub driver_daily_rate: f64,
    /// Commission for border trips
    pub commission_border: f64,
    /// Commission for regional trips
    pub commission_regional: f64,
    /// Commission for special-zone trips (Aguachica corridor)
    pub commission_special_zone: f64,
    /// Commission for any other trip
    pub commission_standard: f64,
    /// Monthly maintenance budget, spread over 30-day months
    pub monthly_maintenance: f64,
    /// Insurance premium amortized over one year
    pub insurance_premium_1: f64,
    /// Second insurance premium amortized over one year
    pub insurance_premium_2: f64,
    /// Long-horizon insurance premium
    pub insurance_premium_3: f64,
    /// Amortization horizon for the third premium, in years
    pub insurance_premium_3_years: f64,
    /// Annual roadworthiness inspection fee (tecnomecánica)
    pub annual_inspection_fee: f64,
    /// Cost of a single tire
    pub tire_cost: f64,
    /// Tires per vehicle
    pub tire_count: f64,
    /// Tire set lifespan in km
    pub tire_lifespan_km: f64,
    /// Cost of a full oil change
    pub oil_cost: f64,
    /// Oil change interval in km
    pub oil_lifespan_km: f64,
    /// Flat border-crossing fee
    pub border_crossing_fee: f64,
    /// Parking rate per day
    pub daily_parking_rate: f64,
    /// Fraction of the freight price advanced to the company
    pub company_advance_margin: f64,
    /// Divisor encoding the target minimum margin for break-even
    pub break_even_divisor: f64,
}

impl Default for TariffTable {
    fn default() -> Self {
        Self {
            fuel_price_per_gallon: 10_800.0,
            admin_payroll_base: 1_300_000.0,
            admin_payroll_divisor: 14.0,
            driver_daily_rate: 20_000.0,
            commission_border: 500_000.0,
            commission_regional: 180_000.0,
            commission_special_zone: 350_000.0,
            commission_standard: 100_000.0,
            monthly_maintenance: 1_500_000.0,
            insurance_premium_1: 1_400_000.0,
            insurance_premium_2: 6_000_000.0,
            insurance_premium_3: 16_000_000.0,
            insurance_premium_3_years: 14.0,
            annual_inspection_fee: 460_000.0,
            tire_cost: 1_300_000.0,
            tire_count: 22.0,
            tire_lifespan_km: 80_000.0,
            oil_cost: 2_500_000.0,
            oil_lifespan_km: 15_000.0,
            border_crossing_fee: 556_000.0,
            daily_parking_rate: 15_000.0,
            company_advance_margin: 0.90,
            break_even_divisor: 0.5,
        }
    }
}

impl TariffTable {
    /// Override the fuel price (the only editable field)
    pub fn with_fuel_price(mut self, price: f64) -> Self {
        self.fuel_price_per_gallon = price;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let tariff = TariffTable::default();
        assert_eq!(tariff.fuel_price_per_gallon, 10_800.0);
        assert_eq!(tariff.commission_border, 500_000.0);
        assert_eq!(tariff.break_even_divisor, 0.5);
    }

    #[test]
    fn test_with_fuel_price() {
        let tariff = TariffTable::default().with_fuel_price(12_000.0);
        assert_eq!(tariff.fuel_price_per_gallon, 12_000.0);
        // Everything else untouched
        assert_eq!(tariff.admin_payroll_base, 1_300_000.0);
    }
}

//! Cost engine: pure transform from (TripRequest, TariffTable) to CostBreakdown
//!
//! No I/O, no side effects, no hidden state. Intermediate arithmetic
//! keeps full f64 precision; rounding to 2 decimals happens once, at the
//! CostBreakdown boundary.

use crate::constants::TariffTable;
use crate::domain::model::{CostBreakdown, RouteKind, TripRequest};
use crate::error::Result;

/// Round a monetary amount to 2 decimals
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Back-office payroll amortized over the trip days
pub fn administrative_payroll(tariff: &TariffTable, days: u32) -> f64 {
    (tariff.admin_payroll_base / tariff.admin_payroll_divisor) * days as f64
}

/// Driver day wages
pub fn driver_payroll(tariff: &TariffTable, days: u32) -> f64 {
    tariff.driver_daily_rate * days as f64
}

/// Commission for the resolved trip kind. Exactly one tier applies.
pub fn driver_commission(tariff: &TariffTable, kind: RouteKind) -> f64 {
    match kind {
        RouteKind::SpecialZone => tariff.commission_special_zone,
        RouteKind::Regional => tariff.commission_regional,
        RouteKind::Border => tariff.commission_border,
        RouteKind::Standard => tariff.commission_standard,
    }
}

/// Maintenance budget amortized over 30-day months, no calendar awareness
pub fn maintenance(tariff: &TariffTable, days: u32) -> f64 {
    (tariff.monthly_maintenance / 30.0) * days as f64
}

/// Three independently amortized premiums, summed per day
pub fn insurance(tariff: &TariffTable, days: u32) -> f64 {
    let daily = tariff.insurance_premium_1 / 365.0
        + tariff.insurance_premium_2 / 365.0
        + tariff.insurance_premium_3 / (tariff.insurance_premium_3_years * 365.0);
    daily * days as f64
}

/// Annual inspection fee amortized per day
pub fn inspection_fee(tariff: &TariffTable, days: u32) -> f64 {
    (tariff.annual_inspection_fee / 365.0) * days as f64
}

/// Per-km wear of the full tire set
pub fn tire_wear(tariff: &TariffTable, distance_km: f64) -> f64 {
    let cost_per_km = (tariff.tire_cost * tariff.tire_count) / tariff.tire_lifespan_km;
    cost_per_km * distance_km
}

/// Per-km oil consumption cost
pub fn oil_wear(tariff: &TariffTable, distance_km: f64) -> f64 {
    (tariff.oil_cost / tariff.oil_lifespan_km) * distance_km
}

/// Gallons needed for the distance. A non-positive efficiency yields
/// zero by convention, never an error.
pub fn fuel_gallons(distance_km: f64, efficiency_km_per_gallon: f64) -> f64 {
    if efficiency_km_per_gallon <= 0.0 {
        return 0.0;
    }
    distance_km / efficiency_km_per_gallon
}

/// Run the engine: validate once at the boundary, then compute.
///
/// The computation itself cannot fail for validated inputs.
pub fn calculate(trip: &TripRequest, tariff: &TariffTable) -> Result<CostBreakdown> {
    trip.validate()?;
    Ok(compute(trip, tariff))
}

fn compute(trip: &TripRequest, tariff: &TariffTable) -> CostBreakdown {
    let days = trip.days;
    let distance = trip.route.distance_km;
    let kind = RouteKind::classify(&trip.route, trip.border);

    let admin_payroll = administrative_payroll(tariff, days);
    let driver_payroll = driver_payroll(tariff, days);
    let driver_commission = driver_commission(tariff, kind);
    let maintenance = maintenance(tariff, days);
    let insurance = insurance(tariff, days);
    let inspection_fee = inspection_fee(tariff, days);
    let tire_wear = tire_wear(tariff, distance);
    let oil_wear = oil_wear(tariff, distance);
    let gallons = fuel_gallons(distance, trip.vehicle.efficiency_km_per_gallon);
    let fuel_cost = gallons * tariff.fuel_price_per_gallon;
    let border_fee = if trip.border { tariff.border_crossing_fee } else { 0.0 };
    let parking = if trip.parking_used {
        tariff.daily_parking_rate * days as f64
    } else {
        0.0
    };

    let e = &trip.expenses;
    let total_expense = admin_payroll
        + driver_payroll
        + driver_commission
        + maintenance
        + insurance
        + inspection_fee
        + tire_wear
        + oil_wear
        + fuel_cost
        + e.toll_pass
        + e.tolls
        + border_fee
        + e.hotel
        + e.meals
        + parking
        + e.loading_unloading
        + e.misc;

    let legalization =
        e.tolls + border_fee + e.hotel + e.meals + parking + e.loading_unloading + e.misc;
    let settlement_balance = trip.cash_advance - legalization;
    let break_even_point = total_expense / tariff.break_even_divisor;
    let profit = trip.freight_price - total_expense;
    let profit_margin_pct = if trip.freight_price > 0.0 {
        (profit / trip.freight_price) * 100.0
    } else {
        0.0
    };
    let company_advance = if trip.company_advance {
        trip.freight_price * tariff.company_advance_margin
    } else {
        0.0
    };
    let company_settlement_balance = trip.freight_price - company_advance;

    CostBreakdown {
        admin_payroll: round2(admin_payroll),
        driver_payroll: round2(driver_payroll),
        driver_commission: round2(driver_commission),
        maintenance: round2(maintenance),
        insurance: round2(insurance),
        inspection_fee: round2(inspection_fee),
        tire_wear: round2(tire_wear),
        oil_wear: round2(oil_wear),
        fuel_gallons: round2(gallons),
        fuel_cost: round2(fuel_cost),
        border_fee: round2(border_fee),
        parking: round2(parking),
        total_expense: round2(total_expense),
        legalization: round2(legalization),
        settlement_balance: round2(settlement_balance),
        break_even_point: round2(break_even_point),
        profit: round2(profit),
        profit_margin_pct: round2(profit_margin_pct),
        company_advance: round2(company_advance),
        company_settlement_balance: round2(company_settlement_balance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Driver, Route, TripExpenses, Vehicle};

    fn sample_vehicle() -> Vehicle {
        Vehicle::new("NOX459".to_string(), 2.5, "Sencilla".to_string())
    }

    fn sample_driver() -> Driver {
        Driver::new("HABID CAMACHO".to_string(), "123456789".to_string())
    }

    /// The reference trip: 1 day, 100 km, freight 2,000,000, advance
    /// 500,000, tolls 50,000, everything else zero.
    fn reference_trip() -> TripRequest {
        TripRequest {
            vehicle: sample_vehicle(),
            driver: sample_driver(),
            route: Route::new("Bogotá".to_string(), "Tunja".to_string(), 100.0),
            days: 1,
            border: false,
            parking_used: false,
            company_advance: false,
            expenses: TripExpenses {
                tolls: 50_000.0,
                ..TripExpenses::default()
            },
            freight_price: 2_000_000.0,
            cash_advance: 500_000.0,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 0.01,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_reference_trip_fuel() {
        let b = calculate(&reference_trip(), &TariffTable::default()).unwrap();
        assert_close(b.fuel_gallons, 40.0);
        assert_close(b.fuel_cost, 432_000.0);
    }

    #[test]
    fn test_reference_trip_per_day_costs() {
        let b = calculate(&reference_trip(), &TariffTable::default()).unwrap();
        assert_close(b.admin_payroll, 92_857.14);
        assert_close(b.driver_payroll, 20_000.0);
        assert_close(b.maintenance, 50_000.0);
        // 1.4M/365 + 6M/365 + 16M/(14*365)
        assert_close(b.insurance, 23_405.09);
        assert_close(b.inspection_fee, 1_260.27);
    }

    #[test]
    fn test_reference_trip_per_km_costs() {
        let b = calculate(&reference_trip(), &TariffTable::default()).unwrap();
        assert_close(b.tire_wear, 35_750.0);
        assert_close(b.oil_wear, 16_666.67);
    }

    #[test]
    fn test_reference_trip_results() {
        let b = calculate(&reference_trip(), &TariffTable::default()).unwrap();
        assert_close(b.driver_commission, 100_000.0);
        assert_close(b.legalization, 50_000.0);
        assert_close(b.settlement_balance, 450_000.0);
        assert_close(b.total_expense, 821_939.17);
        assert_close(b.break_even_point, 1_643_878.34);
        assert_close(b.profit, 1_178_060.83);
        assert_close(b.profit_margin_pct, 58.9);
        assert_close(b.company_advance, 0.0);
        assert_close(b.company_settlement_balance, 2_000_000.0);
    }

    #[test]
    fn test_total_is_sum_of_components() {
        let mut trip = reference_trip();
        trip.border = true;
        trip.parking_used = true;
        trip.expenses = TripExpenses {
            toll_pass: 120_000.0,
            tolls: 50_000.0,
            hotel: 80_000.0,
            meals: 60_000.0,
            loading_unloading: 40_000.0,
            misc: 10_000.0,
        };
        let b = calculate(&trip, &TariffTable::default()).unwrap();
        let summed = b.admin_payroll
            + b.driver_payroll
            + b.driver_commission
            + b.maintenance
            + b.insurance
            + b.inspection_fee
            + b.tire_wear
            + b.oil_wear
            + b.fuel_cost
            + trip.expenses.toll_pass
            + trip.expenses.tolls
            + b.border_fee
            + trip.expenses.hotel
            + trip.expenses.meals
            + b.parking
            + trip.expenses.loading_unloading
            + trip.expenses.misc;
        // Sub-results are rounded independently, so allow off-by-cents
        assert!((b.total_expense - summed).abs() < 0.05);
    }

    #[test]
    fn test_commission_precedence() {
        let tariff = TariffTable::default();
        let mut trip = reference_trip();

        // Border flag alone selects the border tier
        trip.border = true;
        let b = calculate(&trip, &tariff).unwrap();
        assert_close(b.driver_commission, 500_000.0);

        // Regional wins over border
        trip.route.regional = true;
        let b = calculate(&trip, &tariff).unwrap();
        assert_close(b.driver_commission, 180_000.0);

        // Special zone wins over everything
        trip.route.special_zone = true;
        let b = calculate(&trip, &tariff).unwrap();
        assert_close(b.driver_commission, 350_000.0);
    }

    #[test]
    fn test_border_flag_drives_crossing_fee() {
        let mut trip = reference_trip();
        trip.border = true;
        let b = calculate(&trip, &TariffTable::default()).unwrap();
        assert_close(b.border_fee, 556_000.0);
        // Border fee flows into the legalization
        assert_close(b.legalization, 606_000.0);
        assert_close(b.settlement_balance, -106_000.0);
    }

    #[test]
    fn test_parking_charged_per_day() {
        let mut trip = reference_trip();
        trip.parking_used = true;
        trip.days = 3;
        let b = calculate(&trip, &TariffTable::default()).unwrap();
        assert_close(b.parking, 45_000.0);
    }

    #[test]
    fn test_zero_efficiency_yields_zero_fuel() {
        let mut trip = reference_trip();
        trip.vehicle.efficiency_km_per_gallon = 0.0;
        let b = calculate(&trip, &TariffTable::default()).unwrap();
        assert_close(b.fuel_gallons, 0.0);
        assert_close(b.fuel_cost, 0.0);
    }

    #[test]
    fn test_zero_freight_yields_zero_margin() {
        let mut trip = reference_trip();
        trip.freight_price = 0.0;
        let b = calculate(&trip, &TariffTable::default()).unwrap();
        assert_close(b.profit_margin_pct, 0.0);
        // Profit is still defined: 0 - total
        assert!(b.profit < 0.0);
    }

    #[test]
    fn test_company_advance() {
        let mut trip = reference_trip();
        trip.company_advance = true;
        let b = calculate(&trip, &TariffTable::default()).unwrap();
        assert_close(b.company_advance, 1_800_000.0);
        assert_close(b.company_settlement_balance, 200_000.0);
    }

    #[test]
    fn test_idempotence() {
        let trip = reference_trip();
        let tariff = TariffTable::default();
        let a = calculate(&trip, &tariff).unwrap();
        let b = calculate(&trip, &tariff).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_days_rejected() {
        let mut trip = reference_trip();
        trip.days = 0;
        assert!(calculate(&trip, &TariffTable::default()).is_err());
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(92_857.142857), 92_857.14);
        assert_eq!(round2(16_666.666667), 16_666.67);
        assert_eq!(round2(-106_000.004), -106_000.0);
    }
}

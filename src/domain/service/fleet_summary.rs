//! Per-plate accumulation over stored trip records

use std::collections::BTreeMap;

use serde::Serialize;

use crate::constants::TariffTable;
use crate::domain::service::cost_engine::round2;
use crate::store::TripRecord;

/// Accumulated figures for one plate.
///
/// Category fields are straight sums over the records; the expense
/// total, break-even, profit and margin are re-derived from the sums,
/// the same way the per-trip figures derive from per-trip categories.
#[derive(Debug, Clone, Serialize)]
pub struct PlateTotals {
    pub plate: String,
    pub trips: usize,
    pub distance_km: f64,
    pub freight: f64,
    pub admin_payroll: f64,
    pub driver_payroll: f64,
    pub driver_commission: f64,
    pub maintenance: f64,
    pub insurance: f64,
    pub inspection_fee: f64,
    pub tire_wear: f64,
    pub oil_wear: f64,
    pub fuel_cost: f64,
    pub toll_pass: f64,
    pub tolls: f64,
    pub border_fee: f64,
    pub hotel: f64,
    pub meals: f64,
    pub parking: f64,
    pub loading_unloading: f64,
    pub misc: f64,
    pub legalization: f64,
    pub cash_advance: f64,
    pub settlement_balance: f64,
    pub company_advance: f64,
    pub company_settlement_balance: f64,
    pub total_expense: f64,
    pub break_even_point: f64,
    pub profit: f64,
    pub profit_margin_pct: f64,
}

impl PlateTotals {
    fn new(plate: String) -> Self {
        Self {
            plate,
            trips: 0,
            distance_km: 0.0,
            freight: 0.0,
            admin_payroll: 0.0,
            driver_payroll: 0.0,
            driver_commission: 0.0,
            maintenance: 0.0,
            insurance: 0.0,
            inspection_fee: 0.0,
            tire_wear: 0.0,
            oil_wear: 0.0,
            fuel_cost: 0.0,
            toll_pass: 0.0,
            tolls: 0.0,
            border_fee: 0.0,
            hotel: 0.0,
            meals: 0.0,
            parking: 0.0,
            loading_unloading: 0.0,
            misc: 0.0,
            legalization: 0.0,
            cash_advance: 0.0,
            settlement_balance: 0.0,
            company_advance: 0.0,
            company_settlement_balance: 0.0,
            total_expense: 0.0,
            break_even_point: 0.0,
            profit: 0.0,
            profit_margin_pct: 0.0,
        }
    }

    fn accumulate(&mut self, record: &TripRecord) {
        let b = &record.breakdown;
        self.trips += 1;
        self.distance_km += record.distance_km;
        self.freight += record.freight_price;
        self.admin_payroll += b.admin_payroll;
        self.driver_payroll += b.driver_payroll;
        self.driver_commission += b.driver_commission;
        self.maintenance += b.maintenance;
        self.insurance += b.insurance;
        self.inspection_fee += b.inspection_fee;
        self.tire_wear += b.tire_wear;
        self.oil_wear += b.oil_wear;
        self.fuel_cost += b.fuel_cost;
        self.toll_pass += record.toll_pass;
        self.tolls += record.tolls;
        self.border_fee += b.border_fee;
        self.hotel += record.hotel;
        self.meals += record.meals;
        self.parking += b.parking;
        self.loading_unloading += record.loading_unloading;
        self.misc += record.misc;
        self.legalization += b.legalization;
        self.cash_advance += record.cash_advance;
        self.settlement_balance += b.settlement_balance;
        self.company_advance += b.company_advance;
        self.company_settlement_balance += b.company_settlement_balance;
    }

    fn finish(&mut self, tariff: &TariffTable) {
        let total = self.admin_payroll
            + self.driver_payroll
            + self.driver_commission
            + self.maintenance
            + self.insurance
            + self.inspection_fee
            + self.tire_wear
            + self.oil_wear
            + self.fuel_cost
            + self.toll_pass
            + self.tolls
            + self.border_fee
            + self.hotel
            + self.meals
            + self.parking
            + self.loading_unloading
            + self.misc;
        self.total_expense = round2(total);
        self.break_even_point = round2(total / tariff.break_even_divisor);
        let profit = self.freight - total;
        self.profit = round2(profit);
        self.profit_margin_pct = if self.freight > 0.0 {
            round2(profit / self.freight * 100.0)
        } else {
            0.0
        };
    }
}

/// Accumulate records per plate, sorted by plate
pub fn accumulate_by_plate(records: &[&TripRecord], tariff: &TariffTable) -> Vec<PlateTotals> {
    let mut by_plate: BTreeMap<String, PlateTotals> = BTreeMap::new();

    for record in records {
        by_plate
            .entry(record.plate.clone())
            .or_insert_with(|| PlateTotals::new(record.plate.clone()))
            .accumulate(record);
    }

    let mut totals: Vec<_> = by_plate.into_values().collect();
    for t in &mut totals {
        t.finish(tariff);
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Driver, Route, TripExpenses, TripRequest, Vehicle};
    use crate::domain::service::cost_engine;

    fn record_for(plate: &str, freight: f64) -> TripRecord {
        let trip = TripRequest {
            vehicle: Vehicle::new(plate.to_string(), 2.5, "Sencilla".to_string()),
            driver: Driver::new("PEDRO VILLAMIL".to_string(), "123456789".to_string()),
            route: Route::new("Bogotá".to_string(), "Tunja".to_string(), 100.0),
            days: 1,
            border: false,
            parking_used: false,
            company_advance: false,
            expenses: TripExpenses {
                tolls: 50_000.0,
                ..TripExpenses::default()
            },
            freight_price: freight,
            cash_advance: 0.0,
        };
        let breakdown = cost_engine::calculate(&trip, &TariffTable::default()).unwrap();
        TripRecord::from_request(&trip, breakdown, None)
    }

    #[test]
    fn test_groups_by_plate() {
        let a1 = record_for("NOX459", 2_000_000.0);
        let a2 = record_for("NOX459", 1_500_000.0);
        let b = record_for("SOP148", 2_000_000.0);
        let records = vec![&a1, &a2, &b];

        let totals = accumulate_by_plate(&records, &TariffTable::default());
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].plate, "NOX459");
        assert_eq!(totals[0].trips, 2);
        assert_eq!(totals[1].plate, "SOP148");
        assert_eq!(totals[1].trips, 1);
    }

    #[test]
    fn test_total_matches_category_sums() {
        let a1 = record_for("NOX459", 2_000_000.0);
        let a2 = record_for("NOX459", 1_500_000.0);
        let records = vec![&a1, &a2];

        let totals = accumulate_by_plate(&records, &TariffTable::default());
        let t = &totals[0];
        // Two identical trips: aggregate total is twice the per-trip
        // total, give or take independent rounding
        let per_trip = a1.breakdown.total_expense;
        assert!((t.total_expense - 2.0 * per_trip).abs() < 0.05);
        assert!((t.break_even_point - t.total_expense * 2.0).abs() < 0.05);
        assert!((t.profit - (t.freight - t.total_expense)).abs() < 0.05);
    }

    #[test]
    fn test_zero_freight_margin_is_zero() {
        let a = record_for("NOX459", 0.0);
        let records = vec![&a];
        let totals = accumulate_by_plate(&records, &TariffTable::default());
        assert_eq!(totals[0].profit_margin_pct, 0.0);
    }

    #[test]
    fn test_empty_records() {
        let totals = accumulate_by_plate(&[], &TariffTable::default());
        assert!(totals.is_empty());
    }
}

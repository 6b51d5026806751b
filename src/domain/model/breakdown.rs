//! Cost breakdown: the engine's output record

use serde::{Deserialize, Serialize};

/// All derived cost and profitability figures for one trip.
///
/// Every monetary field is rounded to 2 decimals at this boundary;
/// recomputing from the same TripRequest and TariffTable reproduces the
/// record bit for bit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Amortized back-office payroll
    pub admin_payroll: f64,
    /// Driver day wages
    pub driver_payroll: f64,
    /// Tiered driver commission
    pub driver_commission: f64,
    pub maintenance: f64,
    pub insurance: f64,
    /// Roadworthiness inspection amortization
    pub inspection_fee: f64,
    pub tire_wear: f64,
    pub oil_wear: f64,
    /// Diesel gallons needed for the distance
    pub fuel_gallons: f64,
    pub fuel_cost: f64,
    /// Border-crossing fee (zero when the trip stays inland)
    pub border_fee: f64,
    pub parking: f64,
    /// Sum of the seventeen cost components
    pub total_expense: f64,
    /// Expenses reconciled against the driver's cash advance
    pub legalization: f64,
    /// Cash advance minus legalization; negative means the driver owes
    pub settlement_balance: f64,
    /// Freight price at which the trip meets the target margin
    pub break_even_point: f64,
    pub profit: f64,
    /// Profit as a percentage of the freight price
    pub profit_margin_pct: f64,
    /// Advance taken by the company on the freight
    pub company_advance: f64,
    /// Freight price minus the company advance
    pub company_settlement_balance: f64,
}

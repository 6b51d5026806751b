//! Output formatting module
//!
//! Renders breakdowns and summaries as text reports (Colombian number
//! formatting: 5.000.000,50) or JSON.

use std::fmt::Write as _;

use crate::cli::OutputFormat;
use crate::domain::service::fleet_summary::PlateTotals;
use crate::error::Result;
use crate::store::TripRecord;

/// Format a number Colombian style, integer part only: 5.000.000
pub fn format_number(value: f64) -> String {
    let negative = value < 0.0;
    let digits = format!("{}", value.abs().trunc() as i64);
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    if negative && grouped != "0" {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format a number Colombian style with decimals: 5.000.000,50
pub fn format_decimal(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (formatted, None),
    };
    let mut grouped = String::new();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let mut out = if value < 0.0 && value.abs() >= 0.005 {
        format!("-{}", grouped)
    } else {
        grouped
    };
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(&frac);
    }
    out
}

fn cop(value: f64) -> String {
    format!("${} COP", format_number(value))
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Render the full cost report for one trip record
pub fn report_text(record: &TripRecord) -> String {
    let b = &record.breakdown;
    let mut out = String::new();
    let rule = "=".repeat(70);
    let thin = "-".repeat(70);

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "          COST REPORT - FREIGHT TRANSPORT");
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "TRIP INFORMATION");
    let _ = writeln!(out, "{}", thin);
    let _ = writeln!(out, "Route: {} → {}", record.origin, record.destination);
    let _ = writeln!(out, "Distance: {} km", format_number(record.distance_km));
    let _ = writeln!(out, "Trip days: {}", record.days);
    let _ = writeln!(out, "Gallons needed: {} gal", format_decimal(b.fuel_gallons, 2));
    let _ = writeln!(out, "Border crossing: {}", yes_no(record.border));
    let _ = writeln!(out, "Parking used: {}", yes_no(record.parking_used));
    let _ = writeln!(out);
    let _ = writeln!(out, "VEHICLE / DRIVER");
    let _ = writeln!(out, "{}", thin);
    let _ = writeln!(out, "Plate: {}", record.plate);
    let _ = writeln!(out, "Driver: {}", record.driver);
    let _ = writeln!(out);
    let _ = writeln!(out, "COST BREAKDOWN");
    let _ = writeln!(out, "{}", rule);

    let lines: [(&str, f64); 17] = [
        ("1. Administrative payroll", b.admin_payroll),
        ("2. Driver payroll", b.driver_payroll),
        ("3. Driver commission", b.driver_commission),
        ("4. Maintenance", b.maintenance),
        ("5. Insurance", b.insurance),
        ("6. Inspection fee", b.inspection_fee),
        ("7. Tire wear", b.tire_wear),
        ("8. Oil wear", b.oil_wear),
        ("9. Fuel", b.fuel_cost),
        ("10. Toll pass", record.toll_pass),
        ("11. Tolls", record.tolls),
        ("12. Border crossing", b.border_fee),
        ("13. Hotel", record.hotel),
        ("14. Meals", record.meals),
        ("15. Parking", b.parking),
        ("16. Loading/unloading", record.loading_unloading),
        ("17. Other", record.misc),
    ];
    for (label, amount) in lines {
        let _ = writeln!(out, "{:<26}{:>24}", label, cop(amount));
    }

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "RESULTS");
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "{:<26}{:>24}", "TOTAL EXPENSE:", cop(b.total_expense));
    let _ = writeln!(out, "{:<26}{:>24}", "LEGALIZATION:", cop(b.legalization));
    let _ = writeln!(out, "{:<26}{:>24}", "CASH ADVANCE:", cop(record.cash_advance));
    let _ = writeln!(out, "{:<26}{:>24}", "SETTLEMENT:", cop(b.settlement_balance));
    let _ = writeln!(out, "{:<26}{:>24}", "BREAK-EVEN POINT:", cop(b.break_even_point));
    let _ = writeln!(out, "{:<26}{:>24}", "FREIGHT PRICE:", cop(record.freight_price));
    let _ = writeln!(out, "{:<26}{:>24}", "PROFIT:", cop(b.profit));
    let _ = writeln!(
        out,
        "{:<26}{:>23} %",
        "PROFIT MARGIN:",
        format_decimal(b.profit_margin_pct, 1)
    );
    let _ = writeln!(out, "{:<26}{:>24}", "COMPANY ADVANCE:", cop(b.company_advance));
    let _ = writeln!(
        out,
        "{:<26}{:>24}",
        "COMPANY SETTLEMENT:",
        cop(b.company_settlement_balance)
    );

    if let Some(ref notes) = record.notes {
        let _ = writeln!(out);
        let _ = writeln!(out, "Notes: {}", notes);
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Saved: {} (id {})",
        record.created_at.format("%Y-%m-%d %H:%M:%S"),
        record.id
    );
    let _ = writeln!(out, "{}", rule);

    out
}

/// Print one trip record in the chosen format
pub fn output_record(format: OutputFormat, record: &TripRecord) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(record)?);
    } else {
        println!("{}", report_text(record));
    }
    Ok(())
}

/// Print a trip listing, one line per record
pub fn output_trip_list(format: OutputFormat, records: &[&TripRecord]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No trips found");
        return Ok(());
    }

    println!(
        "{:<36} {:<10} {:<8} {:<28} {:>14} {:>14} {:>14}",
        "ID", "Date", "Plate", "Route", "Expense", "Freight", "Profit"
    );
    for record in records {
        println!(
            "{:<36} {:<10} {:<8} {:<28} {:>14} {:>14} {:>14}",
            record.id,
            record.created_at.format("%Y-%m-%d"),
            record.plate,
            format!("{} → {}", record.origin, record.destination),
            format_number(record.breakdown.total_expense),
            format_number(record.freight_price),
            format_number(record.breakdown.profit),
        );
    }
    println!("\n{} trips", records.len());
    Ok(())
}

/// Print the per-plate accumulation
pub fn output_summary(format: OutputFormat, totals: &[PlateTotals]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(totals)?);
        return Ok(());
    }

    if totals.is_empty() {
        println!("No trips found");
        return Ok(());
    }

    println!(
        "{:<8} {:>6} {:>12} {:>16} {:>16} {:>16} {:>10}",
        "Plate", "Trips", "Km", "Expense", "Freight", "Profit", "Margin %"
    );
    for t in totals {
        println!(
            "{:<8} {:>6} {:>12} {:>16} {:>16} {:>16} {:>10}",
            t.plate,
            t.trips,
            format_number(t.distance_km),
            format_number(t.total_expense),
            format_number(t.freight),
            format_number(t.profit),
            format_decimal(t.profit_margin_pct, 1),
        );
    }

    let fleet_expense: f64 = totals.iter().map(|t| t.total_expense).sum();
    let fleet_freight: f64 = totals.iter().map(|t| t.freight).sum();
    let fleet_profit: f64 = totals.iter().map(|t| t.profit).sum();
    println!();
    println!("Fleet expense: {}", cop(fleet_expense));
    println!("Fleet freight: {}", cop(fleet_freight));
    println!("Fleet profit:  {}", cop(fleet_profit));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(1_000.0), "1.000");
        assert_eq!(format_number(5_000_000.0), "5.000.000");
        assert_eq!(format_number(432_000.49), "432.000");
        assert_eq!(format_number(-106_000.0), "-106.000");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(0.0, 2), "0,00");
        assert_eq!(format_decimal(5_000_000.5, 2), "5.000.000,50");
        assert_eq!(format_decimal(58.9, 1), "58,9");
        assert_eq!(format_decimal(-106_000.0, 2), "-106.000,00");
    }
}

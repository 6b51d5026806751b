//! Excel export functionality

use std::path::Path;

use chrono::Utc;
use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::domain::service::fleet_summary::PlateTotals;
use crate::error::{Error, Result};
use crate::store::TripRecord;

/// Export trip records to an Excel workbook: a summary sheet plus one
/// detail sheet per trip
pub fn export_trips_to_excel(records: &[&TripRecord], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, records)?;

    for (idx, record) in records.iter().enumerate() {
        let sheet = workbook.add_worksheet();
        write_trip_sheet(sheet, idx + 1, record)?;
    }

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, records: &[&TripRecord]) -> Result<()> {
    sheet
        .set_name("Summary")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let title_format = Format::new().set_bold();
    let money_format = Format::new().set_num_format("$#,##0");
    let pct_format = Format::new().set_num_format("#,##0.0\"%\"");

    sheet
        .write_string_with_format(0, 0, "COST REPORT - FREIGHT TRANSPORT", &title_format)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string(1, 0, format!("Generated: {}", Utc::now().format("%Y-%m-%d %H:%M:%S")))
        .map_err(|e| Error::Excel(e.to_string()))?;

    let headers = [
        "Route",
        "Plate",
        "Driver",
        "Distance (km)",
        "Days",
        "Gallons",
        "Fuel",
        "Total Expense",
        "Advance",
        "Settlement",
        "Freight",
        "Profit",
        "Margin %",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(3, col as u16, *header, &title_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (row_idx, record) in records.iter().enumerate() {
        let row = (row_idx + 4) as u32;
        let b = &record.breakdown;

        sheet
            .write_string(row, 0, format!("{} → {}", record.origin, record.destination))
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 1, &record.plate)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 2, &record.driver)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 3, record.distance_km)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 4, record.days as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 5, b.fuel_gallons)
            .map_err(|e| Error::Excel(e.to_string()))?;

        let money_cols: [(u16, f64); 6] = [
            (6, b.fuel_cost),
            (7, b.total_expense),
            (8, record.cash_advance),
            (9, b.settlement_balance),
            (10, record.freight_price),
            (11, b.profit),
        ];
        for (col, value) in money_cols {
            sheet
                .write_number_with_format(row, col, value, &money_format)
                .map_err(|e| Error::Excel(e.to_string()))?;
        }
        sheet
            .write_number_with_format(row, 12, b.profit_margin_pct, &pct_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    sheet
        .set_column_width(0, 30)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(2, 28)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_trip_sheet(sheet: &mut Worksheet, index: usize, record: &TripRecord) -> Result<()> {
    sheet
        .set_name(format!("Trip {}", index))
        .map_err(|e| Error::Excel(e.to_string()))?;

    let title_format = Format::new().set_bold();
    let money_format = Format::new().set_num_format("$#,##0");
    let pct_format = Format::new().set_num_format("#,##0.0\"%\"");
    let b = &record.breakdown;

    sheet
        .write_string_with_format(
            0,
            0,
            format!("{} → {}", record.origin, record.destination),
            &title_format,
        )
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string_with_format(2, 0, "COST BREAKDOWN", &title_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let cost_lines: [(&str, f64); 17] = [
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

    let mut row = 3u32;
    for (label, amount) in cost_lines {
        sheet
            .write_string(row, 0, label)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number_with_format(row, 1, amount, &money_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
        row += 1;
    }

    row += 1;
    sheet
        .write_string_with_format(row, 0, "RESULTS", &title_format)
        .map_err(|e| Error::Excel(e.to_string()))?;
    row += 1;

    let results: [(&str, f64); 9] = [
        ("TOTAL EXPENSE", b.total_expense),
        ("LEGALIZATION", b.legalization),
        ("CASH ADVANCE", record.cash_advance),
        ("SETTLEMENT", b.settlement_balance),
        ("BREAK-EVEN POINT", b.break_even_point),
        ("FREIGHT PRICE", record.freight_price),
        ("PROFIT", b.profit),
        ("COMPANY ADVANCE", b.company_advance),
        ("COMPANY SETTLEMENT", b.company_settlement_balance),
    ];
    for (label, amount) in results {
        sheet
            .write_string_with_format(row, 0, label, &title_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number_with_format(row, 1, amount, &money_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
        row += 1;
    }
    sheet
        .write_string_with_format(row, 0, "PROFIT MARGIN (%)", &title_format)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number_with_format(row, 1, b.profit_margin_pct, &pct_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .set_column_width(0, 30)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(1, 20)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

/// Export the per-plate accumulation as a single-sheet workbook
pub fn export_totals_to_excel(totals: &[PlateTotals], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    sheet
        .set_name("Fleet Totals")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let title_format = Format::new().set_bold();
    let money_format = Format::new().set_num_format("$#,##0");

    let headers = [
        "Plate",
        "Trips",
        "Km",
        "Total Expense",
        "Legalization",
        "Advance",
        "Settlement",
        "Break-even",
        "Freight",
        "Profit",
        "Margin %",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &title_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (row_idx, t) in totals.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        sheet
            .write_string(row, 0, &t.plate)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 1, t.trips as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 2, t.distance_km)
            .map_err(|e| Error::Excel(e.to_string()))?;

        let money_cols: [(u16, f64); 7] = [
            (3, t.total_expense),
            (4, t.legalization),
            (5, t.cash_advance),
            (6, t.settlement_balance),
            (7, t.break_even_point),
            (8, t.freight),
            (9, t.profit),
        ];
        for (col, value) in money_cols {
            sheet
                .write_number_with_format(row, col, value, &money_format)
                .map_err(|e| Error::Excel(e.to_string()))?;
        }
        sheet
            .write_number(row, 10, t.profit_margin_pct)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

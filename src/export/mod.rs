//! Report export

mod excel;

pub use excel::{export_totals_to_excel, export_trips_to_excel};

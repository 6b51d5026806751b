//! Business constants for Colombian freight costing

mod tariff;

pub use tariff::TariffTable;

//! Domain services: pure calculation logic

pub mod cost_engine;
pub mod fleet_summary;

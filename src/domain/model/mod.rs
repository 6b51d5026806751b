//! Domain model type definitions

mod breakdown;
mod driver;
mod route;
mod trip;
mod vehicle;

pub use breakdown::CostBreakdown;
pub use driver::Driver;
pub use route::{Route, RouteKind};
pub use trip::{TripExpenses, TripRequest};
pub use vehicle::Vehicle;

//! Domain layer: fleet entities and the cost engine

pub mod model;
pub mod service;

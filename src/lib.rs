//! Costeo Library
//!
//! Trip-level operating cost and profitability calculation for a small
//! freight-trucking fleet (Colombia), with persisted trip records and
//! text/Excel reporting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod export;
pub mod output;
pub mod store;

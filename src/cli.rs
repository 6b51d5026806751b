//! CLI definition using clap

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser)]
#[command(name = "costeo")]
#[command(version)]
#[command(about = "Trip cost and profitability calculator for freight trucking fleets")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage fleet vehicles
    Vehicle {
        #[command(subcommand)]
        action: VehicleAction,
    },

    /// Manage the driver roster
    Driver {
        #[command(subcommand)]
        action: DriverAction,
    },

    /// Manage known routes
    Route {
        #[command(subcommand)]
        action: RouteAction,
    },

    /// Calculate costs and profitability for one trip
    Calc {
        /// Vehicle plate
        plate: String,

        /// Driver name. Defaults to the vehicle's assigned driver.
        #[arg(long, short = 'd')]
        driver: Option<String>,

        /// Route origin city
        #[arg(long)]
        origin: String,

        /// Route destination city
        #[arg(long)]
        destination: String,

        /// Trip duration in days
        #[arg(long, default_value = "1")]
        days: u32,

        /// Border crossing on this trip. Defaults to the route flag.
        #[arg(long)]
        border: Option<bool>,

        /// Paid parking was used
        #[arg(long)]
        parking: bool,

        /// The company took an advance on the freight
        #[arg(long)]
        company_advance: bool,

        /// Electronic toll pass amount (COP)
        #[arg(long, default_value = "0")]
        toll_pass: f64,

        /// Cash tolls (COP)
        #[arg(long, default_value = "0")]
        tolls: f64,

        /// Hotel expenses (COP)
        #[arg(long, default_value = "0")]
        hotel: f64,

        /// Meal expenses (COP)
        #[arg(long, default_value = "0")]
        meals: f64,

        /// Loading/unloading expenses (COP)
        #[arg(long, default_value = "0")]
        loading: f64,

        /// Other expenses (COP)
        #[arg(long, default_value = "0")]
        misc: f64,

        /// Agreed freight price (COP)
        #[arg(long)]
        freight: f64,

        /// Cash advance given to the driver (COP)
        #[arg(long, default_value = "0")]
        advance: f64,

        /// Persist the trip record
        #[arg(long)]
        save: bool,

        /// Free-text notes stored with the record
        #[arg(long, short = 'n')]
        notes: Option<String>,
    },

    /// Browse stored trip records
    Trips {
        #[command(subcommand)]
        action: TripsAction,
    },

    /// Per-plate fleet accumulation
    Summary {
        /// Only trips saved on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Only trips saved on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Export stored trips to Excel
    Export {
        /// Output Excel file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Write the per-plate accumulation workbook instead
        #[arg(long)]
        totals: bool,

        /// Only trips saved on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Only trips saved on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the diesel price (COP/gallon)
        #[arg(long)]
        set_fuel_price: Option<f64>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand)]
pub enum VehicleAction {
    /// Register a vehicle
    Add {
        /// License plate (e.g. "SOP148")
        plate: String,

        /// Fuel efficiency in km per gallon
        #[arg(long, short = 'e')]
        efficiency: f64,

        /// Category label (Sencilla, Dobletroque, Minimula, ...)
        #[arg(long, default_value = "Sencilla")]
        category: String,

        /// Name of the usually assigned driver
        #[arg(long)]
        driver: Option<String>,
    },

    /// Remove a vehicle by plate
    Remove { plate: String },

    /// List registered vehicles
    List,
}

#[derive(Subcommand)]
pub enum DriverAction {
    /// Register a driver
    Add {
        /// Full name
        name: String,

        /// Identity document number (cédula)
        #[arg(long, short = 'c')]
        document: String,
    },

    /// Remove a driver by name
    Remove { name: String },

    /// List registered drivers
    List,
}

#[derive(Subcommand)]
pub enum RouteAction {
    /// Register a route
    Add {
        /// Origin city
        origin: String,

        /// Destination city
        destination: String,

        /// Distance in km
        #[arg(long)]
        distance: f64,

        /// Route crosses the border
        #[arg(long)]
        border: bool,

        /// Regional route
        #[arg(long)]
        regional: bool,

        /// Special-zone route (Aguachica corridor)
        #[arg(long)]
        special_zone: bool,

        /// Urban route label (display only)
        #[arg(long)]
        urban: bool,

        /// Round trip: doubles the distance and tags the destination
        #[arg(long)]
        round_trip: bool,
    },

    /// Remove a route by id
    Remove { id: String },

    /// List registered routes
    List,
}

#[derive(Subcommand)]
pub enum TripsAction {
    /// List stored trips, newest first
    List {
        /// Filter by exact plate
        #[arg(long)]
        plate: Option<String>,

        /// Filter by driver name (substring)
        #[arg(long)]
        driver: Option<String>,

        /// Filter by origin (substring)
        #[arg(long)]
        origin: Option<String>,

        /// Filter by destination (substring)
        #[arg(long)]
        destination: Option<String>,

        /// Only trips saved on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Only trips saved on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Limit number of entries shown
        #[arg(long, short = 'n', default_value = "20")]
        limit: usize,
    },

    /// Show a stored trip in full
    Show { id: String },

    /// Delete a stored trip by id
    Delete { id: String },
}

//! Command handlers

use std::path::PathBuf;

use crate::cli::{
    Cli, Commands, DriverAction, OutputFormat, RouteAction, TripsAction, VehicleAction,
};
use crate::config::Config;
use crate::domain::model::{Driver, Route, RouteKind, TripExpenses, TripRequest, Vehicle};
use crate::domain::service::{cost_engine, fleet_summary};
use crate::error::{Error, Result};
use crate::export::{export_totals_to_excel, export_trips_to_excel};
use crate::output::{output_record, output_summary, output_trip_list};
use crate::store::{DriverStore, RouteStore, TripFilter, TripRecord, TripStore, VehicleStore};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Vehicle { ref action } => cmd_vehicle(&config, action),

        Commands::Driver { ref action } => cmd_driver(&config, action),

        Commands::Route { ref action } => cmd_route(&config, action),

        Commands::Calc {
            ref plate,
            ref driver,
            ref origin,
            ref destination,
            days,
            border,
            parking,
            company_advance,
            toll_pass,
            tolls,
            hotel,
            meals,
            loading,
            misc,
            freight,
            advance,
            save,
            ref notes,
        } => {
            let expenses = TripExpenses {
                toll_pass,
                tolls,
                hotel,
                meals,
                loading_unloading: loading,
                misc,
            };
            cmd_calc(
                &cli,
                &config,
                format,
                CalcArgs {
                    plate: plate.clone(),
                    driver: driver.clone(),
                    origin: origin.clone(),
                    destination: destination.clone(),
                    days,
                    border,
                    parking,
                    company_advance,
                    expenses,
                    freight,
                    advance,
                    save,
                    notes: notes.clone(),
                },
            )
        }

        Commands::Trips { ref action } => cmd_trips(&config, format, action),

        Commands::Summary { from, to } => cmd_summary(&config, format, from, to),

        Commands::Export {
            ref output,
            totals,
            from,
            to,
        } => cmd_export(&cli, &config, output.clone(), totals, from, to),

        Commands::Config {
            show,
            set_fuel_price,
            set_output,
            reset,
        } => cmd_config(show, set_fuel_price, set_output, reset),
    }
}

fn cmd_vehicle(config: &Config, action: &VehicleAction) -> Result<()> {
    let mut store = VehicleStore::open(config.data_dir()?)?;

    match action {
        VehicleAction::Add {
            plate,
            efficiency,
            category,
            driver,
        } => {
            let mut vehicle = Vehicle::new(
                plate.trim().to_uppercase(),
                *efficiency,
                category.clone(),
            );
            if let Some(driver) = driver {
                vehicle = vehicle.with_assigned_driver(driver.clone());
            }
            let plate = vehicle.plate.clone();
            store.add(vehicle)?;
            println!("Vehicle {} registered", plate);
        }

        VehicleAction::Remove { plate } => {
            if store.remove(plate)? {
                println!("Vehicle {} removed", plate);
            } else {
                return Err(Error::NotFound(format!("vehicle {}", plate)));
            }
        }

        VehicleAction::List => {
            if store.count() == 0 {
                println!("No vehicles registered");
            }
            for v in store.all() {
                let driver = v.assigned_driver.as_deref().unwrap_or("-");
                println!(
                    "{:<8} {:<12} {:>6} km/gal  driver: {}",
                    v.plate, v.category, v.efficiency_km_per_gallon, driver
                );
            }
        }
    }

    Ok(())
}

fn cmd_driver(config: &Config, action: &DriverAction) -> Result<()> {
    let mut store = DriverStore::open(config.data_dir()?)?;

    match action {
        DriverAction::Add { name, document } => {
            store.add(Driver::new(name.clone(), document.clone()))?;
            println!("Driver {} registered", name);
        }

        DriverAction::Remove { name } => {
            if store.remove(name)? {
                println!("Driver {} removed", name);
            } else {
                return Err(Error::NotFound(format!("driver {}", name)));
            }
        }

        DriverAction::List => {
            if store.count() == 0 {
                println!("No drivers registered");
            }
            for d in store.all() {
                println!("{:<40} cédula: {}", d.name, d.document);
            }
        }
    }

    Ok(())
}

fn cmd_route(config: &Config, action: &RouteAction) -> Result<()> {
    let mut store = RouteStore::open(config.data_dir()?)?;

    match action {
        RouteAction::Add {
            origin,
            destination,
            distance,
            border,
            regional,
            special_zone,
            urban,
            round_trip,
        } => {
            let mut route = Route::new(origin.clone(), destination.clone(), *distance)
                .with_flags(*border, *regional, *special_zone);
            route.urban = *urban;
            if *round_trip {
                route = route.round_trip();
            }
            let label = route.label();
            let id = store.add(route)?;
            println!("Route {} registered (id {})", label, id);
        }

        RouteAction::Remove { id } => {
            if store.remove(id)? {
                println!("Route removed");
            } else {
                return Err(Error::NotFound(format!("route {}", id)));
            }
        }

        RouteAction::List => {
            if store.count() == 0 {
                println!("No routes registered");
            }
            for r in store.all() {
                let mut tags = Vec::new();
                if r.border {
                    tags.push("BORDER");
                }
                if r.regional {
                    tags.push("REGIONAL");
                }
                if r.special_zone {
                    tags.push("SPECIAL-ZONE");
                }
                if r.urban {
                    tags.push("URBAN");
                }
                println!(
                    "{:<36} {:<36} {:>8} km  {}",
                    r.id,
                    r.label(),
                    r.distance_km,
                    tags.join(" ")
                );
            }
        }
    }

    Ok(())
}

struct CalcArgs {
    plate: String,
    driver: Option<String>,
    origin: String,
    destination: String,
    days: u32,
    border: Option<bool>,
    parking: bool,
    company_advance: bool,
    expenses: TripExpenses,
    freight: f64,
    advance: f64,
    save: bool,
    notes: Option<String>,
}

fn cmd_calc(cli: &Cli, config: &Config, format: OutputFormat, args: CalcArgs) -> Result<()> {
    let data_dir = config.data_dir()?;
    let vehicles = VehicleStore::open(data_dir.clone())?;
    let drivers = DriverStore::open(data_dir.clone())?;
    let routes = RouteStore::open(data_dir.clone())?;

    let vehicle = vehicles
        .get(&args.plate.trim().to_uppercase())
        .cloned()
        .ok_or_else(|| Error::NotFound(format!("vehicle {}", args.plate)))?;

    // Explicit driver, or the one usually assigned to the truck
    let driver_name = match args.driver {
        Some(ref name) => name.clone(),
        None => vehicle.assigned_driver.clone().ok_or_else(|| {
            Error::Validation(format!(
                "vehicle {} has no assigned driver; pass --driver",
                vehicle.plate
            ))
        })?,
    };
    let driver = drivers
        .get(&driver_name)
        .cloned()
        .ok_or_else(|| Error::NotFound(format!("driver {}", driver_name)))?;

    let route = routes
        .find_by_endpoints(&args.origin, &args.destination)
        .cloned()
        .ok_or_else(|| {
            Error::NotFound(format!("route {} → {}", args.origin, args.destination))
        })?;

    // Border is a per-trip decision; the route flag is only the default
    let border = args.border.unwrap_or(route.border);

    let trip = TripRequest {
        vehicle,
        driver,
        route,
        days: args.days,
        border,
        parking_used: args.parking,
        company_advance: args.company_advance,
        expenses: args.expenses,
        freight_price: args.freight,
        cash_advance: args.advance,
    };

    if cli.verbose {
        let kind = RouteKind::classify(&trip.route, trip.border);
        eprintln!(
            "Calculating {} for {} ({} tier, {} days)",
            trip.route.label(),
            trip.vehicle.plate,
            kind.label(),
            trip.days
        );
    }

    let tariff = config.tariff();
    let breakdown = cost_engine::calculate(&trip, &tariff)?;
    let record = TripRecord::from_request(&trip, breakdown, args.notes);

    if args.save {
        let mut trips = TripStore::open(data_dir)?;
        let id = trips.add(record.clone())?;
        if cli.verbose {
            eprintln!("Trip saved with id {}", id);
        }
    }

    output_record(format, &record)
}

fn cmd_trips(config: &Config, format: OutputFormat, action: &TripsAction) -> Result<()> {
    let mut store = TripStore::open(config.data_dir()?)?;

    match action {
        TripsAction::List {
            plate,
            driver,
            origin,
            destination,
            from,
            to,
            limit,
        } => {
            let filter = TripFilter {
                plate: plate.clone(),
                driver: driver.clone(),
                origin: origin.clone(),
                destination: destination.clone(),
                from: *from,
                to: *to,
            };
            let records = store.find(&filter);
            let shown: Vec<_> = records.into_iter().take(*limit).collect();
            output_trip_list(format, &shown)?;
        }

        TripsAction::Show { id } => {
            let record = store
                .get(id)
                .ok_or_else(|| Error::NotFound(format!("trip {}", id)))?;
            output_record(format, record)?;
        }

        TripsAction::Delete { id } => {
            if store.remove(id)? {
                println!("Trip {} deleted", id);
            } else {
                return Err(Error::NotFound(format!("trip {}", id)));
            }
        }
    }

    Ok(())
}

fn cmd_summary(
    config: &Config,
    format: OutputFormat,
    from: Option<chrono::NaiveDate>,
    to: Option<chrono::NaiveDate>,
) -> Result<()> {
    let store = TripStore::open(config.data_dir()?)?;
    let filter = TripFilter {
        from,
        to,
        ..TripFilter::default()
    };
    let records = store.find(&filter);
    let totals = fleet_summary::accumulate_by_plate(&records, &config.tariff());
    output_summary(format, &totals)
}

fn cmd_export(
    cli: &Cli,
    config: &Config,
    output: Option<PathBuf>,
    totals: bool,
    from: Option<chrono::NaiveDate>,
    to: Option<chrono::NaiveDate>,
) -> Result<()> {
    let store = TripStore::open(config.data_dir()?)?;
    let filter = TripFilter {
        from,
        to,
        ..TripFilter::default()
    };
    let records = store.find(&filter);

    if records.is_empty() {
        return Err(Error::NotFound("no trips to export".to_string()));
    }

    let default_name = if totals {
        format!("fleet_totals_{}.xlsx", chrono::Utc::now().format("%Y-%m-%d"))
    } else {
        format!("trip_report_{}.xlsx", chrono::Utc::now().format("%Y-%m-%d"))
    };
    let output_path = output.unwrap_or_else(|| PathBuf::from(default_name));

    if totals {
        let plate_totals = fleet_summary::accumulate_by_plate(&records, &config.tariff());
        export_totals_to_excel(&plate_totals, &output_path)?;
    } else {
        export_trips_to_excel(&records, &output_path)?;
    }

    if cli.verbose {
        eprintln!("Exported {} trips", records.len());
    }
    println!("Report written to {}", output_path.display());
    Ok(())
}

fn cmd_config(
    show: bool,
    set_fuel_price: Option<f64>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut changed = false;

    if let Some(price) = set_fuel_price {
        if price <= 0.0 {
            return Err(Error::Validation("fuel price must be positive".to_string()));
        }
        config.fuel_price = price;
        changed = true;
    }
    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}

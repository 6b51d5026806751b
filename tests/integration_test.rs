//! Integration tests for costeo stores and reporting

use tempfile::tempdir;

use costeo::constants::TariffTable;
use costeo::domain::model::{Driver, Route, TripExpenses, TripRequest, Vehicle};
use costeo::domain::service::cost_engine;
use costeo::store::{DriverStore, RouteStore, TripFilter, TripRecord, TripStore, VehicleStore};

fn sample_trip() -> TripRequest {
    TripRequest {
        vehicle: Vehicle::new("NOX459".to_string(), 2.5, "Sencilla".to_string()),
        driver: Driver::new("HABID CAMACHO".to_string(), "123456789".to_string()),
        route: Route::new("Bogotá".to_string(), "Tunja".to_string(), 100.0),
        days: 1,
        border: false,
        parking_used: false,
        company_advance: false,
        expenses: TripExpenses {
            tolls: 50_000.0,
            ..TripExpenses::default()
        },
        freight_price: 2_000_000.0,
        cash_advance: 500_000.0,
    }
}

fn sample_record() -> TripRecord {
    let trip = sample_trip();
    let breakdown = cost_engine::calculate(&trip, &TariffTable::default()).unwrap();
    TripRecord::from_request(&trip, breakdown, Some("cliente puntual".to_string()))
}

/// Test vehicle store CRUD operations
#[test]
fn test_vehicle_store() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let mut store = VehicleStore::open(temp_dir.path().to_path_buf())
        .expect("Failed to open vehicle store");

    // Initially empty
    assert_eq!(store.count(), 0);
    assert!(store.all().is_empty());

    // Add a vehicle
    let vehicle = Vehicle::new("SOP148".to_string(), 2.8, "Dobletroque".to_string())
        .with_assigned_driver("RAMON TAFUR HERNANDEZ".to_string());
    store.add(vehicle).expect("Failed to add vehicle");
    assert_eq!(store.count(), 1);

    let retrieved = store.get("SOP148").expect("Vehicle not found");
    assert_eq!(retrieved.efficiency_km_per_gallon, 2.8);
    assert_eq!(
        retrieved.assigned_driver.as_deref(),
        Some("RAMON TAFUR HERNANDEZ")
    );

    // Duplicate plate is rejected
    let dup = Vehicle::new("SOP148".to_string(), 3.0, "Sencilla".to_string());
    assert!(store.add(dup).is_err());
    assert_eq!(store.count(), 1);

    // Remove
    assert!(store.remove("SOP148").expect("Failed to remove"));
    assert_eq!(store.count(), 0);
    assert!(!store.remove("SOP148").expect("Second remove should be a no-op"));
}

/// Test driver store uniqueness and sorting
#[test]
fn test_driver_store() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let mut store =
        DriverStore::open(temp_dir.path().to_path_buf()).expect("Failed to open driver store");

    store
        .add(Driver::new("PEDRO VILLAMIL".to_string(), "111".to_string()))
        .expect("Failed to add driver");
    store
        .add(Driver::new("CARLOS TAFUR".to_string(), "222".to_string()))
        .expect("Failed to add driver");

    let dup = Driver::new("PEDRO VILLAMIL".to_string(), "333".to_string());
    assert!(store.add(dup).is_err());

    let all = store.all();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "CARLOS TAFUR");
    assert_eq!(all[1].name, "PEDRO VILLAMIL");
}

/// Test route store lookups
#[test]
fn test_route_store() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let mut store =
        RouteStore::open(temp_dir.path().to_path_buf()).expect("Failed to open route store");

    let route = Route::new("Bogotá".to_string(), "Cúcuta".to_string(), 550.0)
        .with_flags(true, false, false);
    let id = store.add(route).expect("Failed to add route");

    let found = store
        .find_by_endpoints("bogotá", "cúcuta")
        .expect("Route not found by endpoints");
    assert_eq!(found.id, id);
    assert!(found.border);

    assert!(store.remove(&id).expect("Failed to remove route"));
    assert!(store.find_by_endpoints("Bogotá", "Cúcuta").is_none());
}

/// Persisting a breakdown and re-reading it must reproduce identical
/// field values
#[test]
fn test_trip_store_round_trip() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let record = sample_record();
    let id = record.id.clone();
    let breakdown = record.breakdown.clone();

    {
        let mut store =
            TripStore::open(temp_dir.path().to_path_buf()).expect("Failed to open trip store");
        store.add(record).expect("Failed to add trip");
    }

    // Reopen from disk
    let store =
        TripStore::open(temp_dir.path().to_path_buf()).expect("Failed to reopen trip store");
    assert_eq!(store.count(), 1);

    let loaded = store.get(&id).expect("Trip not found after reopen");
    assert_eq!(loaded.breakdown, breakdown);
    assert_eq!(loaded.notes.as_deref(), Some("cliente puntual"));
}

/// Test trip deletion by id
#[test]
fn test_trip_store_delete() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let mut store =
        TripStore::open(temp_dir.path().to_path_buf()).expect("Failed to open trip store");

    let record = sample_record();
    let id = store.add(record).expect("Failed to add trip");
    assert_eq!(store.count(), 1);

    assert!(store.remove(&id).expect("Failed to delete trip"));
    assert_eq!(store.count(), 0);
    assert!(store.get(&id).is_none());
}

/// Test trip search filters
#[test]
fn test_trip_store_filters() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let mut store =
        TripStore::open(temp_dir.path().to_path_buf()).expect("Failed to open trip store");

    let tariff = TariffTable::default();

    let mut trip_a = sample_trip();
    trip_a.vehicle.plate = "NOX459".to_string();
    let breakdown = cost_engine::calculate(&trip_a, &tariff).unwrap();
    store
        .add(TripRecord::from_request(&trip_a, breakdown, None))
        .expect("Failed to add trip");

    let mut trip_b = sample_trip();
    trip_b.vehicle.plate = "SOP148".to_string();
    trip_b.route = Route::new("Medellín".to_string(), "Barranquilla".to_string(), 700.0);
    let breakdown = cost_engine::calculate(&trip_b, &tariff).unwrap();
    store
        .add(TripRecord::from_request(&trip_b, breakdown, None))
        .expect("Failed to add trip");

    // Exact plate match
    let filter = TripFilter {
        plate: Some("NOX459".to_string()),
        ..TripFilter::default()
    };
    assert_eq!(store.find(&filter).len(), 1);

    // Case-insensitive substring on origin
    let filter = TripFilter {
        origin: Some("medel".to_string()),
        ..TripFilter::default()
    };
    let found = store.find(&filter);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].plate, "SOP148");

    // Empty filter matches everything
    assert_eq!(store.find(&TripFilter::default()).len(), 2);
}

/// Test Excel export writes a workbook
#[test]
fn test_excel_export() {
    use costeo::export::export_trips_to_excel;

    let temp_dir = tempdir().expect("Failed to create temp dir");
    let record = sample_record();
    let records = vec![&record];

    let output_path = temp_dir.path().join("report.xlsx");
    export_trips_to_excel(&records, &output_path).expect("Excel export failed");
    assert!(output_path.exists());

    let metadata = std::fs::metadata(&output_path).expect("Failed to stat workbook");
    assert!(metadata.len() > 0);
}

/// Text report contains the headline figures
#[test]
fn test_report_text() {
    use costeo::output::report_text;

    let record = sample_record();
    let report = report_text(&record);

    assert!(report.contains("COST REPORT"));
    assert!(report.contains("Bogotá → Tunja"));
    assert!(report.contains("NOX459"));
    // Total expense for the reference trip, Colombian formatting
    assert!(report.contains("$821.939 COP"));
    // Gallons with decimals
    assert!(report.contains("40,00 gal"));
    assert!(report.contains("cliente puntual"));
}

//! Vehicle store for the fleet

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use crate::domain::model::Vehicle;
use crate::error::{Error, Result};

/// Persistent store for fleet vehicles, keyed by plate
pub struct VehicleStore {
    store_path: PathBuf,
    vehicles: HashMap<String, Vehicle>,
}

impl VehicleStore {
    /// Create or load a vehicle store
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("vehicles.json");

        let vehicles = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).unwrap_or_default()
        } else {
            HashMap::new()
        };

        Ok(Self { store_path, vehicles })
    }

    fn save(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.vehicles)?;
        Ok(())
    }

    /// Add a new vehicle. The plate must be unused.
    pub fn add(&mut self, vehicle: Vehicle) -> Result<()> {
        if self.vehicles.contains_key(&vehicle.plate) {
            return Err(Error::Duplicate(format!("vehicle {}", vehicle.plate)));
        }
        self.vehicles.insert(vehicle.plate.clone(), vehicle);
        self.save()
    }

    /// Remove a vehicle by plate
    pub fn remove(&mut self, plate: &str) -> Result<bool> {
        let removed = self.vehicles.remove(plate).is_some();
        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    /// Get a vehicle by plate
    pub fn get(&self, plate: &str) -> Option<&Vehicle> {
        self.vehicles.get(plate)
    }

    /// All vehicles sorted by plate
    pub fn all(&self) -> Vec<&Vehicle> {
        let mut vehicles: Vec<_> = self.vehicles.values().collect();
        vehicles.sort_by(|a, b| a.plate.cmp(&b.plate));
        vehicles
    }

    pub fn count(&self) -> usize {
        self.vehicles.len()
    }
}

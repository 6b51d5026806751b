//! Driver store for the roster

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use crate::domain::model::Driver;
use crate::error::{Error, Result};

/// Persistent store for drivers, keyed by name
pub struct DriverStore {
    store_path: PathBuf,
    drivers: HashMap<String, Driver>,
}

impl DriverStore {
    /// Create or load a driver store
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("drivers.json");

        let drivers = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).unwrap_or_default()
        } else {
            HashMap::new()
        };

        Ok(Self { store_path, drivers })
    }

    fn save(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.drivers)?;
        Ok(())
    }

    /// Add a new driver. The name must be unused.
    pub fn add(&mut self, driver: Driver) -> Result<()> {
        if self.drivers.contains_key(&driver.name) {
            return Err(Error::Duplicate(format!("driver {}", driver.name)));
        }
        self.drivers.insert(driver.name.clone(), driver);
        self.save()
    }

    /// Remove a driver by name
    pub fn remove(&mut self, name: &str) -> Result<bool> {
        let removed = self.drivers.remove(name).is_some();
        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    /// Get a driver by name
    pub fn get(&self, name: &str) -> Option<&Driver> {
        self.drivers.get(name)
    }

    /// All drivers sorted by name
    pub fn all(&self) -> Vec<&Driver> {
        let mut drivers: Vec<_> = self.drivers.values().collect();
        drivers.sort_by(|a, b| a.name.cmp(&b.name));
        drivers
    }

    pub fn count(&self) -> usize {
        self.drivers.len()
    }
}

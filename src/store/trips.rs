//! Trip record store: the durable trace of completed trips

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::Result;
use crate::store::TripRecord;

/// Search criteria for stored trips. Empty filter matches everything.
///
/// Name and city filters are case-insensitive substring matches; the
/// plate filter is exact.
#[derive(Debug, Clone, Default)]
pub struct TripFilter {
    pub plate: Option<String>,
    pub driver: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl TripFilter {
    pub fn matches(&self, record: &TripRecord) -> bool {
        if let Some(ref plate) = self.plate {
            if record.plate != *plate {
                return false;
            }
        }
        if !contains_ci(&record.driver, &self.driver) {
            return false;
        }
        if !contains_ci(&record.origin, &self.origin) {
            return false;
        }
        if !contains_ci(&record.destination, &self.destination) {
            return false;
        }
        let date = record.created_at.date_naive();
        if let Some(from) = self.from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if date > to {
                return false;
            }
        }
        true
    }
}

fn contains_ci(haystack: &str, needle: &Option<String>) -> bool {
    match needle {
        Some(n) => haystack.to_lowercase().contains(&n.to_lowercase()),
        None => true,
    }
}

/// Persistent store for trip records, keyed by id
pub struct TripStore {
    store_path: PathBuf,
    records: HashMap<String, TripRecord>,
}

impl TripStore {
    /// Create or load a trip store
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("trips.json");

        let records = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).unwrap_or_default()
        } else {
            HashMap::new()
        };

        Ok(Self { store_path, records })
    }

    fn save(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.records)?;
        Ok(())
    }

    /// Add a trip record, returning its id. Each save is an independent
    /// insert; records are never updated in place.
    pub fn add(&mut self, record: TripRecord) -> Result<String> {
        let id = record.id.clone();
        self.records.insert(id.clone(), record);
        self.save()?;
        Ok(id)
    }

    /// Remove a record by id
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let removed = self.records.remove(id).is_some();
        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    /// Get a record by id
    pub fn get(&self, id: &str) -> Option<&TripRecord> {
        self.records.get(id)
    }

    /// All records sorted by creation time, newest first
    pub fn all(&self) -> Vec<&TripRecord> {
        let mut records: Vec<_> = self.records.values().collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records
    }

    /// Records matching a filter, newest first
    pub fn find(&self, filter: &TripFilter) -> Vec<&TripRecord> {
        self.all()
            .into_iter()
            .filter(|r| filter.matches(r))
            .collect()
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }
}

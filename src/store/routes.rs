//! Route store

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use crate::domain::model::Route;
use crate::error::Result;

/// Persistent store for known routes, keyed by generated id.
///
/// Unlike plates and driver names, origin/destination pairs are not
/// unique (one-way and round-trip variants coexist), so routes carry
/// their own ids.
pub struct RouteStore {
    store_path: PathBuf,
    routes: HashMap<String, Route>,
}

impl RouteStore {
    /// Create or load a route store
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("routes.json");

        let routes = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).unwrap_or_default()
        } else {
            HashMap::new()
        };

        Ok(Self { store_path, routes })
    }

    fn save(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.routes)?;
        Ok(())
    }

    /// Add a route, returning its id
    pub fn add(&mut self, route: Route) -> Result<String> {
        let id = route.id.clone();
        self.routes.insert(id.clone(), route);
        self.save()?;
        Ok(id)
    }

    /// Remove a route by id
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let removed = self.routes.remove(id).is_some();
        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    /// Get a route by id
    pub fn get(&self, id: &str) -> Option<&Route> {
        self.routes.get(id)
    }

    /// Find the first route matching origin and destination
    /// (case-insensitive)
    pub fn find_by_endpoints(&self, origin: &str, destination: &str) -> Option<&Route> {
        self.all().into_iter().find(|r| {
            r.origin.eq_ignore_ascii_case(origin)
                && r.destination.eq_ignore_ascii_case(destination)
        })
    }

    /// All routes sorted by origin then destination
    pub fn all(&self) -> Vec<&Route> {
        let mut routes: Vec<_> = self.routes.values().collect();
        routes.sort_by(|a, b| {
            a.origin
                .cmp(&b.origin)
                .then_with(|| a.destination.cmp(&b.destination))
        });
        routes
    }

    pub fn count(&self) -> usize {
        self.routes.len()
    }
}

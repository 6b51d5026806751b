//! Route type definitions and trip-kind classification

use serde::{Deserialize, Serialize};

/// A known route between two cities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Unique identifier
    pub id: String,
    /// Origin city
    pub origin: String,
    /// Destination city
    pub destination: String,
    /// One-way (or doubled round-trip) distance in km
    pub distance_km: f64,
    /// Route normally crosses the border
    pub border: bool,
    /// Regional route
    pub regional: bool,
    /// Special-zone route (Aguachica corridor)
    pub special_zone: bool,
    /// Urban label. Display only; never enters any cost formula.
    #[serde(default)]
    pub urban: bool,
}

impl Route {
    pub fn new(origin: String, destination: String, distance_km: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            origin,
            destination,
            distance_km,
            border: false,
            regional: false,
            special_zone: false,
            urban: false,
        }
    }

    pub fn with_flags(mut self, border: bool, regional: bool, special_zone: bool) -> Self {
        self.border = border;
        self.regional = regional;
        self.special_zone = special_zone;
        self
    }

    /// Double the distance and tag the destination for a round trip
    pub fn round_trip(mut self) -> Self {
        self.distance_km *= 2.0;
        self.destination = format!("{} (ida y vuelta)", self.destination);
        self
    }

    /// Short display label, e.g. "Bogotá → Cúcuta"
    pub fn label(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }
}

/// Which commission tier a trip falls under.
///
/// Resolved once per calculation. Exactly one kind applies; precedence
/// is special-zone over regional over border over standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteKind {
    SpecialZone,
    Regional,
    Border,
    Standard,
}

impl RouteKind {
    /// Classify a trip from its route flags and the per-trip border flag.
    ///
    /// The border flag is a trip-level decision (a normally inland route
    /// can cross the border on a given trip), so it is taken from the
    /// trip rather than the route.
    pub fn classify(route: &Route, trip_border: bool) -> Self {
        if route.special_zone {
            RouteKind::SpecialZone
        } else if route.regional {
            RouteKind::Regional
        } else if trip_border {
            RouteKind::Border
        } else {
            RouteKind::Standard
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RouteKind::SpecialZone => "special-zone",
            RouteKind::Regional => "regional",
            RouteKind::Border => "border",
            RouteKind::Standard => "standard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(border: bool, regional: bool, special_zone: bool) -> Route {
        Route::new("Bogotá".to_string(), "Cúcuta".to_string(), 550.0)
            .with_flags(border, regional, special_zone)
    }

    #[test]
    fn test_special_zone_wins_over_everything() {
        let r = route(true, true, true);
        assert_eq!(RouteKind::classify(&r, true), RouteKind::SpecialZone);
    }

    #[test]
    fn test_regional_wins_over_border() {
        let r = route(true, true, false);
        assert_eq!(RouteKind::classify(&r, true), RouteKind::Regional);
    }

    #[test]
    fn test_border_comes_from_trip_flag() {
        let r = route(false, false, false);
        assert_eq!(RouteKind::classify(&r, true), RouteKind::Border);
        assert_eq!(RouteKind::classify(&r, false), RouteKind::Standard);
    }

    #[test]
    fn test_urban_has_no_effect_on_kind() {
        let mut r = route(false, false, false);
        r.urban = true;
        assert_eq!(RouteKind::classify(&r, false), RouteKind::Standard);
    }

    #[test]
    fn test_round_trip_doubles_distance() {
        let r = route(false, false, false).round_trip();
        assert_eq!(r.distance_km, 1100.0);
        assert!(r.destination.ends_with("(ida y vuelta)"));
    }
}

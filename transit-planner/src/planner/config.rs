//! Planner configuration.

/// Configuration parameters for route planning.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Average taxi speed (km per minute).
    pub taxi_speed_km_per_min: f64,

    /// Average walking speed (km per minute).
    pub walk_speed_km_per_min: f64,
}

impl PlannerConfig {
    /// Create a new configuration with the given speeds.
    pub fn new(taxi_speed_km_per_min: f64, walk_speed_km_per_min: f64) -> Self {
        Self {
            taxi_speed_km_per_min,
            walk_speed_km_per_min,
        }
    }

    /// Minutes needed to drive `distance_km` by taxi.
    pub fn taxi_minutes(&self, distance_km: f64) -> f64 {
        distance_km / self.taxi_speed_km_per_min
    }

    /// Minutes needed to walk `distance_km`.
    pub fn walk_minutes(&self, distance_km: f64) -> f64 {
        distance_km / self.walk_speed_km_per_min
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            taxi_speed_km_per_min: 0.67, // ~40 km/h
            walk_speed_km_per_min: 0.083, // ~5 km/h
        }
    }
}

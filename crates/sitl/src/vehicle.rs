//! Simulated vehicle state source
//!
//! Stands in for the flight controller's navigation output: a position that
//! drifts at a constant rate and a fixed wind estimate.

use pico_mission_core::{Blackboard, GeoPoint};

/// Meters per degree of latitude (spherical approximation)
const METERS_PER_DEG: f64 = 111_320.0;

/// Point-mass vehicle with constant ground velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimVehicle {
    /// Current position
    pub position: GeoPoint,
    /// Wind direction estimate (degrees, direction the wind blows from)
    pub wind_dir_deg: f32,
    /// Ground velocity north (m/s)
    pub north_mps: f64,
    /// Ground velocity east (m/s)
    pub east_mps: f64,
}

impl SimVehicle {
    /// Stationary vehicle at `position`
    pub fn new(position: GeoPoint, wind_dir_deg: f32) -> Self {
        Self {
            position,
            wind_dir_deg,
            north_mps: 0.0,
            east_mps: 0.0,
        }
    }

    /// Set the ground velocity
    pub fn with_velocity(mut self, north_mps: f64, east_mps: f64) -> Self {
        self.north_mps = north_mps;
        self.east_mps = east_mps;
        self
    }

    /// Advance the position by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        let dt = f64::from(dt);
        let lat_rad = self.position.lat_deg.to_radians();

        self.position.lat_deg += self.north_mps * dt / METERS_PER_DEG;
        // Longitude degrees shrink with latitude; hold still at the poles
        let cos_lat = lat_rad.cos();
        if cos_lat.abs() > f64::EPSILON {
            self.position.lon_deg += self.east_mps * dt / (METERS_PER_DEG * cos_lat);
        }
    }

    /// Write position and wind into the shared state
    pub fn publish(&self, board: &mut Blackboard) {
        board.position = self.position;
        board.wind_dir_deg = self.wind_dir_deg;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stationary_vehicle_holds_position() {
        let mut vehicle = SimVehicle::new(GeoPoint::new(-93.15, 45.22), 270.0);
        vehicle.step(1.0);
        assert_eq!(vehicle.position, GeoPoint::new(-93.15, 45.22));
    }

    #[test]
    fn test_drift_north() {
        let mut vehicle = SimVehicle::new(GeoPoint::new(0.0, 0.0), 0.0).with_velocity(10.0, 0.0);
        for _ in 0..50 {
            vehicle.step(0.02);
        }
        let expected = 10.0 / METERS_PER_DEG;
        assert!((vehicle.position.lat_deg - expected).abs() < 1e-9);
        assert_eq!(vehicle.position.lon_deg, 0.0);
    }

    #[test]
    fn test_drift_east_scales_with_latitude() {
        let mut vehicle = SimVehicle::new(GeoPoint::new(0.0, 60.0), 0.0).with_velocity(0.0, 10.0);
        vehicle.step(1.0);
        // cos(60 deg) = 0.5, so twice the equatorial rate
        let expected = 2.0 * 10.0 / METERS_PER_DEG;
        assert!((vehicle.position.lon_deg - expected).abs() < 1e-9);
    }

    #[test]
    fn test_publish() {
        let vehicle = SimVehicle::new(GeoPoint::new(-93.15, 45.22), 290.0);
        let mut board = Blackboard::new();
        vehicle.publish(&mut board);
        assert_eq!(board.position, vehicle.position);
        assert_eq!(board.wind_dir_deg, 290.0);
    }
}

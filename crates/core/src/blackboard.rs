//! In-memory shared state
//!
//! [`Blackboard`] is a plain-data [`StateStore`] implementation. Hosts that
//! keep their own property tree can mirror it in and out around each tick;
//! tests use it directly.

use alloc::string::String;

use crate::traits::{CircleDirection, GeoPoint, StateStore};

/// Orbit parameters published for circling tasks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CircleParams {
    /// Orbit center
    pub target: GeoPoint,
    /// Orbit radius (meters), if overridden
    pub radius_m: Option<f32>,
    /// Orbit direction, if overridden
    pub direction: Option<CircleDirection>,
    /// Altitude above ground to leave a descending orbit (feet)
    pub exit_agl_ft: Option<f32>,
    /// Heading at which to leave a descending orbit (degrees)
    pub exit_heading_deg: Option<f32>,
}

/// Shared vehicle state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Blackboard {
    /// Vehicle position
    pub position: GeoPoint,
    /// Wind direction estimate (degrees)
    pub wind_dir_deg: f32,
    /// Incoming command slot
    pub command_request: String,
    /// Result of the most recent command
    pub command_result: String,
    /// Name of the task at the front of the sequential stack
    pub current_task: String,
    /// Circling task parameters
    pub circle: CircleParams,
    /// Landing final approach heading (degrees)
    pub landing_heading_deg: Option<f32>,
    /// Preflight hold duration (seconds)
    pub preflight_duration_sec: Option<f32>,
}

impl Blackboard {
    /// Create an empty blackboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a command in the request slot, replacing any pending one
    pub fn submit_command(&mut self, command: &str) {
        self.command_request.clear();
        self.command_request.push_str(command);
    }
}

impl StateStore for Blackboard {
    fn position(&self) -> GeoPoint {
        self.position
    }

    fn wind_direction_deg(&self) -> f32 {
        self.wind_dir_deg
    }

    fn command_request(&self) -> &str {
        &self.command_request
    }

    fn clear_command_request(&mut self) {
        self.command_request.clear();
    }

    fn set_command_result(&mut self, result: &str) {
        self.command_result.clear();
        self.command_result.push_str(result);
    }

    fn set_current_task(&mut self, name: &str) {
        if self.current_task != name {
            self.current_task.clear();
            self.current_task.push_str(name);
        }
    }

    fn set_circle_target(&mut self, target: GeoPoint) {
        self.circle.target = target;
    }

    fn set_circle_shape(&mut self, radius_m: f32, direction: CircleDirection) {
        self.circle.radius_m = Some(radius_m);
        self.circle.direction = Some(direction);
    }

    fn set_circle_exit(&mut self, exit_agl_ft: f32, exit_heading_deg: f32) {
        self.circle.exit_agl_ft = Some(exit_agl_ft);
        self.circle.exit_heading_deg = Some(exit_heading_deg);
    }

    fn set_landing_heading(&mut self, heading_deg: f32) {
        self.landing_heading_deg = Some(heading_deg);
    }

    fn set_preflight_duration(&mut self, duration_sec: f32) {
        self.preflight_duration_sec = Some(duration_sec);
    }

    fn preflight_duration(&self) -> Option<f32> {
        self.preflight_duration_sec
    }
}

//! Shared state store abstraction
//!
//! The vehicle's shared state (position, wind estimate, task parameters,
//! command slots) is owned by the host. The scheduler and the tasks it
//! drives read inputs and publish status through [`StateStore`] so that the
//! core never depends on a particular property tree.

/// Geographic position in degrees
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeoPoint {
    /// Longitude in degrees
    pub lon_deg: f64,
    /// Latitude in degrees
    pub lat_deg: f64,
}

impl GeoPoint {
    /// Create a point from longitude and latitude (degrees)
    pub const fn new(lon_deg: f64, lat_deg: f64) -> Self {
        Self { lon_deg, lat_deg }
    }
}

/// Orbit direction for circling tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CircleDirection {
    /// Counter-clockwise orbit
    #[default]
    Left,
    /// Clockwise orbit
    Right,
}

impl CircleDirection {
    /// Name as published in shared state
    pub fn as_str(self) -> &'static str {
        match self {
            CircleDirection::Left => "left",
            CircleDirection::Right => "right",
        }
    }
}

/// Shared state accessed from the control tick.
///
/// Access is confined to the single tick thread, so implementations need no
/// locking. Reads are inputs to the scheduler; writes are status and task
/// parameter outputs consumed by the task implementations.
///
/// # Command slots
///
/// The transport places one command string in the request slot. The
/// scheduler reads it at the start of a tick, clears it, and writes the
/// outcome to the result slot.
pub trait StateStore {
    /// Current vehicle position
    fn position(&self) -> GeoPoint;

    /// Current wind direction estimate (degrees, direction wind blows from)
    fn wind_direction_deg(&self) -> f32;

    /// Pending command string (empty when no command is waiting)
    fn command_request(&self) -> &str;

    /// Empty the command request slot
    fn clear_command_request(&mut self);

    /// Publish the outcome of the most recent command
    fn set_command_result(&mut self, result: &str);

    /// Publish the name of the task at the front of the sequential stack
    fn set_current_task(&mut self, name: &str);

    /// Set the orbit center used by circling tasks
    fn set_circle_target(&mut self, target: GeoPoint);

    /// Set the orbit radius and direction used by circling tasks
    fn set_circle_shape(&mut self, radius_m: f32, direction: CircleDirection);

    /// Set the exit conditions for a descending orbit
    fn set_circle_exit(&mut self, exit_agl_ft: f32, exit_heading_deg: f32);

    /// Set the final approach heading for the landing task
    fn set_landing_heading(&mut self, heading_deg: f32);

    /// Set the preflight hold duration
    fn set_preflight_duration(&mut self, duration_sec: f32);

    /// Preflight hold duration, if one has been requested
    fn preflight_duration(&self) -> Option<f32>;
}

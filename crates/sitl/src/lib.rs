//! Host-side harness for the mission scheduler
//!
//! Loads a JSON mission configuration, feeds a simulated vehicle's position
//! and wind estimate into the shared state, and runs the scheduler at a
//! fixed tick rate. Scheduler events are reported through `tracing`.

pub mod config;
pub mod error;
pub mod runner;
pub mod sink;
pub mod vehicle;

pub use config::{load_config, parse_config};
pub use error::SitlError;
pub use runner::MissionRunner;
pub use sink::{MemorySink, TracingSink};
pub use vehicle::SimVehicle;

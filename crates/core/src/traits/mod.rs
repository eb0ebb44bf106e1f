//! Platform-agnostic trait abstractions
//!
//! The scheduler never touches a concrete property tree or logger. The host
//! injects both through these traits:
//!
//! - [`StateStore`]: position/wind inputs, command slots and status outputs
//! - [`EventSink`]: category + message event logging

mod events;
mod store;

pub use events::{categories, EventSink};
pub use store::{CircleDirection, GeoPoint, StateStore};

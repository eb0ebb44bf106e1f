//! Event sinks for the host
//!
//! [`TracingSink`] forwards scheduler events to `tracing`; [`MemorySink`]
//! keeps them for inspection.

use pico_mission_core::traits::categories;
use pico_mission_core::EventSink;

/// Forwards scheduler events to `tracing`
///
/// Faults are warnings, init chatter is debug, everything else is info.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn event(&mut self, category: &str, message: &str) {
        match category {
            categories::FAULT => tracing::warn!(category, "{message}"),
            categories::INIT => tracing::debug!(category, "{message}"),
            _ => tracing::info!(category, "{message}"),
        }
    }
}

/// Records every event in order
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub events: Vec<(String, String)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events matching `category` and `message` exactly
    pub fn count(&self, category: &str, message: &str) -> usize {
        self.events
            .iter()
            .filter(|(c, m)| c == category && m == message)
            .count()
    }

    /// Messages recorded under `category`
    pub fn messages(&self, category: &str) -> Vec<&str> {
        self.events
            .iter()
            .filter(|(c, _)| c == category)
            .map(|(_, m)| m.as_str())
            .collect()
    }
}

impl EventSink for MemorySink {
    fn event(&mut self, category: &str, message: &str) {
        self.events.push((category.to_string(), message.to_string()));
    }
}

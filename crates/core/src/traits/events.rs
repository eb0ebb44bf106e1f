//! Event sink abstraction
//!
//! Scheduler control logic reports lifecycle events and diagnostics through
//! an injected [`EventSink`] instead of calling a logger directly. Any
//! `FnMut(&str, &str)` closure is a sink, which keeps tests free of a
//! logging subsystem.

/// Event categories emitted by the scheduler
pub mod categories {
    /// Task lifecycle events (completion, next task)
    pub const MISSION: &str = "mission";
    /// Pool population during init
    pub const INIT: &str = "init";
    /// Accepted commands
    pub const COMMAND: &str = "command";
    /// Non-fatal faults: unknown task variant, missing standby task, bad command
    pub const FAULT: &str = "fault";
}

/// Receiver for scheduler events
pub trait EventSink {
    /// Record one event
    fn event(&mut self, category: &str, message: &str);
}

impl<F> EventSink for F
where
    F: FnMut(&str, &str),
{
    fn event(&mut self, category: &str, message: &str) {
        self(category, message)
    }
}

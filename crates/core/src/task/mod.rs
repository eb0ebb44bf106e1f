//! Task contract
//!
//! Every mission behavior (circling, landing, launch, calibration, ...)
//! implements [`Task`]. The scheduler only ever talks to behaviors through
//! this interface; the behaviors themselves are opaque.
//!
//! # Lifecycle
//!
//! ```text
//! Inactive --activate()--> Active --(internal condition)--> Complete
//!    ^                                                         |
//!    +------------------------- close() -----------------------+
//! ```
//!
//! 1. `activate()` - Called when the task becomes the driven entity
//! 2. `update(dt)` - Called once per tick while Active
//! 3. `is_complete()` - Polled after `update` for the sequential front
//! 4. `close()` - Called once the task is retired; returns it to Inactive
//!
//! Closing is not destruction: tasks live for the whole process.

mod factory;
mod kind;
mod standard;

pub use factory::{StandardFactory, TaskFactory};
pub use kind::{TaskKind, UnknownTaskKind};
pub use standard::StandardTask;

use crate::traits::StateStore;

/// Task lifecycle state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TaskState {
    /// Constructed or closed; not driven
    #[default]
    Inactive,
    /// Being driven by the scheduler
    Active,
    /// Finished its work; waiting to be closed
    Complete,
}

/// Stable handle to a task in the scheduler's arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub(crate) usize);

impl TaskId {
    /// Arena index behind this handle
    pub fn index(self) -> usize {
        self.0
    }
}

/// Mission task capability contract
///
/// Hooks run synchronously inside the control tick and must return within
/// the tick budget. None may block.
pub trait Task {
    /// Task name from its configuration entry
    fn name(&self) -> &str;

    /// Nickname used for targeted lookup (empty when none)
    fn nickname(&self) -> &str;

    /// Current lifecycle state
    fn state(&self) -> TaskState;

    /// Begin driving the task (Inactive -> Active)
    fn activate(&mut self, store: &mut dyn StateStore);

    /// Advance the task by `dt` seconds
    ///
    /// Only called while Active. This is the sole point where a task may
    /// write shared state or make progress.
    fn update(&mut self, dt: f32, store: &mut dyn StateStore);

    /// Whether the task has finished its work
    fn is_complete(&self) -> bool;

    /// Retire the task (-> Inactive)
    fn close(&mut self);
}

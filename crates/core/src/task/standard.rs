//! Built-in task implementation
//!
//! [`StandardTask`] carries the lifecycle state machine shared by every
//! variant. Guidance and actuation belong to the vehicle layer; the only
//! behavior modelled here is when a variant considers itself finished.

use alloc::string::{String, ToString};

use super::{Task, TaskKind, TaskState};
use crate::config::TaskEntry;
use crate::traits::StateStore;

/// Lifecycle-only task for any [`TaskKind`]
#[derive(Debug, Clone)]
pub struct StandardTask {
    kind: TaskKind,
    name: String,
    nickname: String,
    state: TaskState,
    /// Time spent Active since the last activation (seconds)
    elapsed_sec: f32,
    /// `duration_sec` from the configuration entry
    duration_sec: Option<f32>,
}

impl StandardTask {
    /// Build from a configuration entry; the task starts Inactive
    pub fn new(kind: TaskKind, entry: &TaskEntry) -> Self {
        Self {
            kind,
            name: entry.name.clone(),
            nickname: entry.nickname().to_string(),
            state: TaskState::Inactive,
            elapsed_sec: 0.0,
            duration_sec: entry.param_f32("duration_sec"),
        }
    }

    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    /// Seconds spent Active since the last activation
    pub fn elapsed_sec(&self) -> f32 {
        self.elapsed_sec
    }

    /// How long this task runs before completing, if it completes on its own
    fn time_limit(&self, store: &dyn StateStore) -> Option<f32> {
        match self.kind {
            // A commanded duration overrides the configured one
            TaskKind::Preflight => store.preflight_duration().or(self.duration_sec),
            kind if kind.is_timed() => self.duration_sec,
            _ => None,
        }
    }
}

impl Task for StandardTask {
    fn name(&self) -> &str {
        &self.name
    }

    fn nickname(&self) -> &str {
        &self.nickname
    }

    fn state(&self) -> TaskState {
        self.state
    }

    fn activate(&mut self, _store: &mut dyn StateStore) {
        self.state = TaskState::Active;
        self.elapsed_sec = 0.0;
    }

    fn update(&mut self, dt: f32, store: &mut dyn StateStore) {
        if self.state != TaskState::Active {
            return;
        }

        self.elapsed_sec += dt;

        if let Some(limit) = self.time_limit(store) {
            if self.elapsed_sec >= limit {
                self.state = TaskState::Complete;
            }
        }
    }

    fn is_complete(&self) -> bool {
        self.state == TaskState::Complete
    }

    fn close(&mut self) {
        self.state = TaskState::Inactive;
    }
}

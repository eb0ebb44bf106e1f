//! Mission Scheduler
//!
//! Owns the task pools and runs the per-tick update.
//!
//! ## Responsibilities
//!
//! - Populate the pools from configuration once, at init
//! - Process at most one pending command per tick
//! - Drive every global task and the front of the sequential stack
//! - Retire completed tasks and hand control to the next one
//! - Fall back to the idle task when the stack would otherwise be empty
//!
//! ## Resumed tasks
//!
//! Preemption is not a state transition: a task pushed under a new front
//! keeps its state and simply stops receiving `update` calls. When it is
//! exposed again by `pop`/`resume` it continues without re-activation. The
//! one exception is a front that is Inactive when the tick reaches it (an
//! instance that was closed while another reference to it sat deeper in the
//! stack): it is activated before its first update, because `update` is
//! only valid while Active.

mod pools;
mod requests;

pub use pools::{Pool, TaskPools};
pub use requests::{
    CircleDescent, CIRCLE_DESCENT_NICKNAME, CIRCLE_HOME_NICKNAME, CIRCLE_TARGET_NICKNAME,
    IDLE_TASK, RESUMABLE_TASKS,
};

use alloc::format;
use alloc::string::String;

use crate::command::parse_command;
use crate::config::{MissionConfig, TaskEntry};
use crate::task::{TaskFactory, TaskId, TaskState};
use crate::traits::{categories, EventSink, StateStore};

/// Mission task scheduler
///
/// An explicit value owned by the control-loop host; `init` builds it and
/// `update` is called once per control tick.
pub struct Scheduler {
    pools: TaskPools,
}

impl Scheduler {
    /// Populate the pools from `config` and activate the initial tasks
    ///
    /// Every global task is activated once; the first sequential task (if
    /// any) is activated as the initial front. Entries the factory rejects
    /// are skipped.
    ///
    /// # Example
    ///
    /// ```
    /// use pico_mission_core::{Blackboard, MissionConfig, Scheduler, StandardFactory, TaskEntry};
    ///
    /// let config = MissionConfig {
    ///     standby_tasks: vec![TaskEntry::new("idle")],
    ///     ..Default::default()
    /// };
    /// let mut board = Blackboard::new();
    /// let mut sink = |_: &str, _: &str| {};
    ///
    /// let mut scheduler = Scheduler::init(&config, &StandardFactory, &mut board, &mut sink);
    /// // Empty stack: the idle fallback is pushed at the end of the tick
    /// scheduler.update(0.02, &mut board, &mut sink);
    /// assert_eq!(scheduler.front_name(), Some("idle"));
    ///
    /// scheduler.update(0.02, &mut board, &mut sink);
    /// assert_eq!(board.current_task, "idle");
    /// ```
    pub fn init(
        config: &MissionConfig,
        factory: &dyn TaskFactory,
        store: &mut dyn StateStore,
        events: &mut dyn EventSink,
    ) -> Self {
        let mut pools = TaskPools::new();

        let groups: [(&str, Pool, &[TaskEntry]); 3] = [
            ("global_tasks", Pool::Global, config.global_tasks.as_slice()),
            ("sequential_tasks", Pool::Sequential, config.sequential_tasks.as_slice()),
            ("standby_tasks", Pool::Standby, config.standby_tasks.as_slice()),
        ];

        for (label, pool, entries) in groups {
            events.event(categories::INIT, &format!("{label}:"));
            for entry in entries {
                if let Some(task) = factory.make_task(entry, events) {
                    pools.insert(pool, task);
                }
            }
        }

        for index in 0..pools.global().len() {
            let id = pools.global()[index];
            pools.task_mut(id).activate(store);
        }

        if let Some(id) = pools.peek_front() {
            pools.task_mut(id).activate(store);
        }

        Self { pools }
    }

    /// Run one control tick
    ///
    /// 1. Process the pending command, if any
    /// 2. Update every global task
    /// 3. Update the sequential front; retire it if complete and activate
    ///    the next one
    /// 4. Request the idle task if the stack is empty
    pub fn update(&mut self, dt: f32, store: &mut dyn StateStore, events: &mut dyn EventSink) {
        self.process_command_request(store, events);

        for index in 0..self.pools.global().len() {
            let id = self.pools.global()[index];
            self.pools.task_mut(id).update(dt, store);
        }

        if let Some(id) = self.pools.peek_front() {
            self.drive_front(id, dt, store, events);
        }

        if self.pools.sequential_is_empty() {
            self.request_idle(store, events);
        }
    }

    fn drive_front(
        &mut self,
        id: TaskId,
        dt: f32,
        store: &mut dyn StateStore,
        events: &mut dyn EventSink,
    ) {
        let task = self.pools.task_mut(id);
        store.set_current_task(task.name());

        if task.state() == TaskState::Inactive {
            task.activate(store);
        }

        task.update(dt, store);
        if !task.is_complete() {
            return;
        }

        events.event(
            categories::MISSION,
            &format!("task complete: {}", task.name()),
        );
        self.pools.pop_front();

        if let Some(next) = self.pools.peek_front() {
            let task = self.pools.task_mut(next);
            task.activate(store);
            events.event(categories::MISSION, &format!("next task: {}", task.name()));
        }
    }

    /// Read, execute and clear the pending command request
    ///
    /// The result slot is written for every processed command: `successful:`
    /// for recognized commands (even when the requested task is missing),
    /// `syntax error:` otherwise. Does nothing when the slot is empty.
    pub fn process_command_request(
        &mut self,
        store: &mut dyn StateStore,
        events: &mut dyn EventSink,
    ) {
        if store.command_request().is_empty() {
            return;
        }

        let command = String::from(store.command_request());
        let result = match parse_command(&command) {
            Ok(request) => {
                events.event(categories::COMMAND, &command);
                self.handle_command(request, store, events);
                format!("successful: {command}")
            }
            Err(err) => {
                events.event(categories::FAULT, &format!("{err}: {command}"));
                format!("syntax error: {command}")
            }
        };

        store.clear_command_request();
        store.set_command_result(&result);
    }

    /// Task pools, for inspection
    pub fn pools(&self) -> &TaskPools {
        &self.pools
    }

    /// Name of the task at the front of the sequential stack
    pub fn front_name(&self) -> Option<&str> {
        self.pools.front_task().map(|task| task.name())
    }
}

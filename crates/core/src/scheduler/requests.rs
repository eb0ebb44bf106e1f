//! Command request handlers
//!
//! Each handler mutates the sequential stack on behalf of one
//! [`MissionCommand`]. Targeted requests share one shape:
//!
//! 1. If the front already is the requested task, do nothing
//! 2. Look the task up in the standby catalog
//! 3. Push it to the front and activate it, or log that it is missing
//!
//! A missing standby task is a soft failure: it is reported to the event
//! sink and the stack is left alone.

use alloc::format;

use super::Scheduler;
use crate::command::MissionCommand;
use crate::task::TaskId;
use crate::traits::{categories, CircleDirection, EventSink, GeoPoint, StateStore};

/// Nickname of the standby task that circles home
pub const CIRCLE_HOME_NICKNAME: &str = "circle_home";

/// Nickname of the standby task that circles a commanded point
pub const CIRCLE_TARGET_NICKNAME: &str = "circle_target";

/// Nickname of the standby task that circles down to an exit altitude
pub const CIRCLE_DESCENT_NICKNAME: &str = "circle_descent";

/// Name of the idle fallback task
pub const IDLE_TASK: &str = "idle";

/// Front tasks that `resume` is allowed to retire
pub const RESUMABLE_TASKS: [&str; 2] = ["circle-coord", "land"];

const LAND_TASK: &str = "land";
const PREFLIGHT_TASK: &str = "preflight";
const CALIBRATE_TASK: &str = "calibrate";
const ROUTE_TASK: &str = "route";
const PARAMETRIC_TASK: &str = "parametric";

/// Parameters for a descending orbit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleDescent {
    /// Orbit center; `None` means the current position
    pub target: Option<GeoPoint>,
    pub radius_m: f32,
    pub direction: CircleDirection,
    /// Leave the orbit once below this altitude above ground (feet)
    pub exit_agl_ft: f32,
    /// Heading to leave the orbit on (degrees)
    pub exit_heading_deg: f32,
}

/// How a request identifies its standby task
#[derive(Clone, Copy)]
enum Target<'a> {
    Name(&'a str),
    Nickname(&'a str),
}

impl Scheduler {
    /// Execute one structured command
    pub fn handle_command(
        &mut self,
        command: MissionCommand,
        store: &mut dyn StateStore,
        events: &mut dyn EventSink,
    ) {
        match command {
            MissionCommand::Home => self.request_home(store, events),
            MissionCommand::Circle { target } => self.request_circle(target, store, events),
            MissionCommand::Idle => self.request_idle(store, events),
            MissionCommand::Resume => self.request_resume(),
            MissionCommand::Land { heading_deg } => self.request_land(heading_deg, store, events),
            MissionCommand::Preflight { duration_sec } => {
                self.request_preflight(duration_sec, store, events)
            }
            MissionCommand::Calibrate => self.request_named(CALIBRATE_TASK, store, events),
            MissionCommand::Route => self.request_named(ROUTE_TASK, store, events),
            MissionCommand::Parametric => self.request_named(PARAMETRIC_TASK, store, events),
            MissionCommand::Pop => {
                self.pools.pop_front();
            }
        }
    }

    /// Circle the home position
    pub fn request_home(&mut self, store: &mut dyn StateStore, events: &mut dyn EventSink) {
        self.request(Target::Nickname(CIRCLE_HOME_NICKNAME), store, events);
    }

    /// Circle `target`, or the current position when `None`
    ///
    /// The orbit center is written even when the circling task is already
    /// the front, so a repeated request re-targets the running orbit.
    pub fn request_circle(
        &mut self,
        target: Option<GeoPoint>,
        store: &mut dyn StateStore,
        events: &mut dyn EventSink,
    ) {
        let target = target.unwrap_or_else(|| store.position());
        self.request(Target::Nickname(CIRCLE_TARGET_NICKNAME), store, events);
        store.set_circle_target(target);
    }

    /// Circle down to an exit altitude, then leave on a fixed heading
    ///
    /// Orbit and exit parameters are only written when the task is pushed.
    pub fn request_circle_descent(
        &mut self,
        descent: CircleDescent,
        store: &mut dyn StateStore,
        events: &mut dyn EventSink,
    ) {
        let target = descent.target.unwrap_or_else(|| store.position());
        if self
            .request(Target::Nickname(CIRCLE_DESCENT_NICKNAME), store, events)
            .is_some()
        {
            store.set_circle_target(target);
            store.set_circle_shape(descent.radius_m, descent.direction);
            store.set_circle_exit(descent.exit_agl_ft, descent.exit_heading_deg);
        }
    }

    /// Switch to the idle task
    pub fn request_idle(&mut self, store: &mut dyn StateStore, events: &mut dyn EventSink) {
        self.request(Target::Name(IDLE_TASK), store, events);
    }

    /// Retire an interrupting circle or landing at the front
    ///
    /// The task underneath is not re-activated.
    pub fn request_resume(&mut self) {
        let resumable = self
            .pools
            .front_task()
            .is_some_and(|task| RESUMABLE_TASKS.contains(&task.name()));

        if resumable {
            self.pools.pop_front();
        }
    }

    /// Land on `heading_deg`, or into the wind when `None`
    ///
    /// The landing heading is only written when the task is pushed.
    pub fn request_land(
        &mut self,
        heading_deg: Option<f32>,
        store: &mut dyn StateStore,
        events: &mut dyn EventSink,
    ) {
        let heading_deg = heading_deg.unwrap_or_else(|| store.wind_direction_deg());
        if self.front_matches(Target::Name(LAND_TASK)) {
            return;
        }

        if let Some(id) = self.find(Target::Name(LAND_TASK), events) {
            store.set_landing_heading(heading_deg);
            self.push_and_activate(id, store);
        }
    }

    /// Run the preflight task for `duration_sec`
    pub fn request_preflight(
        &mut self,
        duration_sec: f32,
        store: &mut dyn StateStore,
        events: &mut dyn EventSink,
    ) {
        if self.front_matches(Target::Name(PREFLIGHT_TASK)) {
            return;
        }

        store.set_preflight_duration(duration_sec);
        if let Some(id) = self.find(Target::Name(PREFLIGHT_TASK), events) {
            self.push_and_activate(id, store);
        }
    }

    /// Push a standby task by name (calibrate, route, parametric, ...)
    pub fn request_named(
        &mut self,
        name: &str,
        store: &mut dyn StateStore,
        events: &mut dyn EventSink,
    ) {
        self.request(Target::Name(name), store, events);
    }

    /// Guard, look up, push and activate; returns the pushed task
    fn request(
        &mut self,
        target: Target<'_>,
        store: &mut dyn StateStore,
        events: &mut dyn EventSink,
    ) -> Option<TaskId> {
        if self.front_matches(target) {
            return None;
        }

        let id = self.find(target, events)?;
        self.push_and_activate(id, store);
        Some(id)
    }

    /// Whether the current front already satisfies `target`
    fn front_matches(&self, target: Target<'_>) -> bool {
        self.pools.front_task().is_some_and(|task| match target {
            Target::Name(name) => task.name() == name,
            Target::Nickname(nickname) => task.nickname() == nickname,
        })
    }

    fn find(&self, target: Target<'_>, events: &mut dyn EventSink) -> Option<TaskId> {
        let (found, key, label) = match target {
            Target::Name(name) => (self.pools.find_by_name(name), name, "name"),
            Target::Nickname(nickname) => {
                (self.pools.find_by_nickname(nickname), nickname, "nickname")
            }
        };

        if found.is_none() {
            events.event(
                categories::FAULT,
                &format!("couldn't find standby task with {label} '{key}'"),
            );
        }
        found
    }

    fn push_and_activate(&mut self, id: TaskId, store: &mut dyn StateStore) {
        self.pools.push_front(id);
        self.pools.task_mut(id).activate(store);
    }
}

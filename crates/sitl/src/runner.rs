//! Fixed-step mission runner
//!
//! Owns the scheduler, its blackboard and the simulated vehicle, and drives
//! them one tick at a time. The binary calls [`MissionRunner::step`] from
//! its timer; tests call it directly.

use pico_mission_core::{
    Blackboard, EventSink, MissionConfig, Scheduler, StandardFactory, TaskFactory,
};

use crate::error::SitlError;
use crate::sink::TracingSink;
use crate::vehicle::SimVehicle;

/// Longest command accepted into the request slot (bytes)
pub const MAX_COMMAND_LEN: usize = 255;

pub struct MissionRunner<S: EventSink = TracingSink> {
    scheduler: Scheduler,
    board: Blackboard,
    vehicle: SimVehicle,
    sink: S,
    tick_count: u64,
}

impl MissionRunner<TracingSink> {
    /// Runner with the standard task set, reporting through `tracing`
    pub fn new(config: &MissionConfig, vehicle: SimVehicle) -> Self {
        Self::with_sink(config, &StandardFactory, vehicle, TracingSink)
    }
}

impl<S: EventSink> MissionRunner<S> {
    /// Runner with a custom factory and event sink
    ///
    /// The vehicle state is published before the scheduler is built so that
    /// tasks see a valid position on activation.
    pub fn with_sink(
        config: &MissionConfig,
        factory: &dyn TaskFactory,
        vehicle: SimVehicle,
        mut sink: S,
    ) -> Self {
        let mut board = Blackboard::new();
        vehicle.publish(&mut board);
        let scheduler = Scheduler::init(config, factory, &mut board, &mut sink);

        Self {
            scheduler,
            board,
            vehicle,
            sink,
            tick_count: 0,
        }
    }

    /// Queue a command for the next tick
    ///
    /// A pending command that has not been processed yet is replaced.
    pub fn submit(&mut self, command: &str) -> Result<(), SitlError> {
        let command = command.trim();
        if command.len() > MAX_COMMAND_LEN {
            return Err(SitlError::CommandTooLong {
                len: command.len(),
                max: MAX_COMMAND_LEN,
            });
        }
        self.board.submit_command(command);
        Ok(())
    }

    /// Advance the vehicle and run one scheduler tick
    pub fn step(&mut self, dt: f32) {
        self.vehicle.step(dt);
        self.vehicle.publish(&mut self.board);
        self.scheduler.update(dt, &mut self.board, &mut self.sink);
        self.tick_count += 1;
    }

    /// Names of the sequential stack, front first
    pub fn stack_names(&self) -> Vec<String> {
        let pools = self.scheduler.pools();
        pools
            .sequential()
            .map(|id| pools.task(id).name().to_string())
            .collect()
    }

    pub fn board(&self) -> &Blackboard {
        &self.board
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn vehicle_mut(&mut self) -> &mut SimVehicle {
        &mut self.vehicle
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

//! pico_mission_core - Pure no_std mission task orchestration
//!
//! This crate decides, once per control tick, which high-level behavior
//! ("task") is driving the vehicle. It holds no platform code and can be
//! tested on host without any feature flags.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: Only `core` and `alloc`
//! - **Trait abstractions**: Shared state and event logging injected via traits
//!
//! # Modules
//!
//! - [`traits`]: Shared state store and event sink abstractions
//! - [`blackboard`]: In-memory [`traits::StateStore`] implementation
//! - [`config`]: Task configuration entries grouped by pool
//! - [`task`]: Task contract, variant enumeration and factory
//! - [`command`]: Textual command grammar
//! - [`scheduler`]: Task pools and the per-tick scheduler

#![no_std]

extern crate alloc;

pub mod blackboard;
pub mod command;
pub mod config;
pub mod scheduler;
pub mod task;
pub mod traits;

pub use blackboard::Blackboard;
pub use command::{parse_command, CommandError, MissionCommand};
pub use config::{MissionConfig, ParamValue, TaskEntry};
pub use scheduler::{CircleDescent, Pool, Scheduler, TaskPools};
pub use task::{StandardFactory, StandardTask, Task, TaskFactory, TaskId, TaskKind, TaskState};
pub use traits::{CircleDirection, EventSink, GeoPoint, StateStore};

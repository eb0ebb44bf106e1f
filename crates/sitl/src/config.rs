//! JSON mission configuration
//!
//! Each group maps a task name to its record. Key order is preserved, so
//! the order tasks are written in is the order they are instantiated (and,
//! for `sequential_tasks`, the initial stack order, front first).
//!
//! ```json
//! {
//!   "global_tasks":     { "mode_manager": {} },
//!   "sequential_tasks": { "preflight": { "params": { "duration_sec": 30 } } },
//!   "standby_tasks": {
//!     "idle": {},
//!     "circle-home": { "task": "circle", "nickname": "circle_home" }
//!   }
//! }
//! ```
//!
//! `task` selects the variant and defaults to the task name.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use pico_mission_core::{MissionConfig, ParamValue, TaskEntry};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::SitlError;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    global_tasks: Map<String, Value>,
    #[serde(default)]
    sequential_tasks: Map<String, Value>,
    #[serde(default)]
    standby_tasks: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEntry {
    #[serde(default)]
    task: Option<String>,
    #[serde(default)]
    nickname: Option<String>,
    #[serde(default)]
    params: BTreeMap<String, ParamValue>,
}

/// Read and parse a mission configuration file
pub fn load_config(path: impl AsRef<Path>) -> Result<MissionConfig, SitlError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SitlError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&text)
}

/// Parse a mission configuration from JSON text
pub fn parse_config(text: &str) -> Result<MissionConfig, SitlError> {
    let raw: RawConfig = serde_json::from_str(text)?;

    Ok(MissionConfig {
        global_tasks: convert_group("global_tasks", raw.global_tasks)?,
        sequential_tasks: convert_group("sequential_tasks", raw.sequential_tasks)?,
        standby_tasks: convert_group("standby_tasks", raw.standby_tasks)?,
    })
}

fn convert_group(
    group: &'static str,
    entries: Map<String, Value>,
) -> Result<Vec<TaskEntry>, SitlError> {
    entries
        .into_iter()
        .map(|(name, value)| {
            let raw: RawEntry =
                serde_json::from_value(value).map_err(|e| SitlError::InvalidEntry {
                    group,
                    name: name.clone(),
                    reason: e.to_string(),
                })?;

            Ok(TaskEntry {
                name,
                task: raw.task,
                nickname: raw.nickname,
                params: raw.params,
            })
        })
        .collect()
}

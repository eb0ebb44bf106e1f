//! Task configuration
//!
//! The configuration source enumerates which task variants to instantiate,
//! in three groups. Each group is an ordered list of [`TaskEntry`] values;
//! the group an entry is declared under decides its pool.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

/// Entry-specific parameter value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl ParamValue {
    /// Numeric value, if this is a number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Text value, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

/// One task declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskEntry {
    /// Task name (not required to be unique across pools)
    pub name: String,
    /// Variant selector; defaults to `name` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    /// Secondary identifier for targeted lookup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// Entry-specific parameters
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, ParamValue>,
}

impl TaskEntry {
    /// Entry whose selector equals its name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            task: None,
            nickname: None,
            params: BTreeMap::new(),
        }
    }

    /// Set an explicit variant selector
    pub fn with_task(mut self, selector: &str) -> Self {
        self.task = Some(selector.to_string());
        self
    }

    pub fn with_nickname(mut self, nickname: &str) -> Self {
        self.nickname = Some(nickname.to_string());
        self
    }

    pub fn with_param(mut self, key: &str, value: ParamValue) -> Self {
        self.params.insert(key.to_string(), value);
        self
    }

    /// Variant selector used by the task factory
    pub fn selector(&self) -> &str {
        self.task.as_deref().unwrap_or(&self.name)
    }

    /// Nickname, or the empty string when none is configured
    pub fn nickname(&self) -> &str {
        self.nickname.as_deref().unwrap_or("")
    }

    /// Numeric parameter as `f32`
    pub fn param_f32(&self, key: &str) -> Option<f32> {
        self.params.get(key).and_then(ParamValue::as_f64).map(|v| v as f32)
    }
}

/// Complete mission configuration, one list per pool
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MissionConfig {
    /// Always-on tasks, activated once at init
    #[serde(default)]
    pub global_tasks: Vec<TaskEntry>,
    /// Initial contents of the sequential stack, front first
    #[serde(default)]
    pub sequential_tasks: Vec<TaskEntry>,
    /// Catalog of tasks available on request
    #[serde(default)]
    pub standby_tasks: Vec<TaskEntry>,
}

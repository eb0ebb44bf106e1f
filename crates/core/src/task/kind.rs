//! Task variant enumeration
//!
//! The set of behaviors is closed: adding one is a new enum variant, and
//! every `match` over [`TaskKind`] must handle it.

use core::fmt;
use core::str::FromStr;

/// Every task variant the factory can build
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TaskKind {
    IsAirborne,
    Camera,
    Circle,
    Excite,
    FlapsManager,
    HomeManager,
    Idle,
    Land,
    Land3,
    Launch,
    LostLink,
    ModeManager,
    Parametric,
    Preflight,
    Calibrate,
    Route,
    Switches,
    ThrottleSafety,
}

impl TaskKind {
    /// All variants, in selector order
    pub const ALL: [TaskKind; 18] = [
        TaskKind::IsAirborne,
        TaskKind::Camera,
        TaskKind::Circle,
        TaskKind::Excite,
        TaskKind::FlapsManager,
        TaskKind::HomeManager,
        TaskKind::Idle,
        TaskKind::Land,
        TaskKind::Land3,
        TaskKind::Launch,
        TaskKind::LostLink,
        TaskKind::ModeManager,
        TaskKind::Parametric,
        TaskKind::Preflight,
        TaskKind::Calibrate,
        TaskKind::Route,
        TaskKind::Switches,
        TaskKind::ThrottleSafety,
    ];

    /// Configuration selector for this variant
    pub fn as_str(self) -> &'static str {
        match self {
            TaskKind::IsAirborne => "is_airborne",
            TaskKind::Camera => "camera",
            TaskKind::Circle => "circle",
            TaskKind::Excite => "excite",
            TaskKind::FlapsManager => "flaps_manager",
            TaskKind::HomeManager => "home_manager",
            TaskKind::Idle => "idle",
            TaskKind::Land => "land",
            TaskKind::Land3 => "land3",
            TaskKind::Launch => "launch",
            TaskKind::LostLink => "lost_link",
            TaskKind::ModeManager => "mode_manager",
            TaskKind::Parametric => "parametric",
            TaskKind::Preflight => "preflight",
            TaskKind::Calibrate => "calibrate",
            TaskKind::Route => "route",
            TaskKind::Switches => "switches",
            TaskKind::ThrottleSafety => "throttle_safety",
        }
    }

    /// Whether tasks of this kind finish on their own after a configured
    /// `duration_sec`
    pub fn is_timed(self) -> bool {
        matches!(
            self,
            TaskKind::Calibrate
                | TaskKind::Excite
                | TaskKind::Launch
                | TaskKind::Land
                | TaskKind::Land3
                | TaskKind::Parametric
                | TaskKind::Route
                | TaskKind::Preflight
        )
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selector does not name any task variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownTaskKind;

impl fmt::Display for UnknownTaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown task variant")
    }
}

impl FromStr for TaskKind {
    type Err = UnknownTaskKind;

    fn from_str(selector: &str) -> Result<Self, Self::Err> {
        TaskKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == selector)
            .ok_or(UnknownTaskKind)
    }
}

//! Task factory
//!
//! Turns one configuration entry into a task instance. An unknown selector
//! is reported and skipped; it never aborts initialization.

use alloc::boxed::Box;
use alloc::format;

use super::{StandardTask, Task, TaskKind};
use crate::config::TaskEntry;
use crate::traits::{categories, EventSink};

/// Builds tasks from configuration entries
///
/// The returned task must be Inactive: construction never activates.
pub trait TaskFactory {
    /// Build the task for `entry`, or `None` if its selector is unknown
    fn make_task(&self, entry: &TaskEntry, events: &mut dyn EventSink) -> Option<Box<dyn Task>>;
}

/// Factory that builds a [`StandardTask`] for every known variant
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFactory;

impl TaskFactory for StandardFactory {
    fn make_task(&self, entry: &TaskEntry, events: &mut dyn EventSink) -> Option<Box<dyn Task>> {
        let kind = match entry.selector().parse::<TaskKind>() {
            Ok(kind) => kind,
            Err(_) => {
                events.event(
                    categories::FAULT,
                    &format!("unknown task name: {}", entry.selector()),
                );
                return None;
            }
        };

        events.event(
            categories::INIT,
            &format!("make_task(): {} ({})", entry.name, kind),
        );

        let task: Box<dyn Task> = match kind {
            TaskKind::IsAirborne
            | TaskKind::Camera
            | TaskKind::Circle
            | TaskKind::Excite
            | TaskKind::FlapsManager
            | TaskKind::HomeManager
            | TaskKind::Idle
            | TaskKind::Land
            | TaskKind::Land3
            | TaskKind::Launch
            | TaskKind::LostLink
            | TaskKind::ModeManager
            | TaskKind::Parametric
            | TaskKind::Preflight
            | TaskKind::Calibrate
            | TaskKind::Route
            | TaskKind::Switches
            | TaskKind::ThrottleSafety => Box::new(StandardTask::new(kind, entry)),
        };

        Some(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskState;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    #[test]
    fn test_make_known_task() {
        let mut events: Vec<(String, String)> = Vec::new();
        let mut sink = |c: &str, m: &str| events.push((c.to_string(), m.to_string()));

        let entry = TaskEntry::new("circle-coord")
            .with_task("circle")
            .with_nickname("circle_target");
        let task = StandardFactory.make_task(&entry, &mut sink);

        let task = task.expect("circle is a known variant");
        assert_eq!(task.name(), "circle-coord");
        assert_eq!(task.nickname(), "circle_target");
        assert_eq!(task.state(), TaskState::Inactive);
    }

    #[test]
    fn test_every_variant_builds() {
        let mut sink = |_: &str, _: &str| {};
        for kind in TaskKind::ALL {
            let entry = TaskEntry::new(kind.as_str());
            assert!(StandardFactory.make_task(&entry, &mut sink).is_some());
        }
    }

    #[test]
    fn test_unknown_selector_is_reported() {
        let mut events: Vec<(String, String)> = Vec::new();
        {
            let mut sink = |c: &str, m: &str| events.push((c.to_string(), m.to_string()));
            let entry = TaskEntry::new("hover").with_task("helicopter_hover");
            assert!(StandardFactory.make_task(&entry, &mut sink).is_none());
        }

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, categories::FAULT);
        assert!(events[0].1.contains("helicopter_hover"));
    }
}

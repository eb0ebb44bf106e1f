//! Task pools
//!
//! All tasks live in a single arena, built once during init. The three pools
//! hold [`TaskId`] handles into it:
//!
//! - **Global**: always-on tasks, fixed after init
//! - **Standby**: catalog of tasks available on request, fixed after init
//! - **Sequential**: the live preemption stack, mutated only at the front
//!
//! A standby task may sit on the sequential stack (possibly more than once)
//! while still listed in the catalog; both refer to the same instance.

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::task::{Task, TaskId};

/// Pool a configured task is assigned to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pool {
    Global,
    Sequential,
    Standby,
}

/// Task arena plus the three pools
#[derive(Default)]
pub struct TaskPools {
    arena: Vec<Box<dyn Task>>,
    global: Vec<TaskId>,
    standby: Vec<TaskId>,
    sequential: VecDeque<TaskId>,
}

impl TaskPools {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move a task into the arena and assign it to `pool`
    ///
    /// Sequential tasks are appended at the back, so configuration order is
    /// front-to-back order.
    pub fn insert(&mut self, pool: Pool, task: Box<dyn Task>) -> TaskId {
        let id = TaskId(self.arena.len());
        self.arena.push(task);

        match pool {
            Pool::Global => self.global.push(id),
            Pool::Standby => self.standby.push(id),
            Pool::Sequential => self.sequential.push_back(id),
        }

        id
    }

    /// Total number of task instances
    pub fn task_count(&self) -> usize {
        self.arena.len()
    }

    pub fn task(&self, id: TaskId) -> &dyn Task {
        self.arena[id.0].as_ref()
    }

    pub fn task_mut(&mut self, id: TaskId) -> &mut dyn Task {
        self.arena[id.0].as_mut()
    }

    pub fn global(&self) -> &[TaskId] {
        &self.global
    }

    pub fn standby(&self) -> &[TaskId] {
        &self.standby
    }

    /// Sequential stack, front first
    pub fn sequential(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.sequential.iter().copied()
    }

    pub fn sequential_len(&self) -> usize {
        self.sequential.len()
    }

    pub fn sequential_is_empty(&self) -> bool {
        self.sequential.is_empty()
    }

    // ========================================================================
    // Sequential stack
    // ========================================================================

    /// Task at the front of the sequential stack
    pub fn peek_front(&self) -> Option<TaskId> {
        self.sequential.front().copied()
    }

    /// Front task, borrowed
    pub fn front_task(&self) -> Option<&dyn Task> {
        self.peek_front().map(|id| self.task(id))
    }

    /// Put `id` on the front of the stack
    ///
    /// The previous front is not closed; it is simply no longer driven.
    /// Activating the pushed task is the caller's job.
    pub fn push_front(&mut self, id: TaskId) {
        self.sequential.push_front(id);
    }

    /// Remove and close the front task
    ///
    /// The newly exposed front is not activated here.
    pub fn pop_front(&mut self) -> Option<TaskId> {
        let id = self.sequential.pop_front()?;
        self.task_mut(id).close();
        Some(id)
    }

    // ========================================================================
    // Lookup (first match, linear scan)
    // ========================================================================

    /// Standby task by name; `None` for an empty name
    pub fn find_by_name(&self, name: &str) -> Option<TaskId> {
        if name.is_empty() {
            return None;
        }
        self.first_match(self.standby.iter().copied(), |task| task.name() == name)
    }

    /// Standby task by nickname; `None` for an empty nickname
    pub fn find_by_nickname(&self, nickname: &str) -> Option<TaskId> {
        if nickname.is_empty() {
            return None;
        }
        self.first_match(self.standby.iter().copied(), |task| {
            task.nickname() == nickname
        })
    }

    /// Global task by name
    pub fn find_global(&self, name: &str) -> Option<TaskId> {
        self.first_match(self.global.iter().copied(), |task| task.name() == name)
    }

    /// Task on the sequential stack by name, nearest the front first
    pub fn find_sequential(&self, name: &str) -> Option<TaskId> {
        self.first_match(self.sequential.iter().copied(), |task| {
            task.name() == name
        })
    }

    fn first_match(
        &self,
        mut ids: impl Iterator<Item = TaskId>,
        predicate: impl Fn(&dyn Task) -> bool,
    ) -> Option<TaskId> {
        ids.find(|&id| predicate(self.task(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blackboard::Blackboard;
    use crate::config::TaskEntry;
    use crate::task::{StandardTask, TaskKind, TaskState};

    fn task(kind: TaskKind, name: &str, nickname: &str) -> Box<dyn Task> {
        let mut entry = TaskEntry::new(name).with_task(kind.as_str());
        if !nickname.is_empty() {
            entry = entry.with_nickname(nickname);
        }
        Box::new(StandardTask::new(kind, &entry))
    }

    fn stack(pools: &TaskPools) -> Vec<TaskId> {
        pools.sequential().collect()
    }

    #[test]
    fn test_insert_assigns_pools() {
        let mut pools = TaskPools::new();
        let g = pools.insert(Pool::Global, task(TaskKind::ModeManager, "mode_manager", ""));
        let s1 = pools.insert(Pool::Sequential, task(TaskKind::Preflight, "preflight", ""));
        let s2 = pools.insert(Pool::Sequential, task(TaskKind::Launch, "launch", ""));
        let b = pools.insert(Pool::Standby, task(TaskKind::Idle, "idle", ""));

        assert_eq!(pools.task_count(), 4);
        assert_eq!(pools.global(), &[g]);
        assert_eq!(pools.standby(), &[b]);
        assert_eq!(stack(&pools), [s1, s2]);
        assert_eq!(pools.peek_front(), Some(s1));
    }

    #[test]
    fn test_push_pop_round_trip() {
        let mut board = Blackboard::new();
        let mut pools = TaskPools::new();
        let a = pools.insert(Pool::Sequential, task(TaskKind::Route, "route", ""));
        let x = pools.insert(Pool::Standby, task(TaskKind::Circle, "circle-coord", "circle_target"));
        pools.task_mut(a).activate(&mut board);

        pools.push_front(x);
        pools.task_mut(x).activate(&mut board);
        assert_eq!(stack(&pools), [x, a]);
        // Preempted task is left as it was
        assert_eq!(pools.task(a).state(), TaskState::Active);

        assert_eq!(pools.pop_front(), Some(x));
        assert_eq!(stack(&pools), [a]);
        assert_eq!(pools.task(x).state(), TaskState::Inactive);
        // Standby catalog is untouched
        assert_eq!(pools.standby(), &[x]);
    }

    #[test]
    fn test_pop_empty_stack() {
        let mut pools = TaskPools::new();
        assert_eq!(pools.pop_front(), None);
        assert!(pools.front_task().is_none());
    }

    #[test]
    fn test_find_first_match() {
        let mut pools = TaskPools::new();
        let first = pools.insert(Pool::Standby, task(TaskKind::Circle, "circle", "circle_home"));
        let second = pools.insert(Pool::Standby, task(TaskKind::Circle, "circle", "circle_target"));

        assert_eq!(pools.find_by_name("circle"), Some(first));
        assert_eq!(pools.find_by_nickname("circle_target"), Some(second));
        assert_eq!(pools.find_by_name("land"), None);
    }

    #[test]
    fn test_find_ignores_empty_keys() {
        let mut pools = TaskPools::new();
        pools.insert(Pool::Standby, task(TaskKind::Idle, "idle", ""));

        // "idle" has an empty nickname, but an empty key never matches
        assert_eq!(pools.find_by_nickname(""), None);
        assert_eq!(pools.find_by_name(""), None);
    }

    #[test]
    fn test_find_only_searches_standby() {
        let mut pools = TaskPools::new();
        let g = pools.insert(Pool::Global, task(TaskKind::Idle, "idle", ""));
        let s = pools.insert(Pool::Sequential, task(TaskKind::Land, "land", ""));

        assert_eq!(pools.find_by_name("idle"), None);
        assert_eq!(pools.find_by_name("land"), None);
        assert_eq!(pools.find_global("idle"), Some(g));
        assert_eq!(pools.find_sequential("land"), Some(s));
        assert_eq!(pools.find_sequential("idle"), None);
    }
}

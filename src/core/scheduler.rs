//! Revocable repeating tasks driven by external ticks.
//!
//! Sessions never own a real clock. The presentation layer forwards elapsed
//! time (`advance_tick(delta_ms)`) and the session asks its `Scheduler` how
//! often each of its tasks fired during that time.
//!
//! ## Lifetime rule
//!
//! A task fires only while its handle is live. `cancel` consumes the handle
//! and removes the task, so a tick arriving after a stop, an expiry or a
//! teardown reports zero firings and cannot mutate state.
//!
//! Each session owns its scheduler, so dropping a session drops its tasks
//! with it. `teardown` is the explicit, observable end of a session.
//!
//! ```
//! use chroma_games::core::{Cadence, Scheduler};
//!
//! let mut scheduler = Scheduler::new();
//! let countdown = scheduler.schedule_repeating(Cadence::Interval { period_ms: 1000 });
//!
//! assert_eq!(scheduler.advance(&countdown, 2500).count, 2);
//! assert_eq!(scheduler.advance(&countdown, 500).count, 1); // carry of 500 ms
//!
//! let stale = countdown.clone();
//! scheduler.cancel(countdown);
//! assert_eq!(scheduler.advance(&stale, 5000).count, 0);
//! assert_eq!(scheduler.active_count(), 0);
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// How often a task fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cadence {
    /// Once per tick, carrying the tick's elapsed time (animation frames).
    EveryFrame,
    /// Once per full `period_ms` of accumulated time (countdown timers).
    Interval { period_ms: u64 },
}

/// Opaque task identifier. Never reused within a scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(u64);

/// Handle to a scheduled task.
///
/// Not `Copy`: releasing a task consumes its handle. A clone is only
/// produced when a whole session is cloned, and it refers to the task in
/// that session's cloned scheduler.
#[must_use = "dropping a TaskHandle without cancelling leaves the task scheduled"]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskHandle {
    id: TaskId,
}

impl TaskHandle {
    /// The task this handle refers to.
    #[must_use]
    pub fn id(&self) -> TaskId {
        self.id
    }
}

/// Result of advancing a task.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Firings {
    /// How many times the task fired.
    pub count: u32,
    /// Time covered by those firings, in milliseconds.
    pub elapsed_ms: u64,
}

impl Firings {
    /// Check whether the task fired at all.
    #[must_use]
    pub fn fired(&self) -> bool {
        self.count > 0
    }
}

#[derive(Clone, Debug)]
struct Task {
    cadence: Cadence,
    carry_ms: u64,
}

/// Table of live repeating tasks.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    tasks: FxHashMap<TaskId, Task>,
    next_id: u64,
}

impl Scheduler {
    /// Create an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a repeating task.
    ///
    /// # Panics
    ///
    /// Panics if an interval cadence has a zero period.
    pub fn schedule_repeating(&mut self, cadence: Cadence) -> TaskHandle {
        if let Cadence::Interval { period_ms } = cadence {
            assert!(period_ms > 0, "Interval period must be positive");
        }

        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.insert(id, Task { cadence, carry_ms: 0 });
        tracing::trace!(task = id.0, ?cadence, "task scheduled");

        TaskHandle { id }
    }

    /// Cancel a task. Returns `false` if it was already gone.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let removed = self.tasks.remove(&handle.id).is_some();
        tracing::trace!(task = handle.id.0, removed, "task cancelled");
        removed
    }

    /// Check whether a handle still refers to a live task.
    #[must_use]
    pub fn is_live(&self, handle: &TaskHandle) -> bool {
        self.tasks.contains_key(&handle.id)
    }

    /// Number of live tasks.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.tasks.len()
    }

    /// Advance one task by `delta_ms` and report how often it fired.
    ///
    /// Stale or cancelled handles report no firings.
    pub fn advance(&mut self, handle: &TaskHandle, delta_ms: u64) -> Firings {
        let Some(task) = self.tasks.get_mut(&handle.id) else {
            return Firings::default();
        };

        match task.cadence {
            Cadence::EveryFrame => Firings {
                count: 1,
                elapsed_ms: delta_ms,
            },
            Cadence::Interval { period_ms } => {
                let total = task.carry_ms.saturating_add(delta_ms);
                let count = total / period_ms;
                task.carry_ms = total % period_ms;
                Firings {
                    count: u32::try_from(count).unwrap_or(u32::MAX),
                    elapsed_ms: count * period_ms,
                }
            }
        }
    }

    /// Cancel every task. Returns how many were live.
    pub fn clear(&mut self) -> usize {
        let n = self.tasks.len();
        self.tasks.clear();
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_fires_every_tick() {
        let mut scheduler = Scheduler::new();
        let frame = scheduler.schedule_repeating(Cadence::EveryFrame);

        let f = scheduler.advance(&frame, 16);
        assert_eq!(f, Firings { count: 1, elapsed_ms: 16 });

        let f = scheduler.advance(&frame, 0);
        assert_eq!(f.count, 1);
        assert_eq!(f.elapsed_ms, 0);
    }

    #[test]
    fn test_interval_accumulates() {
        let mut scheduler = Scheduler::new();
        let timer = scheduler.schedule_repeating(Cadence::Interval { period_ms: 1000 });

        assert!(!scheduler.advance(&timer, 400).fired());
        assert!(!scheduler.advance(&timer, 400).fired());
        let f = scheduler.advance(&timer, 400);
        assert_eq!(f.count, 1);
        assert_eq!(f.elapsed_ms, 1000);

        // 200 ms carried, plus 3000
        assert_eq!(scheduler.advance(&timer, 3000).count, 3);
    }

    #[test]
    fn test_cancelled_handle_never_fires() {
        let mut scheduler = Scheduler::new();
        let frame = scheduler.schedule_repeating(Cadence::EveryFrame);
        let stale = frame.clone();

        assert!(scheduler.cancel(frame));
        assert!(!scheduler.is_live(&stale));
        assert_eq!(scheduler.advance(&stale, 16), Firings::default());
        assert!(!scheduler.cancel(stale));
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut scheduler = Scheduler::new();
        let first = scheduler.schedule_repeating(Cadence::EveryFrame);
        let stale = first.clone();
        scheduler.cancel(first);

        let second = scheduler.schedule_repeating(Cadence::EveryFrame);
        assert_ne!(stale.id(), second.id());
        // The new task must not revive the old handle
        assert_eq!(scheduler.advance(&stale, 16).count, 0);
        assert_eq!(scheduler.advance(&second, 16).count, 1);
    }

    #[test]
    fn test_clear() {
        let mut scheduler = Scheduler::new();
        let _a = scheduler.schedule_repeating(Cadence::EveryFrame);
        let _b = scheduler.schedule_repeating(Cadence::Interval { period_ms: 10 });
        assert_eq!(scheduler.active_count(), 2);
        assert_eq!(scheduler.clear(), 2);
        assert_eq!(scheduler.active_count(), 0);
    }

    #[test]
    #[should_panic(expected = "Interval period must be positive")]
    fn test_zero_period_rejected() {
        let mut scheduler = Scheduler::new();
        let _ = scheduler.schedule_repeating(Cadence::Interval { period_ms: 0 });
    }
}

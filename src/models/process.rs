//! Process model.
//!
//! A process is one simulated task competing for the CPU: it becomes
//! eligible at its arrival time, needs `burst` uninterrupted time units
//! once dispatched, and is ranked by its priority value.
//!
//! # Time Representation
//! All times are discrete simulated units relative to t=0. The consumer
//! defines what one unit means (a tick, a millisecond, a quantum).

use serde::{Deserialize, Serialize};

use super::Ticks;

/// Process identifier, assigned by arrival order (1-based).
pub type ProcessId = usize;

/// A process to be scheduled.
///
/// The input fields (`arrival`, `burst`, `priority`) are immutable once
/// the simulation starts. `completion` is filled by the dispatcher and
/// `turnaround`/`waiting` by the metrics pass.
///
/// # Priority Convention
/// **Lower value = higher scheduling precedence.** A priority of 1
/// outranks a priority of 5.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Process {
    /// Unique identifier (1-based input order).
    pub id: ProcessId,
    /// Time unit at which the process becomes eligible to run.
    pub arrival: Ticks,
    /// Total execution time required once dispatched.
    pub burst: Ticks,
    /// Scheduling priority (lower = dispatched sooner).
    pub priority: i32,
    /// Time unit at which execution finished. `None` until the process
    /// has run, so a legitimate completion at t=0 stays unambiguous.
    pub completion: Option<Ticks>,
    /// Derived: completion - arrival. Filled by the metrics pass.
    pub turnaround: Ticks,
    /// Derived: turnaround - burst. Filled by the metrics pass.
    pub waiting: Ticks,
}

impl Process {
    /// Creates a process with the given input attributes.
    pub fn new(id: ProcessId, arrival: Ticks, burst: Ticks, priority: i32) -> Self {
        Self {
            id,
            arrival,
            burst,
            priority,
            completion: None,
            turnaround: 0,
            waiting: 0,
        }
    }

    /// Whether the dispatcher has run this process to completion.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.completion.is_some()
    }

    /// Whether the process is eligible to run at time `now`.
    ///
    /// Eligible means arrived and not yet completed.
    #[inline]
    pub fn is_eligible(&self, now: Ticks) -> bool {
        !self.is_completed() && self.arrival <= now
    }

    /// Time unit at which execution began: `arrival + waiting`.
    ///
    /// Only meaningful after the metrics pass has filled `waiting`.
    #[inline]
    pub fn start(&self) -> Ticks {
        self.arrival + self.waiting
    }
}

//! Non-preemptive priority dispatcher.
//!
//! # Algorithm
//!
//! 1. Among processes that have arrived and not yet completed, pick the
//!    one with the lowest priority value.
//! 2. Run it to completion without interruption; the clock advances to
//!    its completion time.
//! 3. If nothing is eligible, jump the clock to the next pending arrival.
//! 4. Repeat until every process has completed.
//!
//! Ties on priority go to the earliest position in the input list, so
//! dispatch order is stable by input order — not by arrival time.
//!
//! # Complexity
//! O(n²) over n processes: one linear eligibility scan per dispatch.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

use crate::models::{ProcessSet, Ticks};

/// Non-preemptive priority scheduler.
///
/// Fills the `completion` field of every process in a [`ProcessSet`];
/// no other field is touched. Deterministic: identical input always
/// yields identical completion times.
///
/// # Example
///
/// ```
/// use priosim::models::ProcessSet;
/// use priosim::scheduler::PriorityScheduler;
///
/// let mut set = ProcessSet::from_records([
///     (0, 4, 2), // P1
///     (0, 3, 1), // P2: lower priority value, dispatched first
/// ]);
/// PriorityScheduler::new().schedule(&mut set);
///
/// assert_eq!(set.processes[1].completion, Some(3));
/// assert_eq!(set.processes[0].completion, Some(7));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityScheduler;

impl PriorityScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Runs every process in `set` to completion.
    ///
    /// An empty set is a no-op. Mutates only `completion`.
    pub fn schedule(&self, set: &mut ProcessSet) {
        let mut now: Ticks = 0;
        let mut remaining = set.len();

        while remaining > 0 {
            if let Some(idx) = self.select(set, now) {
                let process = &mut set.processes[idx];
                let completion = now + process.burst;
                process.completion = Some(completion);
                log::debug!(
                    "t={now}: dispatch P{} (priority {}), runs until t={completion}",
                    process.id,
                    process.priority
                );
                now = completion;
                remaining -= 1;
            } else if let Some(next_arrival) = set.next_arrival_after(now) {
                log::trace!("t={now}: idle, jumping to next arrival at t={next_arrival}");
                now = next_arrival;
            } else {
                // Unreachable while `remaining` is consistent with the set:
                // every pending process either is eligible or arrives later.
                break;
            }
        }
    }

    /// Index of the eligible process with the lowest priority value.
    ///
    /// `min_by_key` returns the first of equal minima, which realizes the
    /// stable lowest-input-index tie-break.
    fn select(&self, set: &ProcessSet, now: Ticks) -> Option<usize> {
        set.processes
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_eligible(now))
            .min_by_key(|(_, p)| p.priority)
            .map(|(idx, _)| idx)
    }
}

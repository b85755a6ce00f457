//! Process set model.
//!
//! The ordered collection of processes for one simulation run. The
//! dispatcher and the metrics pass mutate it in place; the renderer
//! reads it; nothing persists across runs.

use serde::{Deserialize, Serialize};

use super::{Process, Ticks};

/// Ordered collection of processes for one simulation run.
///
/// Input order is significant: it defines process identity (1-based ids)
/// and the dispatch tie-break (earlier index wins on equal priority).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessSet {
    /// Processes in input order.
    pub processes: Vec<Process>,
}

impl ProcessSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from `(arrival, burst, priority)` records, assigning
    /// ids by input order starting at 1.
    pub fn from_records(records: impl IntoIterator<Item = (Ticks, Ticks, i32)>) -> Self {
        let processes = records
            .into_iter()
            .enumerate()
            .map(|(i, (arrival, burst, priority))| Process::new(i + 1, arrival, burst, priority))
            .collect();
        Self { processes }
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the set holds no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Whether every process has run to completion.
    pub fn all_completed(&self) -> bool {
        self.processes.iter().all(Process::is_completed)
    }

    /// Latest completion time across the set, or `None` if nothing has
    /// completed yet.
    pub fn max_completion(&self) -> Option<Ticks> {
        self.processes.iter().filter_map(|p| p.completion).max()
    }

    /// Earliest arrival strictly after `now` among processes that have
    /// not completed. Used by the dispatcher to skip idle gaps.
    pub fn next_arrival_after(&self, now: Ticks) -> Option<Ticks> {
        self.processes
            .iter()
            .filter(|p| !p.is_completed() && p.arrival > now)
            .map(|p| p.arrival)
            .min()
    }
}

//! Derived schedule metrics.
//!
//! Computes per-process turnaround and waiting times from the completion
//! times the dispatcher produced, plus their arithmetic means.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival (total time in system) |
//! | Waiting | turnaround - burst (eligible but not executing) |
//! | Avg Turnaround | mean(turnaround) |
//! | Avg Waiting | mean(waiting) |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use crate::models::ProcessSet;

/// Aggregate results of one simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimMetrics {
    /// Mean turnaround time across all processes.
    pub avg_turnaround: f64,
    /// Mean waiting time across all processes.
    pub avg_waiting: f64,
}

impl SimMetrics {
    /// Fills `turnaround` and `waiting` on every completed process and
    /// returns the aggregate averages.
    ///
    /// Each process's derived fields depend only on its own fields, so
    /// the pass order among processes is immaterial. Processes still
    /// pending (which the dispatcher never leaves behind) are skipped.
    ///
    /// Returns 0.0 averages for an empty set; the shell refuses to run
    /// the engine with no processes, so that case only arises for
    /// library callers probing edge behavior.
    pub fn calculate(set: &mut ProcessSet) -> Self {
        let mut total_turnaround: f64 = 0.0;
        let mut total_waiting: f64 = 0.0;

        for process in &mut set.processes {
            if let Some(completion) = process.completion {
                process.turnaround = completion - process.arrival;
                process.waiting = process.turnaround - process.burst;
                total_turnaround += process.turnaround as f64;
                total_waiting += process.waiting as f64;
            }
        }

        if set.is_empty() {
            return Self {
                avg_turnaround: 0.0,
                avg_waiting: 0.0,
            };
        }

        let n = set.len() as f64;
        Self {
            avg_turnaround: total_turnaround / n,
            avg_waiting: total_waiting / n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::PriorityScheduler;

    const TOLERANCE: f64 = 1e-10;

    fn scheduled(records: &[(i64, i64, i32)]) -> ProcessSet {
        let mut set = ProcessSet::from_records(records.iter().copied());
        PriorityScheduler::new().schedule(&mut set);
        set
    }

    #[test]
    fn test_single_process_metrics() {
        let mut set = scheduled(&[(0, 5, 1)]);
        let metrics = SimMetrics::calculate(&mut set);

        assert_eq!(set.processes[0].turnaround, 5);
        assert_eq!(set.processes[0].waiting, 0);
        assert!((metrics.avg_turnaround - 5.0).abs() < TOLERANCE);
        assert!((metrics.avg_waiting - 0.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_two_process_metrics() {
        let mut set = scheduled(&[(0, 4, 2), (0, 3, 1)]);
        let metrics = SimMetrics::calculate(&mut set);

        // P2 runs 0..3, P1 runs 3..7.
        assert_eq!(set.processes[0].turnaround, 7);
        assert_eq!(set.processes[0].waiting, 3);
        assert_eq!(set.processes[1].turnaround, 3);
        assert_eq!(set.processes[1].waiting, 0);
        assert!((metrics.avg_turnaround - 5.0).abs() < TOLERANCE);
        assert!((metrics.avg_waiting - 1.5).abs() < TOLERANCE);
    }

    #[test]
    fn test_identities_hold_exactly() {
        let mut set = scheduled(&[(2, 3, 4), (0, 5, 1), (7, 1, 2), (1, 2, 3)]);
        SimMetrics::calculate(&mut set);

        for p in &set.processes {
            let completion = p.completion.expect("all processes completed");
            assert_eq!(p.turnaround, completion - p.arrival);
            assert_eq!(p.waiting, p.turnaround - p.burst);
            assert!(p.turnaround >= p.burst);
            assert!(p.waiting >= 0);
        }
    }

    #[test]
    fn test_averages_match_means() {
        let mut set = scheduled(&[(0, 4, 2), (1, 6, 1), (3, 2, 2)]);
        let metrics = SimMetrics::calculate(&mut set);

        let n = set.len() as f64;
        let mean_turnaround: f64 =
            set.processes.iter().map(|p| p.turnaround as f64).sum::<f64>() / n;
        let mean_waiting: f64 = set.processes.iter().map(|p| p.waiting as f64).sum::<f64>() / n;

        assert!((metrics.avg_turnaround - mean_turnaround).abs() < TOLERANCE);
        assert!((metrics.avg_waiting - mean_waiting).abs() < TOLERANCE);
    }

    #[test]
    fn test_idle_gap_does_not_inflate_waiting() {
        let mut set = scheduled(&[(5, 2, 1)]);
        let metrics = SimMetrics::calculate(&mut set);

        // Idle time before arrival is nobody's waiting time.
        assert_eq!(set.processes[0].waiting, 0);
        assert!((metrics.avg_waiting - 0.0).abs() < TOLERANCE);
        assert!((metrics.avg_turnaround - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_empty_set_yields_zero_averages() {
        let mut set = ProcessSet::new();
        let metrics = SimMetrics::calculate(&mut set);
        assert_eq!(metrics.avg_turnaround, 0.0);
        assert_eq!(metrics.avg_waiting, 0.0);
    }
}

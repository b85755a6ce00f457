//! Report rendering.
//!
//! Produces the human-readable output of a simulation run: a Gantt chart
//! of waiting and executing bands over the time axis, a column-aligned
//! per-process summary table, and the average turnaround and waiting
//! times. Pure formatting — nothing here mutates a process field.
//!
//! # Usage
//!
//! ```
//! use priosim::models::ProcessSet;
//! use priosim::report;
//! use priosim::scheduler::{PriorityScheduler, SimMetrics};
//!
//! let mut set = ProcessSet::from_records([(0, 5, 1)]);
//! PriorityScheduler::new().schedule(&mut set);
//! let metrics = SimMetrics::calculate(&mut set);
//!
//! let text = report::render(&set, &metrics);
//! assert!(text.contains("Gantt Chart:"));
//! assert!(text.contains("Avg Waiting Time: 0.00"));
//! ```

mod gantt;
mod summary;

pub use gantt::write_gantt;
pub use summary::write_summary;

use crate::models::ProcessSet;
use crate::scheduler::SimMetrics;

/// Renders the full report (Gantt chart + summary table + averages) for
/// a fully-computed process set.
///
/// Returns an empty string for an empty set; the shell never invokes the
/// renderer in that case.
pub fn render(set: &ProcessSet, metrics: &SimMetrics) -> String {
    if set.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    write_gantt(&mut out, set);
    write_summary(&mut out, set, metrics);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::PriorityScheduler;

    #[test]
    fn test_empty_set_renders_empty_report() {
        let metrics = SimMetrics {
            avg_turnaround: 0.0,
            avg_waiting: 0.0,
        };
        assert!(render(&ProcessSet::new(), &metrics).is_empty());
    }

    #[test]
    fn test_sections_appear_in_order() {
        let mut set = ProcessSet::from_records([(0, 4, 2), (0, 3, 1)]);
        PriorityScheduler::new().schedule(&mut set);
        let metrics = SimMetrics::calculate(&mut set);

        let text = render(&set, &metrics);
        let gantt_at = text.find("Gantt Chart:").expect("gantt section");
        let table_at = text.find("Process Summary Table:").expect("table section");
        let footer_at = text.find("Avg Turnaround Time:").expect("footer");
        assert!(gantt_at < table_at && table_at < footer_at);
    }

    #[test]
    fn test_render_does_not_mutate() {
        let mut set = ProcessSet::from_records([(0, 4, 2), (0, 3, 1)]);
        PriorityScheduler::new().schedule(&mut set);
        let metrics = SimMetrics::calculate(&mut set);

        let before = format!("{set:?}");
        render(&set, &metrics);
        assert_eq!(format!("{set:?}"), before);
    }
}
